//! Hand-built SVG serialization of a scene.
//!
//! Shapes are emitted in scene order; paint order is element order. Numbers
//! go through [`fmt`] so identical scenes serialize byte-identically.

use crate::assets::AssetStore;
use crate::text::{TextMeasurer, TextStyle};
use crate::wrap::wrap_columns;
use crate::Result;
use maskfig_core::geom::CanvasMap;
use maskfig_core::scene::{
    Arrow, Badge, FontFamily, FontWeight, HorizontalAnchor, ImageGlyph, Label, Scene, Segment,
    Shape, TextBox, VerticalAlign, Wrap,
};
use std::fmt::Write as _;

const SANS_STACK: &str = "Helvetica, Arial, sans-serif";
const SERIF_STACK: &str = "Georgia, 'Times New Roman', serif";
const INK: &str = "#000000";

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Overrides the scene's background color. `Some("transparent")` skips
    /// the backdrop rect entirely.
    pub background: Option<String>,
}

pub fn render_scene_svg(
    scene: &Scene,
    assets: &AssetStore,
    measurer: &dyn TextMeasurer,
    options: &SvgRenderOptions,
) -> Result<String> {
    scene.validate()?;

    let map = scene.map();
    let (width_px, height_px) = scene.px_size();

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = fmt(width_px),
        h = fmt(height_px)
    );
    out.push_str(
        r#"<defs><marker id="arrowhead" refX="7.9" refY="5" markerUnits="userSpaceOnUse" markerWidth="12" markerHeight="12" orient="auto-start-reverse"><path d="M -1 0 L 10 5 L 0 10 z"/></marker></defs>
"#,
    );

    let background = options.background.as_deref().unwrap_or(&scene.background);
    if !background.eq_ignore_ascii_case("transparent") {
        let _ = writeln!(
            &mut out,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            fmt(width_px),
            fmt(height_px),
            escape_xml(background)
        );
    }

    for shape in &scene.shapes {
        match shape {
            Shape::Box(b) => render_box(&mut out, b, &map, measurer),
            Shape::Arrow(a) => render_arrow(&mut out, a, &map),
            Shape::Segment(s) => render_segment(&mut out, s, &map),
            Shape::Image(g) => render_image(&mut out, g, &map, assets)?,
            Shape::Badge(b) => render_badge(&mut out, b, &map, measurer),
            Shape::Label(l) => render_label(&mut out, l, &map, measurer),
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn render_box(out: &mut String, b: &TextBox, map: &CanvasMap, measurer: &dyn TextMeasurer) {
    let top_left = map.to_px(maskfig_core::geom::point(b.origin.x, b.origin.y + b.height));
    let w_px = map.x_px(b.width);
    let h_px = map.y_px(b.height);

    let mut corner = String::new();
    if b.corner_radius > 0.0 {
        let _ = write!(
            &mut corner,
            r#" rx="{}" ry="{}""#,
            fmt(map.x_px(b.corner_radius)),
            fmt(map.y_px(b.corner_radius))
        );
    }
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{} fill="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt(top_left.x),
        fmt(top_left.y),
        fmt(w_px),
        fmt(h_px),
        corner,
        escape_xml(&b.fill),
        escape_xml(&b.stroke),
        fmt(map.pt_px(b.stroke_width_pt))
    );

    if b.text.is_empty() {
        return;
    }

    let lines = match b.wrap {
        Wrap::Columns(cols) => wrap_columns(&b.text, cols),
        Wrap::PreBroken => b.text.split('\n').map(str::to_string).collect(),
    };

    let font_px = map.pt_px(b.font_size_pt);
    let style = TextStyle {
        font_size: font_px,
        ..Default::default()
    };
    let line_height = measurer.line_height(&style);
    let pad_x = map.x_px(b.pad_x);
    let pad_y = map.y_px(b.pad_y);
    let text_x = top_left.x + pad_x;
    // Lines whose baseline would leave the padded interior are clipped.
    let baseline_limit = top_left.y + h_px - pad_y;

    let mut kept = 0usize;
    let _ = write!(
        out,
        r#"<text font-family="{SANS_STACK}" font-size="{}" fill="{INK}">"#,
        fmt(font_px)
    );
    for (idx, line) in lines.iter().enumerate() {
        let baseline = top_left.y + pad_y + font_px + idx as f64 * line_height;
        if baseline > baseline_limit {
            break;
        }
        kept += 1;
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            fmt(text_x),
            fmt(baseline),
            escape_xml(line)
        );
    }
    out.push_str("</text>\n");

    if kept < lines.len() {
        log::debug!(
            "clipped {} of {} text lines to box at ({}, {})",
            lines.len() - kept,
            lines.len(),
            b.origin.x,
            b.origin.y
        );
    }
}

fn render_arrow(out: &mut String, a: &Arrow, map: &CanvasMap) {
    let points = a.route_points();
    let mut attr = String::new();
    for (idx, p) in points.iter().enumerate() {
        if idx > 0 {
            attr.push(' ');
        }
        let px = map.to_px((*p).into());
        let _ = write!(&mut attr, "{},{}", fmt(px.x), fmt(px.y));
    }
    let _ = writeln!(
        out,
        r#"<polyline fill="none" stroke="{INK}" stroke-width="{}" points="{}" marker-end="url(#arrowhead)"/>"#,
        fmt(map.pt_px(a.stroke_width_pt)),
        attr
    );
}

fn render_segment(out: &mut String, s: &Segment, map: &CanvasMap) {
    let from = map.to_px(s.from.into());
    let to = map.to_px(s.to.into());
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{INK}" stroke-width="{}"/>"#,
        fmt(from.x),
        fmt(from.y),
        fmt(to.x),
        fmt(to.y),
        fmt(map.pt_px(s.stroke_width_pt))
    );
}

fn render_image(
    out: &mut String,
    g: &ImageGlyph,
    map: &CanvasMap,
    assets: &AssetStore,
) -> Result<()> {
    let asset = assets.load(&g.asset)?;
    let center = map.to_px(g.center.into());
    // Zoom is in points per source pixel.
    let w_px = map.pt_px(asset.width as f64 * g.zoom);
    let h_px = map.pt_px(asset.height as f64 * g.zoom);
    let _ = writeln!(
        out,
        r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" xlink:href="{}"/>"#,
        fmt(center.x - w_px / 2.0),
        fmt(center.y - h_px / 2.0),
        fmt(w_px),
        fmt(h_px),
        asset.data_uri()
    );
    Ok(())
}

fn render_badge(out: &mut String, b: &Badge, map: &CanvasMap, measurer: &dyn TextMeasurer) {
    let center = map.to_px(b.center.into());
    let _ = writeln!(
        out,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt(center.x),
        fmt(center.y),
        fmt(map.x_px(b.radius)),
        fmt(map.y_px(b.radius)),
        escape_xml(&b.fill),
        escape_xml(&b.stroke),
        fmt(map.pt_px(b.stroke_width_pt))
    );

    if b.lines.is_empty() {
        return;
    }
    let font_px = map.pt_px(b.font_size_pt);
    let style = TextStyle {
        font_size: font_px,
        ..Default::default()
    };
    let line_height = measurer.line_height(&style);
    let _ = write!(
        out,
        r#"<text font-family="{SANS_STACK}" font-size="{}" fill="{INK}" text-anchor="middle" dominant-baseline="central">"#,
        fmt(font_px)
    );
    let n = b.lines.len() as f64;
    for (idx, line) in b.lines.iter().enumerate() {
        let y = center.y + idx as f64 * line_height - (n - 1.0) * line_height / 2.0;
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            fmt(center.x),
            fmt(y),
            escape_xml(line)
        );
    }
    out.push_str("</text>\n");
}

fn render_label(out: &mut String, l: &Label, map: &CanvasMap, measurer: &dyn TextMeasurer) {
    let pos = map.to_px(l.pos.into());
    let font_px = map.pt_px(l.font_size_pt);
    let style = TextStyle {
        font_size: font_px,
        ..Default::default()
    };
    let line_height = measurer.line_height(&style);
    let lines: Vec<&str> = l.text.split('\n').collect();

    let family = match l.family {
        FontFamily::Sans => SANS_STACK,
        FontFamily::Serif => SERIF_STACK,
    };
    let mut attrs = String::new();
    if l.weight == FontWeight::Bold {
        attrs.push_str(r#" font-weight="bold""#);
    }
    if l.anchor == HorizontalAnchor::Middle {
        attrs.push_str(r#" text-anchor="middle""#);
    }
    if l.valign == VerticalAlign::Center {
        attrs.push_str(r#" dominant-baseline="central""#);
    }

    let _ = write!(
        out,
        r#"<text font-family="{family}" font-size="{}" fill="{INK}"{attrs}>"#,
        fmt(font_px)
    );
    let n = lines.len() as f64;
    for (idx, line) in lines.iter().enumerate() {
        let y = match l.valign {
            VerticalAlign::Baseline => pos.y + idx as f64 * line_height,
            VerticalAlign::Top => pos.y + font_px + idx as f64 * line_height,
            VerticalAlign::Center => {
                pos.y + idx as f64 * line_height - (n - 1.0) * line_height / 2.0
            }
        };
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            fmt(pos.x),
            fmt(y),
            escape_xml(line)
        );
    }
    out.push_str("</text>\n");
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, avoiding `-0` and tiny float noise from
    // the unit-to-pixel math.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
