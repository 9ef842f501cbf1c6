//! The primary training-pipeline figure.
//!
//! Unit canvas drawn on a 12 x 6.54 inch surface at 150 DPI. All coordinates
//! are in the (0,1) x (0,1) space of the published figure.

use crate::scene::{
    Arrow, Badge, ElbowOrder, FontFamily, FontWeight, HorizontalAnchor, ImageGlyph, Label, Pt,
    Route, Scene, Segment, Shape, TextBox, VerticalAlign, Wrap,
};
use crate::theme::Palette;

const DPI: f64 = 150.0;
const SURFACE_IN: (f64, f64) = (12.0, 6.54);
const WRAP_COLUMNS: usize = 28;
const LINE_WIDTH_PT: f64 = 1.6;
const BOX_LINE_WIDTH_PT: f64 = 2.0;

fn document_box(x: f64, y: f64, w: f64, h: f64, stroke: &str, text: &str) -> Shape {
    Shape::Box(TextBox {
        origin: Pt::new(x, y),
        width: w,
        height: h,
        stroke: stroke.to_string(),
        fill: "#FFFFFF".to_string(),
        stroke_width_pt: BOX_LINE_WIDTH_PT,
        corner_radius: 0.01,
        pad_x: 0.012,
        pad_y: 0.02,
        text: text.to_string(),
        wrap: Wrap::Columns(WRAP_COLUMNS),
        font_size_pt: 11.0,
    })
}

fn title(x: f64, y: f64, text: &str, anchor: HorizontalAnchor) -> Shape {
    Shape::Label(Label {
        pos: Pt::new(x, y),
        text: text.to_string(),
        font_size_pt: 13.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor,
        valign: VerticalAlign::Baseline,
    })
}

fn arrow(start: Pt, end: Pt) -> Shape {
    Shape::Arrow(Arrow {
        start,
        end,
        route: Route::Straight,
        stroke_width_pt: LINE_WIDTH_PT,
    })
}

fn segment(from: Pt, to: Pt) -> Shape {
    Shape::Segment(Segment {
        from,
        to,
        stroke_width_pt: LINE_WIDTH_PT,
    })
}

pub fn overview() -> Scene {
    let palette = Palette::default();
    let mut shapes = Vec::new();

    // 1. Original document.
    shapes.push(title(0.05, 0.90, "1. Original Document", HorizontalAnchor::Start));
    shapes.push(document_box(
        0.05,
        0.23,
        0.22,
        0.62,
        &palette.document_blue,
        "Ohm's law governs the relationship between voltage V and current I in \
         resistive circuit of resistance R. V = I x R. For example, if the a \
         voltage of 12 volts is applied across a 3 Ohm resistance then the \
         current will be 4 Amperes.",
    ));

    // 2. Masked document and the ground-truth segment it forked from.
    shapes.push(title(0.36, 0.90, "2. Masked Document", HorizontalAnchor::Start));
    shapes.push(document_box(
        0.36,
        0.61,
        0.23,
        0.25,
        &palette.document_blue,
        "Ohm's law governs... resistive circuit of resistance R. [MASKED_TEXT] \
         then the current will be 4 Amperes.",
    ));
    shapes.push(Shape::Label(Label {
        pos: Pt::new(0.36, 0.49),
        text: "Ground Truth Segment".to_string(),
        font_size_pt: 12.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Start,
        valign: VerticalAlign::Baseline,
    }));
    shapes.push(document_box(
        0.36,
        0.26,
        0.23,
        0.20,
        &palette.document_blue,
        "V = I x R. For example, if the a voltage of 12 volts is applied across \
         a 3 Ohm resistance",
    ));

    // Fork from the original document into both middle boxes.
    shapes.push(Shape::Label(Label {
        pos: Pt::new(0.24, 0.58),
        text: "Contiguous\nMasking".to_string(),
        font_size_pt: 11.0,
        weight: FontWeight::Normal,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Center,
    }));
    shapes.push(segment(Pt::new(0.30, 0.33), Pt::new(0.30, 0.72)));
    shapes.push(segment(Pt::new(0.27, 0.52), Pt::new(0.30, 0.52)));
    shapes.push(arrow(Pt::new(0.30, 0.70), Pt::new(0.36, 0.70)));
    shapes.push(arrow(Pt::new(0.30, 0.32), Pt::new(0.36, 0.32)));

    // 3. Target LLM.
    shapes.push(title(0.71, 0.90, "3. Target LLM", HorizontalAnchor::Middle));
    shapes.push(Shape::Image(ImageGlyph {
        asset: "robot_student.png".to_string(),
        center: Pt::new(0.74, 0.71),
        zoom: 0.15,
    }));

    // Predicted completion.
    shapes.push(title(0.88, 0.90, "Predicted Completion", HorizontalAnchor::Middle));
    shapes.push(Shape::Box(TextBox {
        origin: Pt::new(0.82, 0.63),
        width: 0.17,
        height: 0.20,
        stroke: palette.completion_orange.clone(),
        fill: "#FFFFFF".to_string(),
        stroke_width_pt: BOX_LINE_WIDTH_PT,
        corner_radius: 0.01,
        pad_x: 0.012,
        pad_y: 0.02,
        text: "The relationship is V = I * R. So, with 8 Volts and 2 Ohms...".to_string(),
        wrap: Wrap::Columns(WRAP_COLUMNS),
        font_size_pt: 11.0,
    }));

    shapes.push(arrow(Pt::new(0.76, 0.73), Pt::new(0.82, 0.73)));
    // Route from the completion down and across to the judge: a drop out of
    // the box, then one elbow bending at (0.71, 0.54).
    shapes.push(segment(Pt::new(0.91, 0.63), Pt::new(0.91, 0.54)));
    shapes.push(Shape::Arrow(Arrow {
        start: Pt::new(0.91, 0.54),
        end: Pt::new(0.71, 0.41),
        route: Route::Elbow(ElbowOrder::HorizontalFirst),
        stroke_width_pt: LINE_WIDTH_PT,
    }));

    // 4. Judge LLM and the reward it emits.
    shapes.push(title(0.74, 0.20, "4. Judge LLM", HorizontalAnchor::Middle));
    shapes.push(Shape::Image(ImageGlyph {
        asset: "robot_judge.png".to_string(),
        center: Pt::new(0.74, 0.36),
        zoom: 0.15,
    }));

    shapes.push(Shape::Label(Label {
        pos: Pt::new(0.91, 0.50),
        text: "Reward".to_string(),
        font_size_pt: 12.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Baseline,
    }));
    shapes.push(Shape::Badge(Badge {
        center: Pt::new(0.93, 0.36),
        radius: 0.07,
        stroke: palette.reward_purple.clone(),
        fill: palette.reward_fill.clone(),
        stroke_width_pt: BOX_LINE_WIDTH_PT,
        lines: vec!["Similarity".to_string(), "Score: 2/3".to_string()],
        font_size_pt: 11.0,
    }));

    shapes.push(arrow(Pt::new(0.78, 0.36), Pt::new(0.86, 0.36)));
    shapes.push(arrow(Pt::new(0.59, 0.71), Pt::new(0.69, 0.71)));
    shapes.push(arrow(Pt::new(0.59, 0.33), Pt::new(0.69, 0.33)));

    // Caption.
    shapes.push(Shape::Label(Label {
        pos: Pt::new(0.5, 0.08),
        text: "Overview of the training pipeline: A contiguous text span is masked and \
               fed to a student LLM.\nIts prediction is then scored against the ground \
               truth by a judge LLM."
            .to_string(),
        font_size_pt: 12.0,
        weight: FontWeight::Normal,
        family: FontFamily::Serif,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Center,
    }));

    Scene {
        name: "overview".to_string(),
        width: 1.0,
        height: 1.0,
        scale_x: SURFACE_IN.0 * DPI,
        scale_y: SURFACE_IN.1 * DPI,
        dpi: DPI,
        background: "#FFFFFF".to_string(),
        shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_1800_by_981_px() {
        let scene = overview();
        let (w, h) = scene.px_size();
        assert_eq!(w, 1800.0);
        assert_eq!(h, 981.0);
    }

    #[test]
    fn completion_to_judge_is_the_only_elbow() {
        let scene = overview();
        let elbows: Vec<_> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Arrow(a) if a.route != Route::Straight => Some(a),
                _ => None,
            })
            .collect();
        assert_eq!(elbows.len(), 1);
        assert_eq!(
            elbows[0].route_points(),
            vec![Pt::new(0.91, 0.54), Pt::new(0.71, 0.54), Pt::new(0.71, 0.41)]
        );
    }
}
