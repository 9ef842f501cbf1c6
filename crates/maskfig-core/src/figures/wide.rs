//! The wide variant of the pipeline figure.
//!
//! 18 x 7 unit canvas on an 18 x 7 inch surface at 150 DPI, square boxes,
//! text carried as pre-broken lines exactly as published.

use crate::scene::{
    Arrow, Badge, FontFamily, FontWeight, HorizontalAnchor, ImageGlyph, Label, Pt, Route, Scene,
    Segment, Shape, TextBox, VerticalAlign, Wrap,
};
use crate::theme::Palette;

const DPI: f64 = 150.0;
const LINE_WIDTH_PT: f64 = 1.5;

fn plain_box(x: f64, y: f64, w: f64, h: f64, fill: &str, text: &str, font_size_pt: f64) -> Shape {
    Shape::Box(TextBox {
        origin: Pt::new(x, y),
        width: w,
        height: h,
        stroke: "#000000".to_string(),
        fill: fill.to_string(),
        stroke_width_pt: LINE_WIDTH_PT,
        corner_radius: 0.0,
        pad_x: 0.1,
        pad_y: 0.1,
        text: text.to_string(),
        wrap: Wrap::PreBroken,
        font_size_pt,
    })
}

fn section_title(x: f64, y: f64, text: &str) -> Shape {
    Shape::Label(Label {
        pos: Pt::new(x, y),
        text: text.to_string(),
        font_size_pt: 10.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Start,
        valign: VerticalAlign::Baseline,
    })
}

fn robot_caption(x: f64, y: f64, text: &str) -> Shape {
    Shape::Label(Label {
        pos: Pt::new(x, y),
        text: text.to_string(),
        font_size_pt: 9.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Top,
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

pub fn wide() -> Scene {
    let palette = Palette::default();
    let mut shapes = Vec::new();

    // Step 1: original document, top left.
    shapes.push(section_title(0.3, 6.55, "1. Original Document"));
    shapes.push(plain_box(
        0.3,
        4.5,
        2.4,
        2.0,
        "#FFFFFF",
        "Ohm's law governs\nthe relationship\nbetween voltage V\nand current I in a\n\
         resistive circuit of\nresistance R.\nV= I x R.\nFor example, if the a\n\
         voltage of 12 volts is\napplied across a 3\nOhm resistance then\nthe current will be 4\n\
         Ampere.",
        8.0,
    ));

    // Step 2: masked document over its ground-truth segment.
    shapes.push(section_title(3.5, 6.55, "2. Masked Document"));
    shapes.push(plain_box(
        3.5,
        5.5,
        2.4,
        1.0,
        "#FFFFFF",
        "Ohm's law governs...\nresistive circuit of\n[MASKED_TEXT]\nthen the current will\n\
         be 4 Amperes.",
        8.0,
    ));
    // The ground-truth frame carries its own bold in-box heading, so the box
    // stays frame-only and two labels sit inside it.
    shapes.push(plain_box(3.5, 4.5, 2.4, 0.9, "#FFFFFF", "", 7.0));
    shapes.push(Shape::Label(Label {
        pos: Pt::new(3.6, 5.35),
        text: "Ground Truth Segment".to_string(),
        font_size_pt: 7.0,
        weight: FontWeight::Bold,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Start,
        valign: VerticalAlign::Top,
    }));
    shapes.push(Shape::Label(Label {
        pos: Pt::new(3.6, 5.15),
        text: "V= I x R. For example,\nif the a voltage of 12\nvolts is applied across\n\
               a 3 Ohm resistance"
            .to_string(),
        font_size_pt: 7.0,
        weight: FontWeight::Normal,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Start,
        valign: VerticalAlign::Top,
    }));

    // Fork: one stem out of the original document, arrowed branches into
    // both middle boxes.
    shapes.push(Shape::Segment(Segment {
        from: Pt::new(2.8, 5.5),
        to: Pt::new(3.2, 5.5),
        stroke_width_pt: LINE_WIDTH_PT,
    }));
    shapes.push(arrow(Pt::new(3.2, 5.5), Pt::new(3.4, 6.0)));
    shapes.push(arrow(Pt::new(3.2, 5.5), Pt::new(3.4, 4.95)));
    shapes.push(Shape::Label(Label {
        pos: Pt::new(3.2, 5.75),
        text: "Contiguous".to_string(),
        font_size_pt: 7.0,
        weight: FontWeight::Normal,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Baseline,
    }));
    shapes.push(Shape::Label(Label {
        pos: Pt::new(3.2, 5.55),
        text: "Masking".to_string(),
        font_size_pt: 7.0,
        weight: FontWeight::Normal,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Baseline,
    }));

    // Step 3: target LLM.
    shapes.push(Shape::Image(ImageGlyph {
        asset: "robot_student.png".to_string(),
        center: Pt::new(7.5, 5.8),
        zoom: 0.12,
    }));
    shapes.push(robot_caption(7.5, 4.85, "3. Target LLM"));
    shapes.push(arrow(Pt::new(6.0, 6.0), Pt::new(6.8, 5.6)));

    // Predicted completion.
    shapes.push(arrow(Pt::new(8.2, 5.6), Pt::new(9.4, 5.5)));
    shapes.push(section_title(9.5, 6.55, "Predicted Completion"));
    shapes.push(plain_box(
        9.5,
        4.5,
        2.8,
        2.0,
        &palette.prediction_beige,
        "The relationship is\nV = I * R.\nSo, with 8 Volts and\n3 Ohms...",
        8.0,
    ));
    shapes.push(arrow(Pt::new(10.9, 4.4), Pt::new(10.9, 3.2)));

    // Step 4: judge LLM.
    shapes.push(Shape::Image(ImageGlyph {
        asset: "robot_judge.png".to_string(),
        center: Pt::new(10.9, 2.5),
        zoom: 0.12,
    }));
    shapes.push(robot_caption(10.9, 1.65, "4. Judge LLM"));

    // Reward badge.
    shapes.push(arrow(Pt::new(11.6, 2.5), Pt::new(13.5, 2.5)));
    shapes.push(Shape::Badge(Badge {
        center: Pt::new(14.5, 2.5),
        radius: 0.6,
        stroke: palette.reward_purple_deep.clone(),
        fill: palette.reward_lilac.clone(),
        stroke_width_pt: 2.0,
        lines: vec!["Similarity".to_string(), "Score: 2/3".to_string()],
        font_size_pt: 8.0,
    }));
    shapes.push(robot_caption(14.5, 1.75, "Reward"));

    // Caption.
    shapes.push(Shape::Label(Label {
        pos: Pt::new(9.0, 0.3),
        text: "Overview of the training pipeline: A contiguous text span is masked and fed \
               to a student LLM.\nIts prediction is then scored against the ground truth by \
               a judge LLM."
            .to_string(),
        font_size_pt: 9.0,
        weight: FontWeight::Normal,
        family: FontFamily::Sans,
        anchor: HorizontalAnchor::Middle,
        valign: VerticalAlign::Baseline,
    }));

    Scene {
        name: "wide".to_string(),
        width: 18.0,
        height: 7.0,
        scale_x: DPI,
        scale_y: DPI,
        dpi: DPI,
        background: "#FFFFFF".to_string(),
        shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_2700_by_1050_px() {
        let scene = wide();
        let (w, h) = scene.px_size();
        assert_eq!(w, 2700.0);
        assert_eq!(h, 1050.0);
    }

    #[test]
    fn wide_boxes_are_square_and_prebroken() {
        let scene = wide();
        for shape in &scene.shapes {
            if let Shape::Box(b) = shape {
                assert_eq!(b.corner_radius, 0.0);
                assert_eq!(b.wrap, Wrap::PreBroken);
            }
        }
    }
}
