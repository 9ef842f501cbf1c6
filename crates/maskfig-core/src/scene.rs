//! Drawing primitives and the scene that owns them.
//!
//! These are plain serializable layout structs; euclid stays confined to
//! [`crate::geom`] for the math. Every primitive is write-once: a figure
//! builder creates it, the renderer reads it, nothing mutates it in between.

use crate::error::{Error, Result};
use crate::geom::{self, CanvasMap, Point};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Pt> for Point {
    fn from(p: Pt) -> Point {
        crate::geom::point(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Baseline,
    Top,
    Center,
}

/// How box body text turns into painted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    /// Greedy word wrap at a fixed column budget.
    Columns(usize),
    /// The text already carries its line breaks.
    PreBroken,
}

/// A bordered box with word-wrapped body text.
#[derive(Debug, Clone, Serialize)]
pub struct TextBox {
    /// Bottom-left corner, scene units.
    pub origin: Pt,
    pub width: f64,
    pub height: f64,
    pub stroke: String,
    pub fill: String,
    pub stroke_width_pt: f64,
    /// Corner radius in scene units; 0 draws a square box.
    pub corner_radius: f64,
    /// Inner padding between border and text, scene units.
    pub pad_x: f64,
    pub pad_y: f64,
    /// Body text; may be empty for a frame-only box.
    pub text: String,
    pub wrap: Wrap,
    pub font_size_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElbowOrder {
    /// Leave the start horizontally, bend once, arrive vertically.
    HorizontalFirst,
    /// Leave the start vertically, bend once, arrive horizontally.
    VerticalFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Straight,
    Elbow(ElbowOrder),
}

/// An arrow with a head on its final segment.
#[derive(Debug, Clone, Serialize)]
pub struct Arrow {
    pub start: Pt,
    pub end: Pt,
    pub route: Route,
    pub stroke_width_pt: f64,
}

impl Arrow {
    /// Polyline vertices for the routed arrow, in scene units.
    ///
    /// An elbow bend that coincides with an endpoint collapses to a straight
    /// two-point route.
    pub fn route_points(&self) -> Vec<Pt> {
        match self.route {
            Route::Straight => vec![self.start, self.end],
            Route::Elbow(order) => {
                let corner = match order {
                    ElbowOrder::HorizontalFirst => Pt::new(self.end.x, self.start.y),
                    ElbowOrder::VerticalFirst => Pt::new(self.start.x, self.end.y),
                };
                if corner == self.start || corner == self.end {
                    vec![self.start, self.end]
                } else {
                    vec![self.start, corner, self.end]
                }
            }
        }
    }
}

/// A plain connector line, no head.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub from: Pt,
    pub to: Pt,
    pub stroke_width_pt: f64,
}

/// An embedded raster icon.
///
/// `asset` is a file name resolved against the asset directory at render
/// time. Display size is the icon's intrinsic pixel size scaled by
/// `zoom * dpi / 72`; zoom is in points per source pixel.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGlyph {
    pub asset: String,
    pub center: Pt,
    pub zoom: f64,
}

/// The circular reward badge with centered multi-line text.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub center: Pt,
    /// Radius in scene units. Under a non-uniform canvas scale this renders
    /// as an ellipse.
    pub radius: f64,
    pub stroke: String,
    pub fill: String,
    pub stroke_width_pt: f64,
    pub lines: Vec<String>,
    pub font_size_pt: f64,
}

/// Free-standing text: titles, arrow annotations, the caption.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub pos: Pt,
    /// May contain `\n` for stacked lines.
    pub text: String,
    pub font_size_pt: f64,
    pub weight: FontWeight,
    pub family: FontFamily,
    pub anchor: HorizontalAnchor,
    pub valign: VerticalAlign,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Box(TextBox),
    Arrow(Arrow),
    Segment(Segment),
    Image(ImageGlyph),
    Badge(Badge),
    Label(Label),
}

/// A fully laid-out figure: canvas geometry plus an ordered shape list.
///
/// Paint order is shape order.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub name: String,
    /// Canvas extent in scene units.
    pub width: f64,
    pub height: f64,
    /// Device pixels per unit, per axis, at the base DPI.
    pub scale_x: f64,
    pub scale_y: f64,
    pub dpi: f64,
    pub background: String,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Canvas size in device pixels at the base DPI.
    pub fn px_size(&self) -> (f64, f64) {
        (self.width * self.scale_x, self.height * self.scale_y)
    }

    pub fn map(&self) -> CanvasMap {
        CanvasMap::new(self.height, self.scale_x, self.scale_y, self.dpi)
    }

    /// Checks the only structural invariant the model has: every shape stays
    /// inside the canvas. Runs before any output is produced.
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            return Err(Error::EmptyScene {
                scene: self.name.clone(),
            });
        }
        for shape in &self.shapes {
            match shape {
                Shape::Box(b) => {
                    self.check_inside("box", b.origin)?;
                    self.check_inside("box", Pt::new(b.origin.x + b.width, b.origin.y + b.height))?;
                }
                Shape::Arrow(a) => {
                    self.check_inside("arrow", a.start)?;
                    self.check_inside("arrow", a.end)?;
                }
                Shape::Segment(s) => {
                    self.check_inside("segment", s.from)?;
                    self.check_inside("segment", s.to)?;
                }
                Shape::Image(g) => self.check_inside("image glyph", g.center)?,
                Shape::Badge(b) => {
                    self.check_inside("badge", Pt::new(b.center.x - b.radius, b.center.y - b.radius))?;
                    self.check_inside("badge", Pt::new(b.center.x + b.radius, b.center.y + b.radius))?;
                }
                Shape::Label(l) => self.check_inside("label", l.pos)?,
            }
        }
        log::debug!(
            "scene '{}' validated: {} shapes on {} x {} units",
            self.name,
            self.shapes.len(),
            self.width,
            self.height
        );
        Ok(())
    }

    fn check_inside(&self, shape: &'static str, p: Pt) -> Result<()> {
        // Tolerate float dust from coordinates that land exactly on an edge.
        const EPS: f64 = 1e-9;
        let bounds = geom::Rect::new(
            geom::point(-EPS, -EPS),
            geom::Size::new(self.width + 2.0 * EPS, self.height + 2.0 * EPS),
        );
        if !bounds.contains(p.into()) {
            return Err(Error::OutOfBounds {
                shape,
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow(start: Pt, end: Pt, route: Route) -> Arrow {
        Arrow {
            start,
            end,
            route,
            stroke_width_pt: 1.6,
        }
    }

    #[test]
    fn straight_route_is_two_points() {
        let a = arrow(Pt::new(0.1, 0.2), Pt::new(0.5, 0.2), Route::Straight);
        assert_eq!(a.route_points(), vec![Pt::new(0.1, 0.2), Pt::new(0.5, 0.2)]);
    }

    #[test]
    fn elbow_horizontal_first_bends_at_end_x() {
        let a = arrow(
            Pt::new(0.1, 0.2),
            Pt::new(0.5, 0.8),
            Route::Elbow(ElbowOrder::HorizontalFirst),
        );
        assert_eq!(
            a.route_points(),
            vec![Pt::new(0.1, 0.2), Pt::new(0.5, 0.2), Pt::new(0.5, 0.8)]
        );
    }

    #[test]
    fn elbow_vertical_first_bends_at_start_x() {
        let a = arrow(
            Pt::new(0.1, 0.2),
            Pt::new(0.5, 0.8),
            Route::Elbow(ElbowOrder::VerticalFirst),
        );
        assert_eq!(
            a.route_points(),
            vec![Pt::new(0.1, 0.2), Pt::new(0.1, 0.8), Pt::new(0.5, 0.8)]
        );
    }

    #[test]
    fn degenerate_elbow_collapses_to_straight() {
        let a = arrow(
            Pt::new(0.1, 0.2),
            Pt::new(0.5, 0.2),
            Route::Elbow(ElbowOrder::HorizontalFirst),
        );
        assert_eq!(a.route_points().len(), 2);
    }

    fn unit_scene(shapes: Vec<Shape>) -> Scene {
        Scene {
            name: "test".to_string(),
            width: 1.0,
            height: 1.0,
            scale_x: 100.0,
            scale_y: 100.0,
            dpi: 150.0,
            background: "#FFFFFF".to_string(),
            shapes,
        }
    }

    #[test]
    fn empty_scene_is_rejected() {
        assert!(matches!(
            unit_scene(Vec::new()).validate(),
            Err(Error::EmptyScene { .. })
        ));
    }

    #[test]
    fn box_escaping_canvas_is_rejected() {
        let scene = unit_scene(vec![Shape::Box(TextBox {
            origin: Pt::new(0.9, 0.9),
            width: 0.3,
            height: 0.3,
            stroke: "#000000".to_string(),
            fill: "#FFFFFF".to_string(),
            stroke_width_pt: 2.0,
            corner_radius: 0.0,
            pad_x: 0.01,
            pad_y: 0.01,
            text: String::new(),
            wrap: Wrap::PreBroken,
            font_size_pt: 11.0,
        })]);
        assert!(matches!(scene.validate(), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn badge_touching_the_edge_passes() {
        let scene = unit_scene(vec![Shape::Badge(Badge {
            center: Pt::new(0.93, 0.36),
            radius: 0.07,
            stroke: "#8A5CAD".to_string(),
            fill: "#E6D9EC".to_string(),
            stroke_width_pt: 2.0,
            lines: vec!["Similarity".to_string(), "Score: 2/3".to_string()],
            font_size_pt: 11.0,
        })]);
        scene.validate().unwrap();
    }
}
