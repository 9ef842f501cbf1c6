#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Maps y-up scene units onto the y-down SVG pixel grid.
///
/// Scenes keep the published figure's coordinate system (origin
/// bottom-left). SVG wants origin top-left, so every y flips against the
/// canvas height. Scale factors may differ per axis: the primary figure
/// draws a unit square onto a 12 x 6.54 inch surface.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMap {
    scene_height: f64,
    scale_x: f64,
    scale_y: f64,
    dpi: f64,
}

impl CanvasMap {
    pub fn new(scene_height: f64, scale_x: f64, scale_y: f64, dpi: f64) -> Self {
        Self {
            scene_height,
            scale_x,
            scale_y,
            dpi,
        }
    }

    /// Scene-unit point to device pixels.
    pub fn to_px(&self, p: Point) -> Point {
        point(p.x * self.scale_x, (self.scene_height - p.y) * self.scale_y)
    }

    /// Horizontal length in units to pixels.
    pub fn x_px(&self, units: f64) -> f64 {
        units * self.scale_x
    }

    /// Vertical length in units to pixels.
    pub fn y_px(&self, units: f64) -> f64 {
        units * self.scale_y
    }

    /// Typographic points (font sizes, stroke widths) to pixels at the
    /// canvas DPI.
    pub fn pt_px(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_y_against_scene_height() {
        let map = CanvasMap::new(1.0, 1800.0, 981.0, 150.0);
        let p = map.to_px(point(0.5, 0.9));
        assert_eq!(p.x, 900.0);
        assert!((p.y - 0.1 * 981.0).abs() < 1e-9);
    }

    #[test]
    fn points_convert_at_canvas_dpi() {
        let map = CanvasMap::new(7.0, 150.0, 150.0, 150.0);
        assert!((map.pt_px(72.0) - 150.0).abs() < 1e-9);
    }
}
