use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Serialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    /// Pixels, not points; callers convert through the canvas map first.
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            font_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Baseline-to-baseline distance for stacked lines.
    fn line_height(&self, style: &TextStyle) -> f64;
}

/// Font-independent measurer: width from display columns, fixed factors.
///
/// Exact metrics would need a font database; for clipping and line stacking
/// decisions a deterministic estimate is what we want, since it keeps the
/// emitted SVG identical across machines.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl DeterministicTextMeasurer {
    fn factors(&self) -> (f64, f64) {
        let cw = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let lh = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };
        (cw, lh)
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let (char_width_factor, line_height_factor) = self.factors();
        let font_size = style.font_size.max(1.0);

        let lines: Vec<&str> = text.split('\n').collect();
        let mut max_cols = 0usize;
        for line in &lines {
            max_cols = max_cols.max(UnicodeWidthStr::width(*line));
        }

        TextMetrics {
            width: max_cols as f64 * font_size * char_width_factor,
            height: lines.len() as f64 * font_size * line_height_factor,
            line_count: lines.len(),
        }
    }

    fn line_height(&self, style: &TextStyle) -> f64 {
        let (_, line_height_factor) = self.factors();
        style.font_size.max(1.0) * line_height_factor
    }
}
