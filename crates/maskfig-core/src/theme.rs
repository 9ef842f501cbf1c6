use serde::Serialize;

/// Colors of the published figure.
///
/// Both figure variants draw from this one palette; the wide variant keeps
/// its slightly different reward tones as separate entries rather than
/// re-deriving them.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    /// Default text and connector color.
    pub ink: String,
    /// Border of the document boxes.
    pub document_blue: String,
    /// Border of the predicted-completion box.
    pub completion_orange: String,
    /// Reward badge border.
    pub reward_purple: String,
    /// Reward badge fill.
    pub reward_fill: String,
    /// Box interior.
    pub paper: String,
    /// Predicted-completion fill in the wide variant.
    pub prediction_beige: String,
    /// Reward border in the wide variant.
    pub reward_purple_deep: String,
    /// Reward fill in the wide variant.
    pub reward_lilac: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: "#000000".to_string(),
            document_blue: "#3B6FB6".to_string(),
            completion_orange: "#C7771E".to_string(),
            reward_purple: "#8A5CAD".to_string(),
            reward_fill: "#E6D9EC".to_string(),
            paper: "#FFFFFF".to_string(),
            prediction_beige: "#FFF3E0".to_string(),
            reward_purple_deep: "#8B4789".to_string(),
            reward_lilac: "#E1BEE7".to_string(),
        }
    }
}
