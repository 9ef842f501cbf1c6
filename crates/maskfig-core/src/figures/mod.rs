//! The built-in figures, one builder per published variant.

mod overview;
mod wide;

pub use overview::overview;
pub use wide::wide;

use crate::scene::Scene;

pub const FIGURE_NAMES: &[&str] = &["overview", "wide"];

/// Looks up a built-in figure by name.
pub fn by_name(name: &str) -> Option<Scene> {
    match name {
        "overview" => Some(overview()),
        "wide" => Some(wide()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn every_listed_figure_resolves_and_validates() {
        for name in FIGURE_NAMES {
            let scene = by_name(name).unwrap();
            assert_eq!(&scene.name, name);
            scene.validate().unwrap();
        }
    }

    #[test]
    fn unknown_figure_is_none() {
        assert!(by_name("poster").is_none());
    }

    #[test]
    fn both_figures_embed_both_robot_icons() {
        for name in FIGURE_NAMES {
            let scene = by_name(name).unwrap();
            let assets: Vec<_> = scene
                .shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Image(g) => Some(g.asset.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(assets, ["robot_student.png", "robot_judge.png"]);
        }
    }

    #[test]
    fn scenes_serialize_to_json() {
        let json = serde_json::to_value(overview()).unwrap();
        assert_eq!(json["name"], "overview");
        assert!(json["shapes"].as_array().unwrap().len() > 10);
    }
}
