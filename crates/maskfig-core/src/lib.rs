#![forbid(unsafe_code)]

//! Scene model for the masking-pipeline figure.
//!
//! The figure itself is a constant of this crate: [`figures`] builds the two
//! published variants as [`scene::Scene`] values, and downstream crates turn a
//! scene into SVG and PNG artifacts. Nothing here performs I/O.

pub mod error;
pub mod figures;
pub mod geom;
pub mod scene;
pub mod theme;

pub use error::{Error, Result};
pub use scene::Scene;
pub use theme::Palette;
