#![forbid(unsafe_code)]

//! Turns a [`maskfig_core::Scene`] into a standalone SVG document.
//!
//! Output is deterministic: the same scene and the same asset bytes produce
//! byte-identical SVG. Rasterization lives behind the facade crate's
//! `raster` feature, not here.

pub mod assets;
pub mod svg;
pub mod text;
pub mod wrap;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    #[error("failed to read image asset {}: {source}", path.display())]
    AssetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image asset {}: {message}", path.display())]
    AssetDecode { path: PathBuf, message: String },

    #[error(transparent)]
    Scene(#[from] maskfig_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
