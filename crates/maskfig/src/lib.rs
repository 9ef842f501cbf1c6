#![forbid(unsafe_code)]

//! `maskfig` renders the document-masking training-pipeline figure to SVG
//! and PNG, headlessly and deterministically.
//!
//! # Features
//!
//! - `render`: enable SVG rendering (`maskfig::render`)
//! - `raster`: enable PNG output via pure-Rust SVG rasterization

pub use maskfig_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use maskfig_render::assets::{AssetStore, ImageAsset};
    pub use maskfig_render::svg::{render_scene_svg, SvgRenderOptions};
    pub use maskfig_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use maskfig_render::wrap::wrap_columns;

    #[cfg(feature = "raster")]
    pub mod raster;

    use std::path::Path;

    #[derive(Debug, thiserror::Error)]
    pub enum PipelineError {
        #[error("unknown figure '{name}' (expected one of: overview, wide)")]
        UnknownFigure { name: String },
        #[error(transparent)]
        Render(#[from] maskfig_render::Error),
        #[cfg(feature = "raster")]
        #[error(transparent)]
        Raster(#[from] raster::RasterError),
    }

    pub type Result<T> = std::result::Result<T, PipelineError>;

    fn figure_scene(name: &str) -> Result<maskfig_core::Scene> {
        maskfig_core::figures::by_name(name).ok_or_else(|| PipelineError::UnknownFigure {
            name: name.to_string(),
        })
    }

    /// Renders a built-in figure to an SVG string.
    pub fn render_figure_svg(
        name: &str,
        assets_dir: &Path,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        let scene = figure_scene(name)?;
        let assets = AssetStore::new(assets_dir);
        let measurer = DeterministicTextMeasurer::default();
        Ok(render_scene_svg(&scene, &assets, &measurer, options)?)
    }

    /// Renders a built-in figure straight to encoded PNG bytes.
    ///
    /// `scale` 1.0 rasterizes at the scene's base DPI; the published figure
    /// uses 2.0 for its 300 DPI export.
    #[cfg(feature = "raster")]
    pub fn render_figure_png(
        name: &str,
        assets_dir: &Path,
        svg_options: &SvgRenderOptions,
        raster_options: &raster::RasterOptions,
    ) -> Result<Vec<u8>> {
        let svg = render_figure_svg(name, assets_dir, svg_options)?;
        Ok(raster::svg_to_png(&svg, raster_options)?)
    }
}
