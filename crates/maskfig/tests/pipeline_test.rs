use maskfig::render::raster::RasterOptions;
use maskfig::render::{render_figure_png, render_figure_svg, PipelineError, SvgRenderOptions};
use std::path::{Path, PathBuf};

fn repo_assets() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .join("assets")
}

#[test]
fn svg_pipeline_renders_both_figures() {
    for name in ["overview", "wide"] {
        let svg = render_figure_svg(name, &repo_assets(), &SvgRenderOptions::default()).unwrap();
        let doc = roxmltree::Document::parse(&svg).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "svg");
    }
}

#[test]
fn png_pipeline_emits_a_png() {
    let bytes = render_figure_png(
        "overview",
        &repo_assets(),
        &SvgRenderOptions::default(),
        &RasterOptions::default(),
    )
    .unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn unknown_figure_is_reported_by_name() {
    let err = render_figure_svg("poster", &repo_assets(), &SvgRenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::UnknownFigure { .. }));
    assert!(err.to_string().contains("poster"));
}
