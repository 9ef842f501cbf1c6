use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn assets_dir() -> PathBuf {
    repo_root().join("assets")
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).expect("open png"));
    let reader = decoder.read_info().expect("read png info");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn cli_renders_png_with_published_dimensions() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("maskfig-cli");
    Command::new(exe)
        .args([
            "render",
            "--format",
            "png",
            "--figure",
            "overview",
            "--assets",
            assets_dir().to_string_lossy().as_ref(),
            "--out",
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
    // 12 x 6.54 inches at 150 DPI.
    assert_eq!(png_dimensions(&out), (1800, 981));
}

#[test]
fn no_argument_run_writes_both_artifacts_at_300_dpi() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let local_assets = tmp.path().join("assets");
    fs::create_dir(&local_assets).expect("create assets dir");
    for icon in ["robot_student.png", "robot_judge.png"] {
        fs::copy(assets_dir().join(icon), local_assets.join(icon)).expect("copy icon");
    }

    let exe = assert_cmd::cargo_bin!("maskfig-cli");
    Command::new(exe)
        .current_dir(tmp.path())
        .assert()
        .success();

    let svg = fs::read_to_string(tmp.path().join("diagram_generated.svg")).expect("read svg");
    assert!(svg.starts_with("<svg"));

    let png_path = tmp.path().join("diagram_generated.png");
    assert_eq!(png_dimensions(&png_path), (3600, 1962));
}

#[test]
fn svg_output_is_deterministic() {
    let render = || {
        let exe = assert_cmd::cargo_bin!("maskfig-cli");
        let output = Command::new(exe)
            .args([
                "render",
                "--figure",
                "wide",
                "--assets",
                assets_dir().to_string_lossy().as_ref(),
            ])
            .output()
            .expect("run cli");
        assert!(output.status.success());
        output.stdout
    };

    let first = render();
    let second = render();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn missing_icon_fails_without_writing_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let empty_assets = tmp.path().join("assets");
    fs::create_dir(&empty_assets).expect("create assets dir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("maskfig-cli");
    let assert = Command::new(exe)
        .args([
            "render",
            "--format",
            "png",
            "--assets",
            empty_assets.to_string_lossy().as_ref(),
            "--out",
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("robot_student.png"), "stderr: {stderr}");
    assert!(!out.exists(), "no partial output expected");
}

#[test]
fn scene_command_prints_the_model_as_json() {
    let exe = assert_cmd::cargo_bin!("maskfig-cli");
    let output = Command::new(exe)
        .args(["scene", "--figure", "wide"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["name"], "wide");
    assert_eq!(value["dpi"], 150.0);
}

#[test]
fn unknown_flags_exit_with_usage() {
    let exe = assert_cmd::cargo_bin!("maskfig-cli");
    Command::new(exe)
        .args(["render", "--bogus"])
        .assert()
        .code(2);
}
