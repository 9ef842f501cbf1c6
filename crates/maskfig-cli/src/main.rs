use maskfig::figures;
use maskfig::render::raster::{svg_to_png, RasterOptions};
use maskfig::render::{render_figure_svg, PipelineError, SvgRenderOptions};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Pipeline(PipelineError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Pipeline(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PipelineError> for CliError {
    fn from(value: PipelineError) -> Self {
        Self::Pipeline(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    /// No arguments at all: write both published artifacts.
    #[default]
    Default,
    Render,
    Scene,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    figure: Option<String>,
    format: RenderFormat,
    scale: f32,
    background: Option<String>,
    assets: Option<String>,
    out: Option<String>,
    pretty: bool,
}

fn usage() -> &'static str {
    "maskfig-cli\n\
\n\
USAGE:\n\
  maskfig-cli\n\
  maskfig-cli render [--figure overview|wide] [--format svg|png] [--scale <n>] [--background <css-color>] [--assets <dir>] [--out <path>|-]\n\
  maskfig-cli scene [--figure overview|wide] [--pretty]\n\
\n\
NOTES:\n\
  - With no arguments, renders the overview figure to diagram_generated.svg\n\
    and diagram_generated.png (300 DPI) in the current directory.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to <figure>.png; --out - streams bytes to stdout.\n\
  - Robot icons are read from ./assets unless --assets is given.\n\
  - scene prints the figure's scene model as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "scene" => args.command = Command::Scene,
            "--pretty" => args.pretty = true,
            "--figure" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.figure = Some(name.clone());
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.scale.is_finite() && args.scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--assets" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.assets = Some(dir.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let figure = args.figure.as_deref().unwrap_or("overview");
    let assets_dir = args.assets.as_deref().unwrap_or("assets");
    let svg_options = SvgRenderOptions {
        background: args.background.clone(),
    };

    match args.command {
        Command::Default => {
            // Both artifacts at fixed paths, the PNG at doubled scale
            // (300 DPI).
            let svg = render_figure_svg(figure, Path::new(assets_dir), &svg_options)?;
            std::fs::write("diagram_generated.svg", &svg)?;
            let png = svg_to_png(
                &svg,
                &RasterOptions {
                    scale: 2.0,
                    background: None,
                },
            )
            .map_err(PipelineError::from)?;
            std::fs::write("diagram_generated.png", png)?;
            log::info!("wrote diagram_generated.svg and diagram_generated.png");
            Ok(())
        }
        Command::Render => {
            let svg = render_figure_svg(figure, Path::new(assets_dir), &svg_options)?;
            match args.format {
                RenderFormat::Svg => write_text(&svg, args.out.as_deref()),
                RenderFormat::Png => {
                    let bytes = svg_to_png(
                        &svg,
                        &RasterOptions {
                            scale: args.scale,
                            background: None,
                        },
                    )
                    .map_err(PipelineError::from)?;
                    let out = args.out.clone().unwrap_or_else(|| format!("{figure}.png"));
                    write_bytes(&bytes, &out)
                }
            }
        }
        Command::Scene => {
            let Some(scene) = figures::by_name(figure) else {
                return Err(PipelineError::UnknownFigure {
                    name: figure.to_string(),
                }
                .into());
            };
            write_json(&scene, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("parsed arguments: {args:?}");

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
