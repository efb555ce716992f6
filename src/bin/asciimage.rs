use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "asciimage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an ASCII image to PNG.
    Render(RenderArgs),
    /// Print the parsed scene as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input ASCII image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per grid cell.
    #[arg(long, default_value_t = 16)]
    scale: u32,

    /// JSON stylesheet with per-glyph styles. Overrides --stroke/--fill.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Stroke color (#rgb, #rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#000000")]
    stroke: asciimage::Rgba8,

    /// Stroke width in grid cells; 0 disables stroking.
    #[arg(long, default_value_t = 1.0)]
    stroke_width: f64,

    /// Fill color for polygons and ellipses.
    #[arg(long)]
    fill: Option<asciimage::Rgba8>,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<asciimage::Rgba8>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input ASCII image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Report glyph cells most-recent-first instead of in scan order.
    #[arg(long)]
    last_observed: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn read_scene(path: &Path, opts: &asciimage::ParseOptions) -> anyhow::Result<asciimage::Scene> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read image '{}'", path.display()))?;
    let scene = asciimage::Scene::try_parse(&text, opts)
        .with_context(|| format!("parse image '{}'", path.display()))?;
    Ok(scene)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path, &asciimage::ParseOptions::default())?;

    let styles: Box<dyn asciimage::StyleSelector> = match &args.style {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read stylesheet '{}'", path.display()))?;
            Box::new(
                asciimage::StyleSheet::from_json(&json)
                    .with_context(|| format!("load stylesheet '{}'", path.display()))?,
            )
        }
        None => {
            let stroke = (args.stroke_width > 0.0).then_some(asciimage::StrokeStyle {
                color: args.stroke,
                width: args.stroke_width,
            });
            Box::new(asciimage::SolidStyle::new(stroke, args.fill))
        }
    };

    let settings = asciimage::RenderSettings {
        background: args.background,
    };
    let image = asciimage::render_with(&scene, args.scale, styles.as_ref(), &settings)?;
    if image.is_empty() {
        anyhow::bail!("nothing to render (scale must be > 0)");
    }

    image
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {} components)",
        args.out.display(),
        image.width,
        image.height,
        scene.components().len()
    );
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let opts = asciimage::ParseOptions {
        order: if args.last_observed {
            asciimage::OccurrenceOrder::LastObserved
        } else {
            asciimage::OccurrenceOrder::FirstObserved
        },
    };
    let scene = read_scene(&args.in_path, &opts)?;
    let json = serde_json::to_string_pretty(&scene).with_context(|| "serialize scene")?;
    println!("{json}");
    Ok(())
}
