use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spritemosaic", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an image as a looping sprite-mosaic GIF.
    Render(RenderArgs),
    /// Render the six frames as individual PNGs.
    Frames(FramesArgs),
    /// Print the grid plan for a source size as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input image (any format supported by the `image` crate).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding `0.png`..`5.png` and `black.png`.
    #[arg(long)]
    assets: PathBuf,

    /// Tile rows (10..=30). Overrides the config file.
    #[arg(long)]
    rows: Option<u32>,

    /// Optional JSON render config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render frames in parallel. Overrides the config file.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory for `frame_<n>.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Source width in pixels.
    #[arg(long)]
    width: u32,

    /// Source height in pixels.
    #[arg(long)]
    height: u32,

    /// Tile rows (10..=30).
    #[arg(long, default_value_t = spritemosaic::Tuning::DEFAULT_ROWS)]
    rows: u32,

    /// Native sprite width.
    #[arg(long, default_value_t = spritemosaic::Tuning::STOCK_SPRITE_WIDTH)]
    sprite_width: u32,

    /// Native sprite height.
    #[arg(long, default_value_t = spritemosaic::Tuning::STOCK_SPRITE_HEIGHT)]
    sprite_height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn resolve_config(args: &SourceArgs) -> anyhow::Result<spritemosaic::RenderConfig> {
    let mut cfg = match &args.config {
        Some(path) => spritemosaic::RenderConfig::load(path)?,
        None => spritemosaic::RenderConfig::default(),
    };
    if let Some(rows) = args.rows {
        cfg.rows = spritemosaic::TileRows::new(rows)?;
    }
    if args.parallel {
        cfg.threading.parallel = true;
    }
    Ok(cfg)
}

fn render_source(args: &SourceArgs) -> anyhow::Result<spritemosaic::Animation> {
    let cfg = resolve_config(args)?;
    let assets = spritemosaic::SpriteAssets::load_dir(&args.assets)?;
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input image '{}'", args.in_path.display()))?;
    let animation = spritemosaic::render_bytes(&bytes, cfg.rows, &assets, &cfg.threading)
        .with_context(|| format!("render '{}'", args.in_path.display()))?;
    Ok(animation)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let animation = render_source(&args.source)?;
    spritemosaic::write_gif(&animation.frames, &args.out)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let animation = render_source(&args.source)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for (idx, frame) in animation.frames.iter().enumerate() {
        let path = frame_path(&args.out_dir, idx);
        frame
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {} frames to {}", animation.frames.len(), args.out_dir.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let rows = spritemosaic::TileRows::new(args.rows)?;
    let plan = spritemosaic::plan_grid(
        args.width,
        args.height,
        rows.get(),
        args.sprite_width,
        args.sprite_height,
        spritemosaic::Tuning::DEFAULT_PAD,
    )?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn frame_path(dir: &Path, idx: usize) -> PathBuf {
    dir.join(format!("frame_{idx}.png"))
}
