use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use feedreel::{
    ConcatOutcome, ImageAnnotator, JsonTimelineSource, Pipeline, ReelConfig, TimelineSource,
    chronological,
};

#[derive(Parser, Debug)]
#[command(name = "feedreel", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a timeline into one narrated MP4 (requires `ffmpeg` and `ffprobe` on PATH).
    Render(RenderArgs),
    /// Draw one caption board image.
    Annotate(AnnotateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Timeline JSON (array of items, most recent first).
    #[arg(long)]
    timeline: PathBuf,

    /// Config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Final MP4 path (overrides the config).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip items that fail instead of stopping the run.
    #[arg(long)]
    contain_failures: bool,
}

#[derive(Parser, Debug)]
struct AnnotateArgs {
    /// Author shown before the text.
    #[arg(long)]
    author: String,

    /// Caption text.
    #[arg(long)]
    text: String,

    /// Output image path (PNG or JPEG by extension).
    #[arg(long)]
    out: PathBuf,

    /// Config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Annotate(args) => cmd_annotate(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReelConfig> {
    match path {
        Some(p) => Ok(ReelConfig::from_path(p)?),
        None => Ok(ReelConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(out) = args.out {
        cfg.final_output = out;
    }
    cfg.contain_item_failures |= args.contain_failures;

    let items = JsonTimelineSource::new(&args.timeline)
        .fetch_items()
        .with_context(|| format!("load timeline '{}'", args.timeline.display()))?;
    let items = chronological(items);

    let pipeline = Pipeline::from_config(&cfg)?;
    let report = pipeline.run(&items)?;

    for (index, reason) in &report.skipped {
        eprintln!("skipped item {index}: {reason:?}");
    }
    match report.outcome {
        ConcatOutcome::Written {
            path,
            segments,
            duration_seconds,
        } => eprintln!(
            "wrote {} ({segments} segments, {duration_seconds:.2}s)",
            path.display()
        ),
        ConcatOutcome::NothingProduced => eprintln!("nothing to render; no video written"),
    }
    Ok(())
}

fn cmd_annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    cfg.validate()?;
    let annotator = ImageAnnotator::new(
        &cfg.template_image,
        &cfg.font_source(),
        cfg.canvas,
        cfg.caption_layout(),
    )?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    annotator.annotate_to(&args.author, &args.text, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
