use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "waveview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one view of a signal as a PNG and print the draw summary as JSON.
    Render(RenderArgs),
    /// Print the layers drawn at a density as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input samples JSON: `{"channels": [[...], ...]}`. Mutually exclusive with `--tone`.
    #[arg(long = "in", conflicts_with = "tone")]
    in_path: Option<PathBuf>,

    /// Generate a sine test tone at this frequency (Hz) instead of reading samples.
    #[arg(long)]
    tone: Option<f64>,

    /// Test tone length in seconds.
    #[arg(long, default_value_t = 1.0)]
    seconds: f64,

    /// Test tone sample rate.
    #[arg(long, default_value_t = 44_100)]
    sample_rate: u32,

    /// Test tone channel count.
    #[arg(long, default_value_t = 1)]
    channels: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels (one column per pixel).
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// First sample of the view.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Samples per column; defaults to fitting the whole signal.
    #[arg(long)]
    density: Option<f64>,

    /// Renderer configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Samples per column.
    #[arg(long)]
    density: f64,

    /// Renderer configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Deserialize)]
struct SamplesFile {
    channels: Vec<Vec<f32>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

const DEFAULT_BACKGROUND: [u8; 4] = [18, 20, 28, 255];

fn read_config(path: Option<&Path>) -> anyhow::Result<waveview::RenderConfig> {
    let mut cfg = match path {
        Some(p) => waveview::RenderConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => waveview::RenderConfig::default(),
    };
    cfg.clear_rgba.get_or_insert(DEFAULT_BACKGROUND);
    Ok(cfg)
}

fn read_samples(path: &Path) -> anyhow::Result<waveview::SampleOverview> {
    let f = File::open(path).with_context(|| format!("open samples '{}'", path.display()))?;
    let r = BufReader::new(f);
    let file: SamplesFile = serde_json::from_reader(r).with_context(|| "parse samples JSON")?;
    Ok(waveview::SampleOverview::new(file.channels)?)
}

fn make_source(args: &RenderArgs) -> anyhow::Result<waveview::SampleOverview> {
    if let Some(path) = &args.in_path {
        return read_samples(path);
    }
    let freq = args.tone.context("either --in or --tone is required")?;
    if args.channels == 0 {
        anyhow::bail!("--channels must be > 0");
    }
    let tau = args.seconds / 3.0;
    let base = waveview::tone::decaying_sine(freq, args.sample_rate, args.seconds, tau);
    let channels = (0..args.channels)
        .map(|c| {
            let gain = 1.0 / (c as f32 + 1.0);
            base.iter().map(|s| s * gain).collect()
        })
        .collect();
    Ok(waveview::SampleOverview::new(channels)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let source = make_source(&args)?;
    let density = args
        .density
        .unwrap_or_else(|| source.fit_density(i64::from(args.width)));

    let mut renderer = waveview::WaveformRenderer::with_config(source, &cfg)?;
    renderer.set_view(args.start, f64::from(args.width), density);

    let mut surface = waveview::CpuSurface::new(args.width, args.height, cfg.clear_rgba)?;
    let stats = renderer.draw(&mut surface, args.width, args.height)?;
    let frame = surface.finish()?.into_straight();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(
        density,
        channels = stats.bands.len(),
        layers = stats.plan.layer_count(),
        "rendered"
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let plan = waveview::LayerPlan::for_density(args.density, &cfg.thresholds);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
