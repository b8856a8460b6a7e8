use anyhow::Result;
use clap::Parser;
use curveink::config::RenderConfig;
use curve_geom::CurveKind;

/// Trace an image as a space-filling-curve line drawing:
/// dark regions become curve, light regions become gaps.
#[derive(Parser, Debug)]
#[command(name = "curveink")]
#[command(about = "Render an image as a Hilbert-curve line drawing")]
#[command(
    long_about = "Render an image as a space-filling-curve line drawing. The image is \
recursively subdivided following a Hilbert (or z-order) pattern and only regions dark \
enough to pass the threshold are traced, producing a connected polyline whose density \
follows the luminance of the source."
)]
struct Args {
    /// Input image path (PNG or JPEG)
    input: String,

    /// Output PNG path
    #[arg(short, long, help = "Output file path (default: <input>.curve.png)")]
    output: Option<String>,

    /// Which curve to trace
    #[arg(short, long, default_value = "hilbert",
          help = "Subdivision rule: hilbert (connected curve) or zorder (Morton layout)")]
    curve: String,

    /// Darkness threshold
    #[arg(short, long, default_value_t = 0.6,
          help = "Regions with average brightness under this fraction are drawn (0 < t <= 1)")]
    threshold: f64,

    /// Minimum block half-side at which subdivision stops
    #[arg(long, default_value_t = 0,
          help = "Larger values stop subdividing earlier, giving a coarser trace")]
    min_block: u32,

    /// Skip the brightness/contrast pre-enhancement
    #[arg(long, help = "Trace the raw image without the brightness x1.3 / contrast x10 pre-stage")]
    no_enhance: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let curve = parse_curve(&args.curve)?;
    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.input));

    let config = RenderConfig::new(
        output,
        curve,
        args.threshold,
        args.min_block,
        !args.no_enhance,
    );
    config.validate().map_err(anyhow::Error::msg)?;

    let img = image::open(&args.input)?.to_rgb8();
    println!(
        "Tracing {} ({}x{}, {:?} curve)...",
        args.input,
        img.width(),
        img.height(),
        curve
    );

    let drawing = curveink::render_image(&img, &config.to_render_options())?;
    drawing.save(&config.output)?;
    println!("Saved {}", config.output);
    Ok(())
}

/// Parse the curve selector into its subdivision rule.
fn parse_curve(curve: &str) -> Result<CurveKind> {
    match curve.to_lowercase().as_str() {
        "hilbert" => Ok(CurveKind::Hilbert),
        "zorder" | "z" => Ok(CurveKind::ZOrder),
        _ => Err(anyhow::anyhow!(
            "Invalid curve kind: {}. Use: hilbert, zorder",
            curve
        )),
    }
}

/// Default result path next to the input: `<input>.curve.png`.
fn default_output(input: &str) -> String {
    format!("{}.curve.png", input)
}
