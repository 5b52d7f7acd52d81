//! Softmax Confidence Meter — CLI entrypoint
//! Parses candidate scores, runs the softmax → entropy → confidence pipeline,
//! and prints a ranked bar chart plus the labeled meter. `--html` additionally
//! writes the static HTML fragments the browser shell embeds.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use softmax_confidence_meter::chart::{render_bar_chart, render_meter, render_text, ChartOptions};
use softmax_confidence_meter::config::MeterConfig;
use softmax_confidence_meter::engine::evaluate;
use softmax_confidence_meter::parse::{parse_candidates, validate};
use softmax_confidence_meter::samples;

#[derive(Parser)]
#[command(
    name = "softmax-meter",
    about = "Temperature-scaled softmax over candidate scores, with an entropy-based confidence meter."
)]
struct Cli {
    /// Read input from a built-in sample (dominant, basic, close, scores)
    #[arg(long, conflicts_with = "input")]
    sample: Option<String>,

    /// Read input from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Softmax temperature (> 0); defaults to the configured value
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Write the chart and meter HTML fragments to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// Print the full reading as JSON instead of the text table
    #[arg(long)]
    json: bool,
}

/// Compact tracing output, opt-in via RUST_LOG (defaults to warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("softmax_confidence_meter=warn,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(key) = &cli.sample {
        return match samples::sample(key) {
            Some(text) => Ok(text.to_string()),
            None => bail!(
                "unknown sample '{}' (available: {})",
                key,
                samples::sample_keys().join(", ")
            ),
        };
    }
    if let Some(path) = &cli.input {
        return fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = MeterConfig::from_env_or_default();

    let text = read_input(&cli)?;
    let candidates = parse_candidates(&text);
    let temperature = cli.temperature.unwrap_or(config.default_temperature);

    validate(&candidates, temperature)?;
    let reading = evaluate(&candidates, temperature);

    let opts = ChartOptions {
        max_bars: config.max_bars,
        show_percent: config.show_percent,
    };

    if let Some(path) = &cli.html {
        let html = format!("{}\n{}\n", render_bar_chart(&reading, &opts), render_meter(&reading));
        fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render_text(&reading, &opts));
    }

    Ok(())
}
