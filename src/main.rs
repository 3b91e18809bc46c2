// Renders the buffer pool performance regression results as a bar chart.
//
// # Procedure
// 1. Read `alloc_regtest` and `scan_regtest` from the results file (the output of the
//    performance regression test)
// 2. Build a two bar chart, Alloc at x = 0 and Scan at x = 1
// 3. Render it to SVG with gnuplot
// 4. Open it in a viewer and wait until the viewer is closed

mod chart;
mod persistence;
mod plots;
mod results;
mod summary;
mod viewer;

use crate::chart::{BarChart, Variant};
use crate::persistence::{plot_path, prepare_output};
use crate::results::{load_results, DEFAULT_RESULTS_PATH};
use crate::summary::calculate_summary;
use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process::exit;

#[derive(Debug, Parser)]
#[command(name = "bufferpool-plot", version, about)]
pub struct Options {
    /// Axis label and title to draw the chart with
    #[arg(long, value_enum, default_value_t = Variant::Bandwidth)]
    variant: Variant,

    /// File defining `alloc_regtest` and `scan_regtest` (`name = value` lines, or JSON)
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Where to write the chart [default: target/bufferpool/<variant>.svg]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Command the chart is opened with [default: xdg-open, or open on macOS]
    #[arg(long, env = viewer::VIEWER_ENV)]
    viewer: Option<String>,

    /// Only render the chart, don't open it
    #[arg(long)]
    no_show: bool,
}

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // usage errors exit with 1 like every other failure, help and version still exit with 0
    let opts = match Options::try_parse() {
        Ok(opts) => opts,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            exit(1);
        }
    };
    if let Err(e) = run(opts) {
        eprintln!("{e:#}");
        exit(1);
    }
}

fn run(opts: Options) -> anyhow::Result<()> {
    let results = load_results(&opts.results)
        .with_context(|| format!("couldn't load results from {}", opts.results.display()))?;
    info!(
        "loaded {}: alloc = {}, scan = {}",
        opts.results.display(),
        results.alloc,
        results.scan
    );

    let chart = BarChart::new(opts.variant, &results);
    println!("\n=== Summary ===\n{}", calculate_summary(&chart));

    let output = match opts.output {
        Some(path) => prepare_output(path)?,
        None => plot_path(opts.variant)?,
    };
    plots::create_plot(&chart, &output)?;
    info!("chart written to {}", output.display());

    if opts.no_show {
        info!("--no-show given, not opening the chart");
        return Ok(());
    }

    let viewer = opts
        .viewer
        .unwrap_or_else(|| viewer::default_viewer().to_string());
    viewer::show(&viewer, &output)
}
