use crate::chart::BarChart;
use anyhow::{bail, Context};
use criterion_plot::*;
use log::debug;
use std::path::Path;

mod bar;

static DEFAULT_FONT: &str = "Helvetica";
static SIZE: Size = Size(1280, 720);

const DARK_BLUE: Color = Color::Rgb(31, 120, 180);

/// Draws `chart` into the SVG file at `output` and waits for gnuplot to finish.
pub fn create_plot(chart: &BarChart, output: &Path) -> anyhow::Result<()> {
    let path = output
        .to_str()
        .with_context(|| format!("output path {} is not valid UTF-8", output.display()))?;

    debug!("spawning gnuplot for {path}");
    let mut child = bar::bar(chart, path).context("couldn't spawn gnuplot, is it installed?")?;

    let status = child.wait().context("couldn't wait for gnuplot")?;
    if !status.success() {
        bail!("gnuplot failed with {status}");
    }

    Ok(())
}

/// Gnuplot reads labels and the output path as single-quoted strings, where a quote is written twice.
fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_doubles_single_quotes() {
        assert_eq!(
            escape(" Bandwidth of Buffer Pool's operations"),
            " Bandwidth of Buffer Pool''s operations"
        );
        assert_eq!(escape("Time (s)"), "Time (s)");
    }
}
