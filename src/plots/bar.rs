use crate::chart::BarChart;
use criterion_plot::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::Child;

use super::*;

// same as matplotlib's default bar width
const BAR_WIDTH: f64 = 0.8;

fn bar_figure(chart: &BarChart) -> Figure {
    let (y_min, y_max) = chart.y_range();

    let mut figure = Figure::new();
    figure
        .set(Font(DEFAULT_FONT))
        .set(SIZE)
        .set(Title(escape(chart.title)))
        .configure(Axis::BottomX, |a| {
            a.set(Range::Limits(-0.5, 1.5)).set(TicLabels {
                positions: chart.bars.iter().map(|bar| bar.position),
                labels: chart.bars.iter().map(|bar| bar.category.label()),
            })
        })
        .configure(Axis::LeftY, |a| {
            a.configure(Grid::Major, |g| g.show())
                .set(Label(escape(chart.y_label)))
                .set(Range::Limits(y_min, y_max))
        })
        .configure(Key, |k| k.hide());

    // one filled rectangle per bar, centred on its position
    for bar in &chart.bars {
        let left = bar.position - BAR_WIDTH / 2.0;
        let right = bar.position + BAR_WIDTH / 2.0;
        figure.plot(
            FilledCurve {
                x: [left, right],
                y1: [0.0, 0.0],
                y2: [bar.height, bar.height],
            },
            |c| c.set(DARK_BLUE),
        );
    }

    figure
}

fn output_figure(chart: &BarChart, output: &str) -> Figure {
    let mut figure = bar_figure(chart);
    figure.set(Output(PathBuf::from(escape(output))));
    figure
}

pub fn bar(chart: &BarChart, output: &str) -> io::Result<Child> {
    output_figure(chart, output).draw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Variant;
    use crate::results::BenchmarkResults;

    // the inline data is binary, only the commands are text
    fn script_bytes(chart: &BarChart) -> Vec<u8> {
        let mut script = Vec::new();
        bar_figure(chart).dump(&mut script).unwrap();
        script
    }

    fn script(chart: &BarChart) -> String {
        String::from_utf8_lossy(&script_bytes(chart)).into_owned()
    }

    fn chart(variant: Variant) -> BarChart {
        BarChart::new(variant, &BenchmarkResults { alloc: 2.5, scan: 1.25 })
    }

    #[test]
    fn script_has_category_tics() {
        let script = script(&chart(Variant::Bandwidth));
        let alloc = script.find("Alloc").expect("no Alloc tic");
        let scan = script.find("Scan").expect("no Scan tic");
        assert!(alloc < scan);
    }

    #[test]
    fn script_has_variant_labels() {
        let bandwidth = script(&chart(Variant::Bandwidth));
        assert!(bandwidth.contains("Bandwidth (GB/s)"));
        assert!(bandwidth.contains(" Bandwidth of Buffer Pool''s operations"));

        let time = script(&chart(Variant::Time));
        assert!(time.contains("Time (s)"));
        assert!(time.contains(" Execution time of Buffer Pool operations"));
    }

    #[test]
    fn script_escapes_output_path() {
        let mut script = Vec::new();
        output_figure(&chart(Variant::Bandwidth), "charts/Pool's.svg")
            .dump(&mut script)
            .unwrap();
        let script = String::from_utf8_lossy(&script);

        assert!(script.contains("charts/Pool''s.svg"));
        assert!(!script.contains("charts/Pool's.svg"));
    }

    #[test]
    fn same_chart_same_script() {
        assert_eq!(
            script_bytes(&chart(Variant::Time)),
            script_bytes(&chart(Variant::Time))
        );
    }
}
