use crate::chart::BarChart;
use std::fmt;
use std::fmt::Display;

pub struct Summary {
    pub results: Vec<SummaryEntry>,
}

pub struct SummaryEntry {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        Ok(())
    }
}

impl Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:24}: {:.2} {}", self.name, self.value, self.unit)
    }
}

pub fn calculate_summary(chart: &BarChart) -> Summary {
    let results = chart
        .bars
        .iter()
        .map(|bar| SummaryEntry {
            name: bar.category.label(),
            value: bar.height,
            unit: chart.variant.unit(),
        })
        .collect();

    Summary { results }
}
