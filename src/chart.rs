use crate::results::BenchmarkResults;
use clap::ValueEnum;

/// Which axis label and title the chart is drawn with. The plotted values are the same for
/// both variants.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    #[default]
    Bandwidth,
    Time,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Bandwidth => "bandwidth",
            Variant::Time => "time",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Variant::Bandwidth => "Bandwidth (GB/s)",
            Variant::Time => "Time (s)",
        }
    }

    // leading space is part of the title
    pub fn title(self) -> &'static str {
        match self {
            Variant::Bandwidth => " Bandwidth of Buffer Pool's operations",
            Variant::Time => " Execution time of Buffer Pool operations",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Variant::Bandwidth => "GB/s",
            Variant::Time => "s",
        }
    }
}

/// A benchmarked buffer pool operation, i.e. one bar of the chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Alloc,
    Scan,
}

impl Category {
    /// Categories in the order they appear on the x axis.
    pub const ALL: [Category; 2] = [Category::Alloc, Category::Scan];

    pub fn label(self) -> &'static str {
        match self {
            Category::Alloc => "Alloc",
            Category::Scan => "Scan",
        }
    }

    /// Name the results provider defines the measurement under.
    pub fn symbol(self) -> &'static str {
        match self {
            Category::Alloc => "alloc_regtest",
            Category::Scan => "scan_regtest",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bar {
    pub category: Category,
    pub position: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub variant: Variant,
    pub bars: [Bar; 2],
    pub y_label: &'static str,
    pub title: &'static str,
}

impl BarChart {
    pub fn new(variant: Variant, results: &BenchmarkResults) -> Self {
        let bars = Category::ALL.map(|category| Bar {
            category,
            position: match category {
                Category::Alloc => 0.0,
                Category::Scan => 1.0,
            },
            height: results.get(category),
        });

        BarChart {
            variant,
            bars,
            y_label: variant.y_label(),
            title: variant.title(),
        }
    }

    /// Y range covering every bar and the baseline, with 10% headroom above the tallest bar.
    /// Always finite, headroom saturates at the largest `f64`.
    pub fn y_range(&self) -> (f64, f64) {
        let low = self.bars.iter().map(|bar| bar.height).fold(0.0, f64::min);
        let high = self.bars.iter().map(|bar| bar.height).fold(0.0, f64::max);

        if low == 0.0 && high == 0.0 {
            (0.0, 1.0)
        } else {
            ((low * 1.1).max(f64::MIN), (high * 1.1).min(f64::MAX))
        }
    }
}
