use crate::chart::Category;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the performance regression test results are written to by default.
pub const DEFAULT_RESULTS_PATH: &str = "performance_regtest_results.py";

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("couldn't read results from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't parse JSON results")]
    Json(#[from] serde_json::Error),
    #[error("results don't define `{0}`")]
    Missing(&'static str),
    #[error("`{name}` is not a finite number: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BenchmarkResults {
    pub alloc: f64,
    pub scan: f64,
}

impl BenchmarkResults {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Alloc => self.alloc,
            Category::Scan => self.scan,
        }
    }
}

/// Loads both measurements from `path`. Files ending in `.json` hold a JSON object, anything
/// else is read as `name = value` lines (the regression test output).
pub fn load_results(path: &Path) -> Result<BenchmarkResults, ResultsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_json(&contents)
    } else {
        parse_assignments(&contents)
    }
}

/// Parses `name = value` lines. Everything that is not such an assignment is skipped, so the raw
/// gtest output of the regression test can be passed in as well.
pub fn parse_assignments(contents: &str) -> Result<BenchmarkResults, ResultsError> {
    let mut assignments = HashMap::new();
    for line in contents.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };

        let name = name.trim();
        if !is_identifier(name) {
            continue;
        }
        // later assignments shadow earlier ones
        assignments.insert(name, value.trim());
    }

    let value = |category: Category| -> Result<f64, ResultsError> {
        let name = category.symbol();
        let raw = assignments.get(name).ok_or(ResultsError::Missing(name))?;
        parse_number(name, raw)
    };

    Ok(BenchmarkResults {
        alloc: value(Category::Alloc)?,
        scan: value(Category::Scan)?,
    })
}

pub fn parse_json(contents: &str) -> Result<BenchmarkResults, ResultsError> {
    let object: HashMap<String, Value> = serde_json::from_str(contents)?;

    let value = |category: Category| -> Result<f64, ResultsError> {
        let name = category.symbol();
        let value = object.get(name).ok_or(ResultsError::Missing(name))?;
        value
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ResultsError::InvalidValue {
                name,
                value: value.to_string(),
            })
    };

    Ok(BenchmarkResults {
        alloc: value(Category::Alloc)?,
        scan: value(Category::Scan)?,
    })
}

fn parse_number(name: &'static str, raw: &str) -> Result<f64, ResultsError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ResultsError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
