use crate::config::PlotConfig;
use crate::units::TimeUnit;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Top-level Google Benchmark JSON document. Keys other than `benchmarks`
/// (`context`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct ResultsDoc {
    pub benchmarks: Vec<BenchmarkRecord>,
}

/// One benchmark entry.
///
/// The group id arrives as the `benchmark_visualizer_group` user counter the
/// instrumented benchmark writes, which Google Benchmark stores as a double.
/// Timings and remaining counters land in `fields` so the configured x/y
/// field names can be looked up by name.
#[derive(Debug, Deserialize)]
pub struct BenchmarkRecord {
    pub time_unit: TimeUnit,
    #[serde(rename = "benchmark_visualizer_group")]
    pub group: f64,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl BenchmarkRecord {
    fn numeric_field(&self, name: &str, index: usize) -> Result<f64> {
        let value = self
            .fields
            .get(name)
            .with_context(|| format!("benchmark record {index} has no field named {name:?}"))?;
        value
            .as_f64()
            .with_context(|| format!("field {name:?} of benchmark record {index} is not numeric"))
    }
}

/// One measurement extracted from the results file. The y value is already
/// converted to the configured target unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub group: usize,
    pub x: f64,
    pub y: f64,
}

/// Read the results file and extract one sample per benchmark record.
pub fn read_samples(config: &PlotConfig) -> Result<Vec<Sample>> {
    let raw = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read results file {}", config.input.display()))?;
    let doc: ResultsDoc = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse results file {}", config.input.display()))?;
    extract_samples(&doc, config)
}

/// Extract samples from a parsed document, converting each y value from the
/// record's stored unit to the configured target unit.
pub fn extract_samples(doc: &ResultsDoc, config: &PlotConfig) -> Result<Vec<Sample>> {
    let mut samples = Vec::with_capacity(doc.benchmarks.len());
    for (index, record) in doc.benchmarks.iter().enumerate() {
        let x = record.numeric_field(&config.x_field, index)?;
        let y = record.numeric_field(config.y_field.key(), index)?;
        if record.group < 0.0 || record.group.fract() != 0.0 {
            bail!(
                "benchmark record {index} has non-integral group id {}",
                record.group
            );
        }
        samples.push(Sample {
            group: record.group as usize,
            x,
            y: record.time_unit.convert(y, config.time_unit),
        });
    }
    Ok(samples)
}
