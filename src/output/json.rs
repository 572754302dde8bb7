//! JSON output formatting
//!
//! Machine-readable companion to the text report: run settings, raw counts,
//! outcome tally and every sample.

use crate::config::{Mode, RunConfig};
use crate::generator::{Generation, Outcome};
use crate::stats::{Counts, OutcomeTally};
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON document written to `results.json`
#[derive(Debug, Serialize)]
pub struct JsonResults<'a> {
    pub mode: Mode,
    pub shots: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub batches: usize,
    pub raw_counts: &'a Counts,
    pub outcome_counts: OutcomeTally,
    pub total_samples: usize,
    pub samples: &'a [Outcome],
}

impl<'a> JsonResults<'a> {
    pub fn new(config: &RunConfig, generation: &'a Generation) -> Self {
        Self {
            mode: config.mode,
            shots: config.shots,
            seed: config.seed,
            batches: generation.batches,
            raw_counts: &generation.raw_counts,
            outcome_counts: OutcomeTally::from_samples(&generation.samples),
            total_samples: generation.samples.len(),
            samples: &generation.samples,
        }
    }
}

/// Write pretty-printed JSON results to `path`
pub fn write_json(path: &Path, config: &RunConfig, generation: &Generation) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &JsonResults::new(config, generation))
        .context("Failed to serialize results to JSON")?;
    writer
        .write_all(b"\n")
        .with_context(|| format!("Failed to write JSON output {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write JSON output {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_document_shape() {
        let generation = Generation {
            raw_counts: [("000", 2), ("110", 1), ("111", 2), ("001", 5)].into_iter().collect(),
            samples: vec![
                Outcome::Face(1),
                Outcome::Face(1),
                Outcome::Face(2),
                Outcome::Face(2),
                Outcome::Face(2),
            ],
            batches: 2,
        };
        let config = RunConfig {
            shots: 5,
            seed: Some(3),
            ..Default::default()
        };

        let value = serde_json::to_value(JsonResults::new(&config, &generation)).unwrap();
        assert_eq!(value["mode"], "dice");
        assert_eq!(value["shots"], 5);
        assert_eq!(value["seed"], 3);
        assert_eq!(value["batches"], 2);
        assert_eq!(value["raw_counts"]["111"], 2);
        assert_eq!(value["outcome_counts"]["1"], 2);
        assert_eq!(value["outcome_counts"]["2"], 3);
        assert_eq!(value["total_samples"], 5);
        assert_eq!(value["samples"][4], 2);
    }

    #[test]
    fn test_write_json_round_trips_as_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        let generation = Generation {
            raw_counts: [("0", 1), ("1", 1)].into_iter().collect(),
            samples: vec![Outcome::Heads, Outcome::Tails],
            batches: 1,
        };
        let config = RunConfig {
            mode: Mode::Coin,
            shots: 2,
            ..Default::default()
        };

        write_json(&path, &config, &generation).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mode"], "coin");
        assert!(value.get("seed").is_none());
        assert_eq!(value["samples"], serde_json::json!(["H", "T"]));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_names_output_path() {
        let generation = Generation {
            raw_counts: [("0", 1)].into_iter().collect(),
            samples: vec![Outcome::Heads],
            batches: 1,
        };
        let config = RunConfig {
            mode: Mode::Coin,
            shots: 1,
            ..Default::default()
        };

        // /dev/full accepts open but fails every write with ENOSPC
        let err = write_json(Path::new("/dev/full"), &config, &generation).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write JSON output /dev/full");
    }
}
