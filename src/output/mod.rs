//! Report output
//!
//! Writes everything a run produces into the output directory:
//!
//! - `dice_results.txt`: text summary (same name in coin mode)
//! - `raw_hist.png`: raw bit-pattern frequencies
//! - `<mode>_hist.png`: final outcome frequencies
//! - `results.json`: optional machine-readable results
//!
//! Existing files are overwritten.

pub mod json;
pub mod plot;
pub mod text;

use crate::config::{Mode, RunConfig};
use crate::generator::Generation;
use crate::stats::OutcomeTally;
use plot::ChartLabels;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const TEXT_REPORT_NAME: &str = "dice_results.txt";
pub const RAW_HISTOGRAM_NAME: &str = "raw_hist.png";
pub const JSON_REPORT_NAME: &str = "results.json";

pub const RAW_HISTOGRAM_TITLE: &str = "Raw Bitstring Counts";

/// Outcome chart title, e.g. "Dice Outcomes (n=100)"
pub fn outcome_chart_title(mode: Mode, samples: usize) -> String {
    let name = match mode {
        Mode::Coin => "Coin",
        Mode::Dice => "Dice",
    };
    format!("{} Outcomes (n={})", name, samples)
}

/// Paths of the artifacts written by [`report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub raw_histogram: PathBuf,
    pub outcome_histogram: PathBuf,
    pub json: Option<PathBuf>,
}

impl ReportPaths {
    pub fn for_config(config: &RunConfig) -> Self {
        Self {
            text: config.out.join(TEXT_REPORT_NAME),
            raw_histogram: config.out.join(RAW_HISTOGRAM_NAME),
            outcome_histogram: config.out.join(format!("{}_hist.png", config.mode)),
            json: config.json.then(|| config.out.join(JSON_REPORT_NAME)),
        }
    }
}

/// Write the text report, both histograms and (optionally) JSON results
pub fn report(config: &RunConfig, generation: &Generation) -> Result<ReportPaths> {
    let paths = ReportPaths::for_config(config);

    fs::create_dir_all(&config.out)
        .with_context(|| format!("Failed to create output directory {}", config.out.display()))?;
    debug!(out = %config.out.display(), "output directory ready");

    text::save_results(
        &paths.text,
        config.mode,
        config.shots,
        &generation.raw_counts,
        &generation.samples,
    )?;
    println!("Saved results → {}", paths.text.display());

    let raw_bars: Vec<(String, u64)> = generation
        .raw_counts
        .iter()
        .map(|(key, n)| (key.to_string(), n))
        .collect();
    plot::save_bar_chart(
        &paths.raw_histogram,
        &raw_bars,
        ChartLabels {
            title: RAW_HISTOGRAM_TITLE,
            x_label: "Bitstring",
        },
        plot::RAW_CHART_SIZE,
    )?;
    println!("Saved raw histogram → {}", paths.raw_histogram.display());

    let outcome_bars: Vec<(String, u64)> = OutcomeTally::from_samples(&generation.samples)
        .iter()
        .map(|(outcome, n)| (outcome.to_string(), n))
        .collect();
    let title = outcome_chart_title(config.mode, generation.samples.len());
    plot::save_bar_chart(
        &paths.outcome_histogram,
        &outcome_bars,
        ChartLabels {
            title: &title,
            x_label: "Outcome",
        },
        plot::OUTCOME_CHART_SIZE,
    )?;
    println!("Saved outcome histogram → {}", paths.outcome_histogram.display());

    if let Some(ref json_path) = paths.json {
        json::write_json(json_path, config, generation)?;
        println!("Saved JSON results → {}", json_path.display());
    }

    Ok(paths)
}
