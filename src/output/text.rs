//! Human-readable text report

use crate::config::Mode;
use crate::generator::Outcome;
use crate::stats::Counts;
use crate::Result;
use anyhow::Context;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Number of samples listed individually in the report
pub const SAMPLE_PREVIEW_LIMIT: usize = 200;

/// Render the text report
///
/// Layout:
/// - mode and shot count
/// - raw counts, one `bitstring : frequency` line per key in key order
/// - the first 200 samples, 1-indexed with a width-4 index
/// - total sample count
pub fn format_results(mode: Mode, shots: u64, raw_counts: &Counts, samples: &[Outcome]) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Mode: {}", mode);
    let _ = writeln!(out, "Shots: {}", shots);
    out.push('\n');

    out.push_str("Raw counts (bitstring -> frequency):\n");
    for (key, freq) in raw_counts.iter() {
        let _ = writeln!(out, "{} : {}", key, freq);
    }

    out.push_str("\nSamples (first 200 shown):\n");
    for (i, sample) in samples.iter().take(SAMPLE_PREVIEW_LIMIT).enumerate() {
        let _ = writeln!(out, "{:4}: {}", i + 1, sample);
    }

    let _ = writeln!(out, "\nTotal samples: {}", samples.len());
    out
}

/// Write the text report to `path`, creating parent directories as needed
pub fn save_results(
    path: &Path,
    mode: Mode,
    shots: u64,
    raw_counts: &Counts,
    samples: &[Outcome],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, format_results(mode, shots, raw_counts, samples))
        .with_context(|| format!("Failed to write results to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn coin_fixture() -> (Counts, Vec<Outcome>) {
        let counts: Counts = [("1", 3), ("0", 7)].into_iter().collect();
        let mut samples = vec![Outcome::Heads; 7];
        samples.extend(vec![Outcome::Tails; 3]);
        (counts, samples)
    }

    #[test]
    fn test_format_coin_report() {
        let (counts, samples) = coin_fixture();
        let text = format_results(Mode::Coin, 10, &counts, &samples);

        let expected = "\
Mode: coin
Shots: 10

Raw counts (bitstring -> frequency):
0 : 7
1 : 3

Samples (first 200 shown):
   1: H
   2: H
   3: H
   4: H
   5: H
   6: H
   7: H
   8: T
   9: T
  10: T

Total samples: 10
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_truncates_sample_listing() {
        let counts: Counts = [("000", 250)].into_iter().collect();
        let samples = vec![Outcome::Face(1); 250];
        let text = format_results(Mode::Dice, 250, &counts, &samples);

        assert!(text.contains(" 200: 1\n"));
        assert!(!text.contains(" 201: "));
        assert!(text.ends_with("\nTotal samples: 250\n"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let (counts, samples) = coin_fixture();
        assert_eq!(
            format_results(Mode::Coin, 10, &counts, &samples),
            format_results(Mode::Coin, 10, &counts, &samples)
        );
    }

    #[test]
    fn test_save_twice_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dice_results.txt");
        let (counts, samples) = coin_fixture();

        save_results(&path, Mode::Coin, 10, &counts, &samples).unwrap();
        let first = fs::read(&path).unwrap();
        save_results(&path, Mode::Coin, 10, &counts, &samples).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
