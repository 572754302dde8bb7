//! Configuration validation

use super::{RunConfig, MAX_SHOTS};
use anyhow::Result;

/// Validate complete run configuration
pub fn validate_config(config: &RunConfig) -> Result<()> {
    if config.shots == 0 {
        anyhow::bail!("shots must be a positive integer, got {}", config.shots);
    }

    if config.shots > MAX_SHOTS {
        anyhow::bail!("shots must be between 1 and {}, got {}", MAX_SHOTS, config.shots);
    }

    if config.out.as_os_str().is_empty() {
        anyhow::bail!("output directory must not be empty");
    }

    if let Some(limit) = config.max_batches {
        if limit == 0 {
            anyhow::bail!("max_batches must be at least 1, got {}", limit);
        }
    }

    Ok(())
}
