use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use utcepoch_calendar::{MAX_YEAR, MIN_YEAR};

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UtcEpochConfig {
    /// Year boundary cache settings.
    #[serde(default)]
    pub cache: CacheToml,

    /// Batch conversion settings.
    #[serde(default)]
    pub convert: ConvertToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CacheToml {
    pub warm_from: Option<i32>,
    pub warm_to: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertToml {
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

impl Default for ConvertToml {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            comment_prefix: default_comment_prefix(),
        }
    }
}

fn default_comment_prefix() -> String {
    "#".to_string()
}

/// Reads the TOML config at `path`, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<UtcEpochConfig> {
    let Some(path) = path else {
        return Ok(UtcEpochConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

impl CacheToml {
    /// Returns the years to build up front, if any bound is set.
    ///
    /// A missing bound defaults to the matching end of the supported range.
    pub fn warm_range(&self) -> Result<Option<RangeInclusive<i32>>> {
        if self.warm_from.is_none() && self.warm_to.is_none() {
            return Ok(None);
        }
        let from = self.warm_from.unwrap_or(MIN_YEAR);
        let to = self.warm_to.unwrap_or(MAX_YEAR);
        for (name, year) in [("warm_from", from), ("warm_to", to)] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                bail!("[cache].{name} = {year} is outside {MIN_YEAR}..={MAX_YEAR}");
            }
        }
        if from > to {
            bail!("[cache].warm_from ({from}) is after warm_to ({to})");
        }
        Ok(Some(from..=to))
    }
}

/// Pre-builds the configured years in the process-wide cache.
pub fn warm_cache(cache: &CacheToml) -> Result<()> {
    let Some(years) = cache.warm_range()? else {
        return Ok(());
    };
    info!(
        from = years.start(),
        to = years.end(),
        "warming year boundary cache"
    );
    utcepoch_calendar::cache_init();
    utcepoch_calendar::global_cache()
        .warm(years)
        .context("failed to warm year boundary cache")
}
