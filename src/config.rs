use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub datasets: DatasetPaths,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Locations of the three input files, one per role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPaths {
    #[serde(default = "default_worldwide")]
    pub worldwide_trends: PathBuf,
    #[serde(default = "default_regional")]
    pub regional_trends: PathBuf,
    #[serde(default = "default_tweets")]
    pub tweets: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many texts/names/hashtags to preview
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Raw tweets pretty-printed before extraction
    #[serde(default = "default_sample_tweets")]
    pub sample_tweets: usize,
    /// Width in columns of the longest histogram bar
    #[serde(default = "default_histogram_width")]
    pub histogram_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_worldwide() -> PathBuf {
    PathBuf::from("datasets/WWTrends.json")
}

fn default_regional() -> PathBuf {
    PathBuf::from("datasets/USTrends.json")
}

fn default_tweets() -> PathBuf {
    PathBuf::from("datasets/WeLoveTheEarth.json")
}

fn default_preview_count() -> usize {
    10
}

fn default_top_n() -> usize {
    10
}

fn default_sample_tweets() -> usize {
    2
}

fn default_histogram_width() -> usize {
    40
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            worldwide_trends: default_worldwide(),
            regional_trends: default_regional(),
            tweets: default_tweets(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_count: default_preview_count(),
            top_n: default_top_n(),
            sample_tweets: default_sample_tweets(),
            histogram_width: default_histogram_width(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load from an explicit path, else the user config dir, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InsightError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| InsightError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trendlens").join("config.toml"))
    }
}
