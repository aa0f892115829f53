//! Tinct configuration file handling
//!
//! A preview file (`tinct.toml`) describes one motion and how to sample it:
//!
//! ```toml
//! [preview]
//! frames = 5
//!
//! [motion]
//! kind = "background-gradient"
//! start = "linear-gradient(90deg, #000000 0%, #ffffff 100%)"
//! end = "linear-gradient(270deg, #ffffff 0%, #000000 100%)"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tinct_motion::MotionSpec;

/// Default file name looked up by `tinct preview` when given a directory
pub const CONFIG_FILE: &str = "tinct.toml";

/// Preview configuration stored in tinct.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct TinctConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    pub motion: MotionSpec,
}

/// Sampling settings
#[derive(Debug, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Interior frames between the start and end steps
    #[serde(default = "default_frames")]
    pub frames: u16,
}

fn default_frames() -> u16 {
    5
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
        }
    }
}

impl TinctConfig {
    /// Load from a file, or from `tinct.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `tinct init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Sample configuration written by `tinct init`
    pub fn sample() -> Self {
        Self {
            preview: PreviewConfig::default(),
            motion: MotionSpec::BackgroundGradient {
                start: tinct_motion::GradientInput::Css(
                    "linear-gradient(90deg, #000000 0%, #ffffff 100%)".to_string(),
                ),
                end: tinct_motion::GradientInput::Css(
                    "linear-gradient(270deg, #ffffff 0%, #000000 100%)".to_string(),
                ),
            },
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
