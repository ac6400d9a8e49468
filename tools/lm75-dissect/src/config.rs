//! Configuration for lm75-dissect.
//!
//! Settings come from an optional JSON file; command-line flags override
//! whatever the file provides.

use crate::error::{Error, Result};
use clap::ValueEnum;
use lm75_hla::register;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How decoded accesses are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per access
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,

    /// Only report accesses to this 7-bit address
    pub device: Option<u8>,

    /// Colorize text output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            device: None,
            color: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.device {
            Some(address) if !register::is_lm75_address(address) => Err(Error::Config(format!(
                "device 0x{:02X} is outside the LM75 range 0x48-0x4F",
                address
            ))),
            _ => Ok(()),
        }
    }
}
