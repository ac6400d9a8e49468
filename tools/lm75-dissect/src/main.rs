//! Decode LM75 register accesses from a logic analyzer I2C export.
//!
//! Usage:
//!   lm75-dissect capture.csv
//!   lm75-dissect --format json --device 0x49 capture.csv
//!   lm75-dissect --config dissect.json capture.csv

mod capture;
mod config;
mod dissect;
mod error;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Config, OutputFormat};
use dissect::Dissector;
use lm75_hla::tracing::{self, prelude::*};

#[derive(Parser)]
#[command(name = "lm75-dissect", version, about)]
struct Cli {
    /// Saleae Logic 2 I2C analyzer export (CSV)
    capture: PathBuf,

    /// Output format (default: text)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Only report accesses to this 7-bit address (e.g. 0x48)
    #[arg(long, value_parser = parse_device)]
    device: Option<u8>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// JSON file providing defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_device(s: &str) -> std::result::Result<u8, String> {
    capture::parse_hex_byte(s).ok_or_else(|| format!("invalid address: {s}"))
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.device.is_some() {
            config.device = self.device;
        }
        if self.no_color {
            config.color = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing::init_stderr();
    let cli = Cli::parse();
    let config = cli.config()?;
    debug!(?config, "Configured.");

    if !config.color {
        colored::control::set_override(false);
    }

    let events = capture::open_capture(&cli.capture)
        .with_context(|| format!("failed to read capture {}", cli.capture.display()))?;
    info!("Read {} events from {}.", events.len(), cli.capture.display());

    let mut dissector = Dissector::new(config);
    let stdout = io::stdout();
    dissector.run(&events, &mut stdout.lock())?;

    let (accesses, events) = dissector.summary();
    info!("{} accesses decoded from {} events.", accesses, events);
    Ok(())
}
