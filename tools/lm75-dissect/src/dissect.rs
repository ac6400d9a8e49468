//! Access dissection and output.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::Colorize;
use lm75_hla::tracing::prelude::*;
use lm75_hla::{I2cEvent, RegisterAccess, TransactionDecoder};
use std::io::Write;

/// Drives a [`TransactionDecoder`] over a capture and reports its output.
pub struct Dissector {
    config: Config,
    decoder: TransactionDecoder,
    events: usize,
    accesses: usize,
}

impl Dissector {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            decoder: TransactionDecoder::new(),
            events: 0,
            accesses: 0,
        }
    }

    /// Feed one event, returning any access that passes the device filter.
    pub fn process(&mut self, event: &I2cEvent) -> Option<RegisterAccess> {
        self.events += 1;
        let access = self.decoder.decode(event)?;
        if let Some(device) = self.config.device {
            if access.device_address != device {
                trace!(address = access.device_address, "Filtered out.");
                return None;
            }
        }
        self.accesses += 1;
        Some(access)
    }

    pub fn write(&self, out: &mut impl Write, access: &RegisterAccess) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => writeln!(out, "{}", format_text(access))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, access)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Process a whole capture, writing each access as it completes.
    pub fn run(&mut self, events: &[I2cEvent], out: &mut impl Write) -> Result<()> {
        for event in events {
            if let Some(access) = self.process(event) {
                self.write(out, &access)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Accesses reported and events seen so far.
    pub fn summary(&self) -> (usize, usize) {
        (self.accesses, self.events)
    }
}

/// Format an access as a timestamped line.
pub fn format_text(access: &RegisterAccess) -> String {
    let line = access.to_string();
    let line = if access.kind.is_read() {
        line.green()
    } else {
        line.yellow()
    };
    let line = if access.kind.is_temperature() {
        line.bold()
    } else {
        line
    };
    format!(
        "{:>12.6}  {:>12.6}  {}",
        access.start_time, access.end_time, line
    )
}
