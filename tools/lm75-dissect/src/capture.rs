//! Logic analyzer capture parsing.
//!
//! Reads the CSV export of the Saleae Logic 2 I2C analyzer:
//!
//! ```text
//! name,type,start_time,duration,ack,address,read,data
//! I2C,start,0.0010,1e-07,,,,
//! I2C,address,0.0011,9e-05,true,0x48,false,
//! I2C,data,0.0012,9e-05,true,,,0x01
//! I2C,stop,0.0013,1e-07,,,,
//! ```
//!
//! An optional `error` column marks frames the analyzer flagged.

use crate::error::Result;
use lm75_hla::tracing::prelude::*;
use lm75_hla::I2cEvent;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CaptureRow {
    #[serde(rename = "type")]
    frame_type: String,
    start_time: f64,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    read: Option<String>,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse a byte written as `0x48`, `0X48` or `48`.
pub fn parse_hex_byte(s: &str) -> Option<u8> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(digits, 16).ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl CaptureRow {
    fn to_event(&self) -> Option<I2cEvent> {
        if let Some(error) = non_empty(&self.error) {
            warn!(time = self.start_time, error, "Analyzer flagged frame.");
            return Some(I2cEvent::Error);
        }

        let time = self.start_time;
        match self.frame_type.trim() {
            "start" => Some(I2cEvent::Start { time }),
            "address" => {
                let address = non_empty(&self.address).and_then(parse_hex_byte);
                let is_read = non_empty(&self.read).and_then(parse_bool);
                match (address, is_read) {
                    (Some(address), Some(is_read)) => Some(I2cEvent::Address {
                        time,
                        address,
                        is_read,
                    }),
                    _ => {
                        warn!(time, address = ?self.address, "Unparsable address frame.");
                        Some(I2cEvent::Error)
                    }
                }
            }
            "data" => match non_empty(&self.data).and_then(parse_hex_byte) {
                Some(byte) => Some(I2cEvent::Data { time, byte }),
                None => {
                    warn!(time, data = ?self.data, "Unparsable data frame.");
                    Some(I2cEvent::Error)
                }
            },
            "stop" => Some(I2cEvent::Stop {
                time: time + self.duration.unwrap_or(0.0),
            }),
            other => {
                debug!(time, frame_type = other, "Skipping frame.");
                None
            }
        }
    }
}

/// Read I2C events from a CSV export.
pub fn read_capture<R: io::Read>(reader: R) -> Result<Vec<I2cEvent>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    for row in csv.deserialize() {
        let row: CaptureRow = row?;
        if let Some(event) = row.to_event() {
            events.push(event);
        }
    }
    Ok(events)
}

/// Read I2C events from a CSV export on disk.
pub fn open_capture(path: &Path) -> Result<Vec<I2cEvent>> {
    let file = File::open(path)?;
    read_capture(io::BufReader::new(file))
}
