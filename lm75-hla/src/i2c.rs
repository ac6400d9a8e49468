//! I2C primitive events.

use serde::{Deserialize, Serialize};

/// One I2C bus primitive, as pre-decoded by a byte-level analyzer.
///
/// Times are in seconds from the start of the capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum I2cEvent {
    /// START or repeated START condition
    Start { time: f64 },
    /// 7-bit address plus R/W bit
    Address { time: f64, address: u8, is_read: bool },
    /// One data byte
    Data { time: f64, byte: u8 },
    /// STOP condition; `time` is the end of the stop frame
    Stop { time: f64 },
    /// Malformed primitive flagged by the upstream analyzer
    Error,
}

impl I2cEvent {
    /// Timestamp of the event, if it carries one.
    pub fn time(&self) -> Option<f64> {
        match *self {
            I2cEvent::Start { time }
            | I2cEvent::Address { time, .. }
            | I2cEvent::Data { time, .. }
            | I2cEvent::Stop { time } => Some(time),
            I2cEvent::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_has_no_time() {
        assert_eq!(I2cEvent::Error.time(), None);
        assert_eq!(I2cEvent::Stop { time: 2.5 }.time(), Some(2.5));
    }

    #[test]
    fn test_json_shape() {
        let event = I2cEvent::Address {
            time: 1.0,
            address: 0x48,
            is_read: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"address","time":1.0,"address":72,"is_read":true}"#
        );
        let back: I2cEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
