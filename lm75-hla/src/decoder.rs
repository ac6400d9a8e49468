//! LM75 transaction decoding.
//!
//! An LM75 write carries the register pointer in its first data byte,
//! followed by the value (MSB first). A read returns the value of whatever
//! register the pointer last selected, so a typical register read is a
//! pointer write, a repeated START, and a read phase:
//!
//! ```text
//! START  W@0x48  0x00  START  R@0x48  0x19  0x00  STOP
//! ```
//!
//! The decoder tracks the byte count across the repeated START so the whole
//! frame yields a single [`RegisterAccess`].

use crate::access::{AccessKind, RegisterAccess, RegisterValue};
use crate::i2c::I2cEvent;
use crate::register::{self, ValueLength};
use crate::temperature;
use crate::tracing::prelude::*;

/// Accumulator for the transaction in progress.
#[derive(Debug, Clone)]
struct DecoderState {
    /// Data bytes consumed in the current access, register pointer included
    byte_position: usize,
    transaction_start_time: f64,
    /// Start of the frame; survives a repeated START mid-access
    frame_start_time: f64,
    is_read: bool,
    targets_this_device: bool,
    device_address: u8,
    register_address: u8,
    register_value_length: ValueLength,
    register_value: u16,
}

impl Default for DecoderState {
    fn default() -> Self {
        Self {
            byte_position: 0,
            transaction_start_time: 0.0,
            frame_start_time: 0.0,
            is_read: false,
            targets_this_device: false,
            device_address: 0,
            register_address: 0,
            register_value_length: ValueLength::Two,
            register_value: 0,
        }
    }
}

/// Folds I2C primitives into LM75 register accesses.
///
/// Each bus trace needs its own decoder; state carries across calls.
#[derive(Debug, Clone, Default)]
pub struct TransactionDecoder {
    state: DecoderState,
}

impl TransactionDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.state = DecoderState::default();
    }

    /// Process one primitive, returning an access when a STOP closes one.
    pub fn decode(&mut self, event: &I2cEvent) -> Option<RegisterAccess> {
        trace!(?event, "decode");
        let state = &mut self.state;

        match *event {
            // Already reported upstream
            I2cEvent::Error => None,
            I2cEvent::Start { time } => {
                state.transaction_start_time = time;
                if state.byte_position == 0 {
                    state.frame_start_time = time;
                }
                None
            }
            I2cEvent::Address {
                address, is_read, ..
            } => {
                if register::is_lm75_address(address) {
                    state.device_address = address;
                    state.targets_this_device = true;
                    state.is_read = is_read;
                } else {
                    state.targets_this_device = false;
                }
                None
            }
            I2cEvent::Data { byte, .. } => {
                if state.targets_this_device {
                    state.accept_byte(byte);
                }
                None
            }
            I2cEvent::Stop { time } => {
                if !state.targets_this_device {
                    return None;
                }
                let complete = state.byte_position == state.register_value_length.bytes() + 1;
                let frame_start_time = state.frame_start_time;
                state.byte_position = 0;
                state.frame_start_time = state.transaction_start_time;

                if complete {
                    Some(state.build_access(frame_start_time, time))
                } else {
                    debug!(
                        device = state.device_address,
                        register = state.register_address,
                        start = frame_start_time,
                        "Discarding incomplete access."
                    );
                    None
                }
            }
        }
    }

    /// Decode a whole trace.
    pub fn decode_all<'a, I>(&mut self, events: I) -> Vec<RegisterAccess>
    where
        I: IntoIterator<Item = &'a I2cEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.decode(event))
            .collect()
    }
}

impl DecoderState {
    fn accept_byte(&mut self, byte: u8) {
        if !self.is_read && self.byte_position == 0 {
            self.register_address = byte;
            self.register_value_length = register::value_length(byte);
        } else if self.byte_position == 1 {
            self.register_value = match self.register_value_length {
                ValueLength::One => u16::from(byte),
                ValueLength::Two => u16::from(byte) << 8,
            };
        } else {
            // LSB, or a read phase with no pointer write; the latter is
            // overwritten by the next byte or discarded at STOP.
            self.register_value = self.register_value.wrapping_add(u16::from(byte));
        }
        self.byte_position += 1;
    }

    fn build_access(&self, start_time: f64, end_time: f64) -> RegisterAccess {
        let is_temperature = register::is_temperature(self.register_address);
        let value = if is_temperature {
            RegisterValue::Celsius(temperature::decode_celsius(self.register_value))
        } else {
            RegisterValue::Raw(self.register_value)
        };

        RegisterAccess {
            kind: AccessKind::new(self.is_read, is_temperature),
            start_time,
            end_time,
            device_address: self.device_address,
            register: self.register_address,
            register_name: register::register_name(self.register_address),
            raw_value: self.register_value,
            value,
        }
    }
}
