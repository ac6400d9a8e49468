//! Decode LM75 temperature sensor register accesses from I2C bus traces.
//!
//! The input is a stream of I2C primitives (start, address, data, stop) as
//! produced by a byte-level I2C analyzer. [`TransactionDecoder`] folds them
//! into [`RegisterAccess`] records, one per completed transaction addressed
//! to an LM75-family device (7-bit addresses 0x48-0x4F).

pub mod access;
pub mod decoder;
pub mod i2c;
pub mod register;
pub mod temperature;
pub mod tracing;

pub use access::{AccessKind, RegisterAccess, RegisterValue};
pub use decoder::TransactionDecoder;
pub use i2c::I2cEvent;
pub use register::{Register, ValueLength};
