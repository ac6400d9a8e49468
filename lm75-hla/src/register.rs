//! LM75 register catalog.
//!
//! The LM75 exposes a handful of registers behind a one-byte register
//! pointer. Configuration and ProductID hold one byte; everything else,
//! including registers this catalog does not know, is read as a big-endian
//! 16-bit word.

use strum::{Display, EnumIter, FromRepr};

/// Fixed family code of the LM75 address (bits 6-3 of the 7-bit address).
pub const ADDRESS_FAMILY: u8 = 0x48;

/// Mask selecting the family bits of a 7-bit address.
pub const ADDRESS_FAMILY_MASK: u8 = 0x78;

/// Known LM75 registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Register {
    Temperature = 0x00,
    Configuration = 0x01,
    Thyst = 0x02,
    Tos = 0x03,
    #[strum(serialize = "ProductID")]
    ProductId = 0x07,
}

impl Register {
    pub fn from_address(address: u8) -> Option<Self> {
        Self::from_repr(address)
    }

    pub fn address(self) -> u8 {
        self as u8
    }
}

/// Number of value bytes a register transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLength {
    One = 1,
    Two = 2,
}

impl ValueLength {
    pub fn bytes(self) -> usize {
        self as usize
    }
}

/// Whether a 7-bit I2C address belongs to an LM75 (0x48-0x4F).
pub fn is_lm75_address(address: u8) -> bool {
    address & ADDRESS_FAMILY_MASK == ADDRESS_FAMILY
}

/// Display name of a register, falling back to hex for unknown addresses.
pub fn register_name(address: u8) -> String {
    match Register::from_address(address) {
        Some(register) => register.to_string(),
        None => format!("0x{:02X}", address),
    }
}

/// Value length of the register at `address`.
pub fn value_length(address: u8) -> ValueLength {
    match Register::from_address(address) {
        Some(Register::Configuration | Register::ProductId) => ValueLength::One,
        _ => ValueLength::Two,
    }
}

/// Temperature, Thyst and Tos hold temperatures; everything else is raw.
pub fn is_temperature(address: u8) -> bool {
    matches!(
        Register::from_address(address),
        Some(Register::Temperature | Register::Thyst | Register::Tos)
    )
}
