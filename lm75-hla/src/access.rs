//! Decoded register accesses.

use serde::{Serialize, Serializer};
use std::fmt;
use strum::{Display, EnumIter};

/// Kind of a completed register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    ReadRegister,
    ReadRegisterTemp,
    WriteRegister,
    WriteRegisterTemp,
}

impl AccessKind {
    pub fn new(is_read: bool, is_temperature: bool) -> Self {
        match (is_read, is_temperature) {
            (true, false) => AccessKind::ReadRegister,
            (true, true) => AccessKind::ReadRegisterTemp,
            (false, false) => AccessKind::WriteRegister,
            (false, true) => AccessKind::WriteRegisterTemp,
        }
    }

    pub fn is_read(self) -> bool {
        matches!(self, AccessKind::ReadRegister | AccessKind::ReadRegisterTemp)
    }

    pub fn is_temperature(self) -> bool {
        matches!(
            self,
            AccessKind::ReadRegisterTemp | AccessKind::WriteRegisterTemp
        )
    }

    /// Display template for result renderers.
    ///
    /// Placeholders are `{device_address}`, `{register_name}` and `{value}`.
    pub fn template(self) -> &'static str {
        match self {
            AccessKind::ReadRegister => "{device_address} Read {register_name}={value}",
            AccessKind::ReadRegisterTemp => "{device_address} Read {register_name} {value}°C",
            AccessKind::WriteRegister => "{device_address} Write {register_name}={value}",
            AccessKind::WriteRegisterTemp => "{device_address} Write {register_name} {value}°C",
        }
    }
}

/// Register value as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegisterValue {
    Raw(u16),
    Celsius(f64),
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterValue::Raw(raw) => write!(f, "0x{:X}", raw),
            RegisterValue::Celsius(celsius) => write!(f, "{:10.1}", celsius),
        }
    }
}

// Serialized as the rendered text so JSON output matches the display form.
impl Serialize for RegisterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One completed LM75 register access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterAccess {
    pub kind: AccessKind,
    /// Start of the frame, including any register-select phase before a
    /// repeated start
    pub start_time: f64,
    /// End of the closing STOP
    pub end_time: f64,
    pub device_address: u8,
    pub register: u8,
    pub register_name: String,
    pub raw_value: u16,
    pub value: RegisterValue,
}

impl RegisterAccess {
    /// Rendered value: `{:10.1}` for temperatures, `0x..` hex otherwise.
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

impl fmt::Display for RegisterAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.kind.is_read() { "Read" } else { "Write" };
        if self.kind.is_temperature() {
            write!(
                f,
                "{} {} {} {}°C",
                self.device_address, direction, self.register_name, self.value
            )
        } else {
            write!(
                f,
                "{} {} {}={}",
                self.device_address, direction, self.register_name, self.value
            )
        }
    }
}
