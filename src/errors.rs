use log::error;
use snafu::Snafu;

pub use crate::errors::Error::*;
use crate::io::PinMode;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Configuration error: {source}.
    ConfigError { source: serde_json::Error },
    /// Hardware error: {source}.
    HardwareError { source: HardwareError },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        error!("Configuration rejected: {:?}", error);
        Self::ConfigError { source: error }
    }
}

impl From<HardwareError> for Error {
    fn from(value: HardwareError) -> Self {
        Self::HardwareError { source: value }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum HardwareError {
    /// Unknown pin {pin}
    UnknownPin { pin: u8 },
    /// Pin ({pin}) not compatible with mode ({mode}) - {context}
    IncompatibleMode {
        pin: u8,
        mode: PinMode,
        context: &'static str,
    },
    /// {info}
    IoException { info: String },
}
