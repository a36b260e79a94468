//! Error handling module for semislip
//!
//! The host I/O paths never fail: absence of data, short writes and unknown
//! channels are reported through return values. This type covers the
//! remaining fallible operations: configuration, logger installation and
//! hardware bring-up.

use core::fmt;

/// Common error type used throughout semislip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument
    InvalidArgument(&'static str),
    /// Configuration error
    ConfigError(&'static str),
    /// Channel identifier not recognized by the host calling convention
    UnsupportedChannel(u32),
    /// A global logger was already installed
    LoggerAlreadySet,
    /// Hardware bring-up failed
    Hardware(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Error::UnsupportedChannel(id) => write!(f, "Unsupported channel: {}", id),
            Error::LoggerAlreadySet => write!(f, "Logger already set"),
            Error::Hardware(msg) => write!(f, "Hardware error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(Error::UnsupportedChannel(9).to_string(), "Unsupported channel: 9");
        assert_eq!(
            Error::ConfigError("zero interval").to_string(),
            "Configuration error: zero interval"
        );
        assert_eq!(Error::LoggerAlreadySet.to_string(), "Logger already set");
    }
}
