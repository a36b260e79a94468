//! Host stream identifiers

use crate::error::{Error, Result};

/// Logical I/O stream recognized by the host calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channel {
    /// Host input stream
    Stdin = 0,
    /// Primary output stream
    Stdout = 1,
    /// Diagnostic output stream
    Stderr = 2,
}

impl Channel {
    /// Raw identifier passed in the argument block.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Whether bytes may be written to this channel.
    pub const fn is_output(self) -> bool {
        matches!(self, Channel::Stdout | Channel::Stderr)
    }
}

impl TryFrom<u32> for Channel {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        match id {
            0 => Ok(Channel::Stdin),
            1 => Ok(Channel::Stdout),
            2 => Ok(Channel::Stderr),
            other => Err(Error::UnsupportedChannel(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        for channel in [Channel::Stdin, Channel::Stdout, Channel::Stderr] {
            assert_eq!(Channel::try_from(channel.id()), Ok(channel));
        }
    }

    #[test]
    fn test_output_channels() {
        assert!(!Channel::Stdin.is_output());
        assert!(Channel::Stdout.is_output());
        assert!(Channel::Stderr.is_output());
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Channel::try_from(3), Err(Error::UnsupportedChannel(3)));
    }
}
