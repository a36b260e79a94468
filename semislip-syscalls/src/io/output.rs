//! Output path
//!
//! Stateless forwarding of byte spans to one of the host output streams.

use semislip_api::Channel;

use crate::gateway::HostGateway;
use crate::types::{completed_bytes, SyscallRequest};

/// Writes byte spans to the host through a gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputPath<G> {
    gateway: G,
}

impl<G> OutputPath<G> {
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<G: HostGateway> OutputPath<G> {
    /// Write `bytes` to the channel with raw identifier `channel`.
    ///
    /// Returns the number of bytes the host accepted. Identifiers other than
    /// stdout and stderr yield 0 without a host call or any other side
    /// effect; the return value is the only report. A short count is passed
    /// through unchanged; resending the tail is up to the caller.
    pub fn write(&self, channel: u32, bytes: &[u8]) -> usize {
        match Channel::try_from(channel) {
            Ok(channel) if channel.is_output() => self.write_to(channel, bytes),
            _ => 0,
        }
    }

    /// Typed variant of [`OutputPath::write`].
    pub fn write_to(&self, channel: Channel, bytes: &[u8]) -> usize {
        if !channel.is_output() || bytes.is_empty() {
            return 0;
        }
        // One call for the whole span, no chunking and no retry.
        let remaining = self.gateway.call(SyscallRequest::Write { channel, bytes });
        completed_bytes(bytes.len(), remaining)
    }

    /// Write a single character.
    pub fn put_char(&self, channel: u32, byte: u8) -> usize {
        self.write(channel, core::slice::from_ref(&byte))
    }
}
