//! Buffered input path
//!
//! Turns the host's block reads into the byte-at-a-time polling interface a
//! framing layer expects. One READ refills the staging buffer when it runs
//! dry; bytes are then handed out in arrival order until it is empty again.
//!
//! The staging capacity is the only tunable. Sizing it to the largest frame
//! the framing layer decodes means one host round-trip per frame; anything
//! smaller delivers frames in fragments across polls, which the framing
//! layer must tolerate.

use semislip_api::Channel;

use crate::gateway::HostGateway;
use crate::types::{completed_bytes, SyscallRequest};

/// Logical state of the staging buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingState {
    /// Nothing staged; the next poll refills.
    Empty,
    /// Bytes from the last refill are still being handed out.
    Draining,
}

/// Fixed-capacity staging area with `consumed <= filled <= N`.
#[derive(Debug)]
pub struct StagingBuffer<const N: usize> {
    bytes: [u8; N],
    filled: usize,
    consumed: usize,
}

impl<const N: usize> StagingBuffer<N> {
    pub const fn new() -> Self {
        Self { bytes: [0; N], filled: 0, consumed: 0 }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn state(&self) -> StagingState {
        if self.consumed == self.filled {
            StagingState::Empty
        } else {
            StagingState::Draining
        }
    }

    /// Bytes staged but not yet handed out.
    pub fn remaining(&self) -> usize {
        self.filled - self.consumed
    }

    /// `(consumed, filled)` cursor pair.
    pub fn cursors(&self) -> (usize, usize) {
        (self.consumed, self.filled)
    }

    fn reset(&mut self) {
        self.filled = 0;
        self.consumed = 0;
    }

    fn take(&mut self) -> Option<u8> {
        if self.consumed == self.filled {
            return None;
        }
        let byte = self.bytes[self.consumed];
        self.consumed += 1;
        if self.consumed == self.filled {
            self.reset();
        }
        Some(byte)
    }
}

impl<const N: usize> Default for StagingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffered single-byte reader over the host input channel.
#[derive(Debug)]
pub struct InputPath<G, const N: usize> {
    gateway: G,
    staging: StagingBuffer<N>,
}

impl<G, const N: usize> InputPath<G, N> {
    pub const fn new(gateway: G) -> Self {
        const { assert!(N > 0, "staging capacity must be non-zero") };
        Self { gateway, staging: StagingBuffer::new() }
    }

    /// Bytes already fetched from the host and waiting to be polled.
    pub fn buffered(&self) -> usize {
        self.staging.remaining()
    }

    pub fn staging(&self) -> &StagingBuffer<N> {
        &self.staging
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<G: HostGateway, const N: usize> InputPath<G, N> {
    /// Return the next byte, refilling once from the host if the staging
    /// buffer is empty. `None` means the host had nothing queued; the caller
    /// simply polls again later.
    pub fn poll(&mut self) -> Option<u8> {
        if self.staging.state() == StagingState::Empty && self.refill() == 0 {
            return None;
        }
        self.staging.take()
    }

    /// Issue exactly one READ for the full capacity and stage what arrived.
    fn refill(&mut self) -> usize {
        self.staging.reset();
        let remaining = self.gateway.call(SyscallRequest::Read {
            channel: Channel::Stdin,
            buf: &mut self.staging.bytes,
        });
        let received = completed_bytes(N, remaining);
        self.staging.filled = received;
        if received > 0 {
            crate::host_trace!("staged {} of {} bytes", received, N);
        }
        received
    }
}
