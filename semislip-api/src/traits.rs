//! Seams between the I/O paths, the link layer, the protocol engine and the loop
//!
//! The link layer and the protocol engine are external collaborators; the
//! scheduler only ever sees them through these traits.

use crate::Tick;

/// Byte-oriented transport consumed by a framing layer.
pub trait ByteTransport {
    /// Return the next inbound byte, or `None` when nothing is available.
    ///
    /// Must never block waiting for data.
    fn poll_byte(&mut self) -> Option<u8>;

    /// Write a span of bytes, returning how many the host accepted.
    ///
    /// The transport owns the choice of output stream: the link always goes
    /// out on one channel (stdout for the semihosting transports), so callers
    /// do not pass one.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize;

    /// Write a single byte.
    fn put_byte(&mut self, byte: u8) {
        let _ = self.write_bytes(core::slice::from_ref(&byte));
    }
}

/// Frame-level link (for example a SLIP codec) sitting on a `ByteTransport`.
///
/// Implementations must tolerate the transport handing over a frame in
/// fragments across several polls.
pub trait FrameLink {
    /// Prepare the link for use.
    fn init(&mut self) {}

    /// Poll for a complete inbound frame.
    ///
    /// Returns the frame length written to `buf`, or 0 if no complete frame
    /// is available yet.
    fn poll(&mut self, buf: &mut [u8]) -> usize;

    /// Encode and transmit one outbound frame.
    fn send(&mut self, frame: &[u8]);
}

/// Network protocol engine driven by the scheduler loop.
///
/// The engine processes frames in place in a buffer owned by the loop. After
/// `input` or `periodic`, a non-zero return value means `buf[..len]` holds an
/// outbound frame that must be transmitted before the buffer is reused.
pub trait ProtocolEngine {
    /// Initialize the engine and any applications bound to it.
    fn init(&mut self);

    /// Fixed upper bound on connection slots.
    fn connection_count(&self) -> usize;

    /// Process an inbound frame of `len` bytes held in `buf`.
    fn input(&mut self, buf: &mut [u8], len: usize) -> usize;

    /// Service the periodic timer of connection slot `conn`.
    fn periodic(&mut self, conn: usize, buf: &mut [u8]) -> usize;
}

/// Read-only view of a free-running tick counter.
pub trait TickSource {
    /// Current tick value. Callers sample once and compute from the local copy.
    fn now(&self) -> Tick;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now(&self) -> Tick {
        (**self).now()
    }
}
