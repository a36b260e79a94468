//! Diagnostic pass-through link
//!
//! Treats whatever bytes the transport has available right now as one frame.
//! There is no delimiting, so a frame split across host reads arrives as
//! several fragments. Useful for bring-up against an echoing host; a real
//! deployment puts a SLIP codec here.

use semislip_api::{ByteTransport, FrameLink};

#[derive(Debug)]
pub struct PassthroughLink<T> {
    transport: T,
}

impl<T> PassthroughLink<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: ByteTransport> FrameLink for PassthroughLink<T> {
    fn poll(&mut self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        while len < buf.len() {
            match self.transport.poll_byte() {
                Some(byte) => {
                    buf[len] = byte;
                    len += 1;
                }
                None => break,
            }
        }
        len
    }

    fn send(&mut self, frame: &[u8]) {
        let mut sent = 0;
        while sent < frame.len() {
            let n = self.transport.write_bytes(&frame[sent..]);
            if n == 0 {
                log::warn!("link: dropped {} of {} bytes", frame.len() - sent, frame.len());
                break;
            }
            sent += n;
        }
    }
}
