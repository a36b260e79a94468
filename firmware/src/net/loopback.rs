//! Loopback protocol engine
//!
//! Echoes every inbound frame back out and owns no connections.

use semislip_api::ProtocolEngine;

#[derive(Debug, Default)]
pub struct LoopbackEngine {
    echoed: u32,
}

impl LoopbackEngine {
    pub const fn new() -> Self {
        Self { echoed: 0 }
    }

    /// Frames echoed since `init`.
    pub fn echoed(&self) -> u32 {
        self.echoed
    }
}

impl ProtocolEngine for LoopbackEngine {
    fn init(&mut self) {
        self.echoed = 0;
        log::info!("loopback: echoing inbound frames");
    }

    fn connection_count(&self) -> usize {
        0
    }

    fn input(&mut self, _buf: &mut [u8], len: usize) -> usize {
        self.echoed = self.echoed.wrapping_add(1);
        len
    }

    fn periodic(&mut self, _conn: usize, _buf: &mut [u8]) -> usize {
        0
    }
}
