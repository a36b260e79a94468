//! Byte transport handed to the link layer
//!
//! Inbound bytes come from the host input stream, outbound bytes go to the
//! host stdout stream.

use semislip_api::{ByteTransport, Channel};
use semislip_syscalls::{CharInput, HostGateway, InputPath, OutputPath};

/// Transport over the buffered input path.
#[derive(Debug)]
pub struct SemihostTransport<G, const N: usize> {
    input: InputPath<G, N>,
    output: OutputPath<G>,
}

impl<G: Copy, const N: usize> SemihostTransport<G, N> {
    pub const fn new(gateway: G) -> Self {
        Self { input: InputPath::new(gateway), output: OutputPath::new(gateway) }
    }
}

impl<G, const N: usize> SemihostTransport<G, N> {
    pub fn input(&self) -> &InputPath<G, N> {
        &self.input
    }
}

impl<G: HostGateway, const N: usize> ByteTransport for SemihostTransport<G, N> {
    fn poll_byte(&mut self) -> Option<u8> {
        self.input.poll()
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.output.write_to(Channel::Stdout, bytes)
    }
}

/// Transport over unbuffered READC polling.
#[derive(Debug)]
pub struct CharTransport<G> {
    input: CharInput<G>,
    output: OutputPath<G>,
}

impl<G: Copy> CharTransport<G> {
    pub const fn new(gateway: G) -> Self {
        Self { input: CharInput::new(gateway), output: OutputPath::new(gateway) }
    }
}

impl<G: HostGateway> ByteTransport for CharTransport<G> {
    fn poll_byte(&mut self) -> Option<u8> {
        self.input.poll()
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.output.write_to(Channel::Stdout, bytes)
    }
}
