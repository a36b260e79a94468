//! Unbuffered console input
//!
//! One READC per poll. Cheaper in memory than the buffered path but costs a
//! host round-trip for every byte.

use crate::gateway::HostGateway;
use crate::types::SyscallRequest;

/// Single-character reader over the host console.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharInput<G> {
    gateway: G,
}

impl<G> CharInput<G> {
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: HostGateway> CharInput<G> {
    /// Read one character, or `None` if the host reported none available.
    pub fn poll(&mut self) -> Option<u8> {
        let code = self.gateway.call(SyscallRequest::ReadChar);
        u8::try_from(code).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultCode, READC_NONE};
    use core::cell::Cell;

    struct Console {
        next: Cell<ResultCode>,
    }

    impl HostGateway for Console {
        fn call(&self, request: SyscallRequest<'_>) -> ResultCode {
            assert!(matches!(request, SyscallRequest::ReadChar));
            self.next.replace(READC_NONE)
        }
    }

    #[test]
    fn test_sentinel_means_nothing() {
        let mut input = CharInput::new(Console { next: Cell::new(b'k' as ResultCode) });
        assert_eq!(input.poll(), Some(b'k'));
        assert_eq!(input.poll(), None);
    }
}
