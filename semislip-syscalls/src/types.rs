//! Semihosting ABI definitions
//!
//! Operation codes, request marshalling and result-code conventions. The
//! layout here is fixed by the debug host and must match it bit for bit.

use semislip_api::Channel;
use static_assertions::{assert_eq_size, const_assert_eq};

/// Signed word returned by the host in r0.
pub type ResultCode = i32;

/// READC result when the host has no character queued.
pub const READC_NONE: ResultCode = -1;

/// Semihosting operation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SemihostOp {
    /// Open a host file
    Open = 0x01,
    /// Close a host file
    Close = 0x02,
    /// Write one character
    WriteC = 0x03,
    /// Write a NUL-terminated string
    Write0 = 0x04,
    /// Write a buffer to a handle
    Write = 0x05,
    /// Read into a buffer from a handle
    Read = 0x06,
    /// Read one character from the console
    ReadC = 0x07,
    /// Test a result code for an error
    IsError = 0x08,
    /// Check whether a handle is interactive
    IsTty = 0x09,
    /// Seek within a host file
    Seek = 0x0A,
    /// Length of a host file
    Flen = 0x0C,
    /// Centiseconds since execution started
    Clock = 0x10,
    /// Seconds since the epoch
    Time = 0x11,
    /// Command line passed by the host
    GetCmdline = 0x15,
    /// Heap and stack layout
    HeapInfo = 0x16,
    /// Enter supervisor mode
    EnterSvc = 0x17,
    /// Report an exception to the host
    Exception = 0x18,
    /// Elapsed target ticks
    Elapsed = 0x30,
    /// Tick frequency of `Elapsed`
    TickFreq = 0x31,
}

impl SemihostOp {
    /// Value placed in r0 before the trap.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Argument block for READ and WRITE: `{handle, buffer address, length}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ArgBlock {
    pub words: [u32; 3],
}

assert_eq_size!(ArgBlock, [u32; 3]);
const_assert_eq!(core::mem::align_of::<ArgBlock>(), core::mem::align_of::<u32>());

/// One host-mediated operation, borrowed from the caller for the duration of
/// the call.
#[derive(Debug)]
pub enum SyscallRequest<'a> {
    /// Write `bytes` to an output channel
    Write { channel: Channel, bytes: &'a [u8] },
    /// Read up to `buf.len()` bytes from a channel
    Read { channel: Channel, buf: &'a mut [u8] },
    /// Read one character from the host console
    ReadChar,
}

impl SyscallRequest<'_> {
    /// Operation code for this request.
    pub fn op(&self) -> SemihostOp {
        match self {
            SyscallRequest::Write { .. } => SemihostOp::Write,
            SyscallRequest::Read { .. } => SemihostOp::Read,
            SyscallRequest::ReadChar => SemihostOp::ReadC,
        }
    }

    /// Number of bytes the request asks the host to move.
    pub fn requested(&self) -> usize {
        match self {
            SyscallRequest::Write { bytes, .. } => bytes.len(),
            SyscallRequest::Read { buf, .. } => buf.len(),
            SyscallRequest::ReadChar => 0,
        }
    }

    /// Marshal the argument block. `ReadChar` takes no block (r1 = 0).
    ///
    /// Addresses are truncated to 32 bits, which is exact on the Arm targets
    /// that issue the trap.
    pub fn arg_block(&mut self) -> Option<ArgBlock> {
        match self {
            SyscallRequest::Write { channel, bytes } => Some(ArgBlock {
                words: [channel.id(), bytes.as_ptr() as usize as u32, bytes.len() as u32],
            }),
            SyscallRequest::Read { channel, buf } => Some(ArgBlock {
                words: [channel.id(), buf.as_mut_ptr() as usize as u32, buf.len() as u32],
            }),
            SyscallRequest::ReadChar => None,
        }
    }
}

/// Convert a READ/WRITE result (bytes *not* transferred) into the number of
/// bytes that were transferred.
///
/// `0` means everything requested was moved. A negative code or one larger
/// than the request is a host error and counts as nothing moved.
#[inline]
pub const fn completed_bytes(requested: usize, remaining: ResultCode) -> usize {
    if remaining < 0 {
        return 0;
    }
    let remaining = remaining as usize;
    if remaining > requested {
        0
    } else {
        requested - remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_codes_match_host_abi() {
        assert_eq!(SemihostOp::WriteC.code(), 0x03);
        assert_eq!(SemihostOp::Write.code(), 0x05);
        assert_eq!(SemihostOp::Read.code(), 0x06);
        assert_eq!(SemihostOp::ReadC.code(), 0x07);
        assert_eq!(SemihostOp::Flen.code(), 0x0C);
        assert_eq!(SemihostOp::Elapsed.code(), 0x30);
        assert_eq!(SemihostOp::TickFreq.code(), 0x31);
    }

    #[test]
    fn test_full_transfer() {
        assert_eq!(completed_bytes(64, 0), 64);
    }

    #[test]
    fn test_short_transfer_direction() {
        // 2 of 10 not written means 8 written, not 2.
        assert_eq!(completed_bytes(10, 2), 8);
    }

    #[test]
    fn test_nothing_transferred() {
        assert_eq!(completed_bytes(16, 16), 0);
    }

    #[test]
    fn test_host_error_counts_as_nothing() {
        assert_eq!(completed_bytes(16, -1), 0);
        assert_eq!(completed_bytes(16, 17), 0);
    }

    #[test]
    fn test_write_arg_block_layout() {
        let data = [1u8, 2, 3, 4, 5];
        let mut request = SyscallRequest::Write { channel: Channel::Stderr, bytes: &data };
        let block = request.arg_block();
        assert_eq!(request.op(), SemihostOp::Write);
        let block = block.unwrap();
        assert_eq!(block.words[0], 2);
        assert_eq!(block.words[1], data.as_ptr() as usize as u32);
        assert_eq!(block.words[2], 5);
    }

    #[test]
    fn test_read_char_has_no_block() {
        let mut request = SyscallRequest::ReadChar;
        assert_eq!(request.op(), SemihostOp::ReadC);
        assert_eq!(request.requested(), 0);
        assert!(request.arg_block().is_none());
    }
}
