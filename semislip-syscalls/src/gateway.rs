//! Syscall gateway
//!
//! The only point of contact with the debug host. A call is synchronous: the
//! core halts on the trap, the host services the request and resumes it with
//! the result in r0.

use crate::types::{ResultCode, SyscallRequest};

/// Issues one host-mediated operation and returns the raw result code.
///
/// Implementations perform no interpretation of the result; conversions live
/// with the paths that issue the request.
pub trait HostGateway {
    /// Execute a single blocking host operation.
    fn call(&self, request: SyscallRequest<'_>) -> ResultCode;
}

impl<G: HostGateway + ?Sized> HostGateway for &G {
    fn call(&self, request: SyscallRequest<'_>) -> ResultCode {
        (**self).call(request)
    }
}

/// Gateway that traps into the attached debugger with `BKPT 0xAB`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapGateway;

impl TrapGateway {
    pub const fn new() -> Self {
        Self
    }
}

impl HostGateway for TrapGateway {
    fn call(&self, mut request: SyscallRequest<'_>) -> ResultCode {
        let op = request.op().code();
        let block = request.arg_block();
        let arg = match &block {
            Some(block) => block as *const _ as usize,
            None => 0,
        };
        // SAFETY: `block` and the buffers it points at are borrowed from
        // `request` and outlive the trap; the host writes only within them.
        unsafe { imp::trap(op, arg) }
    }
}

#[cfg(target_arch = "arm")]
mod imp {
    use crate::types::ResultCode;

    #[inline(always)]
    pub unsafe fn trap(op: u32, arg: usize) -> ResultCode {
        let mut result = op;
        unsafe {
            core::arch::asm!(
                "bkpt #0xAB",
                inout("r0") result,
                inout("r1") arg => _,
                out("r2") _,
                options(nostack, preserves_flags)
            );
        }
        result as ResultCode
    }
}

#[cfg(not(target_arch = "arm"))]
mod imp {
    use crate::types::ResultCode;

    /// No debug host to trap into; report an error for every request.
    pub unsafe fn trap(_op: u32, _arg: usize) -> ResultCode {
        -1
    }
}

#[cfg(all(test, not(target_arch = "arm")))]
mod tests {
    use super::*;
    use semislip_api::Channel;

    #[test]
    fn test_off_target_trap_reports_error() {
        let gateway = TrapGateway::new();
        assert_eq!(gateway.call(SyscallRequest::ReadChar), -1);
        let mut buf = [0u8; 4];
        assert_eq!(gateway.call(SyscallRequest::Read { channel: Channel::Stdin, buf: &mut buf }), -1);
    }
}
