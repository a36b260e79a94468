//! Unified logging support for semislip-syscalls
//!
//! The I/O paths run inside a firmware whose logger itself writes through
//! the gateway, so logging here is opt-in through the `log` feature and
//! compiles to nothing otherwise.

/// Unified trace-level logging
#[macro_export]
macro_rules! host_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "log"))]
        { let _ = ($($arg)*); }
    }
}
