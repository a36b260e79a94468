//! semislip System Calls
//!
//! This crate provides the semihosting gateway and the I/O paths built on it.
//!
//! # Architecture
//!
//! - **Types**: Operation codes, argument blocks and result-code conversion
//! - **Gateway**: The trap that hands a request to the debug host
//! - **IO**: Output path, buffered input path and unbuffered console input
//!
//! # Usage
//!
//! ```rust
//! use semislip_syscalls::{completed_bytes, OutputPath, TrapGateway};
//!
//! let out = OutputPath::new(TrapGateway::new());
//! let _written = out.write(1, b"hello");
//!
//! // The host reports bytes *not* transferred.
//! assert_eq!(completed_bytes(10, 2), 8);
//! ```

#![no_std]

pub mod logging;
pub mod gateway;
pub mod io;
pub mod types;

pub use gateway::{HostGateway, TrapGateway};
pub use io::{CharInput, InputPath, OutputPath, StagingBuffer, StagingState};
pub use types::{completed_bytes, ArgBlock, ResultCode, SemihostOp, SyscallRequest, READC_NONE};
