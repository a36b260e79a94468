//! semislip firmware
//!
//! Bridges the debug host's semihosting console into a byte transport for a
//! framed network link and drives the link and protocol engine from a
//! cooperative polling loop.
//!
//! - **time**: millisecond tick source
//! - **logger**: `log` backend on the host stderr stream
//! - **transport**: host I/O paths as a `ByteTransport`
//! - **scheduler**: inbound and periodic phases of the main loop
//! - **net**: pass-through link and loopback engine for bring-up
//! - **sync**: statically allocated state handed to the main loop once
//! - **arch**: SysTick, vector table and fault trampoline

#![no_std]

pub mod arch;
pub mod config;
pub mod logger;
pub mod net;
pub mod scheduler;
pub mod sync;
pub mod time;
pub mod transport;

pub use config::{Cadence, FirmwareConfig};
pub use scheduler::{Iteration, Scheduler};
pub use transport::{CharTransport, SemihostTransport};
