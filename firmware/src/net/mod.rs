//! Bring-up link and engine
//!
//! Stand-ins for the external SLIP codec and IP stack, enough to exercise
//! the host paths and the scheduler end to end.

pub mod loopback;
pub mod passthrough;

pub use loopback::LoopbackEngine;
pub use passthrough::PassthroughLink;
