//! semislip API - Shared types and seams
//!
//! This crate provides the types and traits that connect the host I/O paths,
//! the external link layer, the external protocol engine and the scheduler
//! loop. It holds no state of its own.
//!
//! # Architecture
//!
//! - **Error**: Common error type for configuration and bring-up
//! - **Channel**: Logical host stream identifiers
//! - **Traits**: `ByteTransport`, `FrameLink`, `ProtocolEngine`, `TickSource`
//!
//! # Usage
//!
//! ```rust
//! use semislip_api::{Channel, Error};
//!
//! assert_eq!(Channel::try_from(1u32), Ok(Channel::Stdout));
//! assert_eq!(Channel::try_from(7u32), Err(Error::UnsupportedChannel(7)));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod channel;
pub mod error;
pub mod traits;

pub use crate::channel::Channel;
pub use crate::error::{Error, Result};
pub use crate::traits::{ByteTransport, FrameLink, ProtocolEngine, TickSource};

/// Tick counter value, one unit per fixed hardware interval.
pub type Tick = u32;
