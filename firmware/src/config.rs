//! Build-time configuration
//!
//! Everything here is fixed at compile time; cargo features pick between the
//! supported variants.

use log::LevelFilter;
use semislip_api::{Error, Result};
use static_assertions::const_assert;

/// Core clock feeding SysTick.
pub const F_CPU: u32 = 48_000_000;

/// Tick interrupt rate: one tick per millisecond.
pub const TICK_HZ: u32 = 1000;

/// Largest frame the link layer decodes.
pub const FRAME_MTU: usize = 1500;

/// Input staging capacity. Equal to the MTU so a frame costs one host read.
pub const STAGING_CAPACITY: usize = FRAME_MTU;

/// Threshold for the gated cadence.
pub const PERIODIC_INTERVAL_MS: u32 = 100;

/// Maximum level emitted by the host logger.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

const_assert!(STAGING_CAPACITY > 0);
const_assert!(TICK_HZ <= F_CPU);
const_assert!(PERIODIC_INTERVAL_MS > 0);

/// When the scheduler runs the per-connection periodic phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Every loop iteration.
    EveryIteration,
    /// Only once at least `interval_ms` has elapsed since the last run.
    Gated { interval_ms: u32 },
}

impl Cadence {
    /// Cadence selected by the `periodic-gated` feature.
    pub const fn from_build() -> Self {
        if cfg!(feature = "periodic-gated") {
            Cadence::Gated { interval_ms: PERIODIC_INTERVAL_MS }
        } else {
            Cadence::EveryIteration
        }
    }
}

/// Firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareConfig {
    pub cadence: Cadence,
}

impl FirmwareConfig {
    pub const fn from_build() -> Self {
        Self { cadence: Cadence::from_build() }
    }

    pub fn validate(&self) -> Result<()> {
        match self.cadence {
            Cadence::Gated { interval_ms: 0 } => {
                Err(Error::ConfigError("gated cadence needs a non-zero interval"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Convert milliseconds to ticks at `TICK_HZ`.
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ((ms as u64 * TICK_HZ as u64) / 1000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_is_valid() {
        assert!(FirmwareConfig::from_build().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = FirmwareConfig { cadence: Cadence::Gated { interval_ms: 0 } };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_millisecond_ticks() {
        assert_eq!(ms_to_ticks(PERIODIC_INTERVAL_MS), 100);
    }
}
