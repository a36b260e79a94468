//! Architecture support
//!
//! SysTick register layout and reload computation are target independent;
//! the vector table, startup code and exception handlers only exist on
//! bare-metal Arm.

use bitflags::bitflags;
use semislip_api::{Error, Result};

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod cortex_m;

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub use cortex_m::{halt, init_systick};

/// Largest value the 24-bit SysTick reload register holds.
pub const SYST_RELOAD_MAX: u32 = 0x00FF_FFFF;

bitflags! {
    /// SysTick control and status register (SYST_CSR)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SysTickCtrl: u32 {
        /// Counter enabled
        const ENABLE = 1 << 0;
        /// Raise the SysTick exception on reaching zero
        const TICKINT = 1 << 1;
        /// Count the processor clock rather than the external reference
        const CLKSOURCE = 1 << 2;
        /// Counter reached zero since last read
        const COUNTFLAG = 1 << 16;
    }
}

/// Reload value for one SysTick interrupt every `1 / tick_hz` seconds.
pub fn systick_reload(f_cpu: u32, tick_hz: u32) -> Result<u32> {
    if tick_hz == 0 {
        return Err(Error::InvalidArgument("tick rate must be non-zero"));
    }
    let period = f_cpu / tick_hz;
    if period == 0 || period - 1 > SYST_RELOAD_MAX {
        return Err(Error::Hardware("tick period outside SysTick reload range"));
    }
    Ok(period - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{F_CPU, TICK_HZ};

    #[test]
    fn test_millisecond_reload() {
        assert_eq!(systick_reload(F_CPU, TICK_HZ), Ok(47_999));
        assert_eq!(systick_reload(8_000_000, 1000), Ok(7_999));
    }

    #[test]
    fn test_reload_out_of_range() {
        assert!(systick_reload(48_000_000, 1).is_err());
        assert!(systick_reload(500, 1000).is_err());
        assert!(systick_reload(48_000_000, 0).is_err());
    }

    #[test]
    fn test_ctrl_bits() {
        let ctrl = SysTickCtrl::ENABLE | SysTickCtrl::TICKINT | SysTickCtrl::CLKSOURCE;
        assert_eq!(ctrl.bits(), 0b111);
    }
}
