//! Millisecond tick source
//!
//! A free-running counter bumped by the SysTick interrupt and read by
//! everything else. The interrupt is the only writer, so a plain atomic
//! load/store pair is enough (and is all Armv6-M offers).
//!
//! Elapsed time is always `now.wrapping_sub(since)` on values sampled once
//! into a local; comparing raw tick values breaks at wraparound.

use core::sync::atomic::{AtomicU32, Ordering};

use semislip_api::{Tick, TickSource};

/// Single-writer tick counter.
#[derive(Debug)]
pub struct TickCounter {
    ticks: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self { ticks: AtomicU32::new(0) }
    }

    /// Advance by one tick, wrapping on overflow. Call only from the tick
    /// interrupt.
    pub fn advance(&self) {
        let next = self.ticks.load(Ordering::Relaxed).wrapping_add(1);
        self.ticks.store(next, Ordering::Relaxed);
    }

    pub fn now(&self) -> Tick {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Overwrite the counter.
    pub fn set(&self, value: Tick) {
        self.ticks.store(value, Ordering::Relaxed);
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for TickCounter {
    fn now(&self) -> Tick {
        TickCounter::now(self)
    }
}

/// Global tick counter
pub static TICKS: TickCounter = TickCounter::new();

/// Tick interrupt body.
pub fn on_systick() {
    TICKS.advance();
}

/// Current tick count since boot.
pub fn now() -> Tick {
    TICKS.now()
}

/// Ticks from `since` to `now`, correct across wraparound.
#[inline]
pub const fn elapsed(now: Tick, since: Tick) -> Tick {
    now.wrapping_sub(since)
}

/// Fires at most once per `period` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Tick,
    last: Tick,
}

impl Interval {
    pub const fn new(period: Tick, start: Tick) -> Self {
        Self { period, last: start }
    }

    pub fn period(&self) -> Tick {
        self.period
    }

    /// Restart the interval at `now`.
    pub fn reset(&mut self, now: Tick) {
        self.last = now;
    }

    /// Check a tick sampled by the caller; on expiry the interval restarts at
    /// `now`.
    pub fn expired(&mut self, now: Tick) -> bool {
        if elapsed(now, self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_wraps() {
        let counter = TickCounter::new();
        counter.set(u32::MAX - 2);
        let last = counter.now();
        counter.advance();
        counter.advance();
        assert_eq!(counter.now(), u32::MAX);
        counter.advance();
        assert_eq!(counter.now(), 0);
        counter.advance();
        assert_eq!(counter.now(), 1);
        assert_eq!(elapsed(counter.now(), last), 4);
    }

    #[test]
    fn test_interval_across_wrap() {
        let mut interval = Interval::new(100, u32::MAX - 49);
        assert!(!interval.expired(u32::MAX));
        assert!(!interval.expired(49));
        assert!(interval.expired(50));
        assert!(!interval.expired(51));
        assert!(interval.expired(150));
    }

    #[test]
    fn test_global_counter_advances() {
        let before = now();
        on_systick();
        assert_eq!(elapsed(now(), before), 1);
    }
}
