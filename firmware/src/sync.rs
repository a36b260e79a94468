//! Statically allocated state handed out once
//!
//! Large firmware state (the input staging buffer, the frame buffer) lives in
//! a `static` built by `const fn` constructors, so it is laid out by the
//! linker rather than moved through the stack. `TakeOnce` lends it to the
//! main loop exactly once.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

/// A value in static storage that can be borrowed mutably once.
pub struct TakeOnce<T> {
    taken: AtomicBool,
    value: UnsafeCell<T>,
}

// SAFETY: the value is reachable through at most one `&mut` for the life of
// the program, so moving that access to another context only needs `Send`.
unsafe impl<T: Send> Sync for TakeOnce<T> {}

impl<T> TakeOnce<T> {
    pub const fn new(value: T) -> Self {
        Self { taken: AtomicBool::new(false), value: UnsafeCell::new(value) }
    }

    /// Borrow the value for the rest of the program. Only the first call
    /// succeeds.
    ///
    /// Armv6-M has no compare-and-swap, so the flag is a load/store pair:
    /// call from thread mode only, never from an interrupt handler.
    pub fn take(&'static self) -> Option<&'static mut T> {
        if self.taken.load(Ordering::Acquire) {
            return None;
        }
        self.taken.store(true, Ordering::Release);
        // SAFETY: `taken` was clear and is now set, so no other reference to
        // the value has been or will be handed out.
        Some(unsafe { &mut *self.value.get() })
    }

    pub fn is_taken(&self) -> bool {
        self.taken.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SLOT: TakeOnce<[u8; 4]> = TakeOnce::new([1, 2, 3, 4]);

    #[test]
    fn test_take_succeeds_once() {
        assert!(!SLOT.is_taken());
        let value = SLOT.take();
        assert_eq!(value.as_deref(), Some(&[1, 2, 3, 4]));
        if let Some(value) = value {
            value[0] = 9;
        }
        assert!(SLOT.is_taken());
        assert!(SLOT.take().is_none());
    }
}
