//! Wheel encoder velocity capture
//!
//! The decoder hardware counts pulses over a fixed window and raises an
//! interrupt when the window expires. The handler publishes the signed
//! pulse count into a one-slot mailbox; the control loop consumes it at
//! its own pace. Samples overwrite silently, so the consumer always sees
//! the newest window or nothing.

use core::cell::Cell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::platform::traits::{QeiDirection, QeiInterface};

/// Driven axle identifier
///
/// Reported to the operator as motor 1 (left) and motor 2 (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axle {
    Left,
    Right,
}

impl Axle {
    /// Motor number used in operator output
    pub fn number(self) -> u8 {
        match self {
            Axle::Left => 1,
            Axle::Right => 2,
        }
    }
}

/// One-slot velocity mailbox between a decoder interrupt and the control
/// loop
///
/// The producer latches a signed pulse count per velocity window,
/// unconditionally overwriting whatever is there. The consumer takes the
/// sample and empties the slot in one critical section, so a sample is
/// observed at most once and a half-written value is never seen. An empty
/// mailbox is the normal case whenever the loop outpaces the window.
///
/// Constructible in const context so firmware can place one per axle in a
/// `static` shared with the interrupt handler.
pub struct VelocityMailbox {
    slot: Mutex<CriticalSectionRawMutex, Cell<Option<i32>>>,
}

impl VelocityMailbox {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Publish one window's sample, overwriting any unconsumed value
    ///
    /// Physical window counts sit far below the signed range, so the cast
    /// cannot wrap.
    pub fn latch(&self, pulses: u32, direction: QeiDirection) {
        let sample = pulses as i32 * direction.sign();
        self.slot.lock(|slot| slot.set(Some(sample)));
    }

    /// Read the decoder and publish its last window
    ///
    /// This is the body of the window-expiry interrupt handler.
    pub fn latch_from<Q: QeiInterface>(&self, qei: &Q) {
        self.latch(qei.velocity_pulses(), qei.direction());
    }

    /// Take the sample if one is fresh, leaving the mailbox empty
    pub fn try_take(&self) -> Option<i32> {
        self.slot.lock(|slot| slot.take())
    }

    /// Whether an unconsumed sample is waiting
    pub fn is_fresh(&self) -> bool {
        self.slot.lock(|slot| slot.get().is_some())
    }
}

impl Default for VelocityMailbox {
    fn default() -> Self {
        Self::new()
    }
}
