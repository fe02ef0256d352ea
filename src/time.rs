//! Millisecond clock abstraction with wraparound-safe comparisons.
//!
//! Board timers are free-running counters that wrap at their word width, so
//! instants are compared through the signed difference of their raw values
//! rather than with `<`/`>`. This keeps deadlines correct across overflow as
//! long as the two instants are less than half the counter range apart
//! (about 24.8 days for a 32-bit millisecond counter).

/// A point in time on a wrapping 32-bit millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Counter value zero.
    pub const ZERO: Self = Millis(0);

    /// Creates an instant from a raw counter value.
    #[inline]
    pub const fn new(ticks: u32) -> Self {
        Millis(ticks)
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn ticks(self) -> u32 {
        self.0
    }

    /// Returns the instant `millis` after `self`, wrapping at the counter width.
    #[inline]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Millis(self.0.wrapping_add(millis))
    }

    /// Signed distance from `earlier` to `self`.
    ///
    /// Positive when `self` lies after `earlier`, negative when before.
    #[inline]
    pub const fn signed_since(self, earlier: Self) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }

    /// Returns true once `self` has reached or passed `deadline`.
    #[inline]
    pub const fn has_reached(self, deadline: Self) -> bool {
        self.signed_since(deadline) >= 0
    }
}

impl From<u32> for Millis {
    fn from(ticks: u32) -> Self {
        Millis(ticks)
    }
}

/// Trait for abstracting the board's millisecond clock.
pub trait TimeSource {
    /// Returns the current counter value.
    fn now(&self) -> Millis;
}
