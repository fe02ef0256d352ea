//! Input polarity translation and the authoritative relay mask.
//!
//! Provides [`BitmaskTranslator`], which turns raw active-low input levels into
//! a logical "asserted" view and owns the relay-on mask of the board. Also
//! defines the [`InputSampler`] trait for the input hardware.
//!
//! Nothing here fails: indices past the configured channel count read as
//! `false` or are ignored, and masks are truncated to the configured width.

use crate::config::BoardConfig;
use crate::types::{
    ActiveInputMask, ChannelList, RawInputMask, RelayMask, bit, channels_of, valid_bits,
};

/// Trait for abstracting the digital input hardware.
///
/// Bit `n` of the sample is the electrical level of input `n` (1 = HIGH).
/// Implementations must not fail; report an unreadable pin as HIGH so it
/// counts as inactive.
pub trait InputSampler {
    /// Samples every input pin into a raw mask.
    fn sample(&mut self) -> RawInputMask;
}

impl<F> InputSampler for F
where
    F: FnMut() -> RawInputMask,
{
    fn sample(&mut self) -> RawInputMask {
        self()
    }
}

/// Converts sampled input levels into logical views and holds the relay mask.
///
/// The translator is the single owner of the relay mask. Its mutators change
/// only the in-memory mask; writing the relays is the caller's job.
///
/// Every input query samples the hardware once. Callers that need a consistent
/// view within one loop pass should read [`active_inputs`](Self::active_inputs)
/// once and work from the returned mask.
pub struct BitmaskTranslator<S: InputSampler> {
    sampler: S,
    input_count: u8,
    relay_count: u8,
    relay_mask: RelayMask,
}

impl<S: InputSampler> BitmaskTranslator<S> {
    /// Creates a translator with all relays recorded as off.
    pub fn new(sampler: S, config: &BoardConfig) -> Self {
        Self {
            sampler,
            input_count: config.input_count(),
            relay_count: config.relay_count(),
            relay_mask: 0,
        }
    }

    /// Number of configured inputs.
    #[inline]
    pub fn input_count(&self) -> u8 {
        self.input_count
    }

    /// Number of configured relays.
    #[inline]
    pub fn relay_count(&self) -> u8 {
        self.relay_count
    }

    /// Mask with every configured relay bit set.
    #[inline]
    pub fn full_relay_mask(&self) -> RelayMask {
        valid_bits(self.relay_count)
    }

    /// Returns the raw pin levels exactly as sampled.
    pub fn raw_inputs(&mut self) -> RawInputMask {
        self.sampler.sample()
    }

    /// Returns the asserted inputs. Bits past the input count are always 0.
    pub fn active_inputs(&mut self) -> ActiveInputMask {
        active_from_raw(self.raw_inputs(), self.input_count)
    }

    /// Returns true if input `index` reads electrically HIGH.
    ///
    /// Out-of-range indices read as false.
    pub fn is_input_raw_high(&mut self, index: u8) -> bool {
        if index >= self.input_count {
            return false;
        }
        bit(self.raw_inputs(), index)
    }

    /// Returns true if input `index` is asserted.
    ///
    /// Out-of-range indices read as false.
    pub fn is_input_active(&mut self, index: u8) -> bool {
        if index >= self.input_count {
            return false;
        }
        bit(self.active_inputs(), index)
    }

    /// Lists the asserted inputs in ascending order.
    pub fn active_input_channels(&mut self) -> ChannelList {
        channels_of(self.active_inputs())
    }

    /// Returns the authoritative relay mask.
    #[inline]
    pub fn relay_mask(&self) -> RelayMask {
        self.relay_mask
    }

    /// Returns true if relay `index` is recorded as on.
    ///
    /// Out-of-range indices read as false.
    pub fn is_relay_on(&self, index: u8) -> bool {
        if index >= self.relay_count {
            return false;
        }
        bit(self.relay_mask, index)
    }

    /// Lists the energized relays in ascending order.
    pub fn energized_relays(&self) -> ChannelList {
        channels_of(self.relay_mask)
    }

    /// Sets or clears relay `index` in the mask. Ignored when out of range.
    ///
    /// Does not touch the relay hardware.
    pub fn set_relay_bit(&mut self, index: u8, on: bool) {
        if index >= self.relay_count {
            return;
        }
        if on {
            self.relay_mask |= 1u8 << index;
        } else {
            self.relay_mask &= !(1u8 << index);
        }
    }

    /// Replaces the relay mask, discarding bits past the relay count.
    ///
    /// Does not touch the relay hardware.
    pub fn set_relay_mask_masked(&mut self, mask: RelayMask) {
        self.relay_mask = mask & valid_bits(self.relay_count);
    }

    /// Returns a reference to the input sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Returns a mutable reference to the input sampler.
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }
}

/// Converts raw active-low levels into the asserted view for `input_count` inputs.
#[inline]
pub const fn active_from_raw(raw: RawInputMask, input_count: u8) -> ActiveInputMask {
    !raw & valid_bits(input_count)
}
