//! Core bitmask types and indicator state.

use heapless::Vec;

/// Relay output flags, one bit per channel. 1 = relay energized.
pub type RelayMask = u8;

/// Input pin levels as sampled. 1 = pin electrically HIGH.
pub type RawInputMask = u8;

/// Logical input view. 1 = input asserted (pulled LOW on the opto inputs).
pub type ActiveInputMask = u8;

/// Maximum number of channels a mask can describe.
pub const MAX_CHANNELS: u8 = 8;

/// Channel indices of the set bits of a mask, ascending.
pub type ChannelList = Vec<u8, 8>;

/// Returns the mask covering the lowest `count` channels.
///
/// Counts of 8 or more select every bit.
#[inline]
pub const fn valid_bits(count: u8) -> u8 {
    if count >= MAX_CHANNELS {
        0xFF
    } else {
        (1u8 << count) - 1
    }
}

/// Tests bit `index` of `mask`; false for indices past the mask width.
#[inline]
pub(crate) const fn bit(mask: u8, index: u8) -> bool {
    index < MAX_CHANNELS && (mask >> index) & 0x1 == 1
}

/// Lists the set bits of `mask` in ascending order.
pub(crate) fn channels_of(mask: u8) -> ChannelList {
    let mut channels = ChannelList::new();
    for index in 0..MAX_CHANNELS {
        if bit(mask, index) {
            // Capacity equals the mask width
            let _ = channels.push(index);
        }
    }
    channels
}

/// Observable state of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    /// Idle with heartbeat disabled. LED is black.
    Off,

    /// A relay mask or explicit command drives a non-black color.
    ExplicitColor,

    /// Idle, LED black, waiting for the next heartbeat deadline.
    IdleWaiting,

    /// Idle, heartbeat pulse currently showing white.
    IdlePulsing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bits_per_count() {
        assert_eq!(valid_bits(0), 0x00);
        assert_eq!(valid_bits(1), 0x01);
        assert_eq!(valid_bits(4), 0x0F);
        assert_eq!(valid_bits(7), 0x7F);
        assert_eq!(valid_bits(8), 0xFF);
        assert_eq!(valid_bits(200), 0xFF);
    }

    #[test]
    fn channels_of_lists_set_bits() {
        assert!(channels_of(0).is_empty());
        assert_eq!(channels_of(0b1000_0101).as_slice(), &[0, 2, 7]);
        assert_eq!(channels_of(0xFF).len(), 8);
    }

    #[test]
    fn bit_ignores_out_of_width_index() {
        assert!(bit(0xFF, 7));
        assert!(!bit(0xFF, 8));
        assert!(!bit(0b10, 0));
    }
}
