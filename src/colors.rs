//! Indicator colors and the relay palette.
//!
//! Colors are `palette::Srgb<u8>` triples. Blending is plain per-channel
//! integer averaging; no gamma or perceptual correction is applied.

use crate::types::{MAX_CHANNELS, RelayMask, bit};
use palette::Srgb;

/// 8-bit RGB color shown by the indicator.
pub type IndicatorColor = Srgb<u8>;

pub const BLACK: IndicatorColor = IndicatorColor::new(0, 0, 0);
pub const WHITE: IndicatorColor = IndicatorColor::new(255, 255, 255);

/// One color per relay channel.
pub const RELAY_PALETTE: [IndicatorColor; 8] = [
    IndicatorColor::new(255, 0, 0),   // red
    IndicatorColor::new(255, 128, 0), // orange
    IndicatorColor::new(255, 255, 0), // yellow
    IndicatorColor::new(128, 255, 0), // chartreuse
    IndicatorColor::new(0, 255, 0),   // green
    IndicatorColor::new(0, 255, 255), // cyan
    IndicatorColor::new(0, 0, 255),   // blue
    IndicatorColor::new(255, 0, 255), // magenta
];

/// Palette color for a relay channel. Any index is folded into 0-7.
#[inline]
pub const fn relay_color(index: u8) -> IndicatorColor {
    RELAY_PALETTE[(index & 0x07) as usize]
}

/// Returns true if every channel of `color` is zero.
#[inline]
pub fn is_black(color: IndicatorColor) -> bool {
    color == BLACK
}

/// Averages the palette colors of all channels set in `mask`.
///
/// Each channel sum is divided by the number of set bits, truncating.
/// Returns `None` when no bit is set.
pub fn blend_palette(mask: RelayMask) -> Option<IndicatorColor> {
    let (mut red, mut green, mut blue) = (0u32, 0u32, 0u32);
    let mut count = 0u32;

    for index in 0..MAX_CHANNELS {
        if bit(mask, index) {
            let color = RELAY_PALETTE[index as usize];
            red += u32::from(color.red);
            green += u32::from(color.green);
            blue += u32::from(color.blue);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    Some(IndicatorColor::new(
        (red / count) as u8,
        (green / count) as u8,
        (blue / count) as u8,
    ))
}

/// Scales every channel by `brightness / 255`, truncating.
#[inline]
pub fn scale(color: IndicatorColor, brightness: u8) -> IndicatorColor {
    let apply = |channel: u8| ((u16::from(channel) * u16::from(brightness)) / 255) as u8;
    IndicatorColor::new(apply(color.red), apply(color.green), apply(color.blue))
}
