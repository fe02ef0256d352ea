//! `embedded-hal` adapters for the input and LED collaborators.
//!
//! - [`InputPinSampler`] reads up to 8 digital input pins into a raw mask.
//! - [`PwmIndicatorLed`] drives a discrete RGB LED from three PWM channels.
//! - [`Dimmed`] scales the brightness of any [`IndicatorLed`].

use crate::colors::{self, BLACK, IndicatorColor};
use crate::indicator::IndicatorLed;
use crate::translator::InputSampler;
use crate::types::{MAX_CHANNELS, RawInputMask};
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Samples an array of input pins into a raw mask, pin `n` at bit `n`.
///
/// A pin that fails to read is reported HIGH, i.e. inactive on the active-low
/// inputs. Bits with no pin behind them read HIGH as well. Pins past the
/// eighth are never read.
pub struct InputPinSampler<P: InputPin, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> InputPinSampler<P, N> {
    /// Wraps input pins given in input index order.
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Releases the pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> InputSampler for InputPinSampler<P, N> {
    fn sample(&mut self) -> RawInputMask {
        let mut raw: RawInputMask = 0xFF;
        for (index, pin) in self.pins.iter_mut().enumerate().take(MAX_CHANNELS as usize) {
            if !pin.is_high().unwrap_or(true) {
                raw &= !(1u8 << index);
            }
        }
        raw
    }
}

/// Status LED built from three PWM channels.
///
/// The staged color is written to the channels on [`show`](IndicatorLed::show).
/// Duty cycle errors are ignored.
pub struct PwmIndicatorLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
    staged: IndicatorColor,
}

impl<R, G, B> PwmIndicatorLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Creates the LED. Set `common_anode` for LEDs that light on a low output.
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
            staged: BLACK,
        }
    }

    fn write_channel<C: SetDutyCycle>(channel: &mut C, value: u8, common_anode: bool) {
        let max_duty = u32::from(channel.max_duty_cycle());
        let duty = (u32::from(value) * max_duty / 255) as u16;
        let duty = if common_anode {
            max_duty as u16 - duty
        } else {
            duty
        };
        let _ = channel.set_duty_cycle(duty);
    }
}

impl<R, G, B> IndicatorLed for PwmIndicatorLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_pixel(&mut self, color: IndicatorColor) {
        self.staged = color;
    }

    fn show(&mut self) {
        let color = self.staged;
        Self::write_channel(&mut self.red, color.red, self.common_anode);
        Self::write_channel(&mut self.green, color.green, self.common_anode);
        Self::write_channel(&mut self.blue, color.blue, self.common_anode);
    }
}

/// Scales every color by a fixed brightness before passing it on.
pub struct Dimmed<L: IndicatorLed> {
    inner: L,
    brightness: u8,
}

impl<L: IndicatorLed> Dimmed<L> {
    /// Wraps `inner`; 255 passes colors through unchanged.
    pub fn new(inner: L, brightness: u8) -> Self {
        Self { inner, brightness }
    }

    /// Returns the current brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Takes effect from the next rendered color.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Returns a reference to the wrapped LED.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Consumes the wrapper and returns the wrapped LED.
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: IndicatorLed> IndicatorLed for Dimmed<L> {
    fn set_pixel(&mut self, color: IndicatorColor) {
        self.inner.set_pixel(colors::scale(color, self.brightness));
    }

    fn show(&mut self) {
        self.inner.show();
    }
}
