//! Status indicator state machine with idle heartbeat.
//!
//! Provides [`IndicatorController`], which owns the single status pixel and
//! derives its color from explicit commands or the relay mask. While nothing
//! is driving a color the controller is idle, and [`tick`](IndicatorController::tick)
//! overlays a short white pulse every heartbeat period. Also defines the
//! [`IndicatorLed`] trait for the pixel hardware.

use crate::colors::{self, BLACK, IndicatorColor, WHITE};
use crate::command::IndicatorCommand;
use crate::config::BoardConfig;
use crate::time::Millis;
use crate::types::{IndicatorState, RelayMask, valid_bits};

/// Trait for abstracting the status pixel hardware.
///
/// Implement this for your LED driver (WS2812 over RMT/SPI, PWM channels, ...).
/// Both methods are treated as synchronous and cannot fail; handle hardware
/// errors inside the implementation.
pub trait IndicatorLed {
    /// Stages the color of the pixel.
    fn set_pixel(&mut self, color: IndicatorColor);

    /// Transmits the staged color to the pixel.
    fn show(&mut self);
}

/// Drives the status pixel from relay state, explicit colors and the heartbeat.
///
/// All operations are total: relay indices wrap into the palette, masks are
/// truncated to the relay count and deadlines tolerate counter wraparound.
/// Every public operation that changes the color ends by pushing it to the LED,
/// so the pixel never lags the controller state.
///
/// [`tick`](Self::tick) must be called on every control loop iteration,
/// whatever else the iteration did; nothing runs in the background.
pub struct IndicatorController<L: IndicatorLed> {
    led: L,
    color: IndicatorColor,
    idle: bool,
    heartbeat_enabled: bool,
    pulsing: bool,
    next_beat: Millis,
    pulse_end: Millis,
    full_mask: RelayMask,
    period_ms: u32,
    pulse_ms: u32,
}

impl<L: IndicatorLed> IndicatorController<L> {
    /// Creates an idle controller, renders black and schedules the first beat
    /// one period after `now`.
    pub fn new(led: L, config: &BoardConfig, now: Millis) -> Self {
        let mut controller = Self {
            led,
            color: BLACK,
            idle: true,
            heartbeat_enabled: config.heartbeat_enabled(),
            pulsing: false,
            next_beat: now.wrapping_add(config.heartbeat_period_ms()),
            pulse_end: now,
            full_mask: valid_bits(config.relay_count()),
            period_ms: config.heartbeat_period_ms(),
            pulse_ms: config.heartbeat_pulse_ms(),
        };
        controller.render();
        controller
    }

    /// Dispatches a command to the matching operation.
    pub fn handle_command(&mut self, command: IndicatorCommand) {
        match command {
            IndicatorCommand::Off => self.off(),
            IndicatorCommand::AllOnWhite => self.set_all_on_white(),
            IndicatorCommand::Relay(index) => self.set_for_relay(index),
            IndicatorCommand::Rgb(color) => self.set_rgb(color.red, color.green, color.blue),
            IndicatorCommand::Mask(mask) => self.set_for_mask(mask),
            IndicatorCommand::Heartbeat(on) => self.set_heartbeat_enabled(on),
        }
    }

    /// Turns the pixel black and marks the indicator idle.
    ///
    /// Cancels a running pulse. The next beat deadline is left as it was.
    pub fn off(&mut self) {
        self.apply(BLACK, true);
    }

    /// Shows full white (every relay on).
    pub fn set_all_on_white(&mut self) {
        self.apply(WHITE, false);
    }

    /// Shows the palette color of relay `index`; any index is folded into 0-7.
    pub fn set_for_relay(&mut self, index: u8) {
        self.apply(colors::relay_color(index), false);
    }

    /// Shows an explicit color. Black makes the indicator idle, like [`off`](Self::off).
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        let color = IndicatorColor::new(red, green, blue);
        self.apply(color, colors::is_black(color));
    }

    /// Derives the color from a relay mask.
    ///
    /// No relay gives black (idle), every configured relay gives white, and
    /// anything in between gives the average of the energized relays' palette
    /// colors. Bits past the relay count are ignored.
    pub fn set_for_mask(&mut self, mask: RelayMask) {
        let effective = mask & self.full_mask;

        if effective == 0 {
            self.off();
            return;
        }

        if effective == self.full_mask {
            self.set_all_on_white();
            return;
        }

        match colors::blend_palette(effective) {
            Some(color) => self.apply(color, false),
            None => self.off(),
        }
    }

    /// Enables or disables the idle heartbeat.
    ///
    /// The commanded color is unchanged. Disabling during a pulse ends the
    /// pulse and re-renders the commanded color, so the pixel never stays
    /// white while the heartbeat is off. Re-enabling takes effect at the
    /// next [`tick`](Self::tick); beats missed while disabled are not replayed.
    pub fn set_heartbeat_enabled(&mut self, on: bool) {
        self.heartbeat_enabled = on;

        if !on && self.pulsing {
            self.pulsing = false;
            self.render();
        }
    }

    /// Advances the heartbeat. Call once per control loop iteration.
    ///
    /// Does nothing unless the heartbeat is enabled and the indicator is idle.
    pub fn tick(&mut self, now: Millis) {
        if !self.heartbeat_enabled || !self.idle {
            return;
        }

        if self.pulsing {
            if now.has_reached(self.pulse_end) {
                self.pulsing = false;
                self.next_beat = now.wrapping_add(self.period_ms);
                self.render();

                #[cfg(feature = "defmt")]
                defmt::trace!("heartbeat: pulse end at {}, next beat {}", now, self.next_beat);
            }
            return;
        }

        if self.beat_due(now) {
            self.pulsing = true;
            self.pulse_end = now.wrapping_add(self.pulse_ms);
            self.render();

            #[cfg(feature = "defmt")]
            defmt::trace!("heartbeat: pulse start at {}", now);
        }
    }

    /// Returns the commanded color, ignoring any heartbeat pulse.
    pub fn current_color(&self) -> IndicatorColor {
        self.color
    }

    /// Returns the color currently on the pixel.
    pub fn displayed_color(&self) -> IndicatorColor {
        if self.pulsing { WHITE } else { self.color }
    }

    /// Returns the current state of the indicator.
    pub fn state(&self) -> IndicatorState {
        match (self.idle, self.pulsing, self.heartbeat_enabled) {
            (false, _, _) => IndicatorState::ExplicitColor,
            (true, true, _) => IndicatorState::IdlePulsing,
            (true, false, true) => IndicatorState::IdleWaiting,
            (true, false, false) => IndicatorState::Off,
        }
    }

    /// Returns true if no relay or explicit color is driving the pixel.
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Returns true while a heartbeat pulse is showing.
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Returns true if the idle heartbeat may fire.
    pub fn heartbeat_enabled(&self) -> bool {
        self.heartbeat_enabled
    }

    /// Deadline of the next heartbeat pulse.
    pub fn next_beat_deadline(&self) -> Millis {
        self.next_beat
    }

    /// End of the running pulse. Meaningful only while pulsing.
    pub fn pulse_end_deadline(&self) -> Millis {
        self.pulse_end
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Consumes the controller and returns the LED.
    pub fn into_led(self) -> L {
        self.led
    }

    /// A scheduled beat is never more than one period ahead; a deadline that
    /// appears further ahead has aged past half the counter range.
    fn beat_due(&self, now: Millis) -> bool {
        now.has_reached(self.next_beat)
            || self.next_beat.signed_since(now) > self.period_ms as i32
    }

    fn apply(&mut self, color: IndicatorColor, idle: bool) {
        self.color = color;
        self.idle = idle;
        self.pulsing = false;
        self.render();
    }

    fn render(&mut self) {
        let color = self.displayed_color();
        self.led.set_pixel(color);
        self.led.show();
    }
}
