//! Control loop wiring of the translator, the indicator and the clock.

use crate::colors::IndicatorColor;
use crate::command::IndicatorCommand;
use crate::config::BoardConfig;
use crate::indicator::{IndicatorController, IndicatorLed};
use crate::time::{Millis, TimeSource};
use crate::translator::{BitmaskTranslator, InputSampler};
use crate::types::{ActiveInputMask, IndicatorState, RelayMask};

/// One board: input translation, the relay mask and the status indicator.
///
/// Keeps the indicator in step with the relay mask. The loop owning the board
/// decides relay states, writes the relay hardware, then records the new mask
/// here with [`apply_relay_mask`](Self::apply_relay_mask) or
/// [`set_relay`](Self::set_relay). [`service`](Self::service) must run on every
/// iteration.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `S` - Input sampler type
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
pub struct IoBoard<'t, S: InputSampler, L: IndicatorLed, T: TimeSource> {
    translator: BitmaskTranslator<S>,
    indicator: IndicatorController<L>,
    time_source: &'t T,
}

impl<'t, S: InputSampler, L: IndicatorLed, T: TimeSource> IoBoard<'t, S, L, T> {
    /// Creates a board with all relays recorded off and the indicator idle.
    pub fn new(sampler: S, led: L, time_source: &'t T, config: &BoardConfig) -> Self {
        let now = time_source.now();

        #[cfg(feature = "defmt")]
        defmt::debug!("io board: {} at {}", config, now);

        Self {
            translator: BitmaskTranslator::new(sampler, config),
            indicator: IndicatorController::new(led, config, now),
            time_source,
        }
    }

    /// Samples the inputs once and returns the asserted view.
    pub fn poll_inputs(&mut self) -> ActiveInputMask {
        self.translator.active_inputs()
    }

    /// Records a new relay mask and updates the indicator from it.
    ///
    /// Bits past the relay count are dropped. Returns the stored mask.
    pub fn apply_relay_mask(&mut self, mask: RelayMask) -> RelayMask {
        self.translator.set_relay_mask_masked(mask);
        let stored = self.translator.relay_mask();

        #[cfg(feature = "defmt")]
        defmt::debug!("io board: relay mask {=u8:b}", stored);

        self.indicator.set_for_mask(stored);
        stored
    }

    /// Records one relay and updates the indicator. Out-of-range indices are ignored.
    pub fn set_relay(&mut self, index: u8, on: bool) -> RelayMask {
        self.translator.set_relay_bit(index, on);
        let stored = self.translator.relay_mask();
        self.indicator.set_for_mask(stored);
        stored
    }

    /// Forwards a command to the indicator.
    ///
    /// The color holds until the next relay mask update.
    pub fn command(&mut self, command: IndicatorCommand) {
        self.indicator.handle_command(command);
    }

    /// Advances the heartbeat using the current time. Call once per iteration.
    pub fn service(&mut self) -> Millis {
        let now = self.time_source.now();
        self.indicator.tick(now);
        now
    }

    /// Returns the authoritative relay mask.
    pub fn relay_mask(&self) -> RelayMask {
        self.translator.relay_mask()
    }

    /// Returns the color on the status pixel.
    pub fn indicator_color(&self) -> IndicatorColor {
        self.indicator.displayed_color()
    }

    /// Returns the indicator state.
    pub fn indicator_state(&self) -> IndicatorState {
        self.indicator.state()
    }

    /// Returns a reference to the translator.
    pub fn translator(&self) -> &BitmaskTranslator<S> {
        &self.translator
    }

    /// Returns a mutable reference to the translator.
    pub fn translator_mut(&mut self) -> &mut BitmaskTranslator<S> {
        &mut self.translator
    }

    /// Returns a reference to the indicator controller.
    pub fn indicator(&self) -> &IndicatorController<L> {
        &self.indicator
    }

    /// Returns a mutable reference to the indicator controller.
    pub fn indicator_mut(&mut self) -> &mut IndicatorController<L> {
        &mut self.indicator
    }
}
