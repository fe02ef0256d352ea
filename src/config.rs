//! Board configuration and its builder.

use crate::types::MAX_CHANNELS;

/// Interval between heartbeat pulses while idle, in milliseconds.
pub const HEARTBEAT_PERIOD_MS: u32 = 5000;

/// Length of a single heartbeat pulse, in milliseconds.
pub const HEARTBEAT_PULSE_MS: u32 = 120;

/// Default LED brightness (out of 255).
pub const DEFAULT_BRIGHTNESS: u8 = 64;

/// Channel counts and indicator timing for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    input_count: u8,
    relay_count: u8,
    heartbeat_period_ms: u32,
    heartbeat_pulse_ms: u32,
    heartbeat_enabled: bool,
    brightness: u8,
}

impl BoardConfig {
    /// Configuration of the 8DI/8RO board.
    pub const DEFAULT: Self = Self {
        input_count: MAX_CHANNELS,
        relay_count: MAX_CHANNELS,
        heartbeat_period_ms: HEARTBEAT_PERIOD_MS,
        heartbeat_pulse_ms: HEARTBEAT_PULSE_MS,
        heartbeat_enabled: true,
        brightness: DEFAULT_BRIGHTNESS,
    };

    /// Creates a configuration builder starting from the board defaults.
    pub fn builder() -> BoardConfigBuilder {
        BoardConfigBuilder::new()
    }

    /// Number of digital inputs.
    #[inline]
    pub const fn input_count(&self) -> u8 {
        self.input_count
    }

    /// Number of relay outputs.
    #[inline]
    pub const fn relay_count(&self) -> u8 {
        self.relay_count
    }

    /// Interval between heartbeat pulses.
    #[inline]
    pub const fn heartbeat_period_ms(&self) -> u32 {
        self.heartbeat_period_ms
    }

    /// Length of one heartbeat pulse.
    #[inline]
    pub const fn heartbeat_pulse_ms(&self) -> u32 {
        self.heartbeat_pulse_ms
    }

    /// Whether the heartbeat starts enabled.
    #[inline]
    pub const fn heartbeat_enabled(&self) -> bool {
        self.heartbeat_enabled
    }

    /// LED brightness applied by [`Dimmed`](crate::Dimmed).
    #[inline]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`BoardConfig`]. Values are validated in [`build`](Self::build).
#[derive(Debug, Clone, Copy)]
pub struct BoardConfigBuilder {
    config: BoardConfig,
}

impl BoardConfigBuilder {
    /// Creates a builder holding the board defaults.
    pub fn new() -> Self {
        Self {
            config: BoardConfig::DEFAULT,
        }
    }

    /// Sets the number of digital inputs (at most 8).
    pub fn inputs(mut self, count: u8) -> Self {
        self.config.input_count = count;
        self
    }

    /// Sets the number of relay outputs (at most 8).
    pub fn relays(mut self, count: u8) -> Self {
        self.config.relay_count = count;
        self
    }

    /// Sets the heartbeat period in milliseconds.
    pub fn heartbeat_period_ms(mut self, millis: u32) -> Self {
        self.config.heartbeat_period_ms = millis;
        self
    }

    /// Sets the heartbeat pulse length in milliseconds.
    pub fn heartbeat_pulse_ms(mut self, millis: u32) -> Self {
        self.config.heartbeat_pulse_ms = millis;
        self
    }

    /// Sets whether the heartbeat starts enabled.
    pub fn heartbeat_enabled(mut self, enabled: bool) -> Self {
        self.config.heartbeat_enabled = enabled;
        self
    }

    /// Sets the LED brightness.
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<BoardConfig, ConfigError> {
        let config = self.config;

        if config.input_count > MAX_CHANNELS {
            return Err(ConfigError::TooManyInputs(config.input_count));
        }
        if config.relay_count > MAX_CHANNELS {
            return Err(ConfigError::TooManyRelays(config.relay_count));
        }
        if config.heartbeat_period_ms == 0 {
            return Err(ConfigError::ZeroHeartbeatPeriod);
        }
        if config.heartbeat_pulse_ms == 0 {
            return Err(ConfigError::ZeroPulseDuration);
        }
        if config.heartbeat_pulse_ms >= config.heartbeat_period_ms {
            return Err(ConfigError::PulseNotShorterThanPeriod);
        }

        Ok(config)
    }
}

impl Default for BoardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More than 8 inputs requested.
    TooManyInputs(u8),

    /// More than 8 relays requested.
    TooManyRelays(u8),

    /// Heartbeat period of zero.
    ZeroHeartbeatPeriod,

    /// Heartbeat pulse of zero length.
    ZeroPulseDuration,

    /// Pulse would last as long as the whole period.
    PulseNotShorterThanPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TooManyInputs(count) => {
                write!(f, "{} inputs requested, at most {} supported", count, MAX_CHANNELS)
            }
            ConfigError::TooManyRelays(count) => {
                write!(f, "{} relays requested, at most {} supported", count, MAX_CHANNELS)
            }
            ConfigError::ZeroHeartbeatPeriod => {
                write!(f, "heartbeat period must be non-zero")
            }
            ConfigError::ZeroPulseDuration => {
                write!(f, "heartbeat pulse duration must be non-zero")
            }
            ConfigError::PulseNotShorterThanPeriod => {
                write!(f, "heartbeat pulse must be shorter than the heartbeat period")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
