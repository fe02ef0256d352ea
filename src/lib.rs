#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BitmaskTranslator`**: Converts active-low input levels into an asserted view and owns the relay mask
//! - **`InputSampler`**: Trait to implement for your input hardware (closures work too)
//! - **`IndicatorController`**: Drives the status pixel from relay state and runs the idle heartbeat
//! - **`IndicatorLed`**: Trait to implement for your LED hardware
//! - **`IndicatorState`**: Observable state of the indicator
//! - **`IndicatorCommand`**: Commands that can be sent to the indicator
//! - **`TimeSource`** / **`Millis`**: Wrapping millisecond clock
//! - **`BoardConfig`**: Channel counts and heartbeat timing
//! - **`IoBoard`**: Ties the pieces together for a cooperative control loop
//!
//! Colors are `Srgb<u8>` triples. Relay colors come from a fixed 8-entry
//! palette; mixed relay masks average the palette entries of the energized
//! relays.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod board;
pub mod colors;
pub mod command;
pub mod config;
pub mod hal;
pub mod indicator;
pub mod io_board;
pub mod time;
pub mod translator;
pub mod types;

pub use colors::{BLACK, IndicatorColor, RELAY_PALETTE, WHITE};
pub use command::IndicatorCommand;
pub use config::{BoardConfig, BoardConfigBuilder, ConfigError};
pub use hal::{Dimmed, InputPinSampler, PwmIndicatorLed};
pub use indicator::{IndicatorController, IndicatorLed};
pub use io_board::IoBoard;
pub use time::{Millis, TimeSource};
pub use translator::{BitmaskTranslator, InputSampler};
pub use types::{
    ActiveInputMask, ChannelList, IndicatorState, RawInputMask, RelayMask, valid_bits,
};
