//! Command-based control for the status indicator.

use crate::colors::IndicatorColor;
use crate::types::RelayMask;

/// Commands accepted by [`IndicatorController::handle_command`](crate::IndicatorController::handle_command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCommand {
    /// Black, idle.
    Off,
    /// Full white, not idle.
    AllOnWhite,
    /// Palette color of one relay channel (index folded into 0-7).
    Relay(u8),
    /// Explicit color. Black counts as idle.
    Rgb(IndicatorColor),
    /// Color derived from a relay mask.
    Mask(RelayMask),
    /// Enable or disable the idle heartbeat.
    Heartbeat(bool),
}

impl IndicatorCommand {
    /// Creates an explicit color command from components.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        IndicatorCommand::Rgb(IndicatorColor::new(red, green, blue))
    }
}
