//! Shared test infrastructure for relay-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use relay_indicator::{BLACK, IndicatorColor, IndicatorLed, InputSampler, Millis, TimeSource};

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every color it was asked to show
pub struct MockLed {
    staged: IndicatorColor,
    shown: heapless::Vec<IndicatorColor, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            staged: BLACK,
            shown: heapless::Vec::new(),
        }
    }

    /// Last color transmitted with `show`
    pub fn last_shown(&self) -> Option<IndicatorColor> {
        self.shown.last().copied()
    }

    pub fn shown(&self) -> &[IndicatorColor] {
        &self.shown
    }

    pub fn show_count(&self) -> usize {
        self.shown.len()
    }
}

impl IndicatorLed for MockLed {
    fn set_pixel(&mut self, color: IndicatorColor) {
        self.staged = color;
    }

    fn show(&mut self) {
        let _ = self.shown.push(self.staged);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(Millis(0))
    }

    pub fn starting_at(time: Millis) -> Self {
        Self {
            current_time: core::cell::Cell::new(time),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(current.wrapping_add(millis));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Sampler
// ============================================================================

/// Input sampler returning a settable raw mask and counting reads
pub struct MockSampler {
    raw: u8,
    reads: usize,
}

impl MockSampler {
    pub fn new(raw: u8) -> Self {
        Self { raw, reads: 0 }
    }

    pub fn set_raw(&mut self, raw: u8) {
        self.raw = raw;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl InputSampler for MockSampler {
    fn sample(&mut self) -> u8 {
        self.reads += 1;
        self.raw
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn rgb(red: u8, green: u8, blue: u8) -> IndicatorColor {
    IndicatorColor::new(red, green, blue)
}
