//! Integration tests for IoBoard

mod common;
use common::*;

use relay_indicator::{
    BLACK, BoardConfig, Dimmed, IndicatorCommand, IndicatorState, IoBoard, Millis,
    RELAY_PALETTE, WHITE,
};

#[test]
fn relay_updates_drive_indicator() {
    let timer = MockTimeSource::new();
    let mut board = IoBoard::new(
        MockSampler::new(0xFF),
        MockLed::new(),
        &timer,
        &BoardConfig::default(),
    );

    assert_eq!(board.apply_relay_mask(0b0000_0001), 0b0000_0001);
    assert_eq!(board.indicator_color(), RELAY_PALETTE[0]);

    board.set_relay(6, true);
    assert_eq!(board.relay_mask(), 0b0100_0001);
    assert_eq!(board.indicator_color(), rgb(127, 0, 127));

    board.apply_relay_mask(0xFF);
    assert_eq!(board.indicator_color(), WHITE);

    board.apply_relay_mask(0);
    assert_eq!(board.indicator_color(), BLACK);
    assert_eq!(board.indicator_state(), IndicatorState::IdleWaiting);
}

#[test]
fn relay_mask_is_truncated_to_relay_count() {
    let timer = MockTimeSource::new();
    let config = BoardConfig::builder().relays(2).build().unwrap();
    let mut board = IoBoard::new(MockSampler::new(0xFF), MockLed::new(), &timer, &config);

    assert_eq!(board.apply_relay_mask(0b1111_1110), 0b10);
    assert_eq!(board.indicator_color(), RELAY_PALETTE[1]);

    assert_eq!(board.set_relay(5, true), 0b10);
    assert_eq!(board.set_relay(0, true), 0b11);
    assert_eq!(board.indicator_color(), WHITE);
}

#[test]
fn service_runs_heartbeat_from_time_source() {
    let timer = MockTimeSource::starting_at(Millis(1000));
    let mut board = IoBoard::new(
        MockSampler::new(0xFF),
        MockLed::new(),
        &timer,
        &BoardConfig::default(),
    );

    timer.advance(4999);
    assert_eq!(board.service(), Millis(5999));
    assert_eq!(board.indicator_color(), BLACK);

    timer.advance(1);
    board.service();
    assert_eq!(board.indicator_color(), WHITE);

    timer.advance(120);
    board.service();
    assert_eq!(board.indicator_color(), BLACK);
    assert_eq!(board.indicator().next_beat_deadline(), Millis(11_120));
}

#[test]
fn relay_activity_interrupts_heartbeat() {
    let timer = MockTimeSource::new();
    let mut board = IoBoard::new(
        MockSampler::new(0xFF),
        MockLed::new(),
        &timer,
        &BoardConfig::default(),
    );

    timer.set_time(Millis(5000));
    board.service();
    assert_eq!(board.indicator_state(), IndicatorState::IdlePulsing);

    board.apply_relay_mask(0b0001_0000);
    assert_eq!(board.indicator_color(), RELAY_PALETTE[4]);

    timer.advance(10_000);
    board.service();
    assert_eq!(board.indicator_color(), RELAY_PALETTE[4]);
}

#[test]
fn poll_inputs_samples_once() {
    let timer = MockTimeSource::new();
    let mut board = IoBoard::new(
        MockSampler::new(0b1111_0000),
        MockLed::new(),
        &timer,
        &BoardConfig::default(),
    );

    assert_eq!(board.poll_inputs(), 0b0000_1111);
    assert_eq!(board.translator().sampler().reads(), 1);

    board.translator_mut().sampler_mut().set_raw(0xFF);
    assert_eq!(board.poll_inputs(), 0);
}

#[test]
fn commands_hold_until_next_relay_update() {
    let timer = MockTimeSource::new();
    let mut board = IoBoard::new(
        MockSampler::new(0xFF),
        MockLed::new(),
        &timer,
        &BoardConfig::default(),
    );

    board.command(IndicatorCommand::rgb(0, 10, 20));
    timer.advance(60_000);
    board.service();
    assert_eq!(board.indicator_color(), rgb(0, 10, 20));

    board.apply_relay_mask(0);
    assert_eq!(board.indicator_color(), BLACK);
}

#[test]
fn dimmed_led_scales_rendered_colors() {
    let timer = MockTimeSource::new();
    let config = BoardConfig::default();
    let led = Dimmed::new(MockLed::new(), config.brightness());
    let mut board = IoBoard::new(MockSampler::new(0xFF), led, &timer, &config);

    board.apply_relay_mask(0xFF);
    // 255 * 64 / 255
    assert_eq!(board.indicator().led().inner().last_shown(), Some(rgb(64, 64, 64)));
    // Commanded color is not scaled
    assert_eq!(board.indicator_color(), WHITE);

    board.apply_relay_mask(0b0000_0010);
    assert_eq!(board.indicator().led().inner().last_shown(), Some(rgb(64, 32, 0)));
}
