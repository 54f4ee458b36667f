//! Auto-play timer behavior against a recording host.

mod common;

use std::time::Duration;

use carousel::slider::{HostEvent, SliderOptions, TimerId};
use common::*;

fn auto(slides: usize) -> carousel::slider::Slider<RecordingHost> {
    mounted(
        slides,
        SliderOptions::new()
            .with_auto_play(true)
            .with_auto_play_interval_ms(4000),
    )
}

#[test]
fn interval_is_registered_with_configured_period() {
    let slider = auto(5);
    let host = slider.container();
    assert_eq!(host.timers.len(), 1);
    assert_eq!(host.timers.values().next(), Some(&Duration::from_millis(4000)));
    assert!(slider.is_auto_playing());
}

#[test]
fn zero_interval_falls_back_to_default() {
    let slider = mounted(
        3,
        SliderOptions::new()
            .with_auto_play(true)
            .with_auto_play_interval_ms(0),
    );
    assert_eq!(
        slider.container().timers.values().next(),
        Some(&Duration::from_millis(3000))
    );
}

#[test]
fn each_tick_advances_one_slide() {
    let mut slider = auto(5);
    for _ in 0..3 {
        tick(&mut slider);
    }
    assert_eq!(slider.current_index(), 3);
    assert_eq!(slider.container().counter.as_deref(), Some("4 / 5"));
}

#[test]
fn ticks_stop_at_last_slide_without_loop() {
    let mut slider = auto(3);
    for _ in 0..7 {
        tick(&mut slider);
    }
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn ticks_wrap_with_loop() {
    let mut slider = mounted(
        3,
        SliderOptions::new().with_auto_play(true).with_loop(true),
    );
    for _ in 0..4 {
        tick(&mut slider);
    }
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn unknown_timer_is_ignored() {
    let mut slider = auto(5);
    slider.handle_event(&HostEvent::Interval(TimerId(9_999)));
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn timer_from_previous_mount_is_ignored() {
    let mut slider = auto(5);
    let stale = slider.container().live_timer().expect("timer");
    slider.destroy();
    slider.init();

    assert_ne!(slider.container().live_timer(), Some(stale));
    slider.handle_event(&HostEvent::Interval(stale));
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn no_timer_without_auto_play() {
    let slider = mounted(3, SliderOptions::new());
    assert!(slider.container().timers.is_empty());
    assert!(!slider.is_auto_playing());
}

#[test]
fn manual_navigation_keeps_timer() {
    let mut slider = auto(5);
    slider.go_to_index(2);
    tick(&mut slider);
    assert_eq!(slider.current_index(), 3);
    assert_eq!(slider.container().timers.len(), 1);
}
