//! init / destroy and listener bookkeeping.

mod common;

use carousel::slider::{
    ClickTarget, EventSource, HostEvent, PointerEvent, Slider, SliderOptions,
};
use common::*;

#[test]
fn operations_before_init_do_nothing() {
    let mut slider = Slider::new(RecordingHost::new(4, 1000.0), SliderOptions::new());
    slider.go_to_next();
    slider.go_to_index(2);
    slider.render();
    slider.handle_event(&HostEvent::Click(ClickTarget::Next));

    assert!(!slider.is_initialized());
    assert_eq!(slider.current_index(), 0);
    let host = slider.container();
    assert_eq!(host.offset, None);
    assert_eq!(host.counter, None);
    assert!(host.listeners.is_empty());
}

#[test]
fn init_binds_controls_and_indicators() {
    let slider = mounted(5, SliderOptions::new());
    let host = slider.container();
    assert_eq!(host.listeners.len(), 9 + 5);
    for source in [
        EventSource::PrevButton,
        EventSource::NextButton,
        EventSource::Resize,
        EventSource::PointerDown,
        EventSource::PointerMove,
        EventSource::PointerUp,
        EventSource::TouchStart,
        EventSource::TouchMove,
        EventSource::TouchEnd,
    ] {
        assert!(host.is_listening(source), "{source:?} not bound");
    }
    assert!(host.is_listening(EventSource::Indicator(4)));
    assert_eq!(host.indicators.len(), 5);
}

#[test]
fn second_init_is_a_no_op() {
    let mut slider = mounted(3, SliderOptions::new().with_auto_play(true));
    slider.go_to_next();
    slider.init();

    assert_eq!(slider.current_index(), 1);
    let host = slider.container();
    assert_eq!(host.listeners.len(), 9 + 3);
    assert_eq!(host.timers.len(), 1);
    assert_eq!(host.indicators.len(), 3);
}

#[test]
fn hidden_indicators_skip_dots_and_listeners() {
    let slider = mounted(4, SliderOptions::new().with_indicators(false));
    let host = slider.container();
    assert!(host.indicators.is_empty());
    assert_eq!(host.listeners.len(), 9);
    assert!(!host.is_listening(EventSource::Indicator(0)));
}

#[test]
fn indicator_click_without_dots_is_ignored() {
    let mut slider = mounted(4, SliderOptions::new().with_indicators(false));
    slider.handle_event(&HostEvent::Click(ClickTarget::Indicator(2)));
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn destroy_releases_everything_init_bound() {
    let mut slider = mounted(4, SliderOptions::new().with_auto_play(true));
    let bound = slider.container().listeners.len();
    let timer = slider.container().live_timer();

    slider.destroy();

    assert!(!slider.is_initialized());
    let host = slider.container();
    assert!(host.listeners.is_empty());
    assert_eq!(host.removed_listeners.len(), bound);
    assert!(host.timers.is_empty());
    assert_eq!(host.cleared_timers, timer.into_iter().collect::<Vec<_>>());
    assert!(host.indicators.is_empty());
    assert_eq!(host.offset, None);
}

#[test]
fn destroy_keeps_indicator_container_when_hidden() {
    let mut host = RecordingHost::new(2, 1000.0);
    host.indicators = vec![false, false, false];
    let mut slider = Slider::new(host, SliderOptions::new().with_indicators(false));
    slider.init();
    slider.destroy();
    assert_eq!(slider.container().indicators.len(), 3);
}

#[test]
fn destroy_twice_is_a_no_op() {
    let mut slider = mounted(3, SliderOptions::new());
    slider.destroy();
    let removed = slider.container().removed_listeners.len();
    slider.destroy();
    assert_eq!(slider.container().removed_listeners.len(), removed);
}

#[test]
fn destroy_before_init_is_a_no_op() {
    let mut slider = Slider::new(RecordingHost::new(3, 1000.0), SliderOptions::new());
    slider.destroy();
    assert!(slider.container().removed_listeners.is_empty());
}

#[test]
fn events_after_destroy_are_ignored() {
    let mut slider = mounted(4, SliderOptions::new());
    slider.destroy();

    slider.go_to_next();
    slider.handle_event(&HostEvent::Click(ClickTarget::Next));
    slider.handle_event(&HostEvent::Pointer(PointerEvent::down(10.0)));

    assert_eq!(slider.current_index(), 0);
    assert!(!slider.is_dragging());
    assert_eq!(slider.container().offset, None);
}

#[test]
fn destroy_mid_drag_clears_drag() {
    let mut slider = mounted(4, SliderOptions::new());
    slider.handle_event(&HostEvent::Pointer(PointerEvent::down(10.0)));
    assert!(slider.is_dragging());
    slider.destroy();
    assert!(!slider.is_dragging());
}

#[test]
fn reinit_after_destroy_rebinds() {
    let mut slider = mounted(3, SliderOptions::new());
    slider.go_to_next();
    slider.destroy();
    slider.init();

    assert!(slider.is_initialized());
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.container().listeners.len(), 9 + 3);
    assert_eq!(slider.container().counter.as_deref(), Some("1 / 3"));
}

#[test]
fn init_reads_slides_present_at_init() {
    let mut slider = Slider::new(RecordingHost::new(2, 1000.0), SliderOptions::new());
    slider.container_mut().slides = 6;
    slider.init();
    assert_eq!(slider.slide_len(), 6);
    assert_eq!(slider.container().counter.as_deref(), Some("1 / 6"));
}

#[test]
fn dropping_initialized_slider_is_clean() {
    let slider = mounted(3, SliderOptions::new().with_auto_play(true));
    assert!(slider.is_auto_playing());
    drop(slider);
}
