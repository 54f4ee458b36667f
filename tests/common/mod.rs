//! Shared test utilities: a recording slider host.

#![allow(dead_code, unused_imports)]

use carousel::slider::{
    EventSource, HostEvent, ListenerId, Slider, SliderHost, SliderOptions, TimerId, Transition,
};
use std::collections::BTreeMap;
use std::time::Duration;

/// In-memory container that records everything a slider writes to it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub slides: usize,
    pub width: f64,
    pub basis: Option<f64>,
    pub transition: Transition,
    pub offset: Option<f64>,
    pub counter: Option<String>,
    pub indicators: Vec<bool>,
    pub listeners: BTreeMap<ListenerId, EventSource>,
    pub removed_listeners: Vec<ListenerId>,
    pub timers: BTreeMap<TimerId, Duration>,
    pub cleared_timers: Vec<TimerId>,
    next_id: u64,
}

impl RecordingHost {
    pub fn new(slides: usize, width: f64) -> Self {
        Self {
            slides,
            width,
            ..Self::default()
        }
    }

    pub fn is_listening(&self, source: EventSource) -> bool {
        self.listeners.values().any(|bound| *bound == source)
    }

    /// The single live timer, if any.
    pub fn live_timer(&self) -> Option<TimerId> {
        self.timers.keys().next().copied()
    }
}

impl SliderHost for RecordingHost {
    fn slide_len(&self) -> usize {
        self.slides
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn rendered_offset(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    fn set_slide_basis(&mut self, percent: f64) {
        self.basis = Some(percent);
    }

    fn set_track_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    fn set_track_offset(&mut self, offset: Option<f64>) {
        self.offset = offset;
    }

    fn set_counter_text(&mut self, text: &str) {
        self.counter = Some(text.to_string());
    }

    fn clear_indicators(&mut self) {
        self.indicators.clear();
    }

    fn append_indicator(&mut self, active: bool) {
        self.indicators.push(active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = active;
        }
    }

    fn add_listener(&mut self, source: EventSource) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, source);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_some() {
            self.removed_listeners.push(id);
        }
    }

    fn start_interval(&mut self, every: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.insert(id, every);
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            self.cleared_timers.push(id);
        }
    }
}

/// Initialized slider over `slides` slides in a 1000-wide viewport.
pub fn mounted(slides: usize, options: SliderOptions) -> Slider<RecordingHost> {
    let mut slider = Slider::new(RecordingHost::new(slides, 1000.0), options);
    slider.init();
    slider
}

/// Fire the slider's auto-play timer once.
pub fn tick(slider: &mut Slider<RecordingHost>) {
    let timer = slider
        .container()
        .live_timer()
        .expect("auto-play timer should be running");
    slider.handle_event(&HostEvent::Interval(timer));
}
