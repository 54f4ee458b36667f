//! Terminal-backed slider container.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::SlideContent;
use crate::slider::{EventSource, ListenerId, SliderHost, TimerId, Transition};
use crate::ui::scheduler::IntervalScheduler;

/// Offset tween started by an eased track write.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Animation {
    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Cubic ease-out.
    fn offset_at(&self, now: Instant) -> f64 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Container for one slider panel: the slides, the track transform, the
/// counter text and the indicator strip, measured in terminal columns.
pub struct PanelHost {
    slides: Vec<SlideContent>,
    viewport_width: u16,
    basis_percent: f64,
    offset: Option<f64>,
    transition: Transition,
    animation: Option<Animation>,
    counter: String,
    indicators: Vec<bool>,
    listeners: HashMap<ListenerId, EventSource>,
    next_listener: u64,
    scheduler: IntervalScheduler,
}

impl PanelHost {
    pub fn new(slides: Vec<SlideContent>, scheduler: IntervalScheduler) -> Self {
        Self {
            slides,
            viewport_width: 0,
            basis_percent: 100.0,
            offset: None,
            transition: Transition::None,
            animation: None,
            counter: String::new(),
            indicators: Vec::new(),
            listeners: HashMap::new(),
            next_listener: 0,
            scheduler,
        }
    }

    pub fn slides(&self) -> &[SlideContent] {
        &self.slides
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Width of one slide in columns.
    pub fn slide_width(&self) -> f64 {
        f64::from(self.viewport_width) * self.basis_percent / 100.0
    }

    /// Track offset at `now`, following any transition in flight.
    pub fn offset_at(&self, now: Instant) -> f64 {
        match &self.animation {
            Some(animation) if !animation.is_finished(now) => animation.offset_at(now),
            _ => self.offset.unwrap_or(0.0),
        }
    }

    /// Offset last written, ignoring transitions. `None` when unset.
    pub fn target_offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| !animation.is_finished(now))
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    pub fn is_listening(&self, source: EventSource) -> bool {
        self.listeners.values().any(|bound| *bound == source)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn active_timers(&self) -> usize {
        self.scheduler.active()
    }
}

impl SliderHost for PanelHost {
    fn slide_len(&self) -> usize {
        self.slides.len()
    }

    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport_width)
    }

    fn rendered_offset(&self) -> f64 {
        self.offset_at(Instant::now())
    }

    fn set_slide_basis(&mut self, percent: f64) {
        self.basis_percent = percent;
    }

    fn set_track_transition(&mut self, transition: Transition) {
        self.transition = transition;
        // Freeze wherever the track currently is.
        if transition == Transition::None && self.animation.is_some() {
            let current = self.rendered_offset();
            self.animation = None;
            self.offset = Some(current);
        }
    }

    fn set_track_offset(&mut self, offset: Option<f64>) {
        let Some(to) = offset else {
            self.offset = None;
            self.animation = None;
            return;
        };

        self.animation = match self.transition {
            Transition::EaseOut(duration) if !duration.is_zero() => Some(Animation {
                from: self.rendered_offset(),
                to,
                started: Instant::now(),
                duration,
            }),
            _ => None,
        };
        self.offset = Some(to);
    }

    fn set_counter_text(&mut self, text: &str) {
        self.counter.clear();
        self.counter.push_str(text);
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
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, source);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn start_interval(&mut self, every: Duration) -> TimerId {
        self.scheduler.start(every)
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.scheduler.cancel(id);
    }
}

impl std::fmt::Debug for PanelHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelHost")
            .field("slides", &self.slides.len())
            .field("viewport_width", &self.viewport_width)
            .field("offset", &self.offset)
            .field("counter", &self.counter)
            .field("indicators", &self.indicators)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
