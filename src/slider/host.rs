//! The view root a slider is mounted into.
//!
//! A host owns the track, slides, buttons, counter and indicator container.
//! The slider never creates any of those except indicators; it only calls
//! the methods below.

use std::time::Duration;

use super::gesture::{PointerEvent, PointerKind, TouchEvent, TouchKind};

/// Length of the eased snap applied whenever the track is re-rendered.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// How the track moves to a newly written offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump straight to the new offset.
    #[default]
    None,
    /// Ease out over the given duration.
    EaseOut(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Where a listener is attached.
///
/// Button, indicator and start sources belong to the slider's own elements;
/// move, end and resize sources are window-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    PrevButton,
    NextButton,
    Indicator(usize),
    Resize,
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Prev,
    Next,
    Indicator(usize),
}

/// Input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Click(ClickTarget),
    Resize,
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Interval(TimerId),
}

impl HostEvent {
    /// Listener source this event is dispatched through. Timer ticks have
    /// no listener; they are matched by [`TimerId`] instead.
    pub fn source(&self) -> Option<EventSource> {
        match self {
            HostEvent::Click(ClickTarget::Prev) => Some(EventSource::PrevButton),
            HostEvent::Click(ClickTarget::Next) => Some(EventSource::NextButton),
            HostEvent::Click(ClickTarget::Indicator(index)) => {
                Some(EventSource::Indicator(*index))
            }
            HostEvent::Resize => Some(EventSource::Resize),
            HostEvent::Pointer(pointer) => Some(match pointer.kind {
                PointerKind::Down => EventSource::PointerDown,
                PointerKind::Move => EventSource::PointerMove,
                PointerKind::Up => EventSource::PointerUp,
            }),
            HostEvent::Touch(touch) => Some(match touch.kind {
                TouchKind::Start => EventSource::TouchStart,
                TouchKind::Move => EventSource::TouchMove,
                TouchKind::End => EventSource::TouchEnd,
            }),
            HostEvent::Interval(_) => None,
        }
    }
}

/// Structural contract a slider relies on.
///
/// Missing regions (no counter, no indicator container) are the host's
/// concern: implementations may ignore writes to regions they lack.
pub trait SliderHost {
    /// Number of slide elements under the track.
    fn slide_len(&self) -> usize;

    /// Width of the visible track area.
    fn viewport_width(&self) -> f64;

    /// Offset the track is currently drawn at, including any transition in
    /// flight.
    fn rendered_offset(&self) -> f64;

    /// Width of each slide as a percentage of the viewport.
    fn set_slide_basis(&mut self, percent: f64);

    fn set_track_transition(&mut self, transition: Transition);

    /// `None` removes the transform entirely.
    fn set_track_offset(&mut self, offset: Option<f64>);

    fn set_counter_text(&mut self, text: &str);

    fn clear_indicators(&mut self);

    fn append_indicator(&mut self, active: bool);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    fn add_listener(&mut self, source: EventSource) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    /// Start a repeating timer that delivers [`HostEvent::Interval`] every
    /// `every`, first firing one period from now.
    fn start_interval(&mut self, every: Duration) -> TimerId;

    /// Stopping an unknown or already stopped timer is a no-op.
    fn clear_interval(&mut self, id: TimerId);
}
