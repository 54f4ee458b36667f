//! Reducer for slider navigation and drag transitions.

use crate::mvi::Reducer;

use super::intent::SliderIntent;
use super::state::{DragState, SliderState};

/// Fraction of one slide's width a drag must exceed to change slides.
pub const DRAG_THRESHOLD: f64 = 0.25;

/// What a drag release commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Track moved right past the threshold, revealing the previous slide.
    Previous,
    /// Track moved left past the threshold.
    Next,
    SnapBack,
}

impl Release {
    /// Comparison is strict: a delta exactly on the threshold snaps back.
    pub fn classify(delta: f64, slide_width: f64) -> Self {
        let threshold = slide_width * DRAG_THRESHOLD;
        if delta > threshold {
            Release::Previous
        } else if delta < -threshold {
            Release::Next
        } else {
            Release::SnapBack
        }
    }
}

/// Pure reducer; writing the result to the host is the caller's job.
pub struct SliderReducer;

impl Reducer for SliderReducer {
    type State = SliderState;
    type Intent = SliderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SliderIntent::Next => SliderState {
                current_index: next_index(&state),
                ..state
            },

            SliderIntent::Prev => SliderState {
                current_index: prev_index(&state),
                ..state
            },

            SliderIntent::GoTo { index } if index < state.len => SliderState {
                current_index: index,
                ..state
            },
            SliderIntent::GoTo { .. } => state,

            // A second start re-anchors an in-flight drag.
            SliderIntent::DragStart { x, offset } => SliderState {
                drag: DragState::Dragging {
                    anchor_x: x,
                    base_offset: offset,
                    live_offset: offset,
                },
                ..state
            },

            SliderIntent::DragMove { x } => match state.drag {
                DragState::Dragging {
                    anchor_x,
                    base_offset,
                    ..
                } => SliderState {
                    drag: DragState::Dragging {
                        anchor_x,
                        base_offset,
                        live_offset: base_offset + (x - anchor_x),
                    },
                    ..state
                },
                DragState::Idle => state,
            },

            SliderIntent::DragEnd { slide_width } => match state.drag {
                DragState::Dragging {
                    base_offset,
                    live_offset,
                    ..
                } => {
                    let idle = SliderState {
                        drag: DragState::Idle,
                        ..state
                    };
                    match Release::classify(live_offset - base_offset, slide_width) {
                        Release::Previous => Self::reduce(idle, SliderIntent::Prev),
                        Release::Next => Self::reduce(idle, SliderIntent::Next),
                        Release::SnapBack => idle,
                    }
                }
                DragState::Idle => state,
            },
        }
    }
}

fn next_index(state: &SliderState) -> usize {
    if state.len == 0 {
        return 0;
    }
    if state.looping {
        (state.current_index + 1) % state.len
    } else {
        (state.current_index + 1).min(state.len - 1)
    }
}

fn prev_index(state: &SliderState) -> usize {
    if state.len == 0 {
        return 0;
    }
    if state.looping {
        (state.current_index + state.len - 1) % state.len
    } else {
        state.current_index.saturating_sub(1)
    }
}
