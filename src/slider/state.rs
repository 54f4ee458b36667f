//! Index and drag state for one slider.

use crate::mvi::UiState;

/// Slide shown after every init.
const INITIAL_INDEX: usize = 0;

/// Drag gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Track follows the pointer 1:1.
    Dragging {
        /// Pointer x where the drag began.
        anchor_x: f64,
        /// Track offset when the drag began.
        base_offset: f64,
        /// Offset currently applied to the track.
        live_offset: f64,
    },
}

/// Navigation state.
///
/// `current_index` stays in `[0, len - 1]` (and is 0 when `len == 0`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderState {
    pub current_index: usize,
    pub len: usize,
    pub looping: bool,
    pub drag: DragState,
}

impl UiState for SliderState {}

impl SliderState {
    pub fn new(len: usize, looping: bool) -> Self {
        Self {
            current_index: INITIAL_INDEX,
            len,
            looping,
            drag: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Offset applied by an active drag.
    pub fn live_offset(&self) -> Option<f64> {
        match self.drag {
            DragState::Dragging { live_offset, .. } => Some(live_offset),
            DragState::Idle => None,
        }
    }

    /// Human-readable position, e.g. `"2 / 5"`.
    pub fn counter_text(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index + 1, self.len)
    }
}
