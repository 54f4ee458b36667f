//! Intents for the slider reducer.

use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderIntent {
    Next,
    Prev,
    /// Jump to a slide (indicator click). Out-of-range indices are ignored.
    GoTo { index: usize },
    /// Pointer went down on the track at `x` while it was drawn at `offset`.
    DragStart { x: f64, offset: f64 },
    /// Pointer moved to `x`. Ignored unless dragging.
    DragMove { x: f64 },
    /// Pointer released. `slide_width` is the width of one visible slide.
    DragEnd { slide_width: f64 },
}

impl Intent for SliderIntent {}
