//! Carousel core.
//!
//! [`Slider`] owns the slide index, the drag state machine and the
//! init/destroy lifecycle. Everything visual goes through [`SliderHost`].
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current index and drag state (Idle → Dragging → Idle)
//! - `intent.rs` - Navigation and gesture steps
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `component.rs` - Lifecycle, event routing, rendering into the host

mod bindings;
mod component;
mod gesture;
mod host;
mod intent;
mod options;
mod reducer;
mod state;

pub use bindings::BoundHandlers;
pub use component::Slider;
pub use gesture::{
    Gesture, GestureSource, PointerEvent, PointerKind, TouchEvent, TouchKind, TouchPoint,
};
pub use host::{
    ClickTarget, EventSource, HostEvent, ListenerId, SliderHost, TimerId, Transition,
    TRANSITION_DURATION,
};
pub use intent::SliderIntent;
pub use options::{ResolvedOptions, SliderOptions};
pub use reducer::{Release, SliderReducer, DRAG_THRESHOLD};
pub use state::{DragState, SliderState};
