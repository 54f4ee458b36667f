//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Navigation requests (button clicks, indicator clicks, timer ticks)
/// - Gesture steps (drag start, move, release)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
