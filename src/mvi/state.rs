//! Base trait for reducer state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to clone
/// - Self-contained (all data needed to render)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
