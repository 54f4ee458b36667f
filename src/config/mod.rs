//! Deck configuration: which sliders to mount and what they show.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SlideContent, SliderConfig};
