//! Terminal host: mounts configured sliders into a ratatui screen.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod panel;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod terminal_guard;
pub mod theme;
