//! Carousel: a slide viewer component with button, indicator, drag and
//! auto-play navigation, plus a terminal host that mounts it.

pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod slider;
pub mod ui;
