//! Slider options and their resolution into an immutable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SLIDE_COUNT: usize = 3;
const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 3000;

/// Caller-supplied options. Every field is optional.
///
/// `slide_count`, `auto_play`, `loop` and `auto_play_interval_ms` fall back to
/// their defaults when absent *or* falsy (zero / `false`). `show_indicators`
/// only falls back when absent, so an explicit `false` turns indicators off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderOptions {
    /// Slides visible per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_indicators: Option<bool>,
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slide_count(mut self, count: usize) -> Self {
        self.slide_count = Some(count);
        self
    }

    pub fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play = Some(enabled);
        self
    }

    pub fn with_loop(mut self, enabled: bool) -> Self {
        self.looping = Some(enabled);
        self
    }

    pub fn with_auto_play_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_play_interval_ms = Some(interval_ms);
        self
    }

    pub fn with_indicators(mut self, shown: bool) -> Self {
        self.show_indicators = Some(shown);
        self
    }

    /// Merge with defaults.
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            slide_count: self
                .slide_count
                .filter(|count| *count > 0)
                .unwrap_or(DEFAULT_SLIDE_COUNT),
            auto_play: self.auto_play.unwrap_or(false),
            looping: self.looping.unwrap_or(false),
            auto_play_interval: Duration::from_millis(
                self.auto_play_interval_ms
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_AUTO_PLAY_INTERVAL_MS),
            ),
            show_indicators: self.show_indicators.unwrap_or(true),
        }
    }
}

/// Options after defaults have been applied. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    slide_count: usize,
    auto_play: bool,
    looping: bool,
    auto_play_interval: Duration,
    show_indicators: bool,
}

impl ResolvedOptions {
    /// Slides visible per page, always at least one.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn auto_play_interval(&self) -> Duration {
        self.auto_play_interval
    }

    pub fn show_indicators(&self) -> bool {
        self.show_indicators
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        SliderOptions::default().resolve()
    }
}
