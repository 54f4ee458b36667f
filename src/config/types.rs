use serde::{Deserialize, Serialize};

use crate::slider::SliderOptions;

/// Root deck container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub sliders: Vec<SliderConfig>,
}

/// One slider panel in the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Unique identifier (e.g., "players", "stages").
    pub id: String,
    /// Panel title; falls back to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub options: SliderOptions,
    pub slides: Vec<SlideContent>,
}

/// Text shown inside one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl SlideContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl SliderConfig {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

impl Default for Config {
    /// Two panels: an auto-playing looping slider without indicators and a
    /// manual slider with indicators.
    fn default() -> Self {
        Self {
            sliders: vec![
                SliderConfig {
                    id: "players".to_string(),
                    title: Some("Players".to_string()),
                    options: SliderOptions::new()
                        .with_slide_count(1)
                        .with_auto_play(true)
                        .with_loop(true)
                        .with_auto_play_interval_ms(4000)
                        .with_indicators(false),
                    slides: vec![
                        SlideContent::new("Player 1", "Opening round"),
                        SlideContent::new("Player 2", "Second seed"),
                        SlideContent::new("Player 3", "Wildcard entry"),
                        SlideContent::new("Player 4", "Returning champion"),
                        SlideContent::new("Player 5", "Qualifier"),
                        SlideContent::new("Player 6", "Local favourite"),
                    ],
                },
                SliderConfig {
                    id: "stages".to_string(),
                    title: Some("Stages".to_string()),
                    options: SliderOptions::new()
                        .with_slide_count(1)
                        .with_auto_play(false)
                        .with_loop(false)
                        .with_indicators(true),
                    slides: vec![
                        SlideContent::new("Stage 1", "Registration"),
                        SlideContent::new("Stage 2", "Group matches"),
                        SlideContent::new("Stage 3", "Quarter finals"),
                        SlideContent::new("Stage 4", "Semi finals"),
                        SlideContent::new("Stage 5", "Final"),
                    ],
                },
            ],
        }
    }
}
