use crate::ui::app::SliderPanel;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// One `title index/len` entry per panel.
    pub fn widget(&self, panels: &[SliderPanel]) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Carousel",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];
        for panel in panels {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} {}", panel.title, panel.slider.state().counter_text()),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
