use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Click ◀ ▶ or dots │ Drag the track │ q: Quit";

/// Live status shown between the hints and the version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FooterStatus {
    /// Panels with a running auto-play timer.
    pub auto_playing: usize,
    pub dragging: bool,
}

impl FooterStatus {
    fn label(&self) -> String {
        match (self.dragging, self.auto_playing) {
            (true, _) => "dragging ".to_string(),
            (false, 0) => String::new(),
            (false, 1) => "auto-play: 1 panel ".to_string(),
            (false, n) => format!("auto-play: {n} panels "),
        }
    }
}

pub struct Footer {
    status: FooterStatus,
}

impl Footer {
    pub fn new(status: FooterStatus) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = self.status.label();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let used = HINTS.chars().count() + status.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(ACCENT)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
