use crate::config::SlideContent;
use crate::ui::app::{App, SliderPanel};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, PanelLayout};
use crate::ui::panel::PanelHost;
use crate::ui::theme::{
    ACCENT, BUTTON, GLOBAL_BORDER, HEADER_TEXT, INDICATOR_ACTIVE, INDICATOR_IDLE, SLIDE_BORDER,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let now = Instant::now();

    frame.render_widget(Header::new().widget(app.panels()), header);
    frame.render_widget(Clear, body);
    for (panel, layout) in app.panels().iter().zip(app.layouts()) {
        draw_panel(frame, panel, layout, now);
    }
    frame.render_widget(Footer::new(app.footer_status()).widget(footer), footer);
}

fn draw_panel(frame: &mut Frame<'_>, panel: &SliderPanel, layout: &PanelLayout, now: Instant) {
    let host = panel.slider.container();

    frame.render_widget(
        Block::default()
            .title(Span::styled(
                format!(" {} ", panel.title),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        layout.frame,
    );
    frame.render_widget(TrackWidget::new(host, now), layout.track);

    let button_style = Style::default().fg(BUTTON).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(" ◀ ").style(button_style),
        layout.prev,
    );
    frame.render_widget(
        Paragraph::new(" ▶ ").style(button_style),
        layout.next,
    );
    frame.render_widget(
        Paragraph::new(host.counter().to_string())
            .style(Style::default().fg(HEADER_TEXT))
            .alignment(Alignment::Center),
        layout.counter,
    );

    let indicators = host.indicators();
    if !indicators.is_empty() {
        frame.render_widget(
            Paragraph::new(indicator_line(indicators)),
            layout.indicator_strip(indicators.len()),
        );
    }
}

fn indicator_line(indicators: &[bool]) -> Line<'static> {
    let spans = indicators
        .iter()
        .map(|active| {
            if *active {
                Span::styled("● ", Style::default().fg(INDICATOR_ACTIVE))
            } else {
                Span::styled("○ ", Style::default().fg(INDICATOR_IDLE))
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Draws every slide at its translated position, clipped to the track.
pub struct TrackWidget<'a> {
    host: &'a PanelHost,
    now: Instant,
}

impl<'a> TrackWidget<'a> {
    pub fn new(host: &'a PanelHost, now: Instant) -> Self {
        Self { host, now }
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slide_width = self.host.slide_width();
        if area.width == 0 || area.height == 0 || slide_width < 1.0 {
            return;
        }
        let offset = self.host.offset_at(self.now);
        let track_width = i32::from(area.width);

        for (index, slide) in self.host.slides().iter().enumerate() {
            // Round edges, not widths, so positions match the unrounded offset.
            let left = (index as f64 * slide_width + offset).round() as i32;
            let right = ((index + 1) as f64 * slide_width + offset).round() as i32;
            if right <= 0 || left >= track_width || right <= left {
                continue;
            }
            let width = (right - left) as u16;

            // Render off-screen, then copy the visible columns.
            let mut scratch = Buffer::empty(Rect::new(0, 0, width, area.height));
            slide_widget(slide).render(scratch.area, &mut scratch);

            for col in 0..width {
                let x = left + i32::from(col);
                if x < 0 || x >= track_width {
                    continue;
                }
                for row in 0..area.height {
                    let target = (area.x + x as u16, area.y + row);
                    if let (Some(src), Some(dst)) = (scratch.cell((col, row)), buf.cell_mut(target))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

fn slide_widget(slide: &SlideContent) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled(
            slide.title.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(slide.body.as_str()),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SLIDE_BORDER)),
        )
}
