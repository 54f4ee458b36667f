use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns taken by one indicator dot and its gap.
pub const INDICATOR_STRIDE: u16 = 2;
const BUTTON_WIDTH: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Screen regions of one slider panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// Bordered frame around the whole panel.
    pub frame: Rect,
    pub track: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub counter: Rect,
    pub indicators: Rect,
}

/// Stack `count` panels vertically inside `body`.
pub fn panel_layouts(body: Rect, count: usize) -> Vec<PanelLayout> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body)
        .iter()
        .map(|frame| panel_layout(*frame))
        .collect()
}

/// Track on top, then a controls row (`◀ counter ▶`), then the dots.
pub fn panel_layout(frame: Rect) -> PanelLayout {
    let inner = Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(1),
        width: frame.width.saturating_sub(2),
        height: frame.height.saturating_sub(2),
    };
    let track_height = inner.height.saturating_sub(2);
    let controls = Rect {
        y: inner.y + track_height,
        height: inner.height.saturating_sub(track_height).min(1),
        ..inner
    };
    let indicators = Rect {
        y: controls.y + controls.height,
        height: inner
            .height
            .saturating_sub(track_height + controls.height)
            .min(1),
        ..inner
    };

    let button_width = BUTTON_WIDTH.min(controls.width / 2);
    let prev = Rect {
        width: button_width,
        ..controls
    };
    let next = Rect {
        x: controls.x + controls.width - button_width,
        width: button_width,
        ..controls
    };
    let counter = Rect {
        x: prev.x + button_width,
        width: controls.width.saturating_sub(button_width * 2),
        ..controls
    };

    PanelLayout {
        frame,
        track: Rect {
            height: track_height,
            ..inner
        },
        prev,
        next,
        counter,
        indicators,
    }
}

impl PanelLayout {
    /// Centered strip holding `count` indicator dots.
    pub fn indicator_strip(&self, count: usize) -> Rect {
        let wanted = (count as u16).saturating_mul(INDICATOR_STRIDE);
        let width = wanted.min(self.indicators.width);
        Rect {
            x: self.indicators.x + (self.indicators.width - width) / 2,
            width,
            ..self.indicators
        }
    }

    /// Indicator under the cell at (`col`, `row`), if any.
    pub fn indicator_at(&self, col: u16, row: u16, count: usize) -> Option<usize> {
        let strip = self.indicator_strip(count);
        if !contains(strip, col, row) {
            return None;
        }
        let index = usize::from((col - strip.x) / INDICATOR_STRIDE);
        (index < count).then_some(index)
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
