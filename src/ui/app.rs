use crate::config::Config;
use crate::slider::{ClickTarget, HostEvent, PointerEvent, Slider, TimerId};
use crate::ui::events::AppEventSender;
use crate::ui::footer::FooterStatus;
use crate::ui::layout::{contains, layout_regions, panel_layouts, PanelLayout};
use crate::ui::panel::PanelHost;
use crate::ui::scheduler::IntervalScheduler;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

/// One mounted slider and its label.
pub struct SliderPanel {
    pub id: String,
    pub title: String,
    pub slider: Slider<PanelHost>,
}

/// What a left mouse press landed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hit {
    Control(ClickTarget),
    Track,
}

pub struct App {
    should_quit: bool,
    area: Rect,
    panels: Vec<SliderPanel>,
    layouts: Vec<PanelLayout>,
}

impl App {
    /// Build one inert panel per configured slider. Call [`App::start`] to
    /// lay them out and initialize them.
    pub fn new(config: &Config, tx: AppEventSender) -> Self {
        let panels = config
            .sliders
            .iter()
            .enumerate()
            .map(|(index, slider)| {
                let host = PanelHost::new(
                    slider.slides.clone(),
                    IntervalScheduler::new(index, tx.clone()),
                );
                SliderPanel {
                    id: slider.id.clone(),
                    title: slider.display_title().to_string(),
                    slider: Slider::new(host, slider.options.clone()),
                }
            })
            .collect();

        Self {
            should_quit: false,
            area: Rect::default(),
            panels,
            layouts: Vec::new(),
        }
    }

    pub fn start(&mut self, cols: u16, rows: u16) {
        self.relayout(cols, rows);
        for panel in &mut self.panels {
            panel.slider.init();
            tracing::info!(id = %panel.id, "panel mounted");
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panels(&self) -> &[SliderPanel] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&SliderPanel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    pub fn layouts(&self) -> &[PanelLayout] {
        &self.layouts
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn footer_status(&self) -> FooterStatus {
        FooterStatus {
            auto_playing: self
                .panels
                .iter()
                .filter(|panel| panel.slider.is_auto_playing())
                .count(),
            dragging: self.panels.iter().any(|panel| panel.slider.is_dragging()),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.panels
            .iter()
            .any(|panel| panel.slider.container().is_animating(now))
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.request_quit();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.relayout(cols, rows);
        self.broadcast(&HostEvent::Resize);
    }

    /// Presses go to the panel under the cursor; moves and releases are
    /// window-wide and reach every panel.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let x = f64::from(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((index, hit)) = self.hit_test(mouse.column, mouse.row) else {
                    return;
                };
                let event = match hit {
                    Hit::Control(target) => HostEvent::Click(target),
                    Hit::Track => HostEvent::Pointer(PointerEvent::down(x)),
                };
                self.panels[index].slider.handle_event(&event);
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.broadcast(&HostEvent::Pointer(PointerEvent::moved(x)));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.broadcast(&HostEvent::Pointer(PointerEvent::up(x)));
            }
            _ => {}
        }
    }

    pub fn on_interval(&mut self, panel: usize, timer: TimerId) {
        if let Some(panel) = self.panels.get_mut(panel) {
            panel.slider.handle_event(&HostEvent::Interval(timer));
        }
    }

    /// Panel and element under a cell.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<(usize, Hit)> {
        self.layouts
            .iter()
            .zip(&self.panels)
            .enumerate()
            .find_map(|(index, (layout, panel))| {
                let hit = if contains(layout.prev, col, row) {
                    Hit::Control(ClickTarget::Prev)
                } else if contains(layout.next, col, row) {
                    Hit::Control(ClickTarget::Next)
                } else if let Some(dot) =
                    layout.indicator_at(col, row, panel.slider.container().indicators().len())
                {
                    Hit::Control(ClickTarget::Indicator(dot))
                } else if contains(layout.track, col, row) {
                    Hit::Track
                } else {
                    return None;
                };
                Some((index, hit))
            })
    }

    /// Tear down every slider. Safe to call more than once.
    pub fn shutdown(&mut self) {
        for panel in &mut self.panels {
            panel.slider.destroy();
        }
    }

    fn relayout(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        let (_, body, _) = layout_regions(self.area);
        self.layouts = panel_layouts(body, self.panels.len());
        for (panel, layout) in self.panels.iter_mut().zip(&self.layouts) {
            panel
                .slider
                .container_mut()
                .set_viewport_width(layout.track.width);
        }
    }

    fn broadcast(&mut self, event: &HostEvent) {
        for panel in &mut self.panels {
            panel.slider.handle_event(event);
        }
    }
}
