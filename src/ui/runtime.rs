use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{spawn_signal_listener, AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::{Duration, Instant};

/// Frame period; track transitions are redrawn at this rate.
const FRAME_RATE: Duration = Duration::from_millis(33);

/// Mount every slider in `config` and run until quit.
///
/// All slider mutation happens on this task, in the order events arrive.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(FRAME_RATE);
    spawn_signal_listener(events.sender());

    // Sliders are destroyed even if drawing fails part way.
    let mut app = scopeguard::guard(App::new(&config, events.sender()), |mut app| {
        app.shutdown();
    });
    let (cols, rows) = crossterm::terminal::size()?;
    app.start(cols, rows);

    let mut gate = FrameGate::default();
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        redraw = gate.on_event(&app, &event, Instant::now());
        dispatch(&mut app, event);
    }

    drop(app);
    drop(guard);
    tracing::info!("terminal restored");
    Ok(())
}

/// Decides whether an event needs a new frame.
///
/// Input always redraws. A tick redraws only while a track is animating or
/// being dragged, plus once more after the animation settles so the final
/// offset is drawn.
#[derive(Debug, Default)]
pub struct FrameGate {
    animating: bool,
}

impl FrameGate {
    pub fn on_event(&mut self, app: &App, event: &AppEvent, now: Instant) -> bool {
        let animating = app.is_animating(now);
        let was_animating = std::mem::replace(&mut self.animating, animating);
        match event {
            AppEvent::Tick => animating || was_animating || app.footer_status().dragging,
            _ => true,
        }
    }
}

/// Apply one queued event to the app.
pub fn dispatch(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => app.on_key(key),
        AppEvent::Mouse(mouse) => app.on_mouse(mouse),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::Tick => {}
        AppEvent::Interval { panel, timer } => app.on_interval(panel, timer),
        AppEvent::Shutdown => app.request_quit(),
    }
}
