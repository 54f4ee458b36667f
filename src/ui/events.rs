use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::slider::TimerId;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Redraw frame; drives track transitions.
    Tick,
    /// Auto-play interval fired for the panel at `panel`.
    Interval { panel: usize, timer: TimerId },
    /// OS signal received (SIGTERM)
    Shutdown,
}

pub type AppEventSender = UnboundedSender<AppEvent>;

/// Single queue every input source posts into. The event loop drains it in
/// delivery order, so slider state is only touched from one task.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
}

impl EventHandler {
    /// Spawn the terminal reader thread.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(%err, "terminal read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(%err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Queue without a reader thread, for driving the app from tests.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

/// Post [`AppEvent::Shutdown`] when the process is asked to terminate.
pub fn spawn_signal_listener(tx: AppEventSender) {
    tokio::spawn(async move {
        if wait_for_terminate().await {
            tracing::info!("termination signal received");
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}

#[cfg(unix)]
async fn wait_for_terminate() -> bool {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut stream) => stream.recv().await.is_some(),
        Err(err) => {
            tracing::warn!(%err, "could not install SIGTERM handler");
            false
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_terminate() -> bool {
    tokio::signal::ctrl_c().await.is_ok()
}
