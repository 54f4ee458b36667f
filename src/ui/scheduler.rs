//! Auto-play timers backed by tokio tasks.

use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::slider::TimerId;
use crate::ui::events::{AppEvent, AppEventSender};

/// Repeating timers for one panel.
///
/// Each timer posts [`AppEvent::Interval`] into the app queue, so ticks are
/// handled on the event loop like any other input. Dropping the scheduler
/// aborts every timer it started.
pub struct IntervalScheduler {
    panel: usize,
    tx: AppEventSender,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl IntervalScheduler {
    pub fn new(panel: usize, tx: AppEventSender) -> Self {
        Self {
            panel,
            tx,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, every: Duration) -> TimerId {
        self.next_id += 1;
        let timer = TimerId(self.next_id);
        let panel = self.panel;
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::Interval { panel, timer }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(panel, ?timer, ?every, "interval started");
        self.tasks.insert(timer, task);
        timer
    }

    /// Idempotent.
    pub fn cancel(&mut self, timer: TimerId) {
        if let Some(task) = self.tasks.remove(&timer) {
            task.abort();
            tracing::debug!(panel = self.panel, ?timer, "interval cancelled");
        }
    }

    pub fn active(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn interval_posts_ticks_for_its_panel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::new(2, tx);
        let timer = scheduler.start(Duration::from_millis(100));

        time::sleep(Duration::from_millis(250)).await;

        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::Interval { panel, timer: fired } => {
                    assert_eq!(panel, 2);
                    assert_eq!(fired, timer);
                    ticks += 1;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(ticks, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks_and_is_idempotent() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::new(0, tx);
        let timer = scheduler.start(Duration::from_millis(100));
        scheduler.cancel(timer);
        scheduler.cancel(timer);
        assert_eq!(scheduler.active(), 0);

        time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
