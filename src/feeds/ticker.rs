use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::clock::Clock;
use crate::events::Event;
use crate::lifecycle::record_countdown;
use crate::state::GroupBuyRecord;

/// Per-view countdown timer.
///
/// Owns at most one background task. Starting again, stopping, or dropping
/// the ticker aborts the running task, so a view can never leak an interval.
pub struct CountdownTicker {
    clock: Arc<dyn Clock>,
    tick: Duration,
    tx: mpsc::Sender<Event>,
    task: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    pub fn new(clock: Arc<dyn Clock>, tick: Duration, tx: mpsc::Sender<Event>) -> Self {
        Self {
            clock,
            tick,
            tx,
            task: None,
        }
    }

    /// Start ticking for `record`, replacing whatever was running.
    ///
    /// First evaluation is sent immediately, then one per tick.
    pub fn start(&mut self, record: GroupBuyRecord) {
        self.stop();

        debug!(id = record.id, tick_ms = self.tick.as_millis() as u64, "[ticker] starting");
        let clock = Arc::clone(&self.clock);
        let tx = self.tx.clone();
        let tick = self.tick;

        self.task = Some(tokio::spawn(run(record, clock, tick, tx)));
    }

    /// Abort the running task, if any.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("[ticker] stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(
    record: GroupBuyRecord,
    clock: Arc<dyn Clock>,
    tick: Duration,
    tx: mpsc::Sender<Event>,
) {
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let now = clock.now();
        let event = Event::Countdown {
            id: record.id,
            status: record.effective_status(now),
            state: record_countdown(&record, now),
        };

        if tx.send(event).await.is_err() {
            debug!(id = record.id, "[ticker] receiver gone, exiting");
            break;
        }
    }
}
