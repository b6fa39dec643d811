//! Terminal input: the events components see and the task that reads them

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Upper bound on events forwarded per poll round, so a paste burst cannot
/// starve the action queue.
const MAX_EVENTS_PER_ROUND: usize = 32;

/// Input handed to components.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Press or repeat; releases never get here.
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl EventKind {
    /// Keep the terminal events the widget reacts to.
    ///
    /// Key releases are dropped so terminals that report both edges do not
    /// trigger a fetch twice. Focus and paste events are ignored.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key) => Some(EventKind::Key(key)),
            Event::Mouse(mouse) => Some(EventKind::Mouse(mouse)),
            Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
            _ => None,
        }
    }
}

/// Read whatever input is ready without blocking.
fn ready_events(limit: usize) -> Vec<EventKind> {
    let mut events = Vec::new();
    while events.len() < limit {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                warn!(error = %err, "Terminal poll failed");
                break;
            }
        }
        match event::read() {
            Ok(raw) => events.extend(EventKind::from_terminal(raw)),
            Err(err) => {
                warn!(error = %err, "Terminal read failed");
                break;
            }
        }
    }
    events
}

/// Forward terminal input to `tx` every `period` until `cancel` fires or
/// the receiver goes away.
pub fn spawn_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Input poller stopped");
                    return;
                }
                _ = ticker.tick() => {
                    for event in ready_events(MAX_EVENTS_PER_ROUND) {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                }
            }
        }
    })
}
