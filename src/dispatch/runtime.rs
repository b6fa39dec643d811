//! Main loop: terminal events and queued actions in, frames out.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::action::Action;
use super::event::{EventKind, spawn_poller};
use super::jobs::Jobs;
use super::store::{EffectStore, Middleware};

/// Input poll period (roughly 60 fps).
const POLL_PERIOD: Duration = Duration::from_millis(16);

/// What an input event turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    /// Redraw even if no action changes state (resize).
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self::from_actions(None)
    }

    /// Collect a `Component::handle_event` result.
    pub fn from_actions(actions: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(self) -> Self {
        Self {
            needs_render: true,
            ..self
        }
    }
}

/// Handed to the effect handler for each effect a dispatch returns.
pub struct EffectContext<'a, A: Action> {
    jobs: &'a mut Jobs<A>,
}

impl<A: Action> EffectContext<'_, A> {
    pub fn jobs(&mut self) -> &mut Jobs<A> {
        self.jobs
    }
}

/// Owns the store, the action queue, and every job feeding it.
pub struct EffectRuntime<S, A: Action, E, M: Middleware<A>> {
    store: EffectStore<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    dirty: bool,
    jobs: Jobs<A>,
}

impl<S, A: Action, E, M: Middleware<A>> EffectRuntime<S, A, E, M> {
    pub fn from_store(store: EffectStore<S, A, E, M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store,
            jobs: Jobs::new(action_tx.clone()),
            action_tx,
            action_rx,
            dirty: true,
        }
    }

    /// Queue an action to be dispatched once the loop runs.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn jobs(&mut self) -> &mut Jobs<A> {
        &mut self.jobs
    }

    /// Run until `should_quit` accepts a dequeued action.
    ///
    /// Frames are drawn only after a state change or an explicit render
    /// request. Jobs are aborted on exit.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> EventOutcome<A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let _poller = spawn_poller(event_tx, POLL_PERIOD, cancel.clone());

        loop {
            if self.dirty {
                let state = self.store.state();
                terminal.draw(|frame| {
                    let area = frame.area();
                    render(frame, area, state);
                })?;
                self.dirty = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    let outcome = map_event(&event, self.store.state());
                    self.dirty |= outcome.needs_render;
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        debug!(action = action.name(), "Quit requested");
                        break;
                    }
                    let result = self.store.dispatch(action);
                    self.dirty |= result.changed;
                    if result.has_effects() {
                        let mut ctx = EffectContext { jobs: &mut self.jobs };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                }

                else => break,
            }
        }

        cancel.cancel();
        self.jobs.abort_all();
        Ok(())
    }
}
