//! State container whose reducer returns effects
//!
//! ```ignore
//! fn reducer(state: &mut S, action: A) -> DispatchResult<E>
//! ```
//!
//! An effect describes work (one HTTP lookup) without doing it; the runtime
//! passes each one to the effect handler after the reducer returns.

use tracing::debug;

use super::action::Action;

/// Outcome of one reducer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Redraw needed.
    pub changed: bool,
    pub effects: Vec<E>,
}

impl<E> DispatchResult<E> {
    pub fn unchanged() -> Self {
        Self::from_changed(false)
    }

    pub fn changed() -> Self {
        Self::from_changed(true)
    }

    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    pub fn from_changed(changed: bool) -> Self {
        Self {
            changed,
            effects: Vec::new(),
        }
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Hook around every reducer call.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Writes each action to the `debug` log, except names passed to
/// [`ignore`](Self::ignore).
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    ignored: Vec<&'static str>,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, name: &'static str) -> Self {
        self.ignored.push(name);
        self
    }

    fn logs<A: Action>(&self, action: &A) -> bool {
        !self.ignored.contains(&action.name())
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.logs(action) {
            debug!(action = %action.summary(), "Dispatch");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.logs(action) {
            debug!(action = action.name(), state_changed, "Reduced");
        }
    }
}

pub struct EffectStore<S, A: Action, E, M: Middleware<A>> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E, M: Middleware<A>> EffectStore<S, A, E, M> {
    pub fn with_middleware(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Run `action` through the middleware and the reducer.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
