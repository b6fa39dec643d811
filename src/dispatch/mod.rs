//! Dispatch runtime: action, store, effect, component and event-loop plumbing
//!
//! 1. Event (keyboard/mouse) -> Component.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects handled by the caller, usually by spawning a job
//! 5. If state changed, re-render

pub mod action;
pub mod component;
pub mod event;
pub mod jobs;
pub mod runtime;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::EventKind;
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use jobs::Jobs;
pub use store::{DispatchResult, EffectStore, LoggingMiddleware, Middleware};
