//! What the reducer consumes

use std::fmt::Debug;

/// An intent to change state.
///
/// Actions come from input handlers on the UI task and from fetch tasks on
/// worker threads, hence `Send + 'static`.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable variant name, used to filter the action log.
    fn name(&self) -> &'static str;

    /// One-line form for the action log. Defaults to `Debug`.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
