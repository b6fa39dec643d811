//! Render-and-react UI pieces

use ratatui::{Frame, layout::Rect};

use super::event::EventKind;

/// A piece of UI driven entirely by its props.
///
/// State that only matters to drawing (cursor offset, the area a button
/// occupied last frame) may live in `self`. Anything else changes by
/// returning actions.
pub trait Component<A> {
    type Props<'a>;

    /// Turn an input event into actions. Display-only pieces keep the
    /// default, which reacts to nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
