//! Helpers for component and render tests
//!
//! ```ignore
//! let actions: Vec<_> = prompt.handle_event(&key_event("enter"), props).into_iter().collect();
//! actions.assert_first(Action::WeatherFetch);
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer};

use super::event::EventKind;

/// Key press from a name like `"q"`, `"enter"`, `"ctrl+u"` or `"shift+tab"`.
///
/// # Panics
///
/// On modifiers or key names it does not know.
pub fn key(spec: &str) -> KeyEvent {
    let (modifier, name) = match spec.rsplit_once('+') {
        Some((modifier, name)) if !name.is_empty() => (Some(modifier), name),
        _ => (None, spec),
    };
    let modifiers = match modifier {
        None => KeyModifiers::NONE,
        Some("ctrl") => KeyModifiers::CONTROL,
        Some("alt") => KeyModifiers::ALT,
        Some("shift") => KeyModifiers::SHIFT,
        Some(other) => panic!("unknown modifier {:?} in {:?}", other, spec),
    };

    let code = match name {
        "tab" if modifiers == KeyModifiers::SHIFT => return KeyEvent::from(KeyCode::BackTab),
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        single if single.chars().count() == 1 => {
            KeyCode::Char(single.chars().next().unwrap_or(' '))
        }
        other => panic!("unknown key {:?}", other),
    };
    KeyEvent::new(code, modifiers)
}

pub fn key_event(spec: &str) -> EventKind {
    EventKind::Key(key(spec))
}

/// Left-button press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Draws into ratatui's `TestBackend`.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend never fails");
        Self { terminal }
    }

    /// Draw one frame and return a copy of its buffer.
    pub fn render<F>(&mut self, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .expect("test backend never fails")
            .buffer
            .clone()
    }

    /// Draw one frame and return its text.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string(&self.render(draw))
    }
}

/// Cell symbols row by row, each row ending in `\n`.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.push('\n');
            row
        })
        .collect()
}

pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {:?}", self);
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(self.len(), expected, "actions: {:?}", self);
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(self.first(), Some(&expected), "actions: {:?}", self);
    }
}
