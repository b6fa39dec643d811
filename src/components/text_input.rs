//! Single-line, centred text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::dispatch::{Component, EventKind};

pub struct TextInputProps<'a, A> {
    pub value: &'a str,
    /// Shown dimmed while `value` is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    pub fg: Color,
    pub on_change: fn(String) -> A,
    /// Enter
    pub on_submit: fn(String) -> A,
}

/// What a key press does to the text
enum Edit {
    Move(usize),
    Replace { value: String, cursor: usize },
    Submit,
}

/// Text input whose value lives in props; only the cursor is kept here.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position in chars, `0..=value.chars().count()`
    cursor: usize,
}

/// Byte offset of char `index` in `value`
fn byte_at(value: &str, index: usize) -> usize {
    value
        .char_indices()
        .nth(index)
        .map_or(value.len(), |(byte, _)| byte)
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the cursor after the last char of `value`
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    fn edit(&self, key: &KeyEvent, value: &str) -> Option<Edit> {
        let len = value.chars().count();
        let at = self.cursor.min(len);
        let split = byte_at(value, at);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => Some(Edit::Move(0)),
                KeyCode::Char('e') => Some(Edit::Move(len)),
                KeyCode::Char('u') => Some(Edit::Replace {
                    value: String::new(),
                    cursor: 0,
                }),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(Edit::Replace {
                value: format!("{}{}{}", &value[..split], c, &value[split..]),
                cursor: at + 1,
            }),
            KeyCode::Backspace if at > 0 => {
                let start = byte_at(value, at - 1);
                Some(Edit::Replace {
                    value: format!("{}{}", &value[..start], &value[split..]),
                    cursor: at - 1,
                })
            }
            KeyCode::Delete if at < len => {
                let end = byte_at(value, at + 1);
                Some(Edit::Replace {
                    value: format!("{}{}", &value[..split], &value[end..]),
                    cursor: at,
                })
            }
            KeyCode::Left => Some(Edit::Move(at.saturating_sub(1))),
            KeyCode::Right => Some(Edit::Move((at + 1).min(len))),
            KeyCode::Home => Some(Edit::Move(0)),
            KeyCode::End => Some(Edit::Move(len)),
            KeyCode::Enter => Some(Edit::Submit),
            _ => None,
        }
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let EventKind::Key(key) = event else {
            return None;
        };
        if !props.is_focused {
            return None;
        }

        let Some(edit) = self.edit(key, props.value) else {
            return None;
        };
        match edit {
            Edit::Move(cursor) => {
                self.cursor = cursor;
                None
            }
            Edit::Replace { value, cursor } => {
                self.cursor = cursor;
                Some((props.on_change)(value))
            }
            Edit::Submit => Some((props.on_submit)(props.value.to_string())),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let len = props.value.chars().count();
        self.cursor = self.cursor.min(len);

        let base = Style::default().fg(props.fg);
        let (text, text_style) = if props.value.is_empty() {
            (props.placeholder, base.add_modifier(Modifier::DIM))
        } else {
            (props.value, base)
        };
        let border_style = if props.is_focused {
            base.add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        let paragraph = Paragraph::new(text)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);

        if props.is_focused && !inner.is_empty() {
            // centred line: left edge of the text plus the chars before the cursor
            let left = inner.x + inner.width.saturating_sub(len as u16) / 2;
            let x = (left + self.cursor as u16).min(inner.right() - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{RenderHarness, key};

    #[derive(Debug, Clone, PartialEq)]
    enum Edited {
        Change(String),
        Submit(String),
    }

    fn props(value: &str, is_focused: bool) -> TextInputProps<'_, Edited> {
        TextInputProps {
            value,
            placeholder: "",
            is_focused,
            fg: Color::Black,
            on_change: Edited::Change,
            on_submit: Edited::Submit,
        }
    }

    fn send(input: &mut TextInput, value: &str, k: &str) -> Vec<Edited> {
        input
            .handle_event(&EventKind::Key(key(k)), props(value, true))
            .into_iter()
            .collect()
    }

    fn change(value: &str) -> Vec<Edited> {
        vec![Edited::Change(value.into())]
    }

    #[test]
    fn test_typing_into_empty() {
        let mut input = TextInput::new();
        assert_eq!(send(&mut input, "", "a"), change("a"));
    }

    #[test]
    fn test_typing_at_end_and_middle() {
        let mut input = TextInput::new();
        input.move_to_end("Osl");
        assert_eq!(send(&mut input, "Osl", "o"), change("Oslo"));

        send(&mut input, "Oslo", "home");
        send(&mut input, "Oslo", "right");
        assert_eq!(send(&mut input, "Oslo", "-"), change("O-slo"));
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = TextInput::new();
        input.move_to_end("Zürich");
        for _ in 0..4 {
            send(&mut input, "Zürich", "left");
        }
        // cursor sits after "Zü"
        assert_eq!(send(&mut input, "Zürich", "backspace"), change("Zrich"));
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_backspace_at_start_and_delete_at_end() {
        let mut input = TextInput::new();
        assert!(send(&mut input, "Lima", "backspace").is_empty());

        input.move_to_end("Lima");
        assert!(send(&mut input, "Lima", "delete").is_empty());
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = TextInput::new();
        assert_eq!(send(&mut input, "xParis", "delete"), change("Paris"));
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_ctrl_keys() {
        let mut input = TextInput::new();
        input.move_to_end("Lima");

        send(&mut input, "Lima", "ctrl+a");
        assert_eq!(input.cursor, 0);
        send(&mut input, "Lima", "ctrl+e");
        assert_eq!(input.cursor, 4);
        assert_eq!(send(&mut input, "Lima", "ctrl+u"), change(""));
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_enter_submits_value() {
        let mut input = TextInput::new();
        assert_eq!(
            send(&mut input, "Accra", "enter"),
            vec![Edited::Submit("Accra".into())]
        );
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_cursor_clamped_when_value_shrinks() {
        let mut input = TextInput::new();
        input.move_to_end("Reykjavík");
        // value replaced from outside by a shorter one
        assert_eq!(send(&mut input, "Rey", "!"), change("Rey!"));
    }

    #[test]
    fn test_render_placeholder() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            let props = TextInputProps {
                value: "",
                placeholder: "City name",
                is_focused: true,
                fg: Color::Black,
                on_change: |_| (),
                on_submit: |_| (),
            };
            input.render(frame, frame.area(), props);
        });

        assert!(output.contains("City name"));
    }
}
