//! Prompt label, city input and the "Get Weather" trigger

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, TextInput, TextInputProps};
use crate::action::Action;
use crate::dispatch::EventKind;
use crate::state::Focus;

pub const PROMPT_TEXT: &str = "Please input a city";
pub const BUTTON_TEXT: &str = "Get Weather";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Rows taken by label + input + button
pub const PROMPT_HEIGHT: u16 = 7;

pub struct CityPromptProps<'a> {
    pub city: &'a str,
    pub focus: Focus,
    pub is_loading: bool,
    pub tick_count: u32,
    pub fg: Color,
}

#[derive(Default)]
pub struct CityPrompt {
    input: TextInput,
    /// Hit areas from the last render, for mouse clicks
    input_area: Rect,
    button_area: Rect,
}

impl CityPrompt {
    pub fn new(initial_city: &str) -> Self {
        let mut input = TextInput::new();
        input.move_to_end(initial_city);
        Self {
            input,
            ..Self::default()
        }
    }

    fn input_props<'a>(props: &CityPromptProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.city,
            placeholder: "type a city name",
            is_focused: props.focus == Focus::Input,
            fg: props.fg,
            on_change: Action::CityInputChange,
            on_submit: |_| Action::WeatherFetch,
        }
    }

    fn handle_click(&self, column: u16, row: u16, focus: Focus) -> Vec<Action> {
        let position = Position::new(column, row);
        if self.button_area.contains(position) {
            vec![Action::WeatherFetch]
        } else if self.input_area.contains(position) && focus != Focus::Input {
            vec![Action::UiFocusToggle]
        } else {
            vec![]
        }
    }
}

impl Component<Action> for CityPrompt {
    type Props<'a> = CityPromptProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, props.focus)
            }
            EventKind::Key(key) if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) => {
                vec![Action::UiFocusToggle]
            }
            EventKind::Key(key) if props.focus == Focus::Button => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Action::WeatherFetch],
                _ => vec![],
            },
            EventKind::Key(_) => {
                let input_props = Self::input_props(&props);
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect::<Vec<_>>()
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Prompt label
            Constraint::Length(3), // Input
            Constraint::Length(3), // Button
        ])
        .split(area);

        let label = Paragraph::new(PROMPT_TEXT)
            .style(Style::default().fg(props.fg).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        frame.render_widget(label, chunks[0]);

        self.input_area = chunks[1];
        let input_props = Self::input_props(&props);
        self.input.render(frame, chunks[1], input_props);

        // Button sized to its label, centred
        let label = if props.is_loading {
            let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
            format!("{} {}", BUTTON_TEXT, spinner)
        } else {
            BUTTON_TEXT.to_string()
        };
        let width = (BUTTON_TEXT.len() as u16 + 8).min(chunks[2].width);
        let [button_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(chunks[2]);
        self.button_area = button_area;

        let focused = props.focus == Focus::Button;
        let border_style = if focused {
            Style::default().fg(props.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(props.fg)
        };
        let style = if focused {
            Style::default()
                .fg(props.fg)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(props.fg).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, button_area);
    }
}
