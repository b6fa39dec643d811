//! The widget window: prompt, trigger and output labels over a
//! condition-coloured background
//!
//! - Props<'a>: read-only view of `AppState`
//! - handle_event: global quit keys, everything else goes to the prompt
//! - render: pure function of props (plus the prompt's hit areas)

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
};

use super::{
    CityPrompt, CityPromptProps, Component, HelpBar, HelpBarProps, PROMPT_HEIGHT, WeatherPanel,
    WeatherPanelProps,
};
use crate::action::Action;
use crate::dispatch::EventKind;
use crate::state::AppState;

/// Widest the centred column grows
pub const COLUMN_WIDTH: u16 = 50;

pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
}

pub struct WeatherWidget {
    prompt: CityPrompt,
}

impl WeatherWidget {
    pub fn new(initial_city: &str) -> Self {
        Self {
            prompt: CityPrompt::new(initial_city),
        }
    }
}

impl Default for WeatherWidget {
    fn default() -> Self {
        Self::new("")
    }
}

fn is_quit_key(event: &EventKind) -> bool {
    let EventKind::Key(key) = event else {
        return false;
    };
    key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if is_quit_key(event) {
            return vec![Action::Quit];
        }

        let state = props.state;
        let prompt_props = CityPromptProps {
            city: &state.city_input,
            focus: state.focus,
            is_loading: state.is_loading,
            tick_count: state.tick_count,
            fg: state.display.background.contrast(),
        };
        self.prompt
            .handle_event(event, prompt_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let background = state.display.background;
        let fg = background.contrast();

        // Window background
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::from(background)).fg(fg)),
            area,
        );

        let [column] = Layout::horizontal([Constraint::Length(COLUMN_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(PROMPT_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(5),    // Output labels
            Constraint::Length(1), // Help bar
        ])
        .split(column);

        let prompt_props = CityPromptProps {
            city: &state.city_input,
            focus: state.focus,
            is_loading: state.is_loading,
            tick_count: state.tick_count,
            fg,
        };
        self.prompt.render(frame, chunks[1], prompt_props);

        let mut panel = WeatherPanel;
        panel.render(
            frame,
            chunks[3],
            WeatherPanelProps {
                display: &state.display,
                fg,
            },
        );

        let mut help = HelpBar;
        help.render(frame, chunks[4], HelpBarProps { fg });
    }
}
