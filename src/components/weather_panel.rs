//! Temperature, emoji and description labels

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::state::{Display, TemperatureKind};

pub struct WeatherPanelProps<'a> {
    pub display: &'a Display,
    pub fg: Color,
}

pub struct WeatherPanel;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let display = props.display;
        let temperature_lines = display.temperature.lines().count().max(1) as u16;

        let chunks = Layout::vertical([
            Constraint::Length(temperature_lines), // Temperature / error text
            Constraint::Length(1),
            Constraint::Length(1), // Emoji
            Constraint::Length(1),
            Constraint::Min(1), // Description
        ])
        .split(area);

        let temperature_style = match display.temperature_kind {
            TemperatureKind::Reading => Style::default()
                .fg(props.fg)
                .add_modifier(Modifier::BOLD),
            TemperatureKind::Error => Style::default().fg(props.fg),
        };
        frame.render_widget(
            Paragraph::new(display.temperature.as_str())
                .style(temperature_style)
                .alignment(Alignment::Center),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(display.emoji).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(display.description.as_str())
                .style(Style::default().fg(props.fg))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }
}
