use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps {
    pub fg: Color,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = Style::default().fg(props.fg).add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(props.fg).add_modifier(Modifier::DIM);
        let help = Line::from(vec![
            Span::styled(" enter", key),
            Span::styled(" get weather  ", hint),
            Span::styled("tab", key),
            Span::styled(" focus  ", hint),
            Span::styled("esc", key),
            Span::styled(" quit ", hint),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
