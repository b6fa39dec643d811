//! Render tests for the whole widget using RenderHarness
//!
//! - Create harness with terminal dimensions
//! - Render the widget to a test buffer
//! - Inspect symbols and background colours

use ratatui::style::Color;
use weather_widget::{
    action::Action,
    components::{BUTTON_TEXT, Component, PROMPT_TEXT, WeatherWidget, WeatherWidgetProps},
    dispatch::testing::*,
    error::FetchError,
    reducer::reducer,
    state::{AppState, WeatherReport},
};

fn render(state: &AppState) -> (String, ratatui::buffer::Buffer) {
    let mut render = RenderHarness::new(60, 24);
    let mut widget = WeatherWidget::new(&state.city_input);
    let buffer = render.render(|frame| {
        widget.render(frame, frame.area(), WeatherWidgetProps { state });
    });
    (buffer_to_string(&buffer), buffer)
}

fn loaded(code: i64, kelvin: f64, description: &str) -> AppState {
    let mut state = AppState::with_city("Lisbon");
    reducer(&mut state, Action::WeatherFetch);
    reducer(
        &mut state,
        Action::WeatherDidLoad(WeatherReport {
            kelvin,
            condition_code: code,
            description: description.into(),
        }),
    );
    state
}

#[test]
fn test_render_initial_window() {
    let (output, buffer) = render(&AppState::default());

    assert!(output.contains(PROMPT_TEXT), "Should show the prompt");
    assert!(output.contains(BUTTON_TEXT), "Should show the trigger");
    assert_eq!(buffer[(0, 0)].bg, Color::Rgb(255, 255, 255));
}

#[test]
fn test_render_clear_sky() {
    let state = loaded(800, 300.15, "clear sky");
    let (output, buffer) = render(&state);

    assert!(output.contains("Lisbon"), "Should keep the input");
    assert!(output.contains("27°C"), "Should show temperature");
    assert!(output.contains("☀"), "Should show the sun");
    assert!(output.contains("clear sky"), "Should show description");
    assert_eq!(buffer[(0, 0)].bg, Color::Rgb(135, 206, 250));
    assert_eq!(buffer[(59, 23)].bg, Color::Rgb(135, 206, 250));
}

#[test]
fn test_render_thunderstorm_uses_light_text() {
    let state = loaded(211, 290.0, "thunderstorm");
    let (output, buffer) = render(&state);

    assert!(output.contains("⛈"));
    assert_eq!(buffer[(0, 0)].bg, Color::Rgb(70, 70, 70));
    assert_eq!(buffer[(0, 0)].fg, Color::White);
}

#[test]
fn test_render_not_found_error() {
    let mut state = loaded(500, 280.0, "light rain");
    reducer(&mut state, Action::WeatherFetch);
    reducer(
        &mut state,
        Action::WeatherDidError(FetchError::Status {
            code: 404,
            raw: "HTTP status client error (404 Not Found)".into(),
        }),
    );
    let (output, buffer) = render(&state);

    assert!(output.contains("Not Found:"));
    assert!(output.contains("City not found"));
    assert!(!output.contains("light rain"), "Description should be cleared");
    assert!(!output.contains("🌧"), "Emoji should be cleared");
    assert_eq!(buffer[(0, 0)].bg, Color::Rgb(255, 255, 255));
}

#[test]
fn test_render_loading_spinner() {
    let mut state = AppState::with_city("Lisbon");
    reducer(&mut state, Action::WeatherFetch);
    let (output, _) = render(&state);

    assert!(output.contains("Get Weather ◐"));
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let mut render = RenderHarness::new(12, 6);
    let mut widget = WeatherWidget::default();
    let state = loaded(800, 300.15, "clear sky");

    render.render(|frame| {
        widget.render(frame, frame.area(), WeatherWidgetProps { state: &state });
    });
}

#[test]
fn test_click_button_after_render() {
    let mut render = RenderHarness::new(60, 24);
    let mut widget = WeatherWidget::default();
    let state = AppState::with_city("Lisbon");
    render.render(|frame| {
        widget.render(frame, frame.area(), WeatherWidgetProps { state: &state });
    });

    // Button occupies rows 5..=7, centred on column 30
    let actions: Vec<_> = widget
        .handle_event(&click(30, 6), WeatherWidgetProps { state: &state })
        .into_iter()
        .collect();
    actions.assert_first(Action::WeatherFetch);
}
