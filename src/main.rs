//! weather-widget
//!
//! Event (keyboard/mouse) -> WeatherWidget.handle_event() -> Actions ->
//! EffectStore reducer -> Effect::FetchWeather -> task -> WeatherDid* ->
//! re-render.
//!
//! # Usage
//!
//! ```sh
//! OPENWEATHER_API_KEY=... weather-widget
//! weather-widget --api-key ... --city Lisbon --log-file /tmp/weather.log
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use weather_widget::action::Action;
use weather_widget::api::WeatherClient;
use weather_widget::components::{Component, WeatherWidget, WeatherWidgetProps};
use weather_widget::config::{Cli, WidgetConfig};
use weather_widget::dispatch::{
    EffectRuntime, EffectStore, EventKind, EventOutcome, LoggingMiddleware,
};
use weather_widget::effect::handle_effect;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, LOADING_ANIM_TICK_MS};

const WINDOW_TITLE: &str = "Weather App";

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = WidgetConfig::try_from(Cli::parse())?;
    if let Some(path) = &config.log_file {
        logging::init(path)?;
    }
    let client = WeatherClient::new(config.clone())?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(WINDOW_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, config.initial_city).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: WeatherClient,
    initial_city: Option<String>,
) -> io::Result<()> {
    let city = initial_city.clone().unwrap_or_default();
    let store = EffectStore::with_middleware(
        AppState::with_city(city.as_str()),
        reducer,
        LoggingMiddleware::new().ignore("Tick"),
    );
    let mut runtime = EffectRuntime::from_store(store);

    // Spinner animation while a fetch is in flight
    runtime
        .jobs()
        .every("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || Action::Tick);

    if initial_city.is_some() {
        runtime.enqueue(Action::WeatherFetch);
    }

    info!("Widget started");
    let ui = RefCell::new(WeatherWidget::new(&city));

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut()
                    .render(frame, area, WeatherWidgetProps { state });
            },
            |event, state| {
                if let EventKind::Resize(..) = event {
                    return EventOutcome::ignored().with_render();
                }
                EventOutcome::from_actions(
                    ui.borrow_mut()
                        .handle_event(event, WeatherWidgetProps { state }),
                )
            },
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}
