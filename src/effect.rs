//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the main loop.
//! This keeps the reducer pure while making the network call explicit.

use tracing::{info, warn};

use crate::action::Action;
use crate::api::WeatherClient;
use crate::dispatch::EffectContext;

/// Task key of the in-flight weather request
pub const WEATHER_TASK: &str = "weather";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch current conditions for the given city
    FetchWeather { city: String },
}

/// Handle effects by spawning tasks
pub fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            ctx.jobs()
                .spawn(WEATHER_TASK, async move { fetch_action(&client, &city).await });
        }
    }
}

/// Run one fetch and turn its outcome into the result action
pub async fn fetch_action(client: &WeatherClient, city: &str) -> Action {
    match client.fetch(city).await {
        Ok(Some(report)) => {
            info!(
                city = %city,
                code = report.condition_code,
                kelvin = report.kelvin,
                "Weather loaded"
            );
            Action::WeatherDidLoad(report)
        }
        Ok(None) => Action::WeatherDidSkip,
        Err(err) => {
            warn!(city = %city, error = %err, "Weather fetch failed");
            Action::WeatherDidError(err)
        }
    }
}
