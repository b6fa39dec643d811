//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. Network work is only declared, as an
//! `Effect`, and its outcome comes back as a `WeatherDid*` action.

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, Display};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City input =====
        Action::CityInputChange(value) => {
            if state.city_input == value {
                return DispatchResult::unchanged();
            }
            state.city_input = value;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiFocusToggle => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        // ===== Weather =====
        Action::WeatherFetch => {
            // One request at a time
            if state.is_loading {
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.city_input.clone(),
            })
        }

        Action::WeatherDidLoad(report) => {
            state.is_loading = false;
            state.display = Display::reading(&report);
            DispatchResult::changed()
        }

        Action::WeatherDidSkip => {
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(err) => {
            state.is_loading = false;
            state.display = Display::error(&err);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while the spinner is visible
            DispatchResult::from_changed(state.is_loading)
        }

        // handled in the main loop
        Action::Quit => DispatchResult::unchanged(),
    }
}
