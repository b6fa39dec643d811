//! Actions
//!
//! Naming convention: the prefix names the area (`City`, `Ui`, `Weather`),
//! "Did" marks the result of an async task.

use crate::error::FetchError;
use crate::state::WeatherReport;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== City input =====
    /// The input text was edited
    CityInputChange(String),

    // ===== UI =====
    /// Move keyboard focus between the input and the button
    UiFocusToggle,

    // ===== Weather =====
    /// Intent: fetch weather for the current input (triggers async task)
    WeatherFetch,

    /// Result: conditions decoded successfully
    WeatherDidLoad(WeatherReport),

    /// Result: the payload's own status was not "ok", nothing to show
    WeatherDidSkip,

    /// Result: the fetch failed
    WeatherDidError(FetchError),

    // ===== Global =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl crate::dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::CityInputChange(_) => "CityInputChange",
            Action::UiFocusToggle => "UiFocusToggle",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidSkip => "WeatherDidSkip",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(report) => format!(
                "WeatherDidLoad {{ temp: {:.1}K, code: {} }}",
                report.kelvin, report.condition_code
            ),
            Action::WeatherDidError(err) => format!("WeatherDidError({})", err),
            _ => format!("{:?}", self),
        }
    }
}
