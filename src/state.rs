//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use crate::condition::{Rgb, classify};
use crate::error::FetchError;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Animation frame interval for the loading spinner
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Current conditions decoded from one successful response
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub kelvin: f64,
    pub condition_code: i64,
    pub description: String,
}

impl WeatherReport {
    pub fn celsius(&self) -> f64 {
        kelvin_to_celsius(self.kelvin)
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Whole-degree rendering, e.g. `27°C`
pub fn format_celsius(celsius: f64) -> String {
    format!("{:.0}°C", celsius)
}

/// What the temperature label currently holds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemperatureKind {
    #[default]
    Reading,
    Error,
}

/// The three output labels and the frame background
#[derive(Clone, Debug, PartialEq)]
pub struct Display {
    pub temperature: String,
    pub temperature_kind: TemperatureKind,
    pub emoji: &'static str,
    pub description: String,
    pub background: Rgb,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            temperature: String::new(),
            temperature_kind: TemperatureKind::Reading,
            emoji: "",
            description: String::new(),
            background: Rgb::WHITE,
        }
    }
}

impl Display {
    /// Project a report into label text and colours
    pub fn reading(report: &WeatherReport) -> Self {
        let class = classify(report.condition_code);
        Self {
            temperature: format_celsius(report.celsius()),
            temperature_kind: TemperatureKind::Reading,
            emoji: class.emoji,
            description: report.description.clone(),
            background: class.background,
        }
    }

    /// Error text in the temperature label, everything else cleared
    pub fn error(err: &FetchError) -> Self {
        Self {
            temperature: err.message(),
            temperature_kind: TemperatureKind::Error,
            ..Self::default()
        }
    }
}

/// Which control receives keyboard input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Button,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Current contents of the city input
    pub city_input: String,

    pub focus: Focus,

    /// Output labels and background
    pub display: Display,

    /// A fetch is in flight
    pub is_loading: bool,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}

impl AppState {
    /// State with the input prefilled
    pub fn with_city(city: impl Into<String>) -> Self {
        Self {
            city_input: city.into(),
            ..Self::default()
        }
    }
}
