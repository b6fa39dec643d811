pub mod city_prompt;
pub mod help_bar;
pub mod text_input;
pub mod weather_panel;
pub mod weather_widget;

pub use crate::dispatch::Component;

pub use city_prompt::{BUTTON_TEXT, CityPrompt, CityPromptProps, PROMPT_HEIGHT, PROMPT_TEXT};
pub use help_bar::{HelpBar, HelpBarProps};
pub use text_input::{TextInput, TextInputProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
pub use weather_widget::{WeatherWidget, WeatherWidgetProps};
