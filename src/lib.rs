//! Terminal weather widget
//!
//! Type a city, trigger "Get Weather", and the widget shows the temperature,
//! a condition emoji and description, and paints the background to match.

pub mod action;
pub mod api;
pub mod components;
pub mod condition;
pub mod config;
pub mod dispatch;
pub mod effect;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod state;
