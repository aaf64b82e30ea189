//! moncal: month-calendar widget for the terminal
//!
//! This crate renders a single month grid, lets the user navigate months,
//! pick a day, and copy the selected date as `YYYY-MM-DD` text to the
//! system clipboard.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
