//! UI components for moncal.
//!
//! This module contains:
//! - layout: Main layout rendering
//! - input: Keyboard input handling
//! - labels: Locale-aware month and weekday labels
//! - widgets: Reusable UI widgets

pub mod input;
pub mod labels;
pub mod layout;
pub mod widgets;
