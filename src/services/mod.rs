//! Infrastructure services for moncal.
//!
//! This module contains:
//! - ClipboardService: System clipboard writes with an OSC 52 fallback

mod clipboard;

pub use clipboard::{ClipboardService, CopyMethod};
