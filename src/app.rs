//! Application state and main event loop.
//!
//! The view state is the pair (view month, selected date). Month navigation
//! moves the view without touching the selection; the day cursor moves the
//! selection without leaving the viewed month; "today" resets both.

use crate::config::AppConfig;
use crate::domain::{MonthGrid, ViewMonth};
use crate::error::{AppError, Result};
use crate::services::{ClipboardService, CopyMethod};
use crate::ui::input::{Action, InputHandler};
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,
    /// Month currently displayed
    pub view: ViewMonth,
    /// Selected calendar date
    pub selected: NaiveDate,
    /// Today's local date, refreshed every tick
    pub today: NaiveDate,

    // UI State
    /// Help overlay visible
    pub show_help: bool,
    /// Transient status message (copy feedback)
    pub status_message: Option<String>,
    /// Should quit the application
    pub should_quit: bool,

    // Services
    clipboard: ClipboardService,

    // Input handler
    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance showing the current month
    pub fn new(config: AppConfig) -> Self {
        let today = Local::now().date_naive();
        Self::with_today(config, today)
    }

    /// Create an application pinned to a specific "today" (used by tests)
    pub fn with_today(config: AppConfig, today: NaiveDate) -> Self {
        let input_handler = InputHandler::new(config.ui.vim_navigation);
        Self {
            view: ViewMonth::from_date(today),
            selected: today,
            today,
            show_help: false,
            status_message: None,
            should_quit: false,
            clipboard: ClipboardService::new(),
            input_handler,
            config,
        }
    }

    /// The grid for the current view under the configured week start
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.view, self.config.widget.week_start)
    }

    /// Shift the view one month back; the selection stays put
    pub fn previous_month(&mut self) {
        self.view = self.view.pred();
    }

    /// Shift the view one month forward; the selection stays put
    pub fn next_month(&mut self) {
        self.view = self.view.succ();
    }

    /// Reset both view and selection to the current date
    pub fn goto_today(&mut self) {
        self.today = Local::now().date_naive();
        self.view = ViewMonth::from_date(self.today);
        self.selected = self.today;
    }

    /// Move the selection by a number of days, staying inside the viewed
    /// month. When the selection is outside the view (after month
    /// navigation), the first movement pulls it back in instead.
    pub fn move_selection(&mut self, delta_days: i64) {
        if !self.view.contains(self.selected) {
            self.selected = self.view.clamp(self.selected);
            return;
        }
        let moved = self.selected + ChronoDuration::days(delta_days);
        self.selected = self.view.clamp(moved);
    }

    /// The selection as a zero-padded YYYY-MM-DD string
    pub fn formatted_selection(&self) -> String {
        self.selected.format("%Y-%m-%d").to_string()
    }

    /// Copy the selected date to the clipboard
    pub fn copy_selected(&mut self) {
        let text = self.formatted_selection();
        match self.clipboard.copy(&text) {
            Ok(CopyMethod::System) => {
                self.status_message = Some(format!("Copied {}", text));
            }
            Ok(method @ CopyMethod::Osc52) => {
                self.status_message = Some(format!("Copied {} via {}", text, method.description()));
            }
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                self.status_message = Some(format!("Copy failed: {}", e));
            }
        }
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Handle keyboard input and return true if the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear the status line on any key press
        self.status_message = None;

        // Help overlay swallows everything except its close keys
        if self.show_help {
            if let Some(Action::Back | Action::Help | Action::Quit) =
                self.input_handler.handle_key(key)
            {
                self.show_help = false;
            }
            return false;
        }

        if let Some(action) = self.input_handler.handle_key(key) {
            match action {
                Action::MoveLeft => self.move_selection(-1),
                Action::MoveRight => self.move_selection(1),
                Action::MoveUp => self.move_selection(-7),
                Action::MoveDown => self.move_selection(7),
                Action::PreviousMonth => self.previous_month(),
                Action::NextMonth => self.next_month(),
                Action::Today => self.goto_today(),
                Action::Copy => self.copy_selected(),
                Action::Help => self.toggle_help(),
                // The cursor already is the selection; confirm is a no-op
                Action::Select => {}
                Action::Back | Action::Quit => return true,
            }
        }

        false
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                // Keep the today-highlight correct across midnight
                self.today = Local::now().date_naive();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_at(y: i32, m: u32, d: u32) -> App {
        App::with_today(AppConfig::default(), date(y, m, d))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_state_is_today() {
        let app = app_at(2026, 8, 30);
        assert_eq!(app.view, ViewMonth::new(2026, 8));
        assert_eq!(app.selected, date(2026, 8, 30));
    }

    #[test]
    fn test_next_then_previous_restores_view() {
        let mut app = app_at(2026, 8, 30);
        let original = app.view;
        app.next_month();
        assert_eq!(app.view, ViewMonth::new(2026, 9));
        app.previous_month();
        assert_eq!(app.view, original);
    }

    #[test]
    fn test_month_navigation_keeps_selection() {
        let mut app = app_at(2026, 8, 30);
        app.next_month();
        app.next_month();
        assert_eq!(app.selected, date(2026, 8, 30));
    }

    #[test]
    fn test_move_selection_stays_in_month() {
        let mut app = app_at(2026, 8, 30);
        app.move_selection(1);
        assert_eq!(app.selected, date(2026, 8, 31));
        // Clamped at the month end
        app.move_selection(1);
        assert_eq!(app.selected, date(2026, 8, 31));
        app.move_selection(-7);
        assert_eq!(app.selected, date(2026, 8, 24));
        // Clamped at the month start
        app.move_selection(-40);
        assert_eq!(app.selected, date(2026, 8, 1));
    }

    #[test]
    fn test_movement_after_navigation_pulls_selection_into_view() {
        let mut app = app_at(2026, 1, 31);
        app.next_month();
        assert_eq!(app.selected, date(2026, 1, 31));
        // First movement clamps into February instead of jumping a day
        app.move_selection(1);
        assert_eq!(app.selected, date(2026, 2, 1));
        app.move_selection(7);
        assert_eq!(app.selected, date(2026, 2, 8));
    }

    #[test]
    fn test_goto_today_resets_view_and_selection() {
        let mut app = app_at(2026, 8, 30);
        app.next_month();
        app.next_month();
        app.move_selection(5);
        app.goto_today();
        let today = Local::now().date_naive();
        assert_eq!(app.view, ViewMonth::from_date(today));
        assert_eq!(app.selected, today);
    }

    #[test]
    fn test_formatted_selection_is_zero_padded() {
        let mut app = app_at(2026, 8, 30);
        assert_eq!(app.formatted_selection(), "2026-08-30");
        app.selected = date(987, 4, 5);
        assert_eq!(app.formatted_selection(), "0987-04-05");
    }

    #[test]
    fn test_key_dispatch() {
        let mut app = app_at(2026, 8, 15);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, date(2026, 8, 16));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, date(2026, 8, 23));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view, ViewMonth::new(2026, 9));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.view, ViewMonth::new(2026, 8));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_help_overlay_toggles_and_swallows_keys() {
        let mut app = app_at(2026, 8, 15);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Movement keys are ignored while help is open
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, date(2026, 8, 15));
        assert!(app.show_help);
        // Esc closes help instead of quitting
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_grid_follows_view_month() {
        let mut app = app_at(2024, 1, 15);
        assert_eq!(app.grid().in_month_count(), 31);
        app.next_month();
        assert_eq!(app.grid().in_month_count(), 29);
    }
}
