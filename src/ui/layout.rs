//! Main layout rendering for the TUI.

use crate::app::App;
use crate::ui::labels;
use crate::ui::widgets::calendar::CalendarWidget;
use crate::ui::widgets::help::HelpWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Calendar widget height: border + weekday header + 6 week rows + border
const CALENDAR_HEIGHT: u16 = 10;

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Create layout: header, calendar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Calendar
            Constraint::Length(2), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_calendar(frame, app, chunks[1]);
    draw_footer(frame, chunks[2]);

    // Transient status message (copy feedback)
    if let Some(ref msg) = app.status_message {
        draw_status_message(frame, msg, area);
    }

    // Help overlay on top of everything
    if app.show_help {
        let popup_area = centered_fixed_rect(44, HelpWidget::height(), area);
        frame.render_widget(HelpWidget, popup_area);
    }
}

/// Header with the selected date
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("moncal — selected: {}", app.formatted_selection()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// The month grid, centered at the configured widget width
fn draw_calendar(frame: &mut Frame, app: &App, area: Rect) {
    let widget_cfg = &app.config.widget;
    let grid = app.grid();

    let title = labels::month_label(grid.view(), &widget_cfg.locale);
    let day_labels = labels::weekday_labels(
        &widget_cfg.locale,
        widget_cfg.week_start,
        widget_cfg.day_labels,
    );

    let calendar = CalendarWidget::new(&grid, title, &day_labels, app.today)
        .selected(app.selected);

    let cal_area = centered_fixed_rect(widget_cfg.width, CALENDAR_HEIGHT, area);
    frame.render_widget(calendar, cal_area);
}

/// Footer with keybindings
fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer_text = " h/l: Day | j/k: Week | p/n: Month | t: Today | c: Copy | q: Quit | ?: Help ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Draw a status message at the bottom of the screen
fn draw_status_message(frame: &mut Frame, message: &str, area: Rect) {
    let msg_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(5),
        width: area.width.saturating_sub(4).min(message.len() as u16 + 4),
        height: 3,
    };

    frame.render_widget(ratatui::widgets::Clear, msg_area);

    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(status, msg_area);
}

/// Create a centered rectangle with fixed dimensions, clipped to the area
fn centered_fixed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
