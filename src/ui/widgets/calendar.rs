//! The month-grid widget: title, weekday header, and six week rows.

use crate::domain::{GridCell, MonthGrid, GRID_COLUMNS};
use chrono::NaiveDate;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Width of one day slot in terminal columns (2-digit day + separator)
const DAY_SLOT: usize = 3;

/// Widget rendering a single month grid
pub struct CalendarWidget<'a> {
    grid: &'a MonthGrid,
    title: String,
    day_labels: &'a [String],
    selected: Option<NaiveDate>,
    today: NaiveDate,
    header_style: Style,
    label_style: Style,
    cell_style: Style,
    selected_style: Style,
    today_style: Style,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(grid: &'a MonthGrid, title: String, day_labels: &'a [String], today: NaiveDate) -> Self {
        Self {
            grid,
            title,
            day_labels,
            selected: None,
            today,
            header_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::Yellow),
            cell_style: Style::default(),
            selected_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            today_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Highlight this date if it falls inside the displayed month
    pub fn selected(mut self, selected: NaiveDate) -> Self {
        self.selected = Some(selected);
        self
    }

    fn cell_span(&self, cell: &GridCell) -> Span<'static> {
        match cell {
            GridCell::Blank => Span::raw("   "),
            GridCell::Day { day, date } => {
                let is_selected = self.selected == Some(*date);
                let is_today = *date == self.today;
                let style = if is_selected {
                    self.selected_style
                } else if is_today {
                    self.today_style
                } else {
                    self.cell_style
                };
                Span::styled(format!("{:>2} ", day), style)
            }
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(8);

        // Weekday header row
        let header_spans: Vec<Span> = self
            .day_labels
            .iter()
            .map(|label| Span::styled(format!("{:>2} ", label), self.label_style))
            .collect();
        lines.push(Line::from(header_spans));

        // Six week rows
        for row in self.grid.rows() {
            let spans: Vec<Span> = row.iter().map(|cell| self.cell_span(cell)).collect();
            lines.push(Line::from(spans));
        }

        lines
    }
}

impl Widget for CalendarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.header_style)
            .title(Line::styled(
                format!(" {} ", self.title),
                self.header_style,
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        // Center the 21-column grid inside the widget
        let grid_width = (DAY_SLOT * GRID_COLUMNS) as u16;
        let grid_area = if inner.width > grid_width {
            Rect {
                x: inner.x + (inner.width - grid_width) / 2,
                width: grid_width,
                ..inner
            }
        } else {
            inner
        };

        Paragraph::new(self.build_lines()).render(grid_area, buf);
    }
}
