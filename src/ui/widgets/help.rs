//! Help overlay listing all keybindings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help categories
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Day Selection",
        &[
            ("←/h", "Previous day"),
            ("→/l", "Next day"),
            ("↑/k", "One week back"),
            ("↓/j", "One week forward"),
        ],
    ),
    (
        "Month Navigation",
        &[
            ("p/PgUp", "Previous month"),
            ("n/PgDn", "Next month"),
            ("t/Home", "Jump to today"),
        ],
    ),
    (
        "Clipboard",
        &[("c/y", "Copy selected date (YYYY-MM-DD)")],
    ),
    (
        "Misc",
        &[("?", "Toggle this help"), ("q", "Quit"), ("Esc", "Close / Quit")],
    ),
];

/// Help overlay widget
pub struct HelpWidget;

impl HelpWidget {
    /// Build help text lines
    fn build_lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "  moncal Help  ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (section_name, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("─── {} ───", section_name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:8}", key), Style::default().fg(Color::Green)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Green)),
            Span::styled(" to close help", Style::default().fg(Color::DarkGray)),
        ]));

        lines
    }

    /// Number of lines the overlay needs, including its border
    pub fn height() -> u16 {
        Self::build_lines().len() as u16 + 2
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (?) ");

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Self::build_lines()).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines_built() {
        let lines = HelpWidget::build_lines();
        assert!(lines.len() > 10);
    }

    #[test]
    fn test_height_covers_all_lines() {
        assert_eq!(
            HelpWidget::height(),
            HelpWidget::build_lines().len() as u16 + 2
        );
    }
}
