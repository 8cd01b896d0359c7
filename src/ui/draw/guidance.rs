//! How the GPA is calculated, with a worked example

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Theme;

/// Content column width, before clamping to the screen
const CONTENT_WIDTH: u16 = 80;

const STEPS: [&str; 5] = [
    "1. Add each course with its respective credit hours and grade.",
    "2. Multiply each course's credit hours by its grade point to get quality points.",
    "3. Sum all the quality points to get total points.",
    "4. Sum all the credit hours.",
    "5. Divide the total points by total credit hours.",
];

const EXAMPLE: [&str; 5] = [
    "- Course 1: 3 credits, Grade A- (3.7) → 3 x 3.7 = 11.1",
    "- Course 2: 4 credits, Grade B+ (3.3) → 4 x 3.3 = 13.2",
    "- Total Credits = 7",
    "- Total Points = 11.1 + 13.2 = 24.3",
    "- GPA = 24.3 / 7 = 3.47",
];

pub(crate) fn draw_guidance(f: &mut Frame, area: Rect, theme: &Theme) {
    let width = CONTENT_WIDTH.min(area.width.saturating_sub(2));
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1u16.min(area.height),
        width,
        height: area.height.saturating_sub(1),
    };

    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(theme.foreground);

    let mut lines = vec![Line::from(Span::styled("How GPA is Calculated", heading)), Line::default()];
    lines.extend(STEPS.iter().map(|step| Line::from(Span::styled(*step, body))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Example:", heading)));
    lines.extend(EXAMPLE.iter().map(|row| Line::from(Span::styled(*row, body))));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.background));
    f.render_widget(paragraph, column);
}
