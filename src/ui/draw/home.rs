//! Welcome page

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::button::{Button, ButtonSize};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;

const HEADLINE: &str = "Welcome to the GPA Calculator";
const BLURB: &str =
    "Easily calculate your Grade Point Average by adding your courses, credits, and grades.";

/// Content block width, before clamping to the screen
const CONTENT_WIDTH: u16 = 60;
/// Headline, gap, two blurb lines, gap, large button
const CONTENT_HEIGHT: u16 = 8;

pub(crate) fn draw_home(f: &mut Frame, area: Rect, theme: &Theme) {
    let content = centered(area, CONTENT_WIDTH, CONTENT_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Headline
            Constraint::Length(1),
            Constraint::Length(2), // Blurb
            Constraint::Length(1),
            Constraint::Length(ButtonSize::Large.height()),
        ])
        .split(content);

    let headline = Paragraph::new(HEADLINE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.foreground)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(headline, chunks[0]);

    let blurb = Paragraph::new(BLURB)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.foreground).bg(theme.background));
    f.render_widget(blurb, chunks[2]);

    let button = Button::new("Get Started", theme)
        .size(ButtonSize::Large)
        .focused(true);
    let button_area = centered(chunks[4], button.width(), button.height());
    f.render_widget(button, button_area);
}
