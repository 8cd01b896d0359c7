//! Navigation bar and status bar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};
use crate::gpa::CourseField;
use crate::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::layout::right_panel;
use crate::ui::theme::Theme;

/// Lines taken by the navigation bar
pub(crate) const NAV_HEIGHT: u16 = 3;

const TITLE: &str = "GPA Calculator";

/// Draw the navigation bar; compact mode hides the tabs behind the menu
pub(crate) fn draw_nav(f: &mut Frame, app: &App, area: Rect, compact: bool, theme: &Theme) {
    let bar = Block::default().style(Style::default().bg(theme.nav_bg).fg(theme.nav_fg));
    f.render_widget(bar, area);
    if area.height == 0 {
        return;
    }

    let title_style = Style::default()
        .fg(theme.nav_fg)
        .bg(theme.nav_bg)
        .add_modifier(Modifier::BOLD);
    let mid = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };

    let mut spans = vec![Span::styled(format!(" {} ", TITLE), title_style)];

    if compact {
        let toggle = if app.is_menu_open() { "✕ Close " } else { "≡ Menu " };
        f.render_widget(Paragraph::new(Line::from(spans)), mid);
        let toggle_area = right_panel(mid, toggle.width() as u16);
        f.render_widget(Paragraph::new(Span::styled(toggle, title_style)), toggle_area);
        return;
    }

    for page in Page::ALL {
        let style = if page == app.page() {
            title_style.add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.nav_fg).bg(theme.nav_bg)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(page.title(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), mid);

    // Theme toggle, right-aligned; shows the mode it switches to
    let label = if app.is_dark_mode() { "☀ Light" } else { "☾ Dark" };
    let button = Button::new(label, theme)
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small);
    let width = button.width().min(area.width);
    let button_area = Rect {
        x: area.x + area.width - width - u16::from(area.width > width),
        y: area.y,
        width,
        height: area.height,
    };
    f.render_widget(button, button_area);
}

/// Draw the key hint line
pub(crate) fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let status = if app.is_menu_open() {
        " ↑/↓: move | Enter: select | Esc: close".to_string()
    } else {
        match app.page() {
            Page::Home => " Enter: get started | h/c/g: pages | m: menu | t: theme | q: quit".to_string(),
            Page::Calculator => {
                let adjust = match app.focused_field() {
                    CourseField::CreditHours => "0-9: credits | ←/→: -1/+1",
                    CourseField::GradePoint => "←/→: grade",
                };
                format!(
                    " {}/{} | ↑/↓: row | Tab: field | {} | a: add course | m: menu | q: quit",
                    app.selected_row() + 1,
                    app.courses().len(),
                    adjust
                )
            }
            Page::Guidance => " h/c: pages | m: menu | t: theme | q: quit".to_string(),
        }
    };

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
