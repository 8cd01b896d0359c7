//! Slide-out menu overlay, anchored to the right edge

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, MenuItem};
use crate::ui::button::{Button, ButtonVariant};
use crate::ui::layout::right_panel;
use crate::ui::theme::Theme;

const MENU_WIDTH: u16 = 28;

pub(crate) fn draw_menu(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let panel = right_panel(area, MENU_WIDTH);
    f.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.outline))
        .title(Span::styled(
            " Menu ",
            Style::default().fg(theme.nav_fg).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.nav_bg).fg(theme.nav_fg));
    let inner = block.inner(panel);
    f.render_widget(block, panel);
    if inner.width < 2 || inner.height == 0 {
        return;
    }

    let selected = app.menu_selected();
    let item_style = Style::default().fg(theme.nav_fg).bg(theme.nav_bg);

    // Page entries at the top, one blank line apart
    let mut lines = vec![Line::default()];
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        if *item == MenuItem::ToggleTheme {
            continue;
        }
        let (prefix, style) = if i == selected {
            ("● ", item_style.add_modifier(Modifier::BOLD))
        } else {
            ("  ", item_style)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", prefix), style),
            Span::styled(item.label(), style),
        ]));
        lines.push(Line::default());
    }
    f.render_widget(Paragraph::new(lines), inner);

    // Theme toggle pinned to the bottom
    let toggle_index = MenuItem::ALL
        .iter()
        .position(|item| *item == MenuItem::ToggleTheme)
        .unwrap_or(MenuItem::ALL.len());
    let button = Button::new(MenuItem::ToggleTheme.label(), theme)
        .variant(ButtonVariant::Outline)
        .focused(selected == toggle_index);
    let height = 3u16.min(inner.height);
    let button_area = Rect {
        x: inner.x + 1,
        y: inner.y + inner.height - height,
        width: inner.width - 2,
        height,
    };
    f.render_widget(button, button_area);
}
