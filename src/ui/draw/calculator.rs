//! Calculator page drawing functions
//!
//! This module handles rendering the calculator UI:
//! - Course rows (paged when they outgrow the screen)
//! - Add Course button
//! - GPA display

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::gpa::format_gpa;
use crate::ui::button::{Button, ButtonVariant};
use crate::ui::course_row::CourseRow;
use crate::ui::layout::{centered, right_panel, CourseTableLayout, COURSE_ROW_HEIGHT};
use crate::ui::theme::Theme;

/// Content column width, before clamping to the screen
const CONTENT_WIDTH: u16 = 80;
/// Size of the GPA display box
const GPA_BOX_WIDTH: u16 = 20;
const GPA_BOX_HEIGHT: u16 = 3;

pub(crate) fn draw_calculator(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let width = CONTENT_WIDTH.min(area.width.saturating_sub(2));
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(COURSE_ROW_HEIGHT), // Course rows
            Constraint::Length(1),              // Add Course
            Constraint::Length(1),
            Constraint::Length(GPA_BOX_HEIGHT), // GPA
            Constraint::Length(1),
        ])
        .split(column);

    let table = CourseTableLayout::for_height(chunks[1].height);
    draw_course_rows(f, app, chunks[1], &table, theme);
    draw_add_course(f, app, chunks[2], &table, theme);
    draw_gpa(f, app, chunks[4], theme);
}

fn draw_course_rows(
    f: &mut Frame,
    app: &App,
    area: Rect,
    table: &CourseTableLayout,
    theme: &Theme,
) {
    if area.height < COURSE_ROW_HEIGHT || area.width == 0 {
        return;
    }

    let entries = app.courses().entries();
    let selected = app.selected_row();

    for (slot, index) in table.visible_range(selected, entries.len()).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + slot as u16 * COURSE_ROW_HEIGHT,
            width: area.width,
            height: COURSE_ROW_HEIGHT,
        };

        let mut row = CourseRow::new(index, &entries[index], theme);
        if index == selected {
            row = row
                .focus(Some(app.focused_field()))
                .credit_text(app.credit_buffer());
        }
        f.render_widget(row, row_area);
    }
}

fn draw_add_course(
    f: &mut Frame,
    app: &App,
    area: Rect,
    table: &CourseTableLayout,
    theme: &Theme,
) {
    let button = Button::new("+ Add Course (a)", theme).variant(ButtonVariant::Secondary);
    let button_width = button.width().min(area.width);
    f.render_widget(
        button,
        Rect {
            width: button_width,
            ..area
        },
    );

    // Page indicator once the rows no longer fit
    let total = app.courses().len();
    let (page, pages) = table.page_of(app.selected_row(), total);
    if pages > 1 {
        let text = format!("page {}/{} · {} courses", page, pages, total);
        let indicator_area = right_panel(area, (text.width() as u16).min(area.width - button_width));
        let indicator =
            Paragraph::new(text).style(Style::default().fg(theme.dimmed).bg(theme.background));
        f.render_widget(indicator, indicator_area);
    }
}

fn draw_gpa(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let gpa_area = centered(area, GPA_BOX_WIDTH, GPA_BOX_HEIGHT);
    let gpa = Paragraph::new(format_gpa(app.gpa()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.foreground)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(theme.accent)),
        );
    f.render_widget(gpa, gpa_area);
}
