//! Course row widget
//!
//! Renders one course as a single line of bordered inputs:
//! - Row label ("Course 3")
//! - Credit hours field
//! - Grade selector (arrows shown while focused)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::app::format_credit;
use crate::gpa::{CourseEntry, CourseField};
use crate::grades;

/// Width of the "Course N" label column
const LABEL_WIDTH: u16 = 11;

pub struct CourseRow<'a> {
    index: usize,
    entry: &'a CourseEntry,
    theme: &'a Theme,
    /// Focused field, if this is the selected row
    focus: Option<CourseField>,
    /// Text to show in the credit field while it is being edited
    credit_text: Option<&'a str>,
}

impl<'a> CourseRow<'a> {
    pub fn new(index: usize, entry: &'a CourseEntry, theme: &'a Theme) -> Self {
        Self {
            index,
            entry,
            theme,
            focus: None,
            credit_text: None,
        }
    }

    pub fn focus(mut self, focus: Option<CourseField>) -> Self {
        self.focus = focus;
        self
    }

    pub fn credit_text(mut self, text: &'a str) -> Self {
        self.credit_text = Some(text);
        self
    }

    fn field_block(&self, field: CourseField, title: &'a str) -> Block<'a> {
        let focused = self.focus == Some(field);
        let border = if focused { self.theme.focus } else { self.theme.outline };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.theme.field_bg));
        if focused {
            block.title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        } else {
            block.title_style(Style::default().fg(self.theme.dimmed))
        }
    }
}

impl<'a> Widget for CourseRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Percentage(40),
                Constraint::Min(1),
            ])
            .split(area);

        // Row label, vertically centered
        let label_style = if self.focus.is_some() {
            Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.foreground)
        };
        let label = format!("Course {}", self.index + 1);
        buf.set_string(
            chunks[0].x,
            chunks[0].y + chunks[0].height / 2,
            truncate(&label, chunks[0].width.saturating_sub(1) as usize),
            label_style,
        );

        let text_style = Style::default().fg(self.theme.field_fg).bg(self.theme.field_bg);

        // Credit field
        let credit_block = self.field_block(CourseField::CreditHours, " Credits ");
        let credit_inner = credit_block.inner(chunks[1]);
        credit_block.render(chunks[1], buf);
        let credit = match self.credit_text {
            Some(text) => text.to_string(),
            None => format_credit(self.entry.credit_hours),
        };
        if credit_inner.height > 0 && credit_inner.width >= 2 {
            let width = credit_inner.width.saturating_sub(1) as usize;
            let (text, style) = if credit.is_empty() {
                ("Credit", Style::default().fg(self.theme.dimmed).bg(self.theme.field_bg))
            } else {
                (credit.as_str(), text_style)
            };
            buf.set_string(credit_inner.x + 1, credit_inner.y, truncate(text, width), style);
        }

        // Grade selector
        let grade_block = self.field_block(CourseField::GradePoint, " Grade ");
        let grade_inner = grade_block.inner(chunks[2]);
        grade_block.render(chunks[2], buf);
        let label = grades::label_for(self.entry.grade_point).unwrap_or("?");
        let grade = if self.focus == Some(CourseField::GradePoint) {
            format!("◀ {} ▶", label)
        } else {
            label.to_string()
        };
        if grade_inner.height > 0 && grade_inner.width >= 2 {
            let width = grade_inner.width.saturating_sub(1) as usize;
            buf.set_string(grade_inner.x + 1, grade_inner.y, truncate(&grade, width), text_style);
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else if max_width == 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}
