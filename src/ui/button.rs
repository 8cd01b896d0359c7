//! Button widget
//!
//! Three variants mirror the web look: a filled primary button, a muted
//! secondary one, and an outline button for the theme toggle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::course_row::truncate;
use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Default,
    Large,
}

impl ButtonSize {
    /// Columns of padding on each side of the label
    fn padding(self) -> u16 {
        match self {
            ButtonSize::Small => 1,
            ButtonSize::Default => 2,
            ButtonSize::Large => 3,
        }
    }

    /// Lines the button occupies
    pub fn height(self) -> u16 {
        match self {
            ButtonSize::Small | ButtonSize::Default => 1,
            ButtonSize::Large => 3,
        }
    }
}

pub struct Button<'a> {
    label: &'a str,
    theme: &'a Theme,
    variant: ButtonVariant,
    size: ButtonSize,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            theme,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            focused: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Natural width in columns
    pub fn width(&self) -> u16 {
        let border = if self.variant == ButtonVariant::Outline { 2 } else { 0 };
        self.label.width() as u16 + self.size.padding() * 2 + border
    }

    pub fn height(&self) -> u16 {
        self.size.height()
    }

    fn style(&self) -> Style {
        let theme = self.theme;
        let style = match self.variant {
            ButtonVariant::Primary => Style::default().fg(theme.primary_fg).bg(theme.primary_bg),
            ButtonVariant::Secondary => {
                Style::default().fg(theme.secondary_fg).bg(theme.secondary_bg)
            }
            ButtonVariant::Outline => Style::default().fg(theme.foreground).bg(theme.background),
        };
        if self.focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = self.style();
        buf.set_style(area, style);

        let mut inner = area;
        if self.variant == ButtonVariant::Outline {
            if area.height >= 3 {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.outline));
                inner = block.inner(area);
                block.render(area, buf);
            } else if area.width >= 2 {
                // single-line outline: bracket the label
                let bracket = Style::default().fg(self.theme.outline);
                buf.set_string(area.x, area.y, "[", bracket);
                buf.set_string(area.x + area.width - 1, area.y, "]", bracket);
                inner = Rect {
                    x: area.x + 1,
                    width: area.width - 2,
                    ..area
                };
            }
        }

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label = truncate(self.label, inner.width as usize);
        let label_width = label.width() as u16;
        let x = inner.x + (inner.width.saturating_sub(label_width)) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_string(x, y, label, style);
    }
}
