//! Theme system for gpacal
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in light and dark presets
//! - Hex color parsing for config overrides
//! - 256-color fallback

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Navigation bar background
    pub nav_bg: Color,
    /// Navigation bar text
    pub nav_fg: Color,
    /// Accent color (borders, GPA ring, active tab)
    pub accent: Color,
    /// Dimmed text (hints, secondary info)
    pub dimmed: Color,
    /// Input field background
    pub field_bg: Color,
    /// Input field text
    pub field_fg: Color,
    /// Border of the focused field
    pub focus: Color,
    /// Primary button
    pub primary_bg: Color,
    pub primary_fg: Color,
    /// Secondary button
    pub secondary_bg: Color,
    pub secondary_fg: Color,
    /// Outline button border and text
    pub outline: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::daylight()
    }
}

impl Theme {
    /// Daylight theme - light default
    pub fn daylight() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),   // #ffffff
            foreground: Color::Rgb(17, 24, 39),      // #111827
            nav_bg: Color::Rgb(37, 99, 235),         // #2563eb
            nav_fg: Color::Rgb(255, 255, 255),       // #ffffff
            accent: Color::Rgb(59, 130, 246),        // #3b82f6
            dimmed: Color::Rgb(107, 114, 128),       // #6b7280
            field_bg: Color::Rgb(243, 244, 246),     // #f3f4f6
            field_fg: Color::Rgb(17, 24, 39),        // #111827
            focus: Color::Rgb(37, 99, 235),          // #2563eb
            primary_bg: Color::Rgb(37, 99, 235),     // #2563eb
            primary_fg: Color::Rgb(255, 255, 255),   // #ffffff
            secondary_bg: Color::Rgb(229, 231, 235), // #e5e7eb
            secondary_fg: Color::Rgb(0, 0, 0),       // #000000
            outline: Color::Rgb(156, 163, 175),      // #9ca3af
        }
    }

    /// Midnight theme - dark default
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),      // #111827
            foreground: Color::Rgb(255, 255, 255),   // #ffffff
            nav_bg: Color::Rgb(37, 99, 235),         // #2563eb
            nav_fg: Color::Rgb(255, 255, 255),       // #ffffff
            accent: Color::Rgb(59, 130, 246),        // #3b82f6
            dimmed: Color::Rgb(156, 163, 175),       // #9ca3af
            field_bg: Color::Rgb(31, 41, 55),        // #1f2937
            field_fg: Color::Rgb(229, 231, 235),     // #e5e7eb
            focus: Color::Rgb(96, 165, 250),         // #60a5fa
            primary_bg: Color::Rgb(37, 99, 235),     // #2563eb
            primary_fg: Color::Rgb(255, 255, 255),   // #ffffff
            secondary_bg: Color::Rgb(55, 65, 81),    // #374151
            secondary_fg: Color::Rgb(243, 244, 246), // #f3f4f6
            outline: Color::Rgb(75, 85, 99),         // #4b5563
        }
    }

    /// Nord theme (dark)
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            nav_bg: Color::Rgb(59, 66, 82),           // #3b4252 (nord1)
            nav_fg: Color::Rgb(236, 239, 244),        // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),        // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            field_bg: Color::Rgb(67, 76, 94),         // #434c5e (nord2)
            field_fg: Color::Rgb(236, 239, 244),      // #eceff4 (nord6)
            focus: Color::Rgb(235, 203, 139),         // #ebcb8b (nord13)
            primary_bg: Color::Rgb(94, 129, 172),     // #5e81ac (nord10)
            primary_fg: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            secondary_bg: Color::Rgb(76, 86, 106),    // #4c566a (nord3)
            secondary_fg: Color::Rgb(236, 239, 244),  // #eceff4 (nord6)
            outline: Color::Rgb(129, 161, 193),       // #81a1c1 (nord9)
        }
    }

    /// Solarized light theme
    pub fn solarized_light() -> Self {
        Self {
            background: Color::Rgb(253, 246, 227),    // #fdf6e3 (base3)
            foreground: Color::Rgb(101, 123, 131),    // #657b83 (base00)
            nav_bg: Color::Rgb(38, 139, 210),         // #268bd2 (blue)
            nav_fg: Color::Rgb(253, 246, 227),        // #fdf6e3 (base3)
            accent: Color::Rgb(38, 139, 210),         // #268bd2 (blue)
            dimmed: Color::Rgb(147, 161, 161),        // #93a1a1 (base1)
            field_bg: Color::Rgb(238, 232, 213),      // #eee8d5 (base2)
            field_fg: Color::Rgb(88, 110, 117),       // #586e75 (base01)
            focus: Color::Rgb(181, 137, 0),           // #b58900 (yellow)
            primary_bg: Color::Rgb(38, 139, 210),     // #268bd2 (blue)
            primary_fg: Color::Rgb(253, 246, 227),    // #fdf6e3 (base3)
            secondary_bg: Color::Rgb(238, 232, 213),  // #eee8d5 (base2)
            secondary_fg: Color::Rgb(7, 54, 66),      // #073642 (base02)
            outline: Color::Rgb(147, 161, 161),       // #93a1a1 (base1)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "daylight" | "light" => Some(Self::daylight()),
            "midnight" | "dark" => Some(Self::midnight()),
            "nord" => Some(Self::nord()),
            "solarized-light" | "solarized_light" | "solarized" => Some(Self::solarized_light()),
            _ => None,
        }
    }

    /// Replace the accent (and everything keyed off it)
    pub fn with_accent(mut self, color: Color) -> Self {
        self.accent = color;
        self.focus = color;
        self.primary_bg = color;
        self
    }

    /// Convert to 256-color approximation for limited terminals
    pub fn to_256_color(&self) -> Self {
        Self {
            background: approximate_256(self.background),
            foreground: approximate_256(self.foreground),
            nav_bg: approximate_256(self.nav_bg),
            nav_fg: approximate_256(self.nav_fg),
            accent: approximate_256(self.accent),
            dimmed: approximate_256(self.dimmed),
            field_bg: approximate_256(self.field_bg),
            field_fg: approximate_256(self.field_fg),
            focus: approximate_256(self.focus),
            primary_bg: approximate_256(self.primary_bg),
            primary_fg: approximate_256(self.primary_fg),
            secondary_bg: approximate_256(self.secondary_bg),
            secondary_fg: approximate_256(self.secondary_fg),
            outline: approximate_256(self.outline),
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::InvalidLength => write!(f, "invalid color length (expected 3 or 6 hex chars)"),
            ColorError::InvalidHex => write!(f, "invalid hex character"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Approximate RGB color to nearest 256-color palette entry
fn approximate_256(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            // 6x6x6 color cube starts at index 16
            // Each axis: 0, 95, 135, 175, 215, 255 -> indices 0-5
            let axis = |c: u8| if c < 48 { 0 } else { (c - 35) / 40 };
            Color::Indexed(16 + 36 * axis(r) + 6 * axis(g) + axis(b))
        }
        c => c,
    }
}
