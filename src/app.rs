use crate::config::Config;
use crate::gpa::{CourseField, CourseList};
use crate::grades;
use crate::keymap::{KeyAction, KeyContext};
use crate::ui::Theme;

/// Longest credit value the field accepts, in characters
const MAX_CREDIT_LEN: usize = 6;

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Calculator,
    Guidance,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Calculator, Page::Guidance];

    /// Tab title in the navigation bar
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Calculator => "GPA Calculator",
            Page::Guidance => "Guidance",
        }
    }
}

/// Entries of the slide-out menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Open(Page),
    ToggleTheme,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Open(Page::Home),
        MenuItem::Open(Page::Calculator),
        MenuItem::Open(Page::Guidance),
        MenuItem::ToggleTheme,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Open(Page::Home) => "Home",
            MenuItem::Open(Page::Calculator) => "Calculator",
            MenuItem::Open(Page::Guidance) => "Guidance",
            MenuItem::ToggleTheme => "Toggle Theme",
        }
    }
}

/// Application state
///
/// Everything the UI shows lives here; draw functions only read it and
/// key actions are the only way to change it.
pub struct App {
    /// Current page
    page: Page,
    /// Whether the slide-out menu is open
    menu_open: bool,
    /// Highlighted menu entry (index into `MenuItem::ALL`)
    menu_selected: usize,
    /// Dark or light theme
    dark_mode: bool,
    /// Courses entered so far
    courses: CourseList,
    /// Focused course row
    selected_row: usize,
    /// Focused field within the row
    field: CourseField,
    /// Raw text of the focused credit field
    credit_buffer: String,
    /// Set once the user asked to quit
    should_quit: bool,
    /// Resolved light theme
    light_theme: Theme,
    /// Resolved dark theme
    dark_theme: Theme,
    /// Configuration
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let courses = CourseList::with_defaults(config.initial_courses());
        let dark_mode = config.appearance.dark_mode;
        let (light_theme, dark_theme) = config.resolve_themes();

        let mut app = Self {
            page: Page::default(),
            menu_open: false,
            menu_selected: 0,
            dark_mode,
            courses,
            selected_row: 0,
            field: CourseField::CreditHours,
            credit_buffer: String::new(),
            should_quit: false,
            light_theme,
            dark_theme,
            config,
        };
        app.sync_credit_buffer();
        app
    }

    /// Snapshot of the state the key map depends on
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            page: self.page,
            menu_open: self.menu_open,
            field: self.field,
        }
    }

    /// Apply one user action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::ToggleMenu => self.toggle_menu(),
            KeyAction::CloseMenu => self.menu_open = false,
            KeyAction::GoTo(page) => self.set_page(page),
            KeyAction::MenuUp => {
                self.menu_selected = self.menu_selected.saturating_sub(1);
            }
            KeyAction::MenuDown => {
                if self.menu_selected + 1 < MenuItem::ALL.len() {
                    self.menu_selected += 1;
                }
            }
            KeyAction::MenuSelect => self.select_menu_item(),
            KeyAction::GetStarted => self.set_page(Page::Calculator),
            KeyAction::PreviousRow => {
                if self.selected_row > 0 {
                    self.selected_row -= 1;
                    self.sync_credit_buffer();
                }
            }
            KeyAction::NextRow => {
                if self.selected_row + 1 < self.courses.len() {
                    self.selected_row += 1;
                    self.sync_credit_buffer();
                }
            }
            KeyAction::SwitchField => {
                self.field = self.field.toggle();
                self.sync_credit_buffer();
            }
            KeyAction::Decrement => self.step_field(false),
            KeyAction::Increment => self.step_field(true),
            KeyAction::CreditInput(c) => self.push_credit_char(c),
            KeyAction::CreditBackspace => self.pop_credit_char(),
            KeyAction::AddCourse => self.add_course(),
            KeyAction::None => {}
        }
    }

    /// Switch page; also closes the menu
    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!("Page: {:?} -> {:?}", self.page, page);
        }
        self.page = page;
        self.menu_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!("Dark mode: {}", self.dark_mode);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = MenuItem::ALL
                .iter()
                .position(|item| *item == MenuItem::Open(self.page))
                .unwrap_or(0);
        }
    }

    fn select_menu_item(&mut self) {
        match MenuItem::ALL.get(self.menu_selected) {
            Some(MenuItem::Open(page)) => self.set_page(*page),
            Some(MenuItem::ToggleTheme) => self.toggle_theme(),
            None => {}
        }
    }

    /// Append a course and focus its credit field
    pub fn add_course(&mut self) {
        self.selected_row = self.courses.add_course();
        self.field = CourseField::CreditHours;
        self.sync_credit_buffer();
        tracing::debug!("Added course {}", self.selected_row + 1);
    }

    /// Left/Right on the focused field: credit -1/+1 or previous/next grade
    fn step_field(&mut self, forward: bool) {
        let Some(entry) = self.courses.get(self.selected_row).copied() else {
            return;
        };

        match self.field {
            CourseField::CreditHours => {
                match step_credit(entry.credit_hours, forward) {
                    Some(value) => {
                        self.set_field(CourseField::CreditHours, value);
                        self.sync_credit_buffer();
                    }
                    None => tracing::debug!("Credit step would overflow the field"),
                }
            }
            CourseField::GradePoint => {
                // forward walks down the table, like a dropdown list
                let value = if forward {
                    grades::step_down(entry.grade_point)
                } else {
                    grades::step_up(entry.grade_point)
                };
                self.set_field(CourseField::GradePoint, value);
            }
        }
    }

    fn push_credit_char(&mut self, c: char) {
        if self.field != CourseField::CreditHours {
            return;
        }

        if c == '.' {
            if self.credit_buffer.contains('.') {
                return;
            }
        } else if !c.is_ascii_digit() {
            return;
        }

        if self.credit_buffer == "0" && c != '.' {
            self.credit_buffer.clear();
        }
        if self.credit_buffer.len() >= MAX_CREDIT_LEN {
            return;
        }

        self.credit_buffer.push(c);
        self.apply_credit_buffer();
    }

    fn pop_credit_char(&mut self) {
        if self.field != CourseField::CreditHours {
            return;
        }
        self.credit_buffer.pop();
        self.apply_credit_buffer();
    }

    fn apply_credit_buffer(&mut self) {
        match parse_credit(&self.credit_buffer) {
            Some(value) => self.set_field(CourseField::CreditHours, value),
            None => tracing::warn!("Unparseable credit input '{}'", self.credit_buffer),
        }
    }

    fn set_field(&mut self, field: CourseField, value: f64) {
        if let Err(e) = self.courses.update_course(self.selected_row, field, value) {
            tracing::warn!("Course update rejected: {}", e);
        }
    }

    /// Reload the credit buffer from the focused course
    fn sync_credit_buffer(&mut self) {
        self.credit_buffer = self
            .courses
            .get(self.selected_row)
            .map(|entry| format_credit(entry.credit_hours))
            .unwrap_or_default();
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn courses(&self) -> &CourseList {
        &self.courses
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn focused_field(&self) -> CourseField {
        self.field
    }

    pub fn credit_buffer(&self) -> &str {
        &self.credit_buffer
    }

    /// GPA of the current course list, recomputed on every call
    pub fn gpa(&self) -> f64 {
        self.courses.gpa()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Theme for the current mode
    pub fn theme(&self) -> &Theme {
        if self.dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Get config reference
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Credit field text to a value; empty or a lone point counts as zero
fn parse_credit(text: &str) -> Option<f64> {
    match text {
        "" | "." => Some(0.0),
        _ => text.parse().ok(),
    }
}

/// Spinner step of one credit, kept at the precision the value was typed with.
///
/// Never goes below zero; `None` when the result would not fit the field.
fn step_credit(value: f64, forward: bool) -> Option<f64> {
    let decimals = format_credit(value)
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    let scale = 10f64.powi(decimals as i32);
    let delta = if forward { 1.0 } else { -1.0 };
    let stepped = (((value + delta) * scale).round() / scale).max(0.0);

    (format_credit(stepped).len() <= MAX_CREDIT_LEN).then_some(stepped)
}

/// Credit value as shown in the field (no trailing `.0`)
pub fn format_credit(value: f64) -> String {
    format!("{}", value)
}
