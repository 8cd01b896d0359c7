//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by page:
//! - `nav` - Navigation bar and status bar
//! - `home` - Welcome page
//! - `calculator` - Course rows and the GPA display
//! - `guidance` - How the GPA is calculated
//! - `menu` - Slide-out menu overlay

mod calculator;
mod guidance;
mod home;
mod menu;
mod nav;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Page};
use crate::ui::layout::is_compact;

use calculator::draw_calculator;
use guidance::draw_guidance;
use home::draw_home;
use menu::draw_menu;
use nav::{draw_nav, draw_status_bar, NAV_HEIGHT};

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = f.area();

    let bg_block =
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Navigation bar
            Constraint::Min(1),             // Page body
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    let compact = is_compact(area.width, app.config().calculator.compact_width);
    draw_nav(f, app, chunks[0], compact, theme);

    match app.page() {
        Page::Home => draw_home(f, chunks[1], theme),
        Page::Calculator => draw_calculator(f, app, chunks[1], theme),
        Page::Guidance => draw_guidance(f, chunks[1], theme),
    }

    draw_status_bar(f, app, chunks[2], theme);

    if app.is_menu_open() {
        draw_menu(f, app, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::keymap::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts WARN events
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap().buffer.clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn render_every_page_does_not_panic() {
        let mut app = App::new(Config::default());
        for page in Page::ALL {
            app.set_page(page);
            render(&app, 100, 30);
            render(&app, 40, 20);
            render(&app, 10, 4);
        }
    }

    #[test]
    fn home_page_shows_welcome() {
        let app = App::new(Config::default());
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("Welcome to the GPA Calculator"));
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn calculator_shows_worked_example_gpa() {
        let mut app = App::new(Config::default());
        app.set_page(Page::Calculator);
        app.apply(KeyAction::CreditInput('3'));
        app.apply(KeyAction::SwitchField);
        app.apply(KeyAction::Increment);
        app.apply(KeyAction::AddCourse);
        app.apply(KeyAction::CreditInput('4'));
        app.apply(KeyAction::SwitchField);
        app.apply(KeyAction::Increment);
        app.apply(KeyAction::Increment);

        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("GPA: 3.47"));
        assert!(text.contains("Course 1"));
        assert!(text.contains("Course 2"));
        assert!(text.contains("Add Course"));
    }

    #[test]
    fn calculator_starts_at_zero() {
        let mut app = App::new(Config::default());
        app.set_page(Page::Calculator);
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("GPA: 0.00"));
    }

    #[test]
    fn calculator_pages_long_lists() {
        let mut app = App::new(Config::default());
        app.set_page(Page::Calculator);
        for _ in 0..20 {
            app.apply(KeyAction::AddCourse);
        }
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("Course 21"));
        assert!(!text.contains("Course 1 "));
    }

    #[test]
    fn guidance_shows_example() {
        let mut app = App::new(Config::default());
        app.set_page(Page::Guidance);
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("How GPA is Calculated"));
        assert!(text.contains("GPA = 24.3 / 7 = 3.47"));
    }

    #[test]
    fn wide_nav_shows_tabs() {
        let app = App::new(Config::default());
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("Guidance"));
        assert!(!text.contains("Menu"));
    }

    #[test]
    fn narrow_nav_is_compact() {
        let app = App::new(Config::default());
        let buf = render(&app, 40, 20);
        let nav: String = (0..buf.area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(nav.contains("Menu"));
        assert!(!nav.contains("Guidance"));
    }

    #[test]
    fn menu_overlay_lists_items() {
        let mut app = App::new(Config::default());
        app.apply(KeyAction::ToggleMenu);
        let text = screen_text(&render(&app, 100, 30));
        assert!(text.contains("Calculator"));
        assert!(text.contains("Toggle Theme"));
    }

    #[test]
    fn theme_toggle_changes_background() {
        let mut app = App::new(Config::default());
        let light = render(&app, 80, 24);
        app.apply(KeyAction::ToggleTheme);
        let dark = render(&app, 80, 24);
        let (x, y) = (0, 10);
        assert_ne!(light[(x, y)].bg, dark[(x, y)].bg);
    }

    #[test]
    fn bad_accent_is_reported_once() {
        let mut config = Config::default();
        config.appearance.accent = Some("#zzz".to_string());

        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let mut app = App::new(config);
            for _ in 0..5 {
                render(&app, 80, 24);
                app.apply(KeyAction::ToggleTheme);
            }
        });

        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
