//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Per-page draw functions
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Paging and placement helpers
//! - `button.rs` - Button widget
//! - `course_row.rs` - Course row widget

mod draw;
pub mod button;
pub mod course_row;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use theme::Theme;
