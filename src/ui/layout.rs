//! Layout helpers
//!
//! Provides:
//! - Course table paging (which rows fit on screen for a selection)
//! - Responsive breakpoint for the navigation bar
//! - Centered rectangles for overlays and page bodies

use ratatui::layout::Rect;
use std::ops::Range;

/// Height of one course row in lines (bordered fields)
pub const COURSE_ROW_HEIGHT: u16 = 3;

/// Paging window over the course rows
#[derive(Debug, Clone, Copy)]
pub struct CourseTableLayout {
    /// Number of rows that fit on screen
    pub visible_rows: u16,
}

impl Default for CourseTableLayout {
    fn default() -> Self {
        Self { visible_rows: 5 }
    }
}

impl CourseTableLayout {
    /// Create a layout showing `visible_rows` rows (at least one)
    pub fn new(visible_rows: u16) -> Self {
        Self {
            visible_rows: visible_rows.max(1),
        }
    }

    /// Layout for an area of the given height
    pub fn for_height(height: u16) -> Self {
        Self::new(height / COURSE_ROW_HEIGHT)
    }

    /// Calculate the range of rows visible for a given selection
    /// Returns the start..end indices of rows to display
    pub fn visible_range(&self, selected: usize, total: usize) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.visible_rows as usize;
        let page = selected.min(total - 1) / page_size;
        let start = page * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Page indicator as (current, total), both 1-based
    pub fn page_of(&self, selected: usize, total: usize) -> (usize, usize) {
        let page_size = self.visible_rows as usize;
        let pages = total.div_ceil(page_size).max(1);
        let page = (selected / page_size + 1).min(pages);
        (page, pages)
    }
}

/// Whether a terminal of this width gets the compact navigation bar
pub fn is_compact(width: u16, breakpoint: u16) -> bool {
    width < breakpoint
}

/// A rect of at most `width` x `height`, centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A rect of `width` columns anchored to the right edge of `area`
pub fn right_panel(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        let layout = CourseTableLayout::new(4);

        // First page
        assert_eq!(layout.visible_range(0, 10), 0..4);
        assert_eq!(layout.visible_range(3, 10), 0..4);

        // Second page
        assert_eq!(layout.visible_range(4, 10), 4..8);

        // Third page (partial)
        assert_eq!(layout.visible_range(9, 10), 8..10);
    }

    #[test]
    fn test_visible_range_edges() {
        let layout = CourseTableLayout::new(4);
        assert_eq!(layout.visible_range(0, 0), 0..0);
        assert_eq!(layout.visible_range(0, 2), 0..2);
        // stale selection past the end still yields the last page
        assert_eq!(layout.visible_range(20, 10), 8..10);
    }

    #[test]
    fn test_for_height() {
        assert_eq!(CourseTableLayout::for_height(12).visible_rows, 4);
        assert_eq!(CourseTableLayout::for_height(1).visible_rows, 1);
    }

    #[test]
    fn test_page_of() {
        let layout = CourseTableLayout::new(4);
        assert_eq!(layout.page_of(0, 1), (1, 1));
        assert_eq!(layout.page_of(5, 10), (2, 3));
        assert_eq!(layout.page_of(0, 0), (1, 1));
    }

    #[test]
    fn test_is_compact() {
        assert!(is_compact(40, 64));
        assert!(!is_compact(64, 64));
        assert!(!is_compact(120, 64));
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 20, 10), Rect::new(40, 15, 20, 10));
        // clamps to the area
        assert_eq!(centered(area, 200, 100), area);
    }

    #[test]
    fn test_right_panel() {
        let area = Rect::new(0, 3, 80, 20);
        assert_eq!(right_panel(area, 30), Rect::new(50, 3, 30, 20));
        assert_eq!(right_panel(Rect::new(0, 0, 10, 5), 30), Rect::new(0, 0, 10, 5));
    }
}
