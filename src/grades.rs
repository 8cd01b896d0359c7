//! Fixed letter-grade table.
//!
//! The table is ordered best to worst, exactly as the grade selector lists it.
//! Two labels can share a point value (`A+` and `A`); anything keyed by value
//! resolves to the first label carrying it.

/// A single grade option: display label and its point value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub label: &'static str,
    pub points: f64,
}

/// Default grade point for a freshly added course
pub const DEFAULT_GRADE_POINT: f64 = 4.0;

/// All grade options, best first
pub static GRADE_TABLE: [Grade; 12] = [
    Grade { label: "A+ (4.0)", points: 4.0 },
    Grade { label: "A (4.0)", points: 4.0 },
    Grade { label: "A- (3.7)", points: 3.7 },
    Grade { label: "B+ (3.3)", points: 3.3 },
    Grade { label: "B (3.0)", points: 3.0 },
    Grade { label: "B- (2.7)", points: 2.7 },
    Grade { label: "C+ (2.3)", points: 2.3 },
    Grade { label: "C (2.0)", points: 2.0 },
    Grade { label: "C- (1.7)", points: 1.7 },
    Grade { label: "D+ (1.3)", points: 1.3 },
    Grade { label: "D (1.0)", points: 1.0 },
    Grade { label: "E (0.0)", points: 0.0 },
];

/// Position of the first grade carrying `points`
pub fn position_of(points: f64) -> Option<usize> {
    GRADE_TABLE.iter().position(|g| g.points == points)
}

/// Whether `points` is one of the table's values
pub fn is_known_point(points: f64) -> bool {
    position_of(points).is_some()
}

/// Label shown for a point value, or `None` for a value outside the table
pub fn label_for(points: f64) -> Option<&'static str> {
    position_of(points).map(|i| GRADE_TABLE[i].label)
}

/// Next lower distinct point value (moving down the table).
///
/// Clamps at the bottom; an unknown value is returned unchanged.
pub fn step_down(points: f64) -> f64 {
    let Some(start) = position_of(points) else {
        return points;
    };
    GRADE_TABLE[start..]
        .iter()
        .map(|g| g.points)
        .find(|&p| p != points)
        .unwrap_or(points)
}

/// Next higher distinct point value (moving up the table).
///
/// Clamps at the top; an unknown value is returned unchanged.
pub fn step_up(points: f64) -> f64 {
    let Some(start) = position_of(points) else {
        return points;
    };
    GRADE_TABLE[..start]
        .iter()
        .rev()
        .map(|g| g.points)
        .find(|&p| p != points)
        .unwrap_or(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_shape() {
        assert_eq!(GRADE_TABLE.len(), 12);
        assert_eq!(GRADE_TABLE[0].label, "A+ (4.0)");
        assert_eq!(GRADE_TABLE[11].label, "E (0.0)");

        let labels: HashSet<_> = GRADE_TABLE.iter().map(|g| g.label).collect();
        assert_eq!(labels.len(), GRADE_TABLE.len());

        for grade in &GRADE_TABLE {
            assert!((0.0..=4.0).contains(&grade.points), "{:?}", grade);
        }
    }

    #[test]
    fn test_table_is_descending() {
        for pair in GRADE_TABLE.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(label_for(3.7), Some("A- (3.7)"));
        assert_eq!(label_for(2.5), None);
        assert!(is_known_point(0.0));
        assert!(!is_known_point(4.5));
    }

    #[test]
    fn test_shared_value_resolves_to_first_label() {
        assert_eq!(label_for(4.0), Some("A+ (4.0)"));
        assert_eq!(position_of(4.0), Some(0));
    }

    #[test]
    fn test_step_skips_duplicates() {
        assert_eq!(step_down(4.0), 3.7);
        assert_eq!(step_up(3.7), 4.0);
        assert_eq!(step_down(3.3), 3.0);
        assert_eq!(step_up(3.0), 3.3);
    }

    #[test]
    fn test_step_clamps() {
        assert_eq!(step_up(4.0), 4.0);
        assert_eq!(step_down(0.0), 0.0);
    }

    #[test]
    fn test_step_unknown_value() {
        assert_eq!(step_up(2.5), 2.5);
        assert_eq!(step_down(2.5), 2.5);
    }
}
