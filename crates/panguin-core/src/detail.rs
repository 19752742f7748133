//! State for the details table: column widths and row selection.
//!
//! The two axes are independent. Widths persist until a divider changes them;
//! the selection is a single optional index, so at most one row can ever be
//! selected.

use std::ops::Index;

/// Narrowest a column may be resized to, in logical pixels.
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Widths a freshly mounted table starts with.
pub const DEFAULT_COLUMN_WIDTHS: ColumnWidths = ColumnWidths([200.0, 50.0]);

/// Columns of the details table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Size,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::Name, Column::Size];

    /// Position of the column in the width vector.
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Size => 1,
        }
    }

    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
        }
    }
}

/// Pixel widths of the two columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnWidths([f64; 2]);

impl ColumnWidths {
    pub fn get(&self, column: Column) -> f64 {
        self.0[column.index()]
    }

    /// CSS width value for a column (e.g. `"200px"`).
    pub fn css(&self, column: Column) -> String {
        format!("{}px", self.get(column))
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        DEFAULT_COLUMN_WIDTHS
    }
}

impl Index<Column> for ColumnWidths {
    type Output = f64;

    fn index(&self, column: Column) -> &f64 {
        &self.0[column.index()]
    }
}

/// Interactive state owned by one details table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    col_widths: ColumnWidths,
    selected: Option<usize>,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col_widths(&self) -> ColumnWidths {
        self.col_widths
    }

    /// Index of the selected row, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Set a column's width, never going below [`MIN_COLUMN_WIDTH`].
    ///
    /// A NaN request resolves to the floor.
    pub fn resize(&mut self, column: Column, width: f64) {
        let width = if width.is_nan() {
            MIN_COLUMN_WIDTH
        } else {
            width.max(MIN_COLUMN_WIDTH)
        };
        self.col_widths.0[column.index()] = width;
    }

    /// Select a row, replacing any previous selection.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether the selection points past the end of a list of `len` rows.
    pub fn is_stale(&self, len: usize) -> bool {
        self.selected.is_some_and(|i| i >= len)
    }

    /// Drop a selection that no longer fits a list of `len` rows.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn reconcile(&mut self, len: usize) -> bool {
        if self.is_stale(len) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DetailState::new();
        assert_eq!(state.col_widths()[Column::Name], 200.0);
        assert_eq!(state.col_widths()[Column::Size], 50.0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_resize_respects_floor() {
        let mut state = DetailState::new();
        for (requested, expected) in [(320.5, 320.5), (50.0, 50.0), (49.9, 50.0), (-1e9, 50.0)] {
            state.resize(Column::Name, requested);
            assert_eq!(state.col_widths()[Column::Name], expected);
        }

        state.resize(Column::Size, f64::NAN);
        assert_eq!(state.col_widths()[Column::Size], MIN_COLUMN_WIDTH);
        state.resize(Column::Size, f64::INFINITY);
        assert_eq!(state.col_widths()[Column::Size], f64::INFINITY);
    }

    #[test]
    fn test_resize_touches_only_target_column() {
        let mut state = DetailState::new();
        state.resize(Column::Size, 90.0);
        assert_eq!(state.col_widths()[Column::Name], 200.0);
        assert_eq!(state.col_widths()[Column::Size], 90.0);

        // Same input, same result
        state.resize(Column::Size, 90.0);
        assert_eq!(state.col_widths()[Column::Size], 90.0);
    }

    #[test]
    fn test_single_selection() {
        let mut state = DetailState::new();
        state.select(1);
        state.select(3);

        assert_eq!(state.selected(), Some(3));
        assert!(state.is_selected(3));
        assert!(!state.is_selected(1));
    }

    #[test]
    fn test_clear_selection() {
        let mut state = DetailState::new();
        state.select(2);
        state.clear_selection();
        assert_eq!(state.selected(), None);

        // Clearing again is harmless
        state.clear_selection();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reconcile() {
        let mut state = DetailState::new();
        state.select(3);

        assert!(!state.reconcile(4));
        assert_eq!(state.selected(), Some(3));

        assert!(state.reconcile(3));
        assert_eq!(state.selected(), None);

        // Nothing selected: nothing to clear
        assert!(!state.reconcile(0));
    }

    #[test]
    fn test_css_width() {
        let mut widths = ColumnWidths::default();
        assert_eq!(widths.css(Column::Name), "200px");
        widths.0[1] = 62.5;
        assert_eq!(widths.css(Column::Size), "62.5px");
    }
}
