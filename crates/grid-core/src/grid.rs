// ABOUTME: Grid configuration value describing a column layout.
// ABOUTME: Derives the single column width from width, margins, gutters and column count.

use serde::{Deserialize, Serialize};

/// A horizontal layout divided into equal columns.
///
/// ```text
/// |M| Column |G| Column |G| Column |M|
/// ```
///
/// `column_width` is derived, never supplied. Instances are immutable;
/// when any input changes build a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Total width available to the grid
    pub layout_width: f32,
    /// Width of a single column
    pub column_width: f32,
    /// Space reserved at both the start and the end of the layout
    pub horizontal_margin: f32,
    /// Space between two adjacent columns
    pub gutter_width: f32,
    pub total_columns: u32,
}

impl GridConfig {
    /// Build a grid, computing the column width as
    /// `(layout_width - 2 * margin - gutter * (columns - 1)) / columns`.
    ///
    /// Inconsistent inputs produce a negative `column_width`; it is kept as is.
    pub fn new(
        layout_width: f32,
        horizontal_margin: f32,
        gutter_width: f32,
        total_columns: u32,
    ) -> Self {
        debug_assert!(total_columns >= 1, "grid needs at least one column");

        let columns = total_columns as f32;
        let column_width =
            (layout_width - horizontal_margin * 2.0 - gutter_width * (columns - 1.0)) / columns;

        let config = Self {
            layout_width,
            column_width,
            horizontal_margin,
            gutter_width,
            total_columns,
        };

        if !config.is_well_formed() {
            tracing::debug!(
                "Grid of {} columns in {} has non-positive column width {}",
                total_columns,
                layout_width,
                column_width
            );
        }

        config
    }

    /// True when every column has a positive width
    pub fn is_well_formed(&self) -> bool {
        self.column_width > 0.0
    }

    /// Width left once both margins are taken out
    pub fn content_width(&self) -> f32 {
        self.layout_width - self.horizontal_margin * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_grid_column_width() {
        let grid = GridConfig::new(360.0, 16.0, 8.0, 4);
        assert_eq!(grid.column_width, 76.0);
        assert_eq!(grid.layout_width, 360.0);
        assert_eq!(grid.total_columns, 4);
    }

    #[test]
    fn columns_and_gutters_fill_content_width() {
        let grid = GridConfig::new(1280.0, 32.0, 24.0, 12);
        let filled = grid.column_width * 12.0 + grid.gutter_width * 11.0;
        assert!((filled - grid.content_width()).abs() < 0.001);
    }

    #[test]
    fn single_column_has_no_gutter() {
        let grid = GridConfig::new(100.0, 10.0, 50.0, 1);
        assert_eq!(grid.column_width, 80.0);
    }

    #[test]
    fn inconsistent_inputs_pass_through_negative_width() {
        let grid = GridConfig::new(100.0, 40.0, 20.0, 4);
        assert!(grid.column_width < 0.0);
        assert!(!grid.is_well_formed());
    }
}
