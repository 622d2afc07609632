// ABOUTME: Width of content spanning a number of grid columns.
// ABOUTME: A span of n is n columns plus the n - 1 gutters between them.

use grid_core::{ColumnSpan, GridConfig};

/// Width of `span` columns in `config`, margins excluded.
///
/// Spanning more columns than the grid has is allowed: a warning is logged
/// and the over-wide width is returned.
pub fn width_for_columns(config: &GridConfig, span: ColumnSpan) -> f32 {
    let columns = span.resolve(config.total_columns);

    if columns > config.total_columns {
        tracing::warn!(
            "Column count({}) exceeds Total Columns({})",
            columns,
            config.total_columns
        );
    }

    let n = columns as f32;
    config.column_width * n + config.gutter_width * (n - 1.0)
}

/// How a host should size an element that spans columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnedWidth {
    /// Take all the width the parent offers
    FillMax,
    Fixed(f32),
}

pub fn columned_width(config: &GridConfig, span: ColumnSpan) -> ColumnedWidth {
    match span {
        ColumnSpan::MatchParent => ColumnedWidth::FillMax,
        ColumnSpan::Columns(_) => ColumnedWidth::Fixed(width_for_columns(config, span)),
    }
}
