// ABOUTME: Centered single pane layout.
// ABOUTME: Turns the space around a column span into symmetric margins of a new grid.

use grid_core::{ColumnSpan, GridConfig};

use crate::{width_for_columns, GridError, PaneSpec};

/// Grid for content centered over `pane.column_span` columns of `parent`.
///
/// ```text
/// |M| Column |G| Column |G| Column |M|
/// |--SPACE--|-- Content --|--SPACE--|
/// ```
///
/// The new grid keeps the parent's full layout width and gutter; everything
/// outside the span becomes margin. `Ok(None)` for a match-parent pane, whose
/// content stays on the parent grid.
pub fn centered_pane(parent: &GridConfig, pane: &PaneSpec) -> Result<Option<GridConfig>, GridError> {
    let columns = match pane.column_span {
        ColumnSpan::MatchParent => return Ok(None),
        ColumnSpan::Columns(n) => n.get(),
    };

    if columns > parent.total_columns {
        return Err(GridError::column_mismatch(format_args!(
            "centered pane spans {} of {} columns",
            columns, parent.total_columns
        )));
    }

    let pane_width = width_for_columns(parent, pane.column_span);
    let horizontal_margin = (parent.layout_width - pane_width) / 2.0;

    let config = GridConfig::new(
        parent.layout_width,
        horizontal_margin,
        parent.gutter_width,
        pane.total_columns(parent),
    );

    tracing::debug!(
        "Centered pane over {} columns: margin {}, {} columns of {}",
        columns,
        horizontal_margin,
        config.total_columns,
        config.column_width
    );

    Ok(Some(config))
}
