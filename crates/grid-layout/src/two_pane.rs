// ABOUTME: Side by side master/detail layout.
// ABOUTME: Splits a parent grid into left and right pane grids, or one full width pane.

use grid_core::GridConfig;

use crate::{width_for_columns, GridError, PaneSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Left,
    Right,
}

/// Width a pane occupies and the grid its content lays out on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSlot {
    pub width: f32,
    pub config: GridConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwoPaneLayout {
    /// One pane takes every column; the other is not shown
    Single { side: PaneSide, slot: PaneSlot },
    Split { left: PaneSlot, right: PaneSlot },
}

impl TwoPaneLayout {
    /// Visible panes, left to right
    pub fn panes(&self) -> Vec<(PaneSide, PaneSlot)> {
        match *self {
            TwoPaneLayout::Single { side, slot } => vec![(side, slot)],
            TwoPaneLayout::Split { left, right } => {
                vec![(PaneSide::Left, left), (PaneSide::Right, right)]
            }
        }
    }
}

/// Divide `parent` between a master (`left`) and detail (`right`) pane.
///
/// ```text
/// |M| Column |G| Column |G| Column |M|
/// |--- Left ---|---------- Right ---------|
/// ```
///
/// The two spans must add up to the parent's columns, unless one of them takes
/// every column, in which case that pane alone fills the layout. The detail pane
/// wins when both do.
///
/// In a split the left pane gets its columns plus the leading margin; the right
/// pane gets whatever is left, so the two always cover the parent exactly.
pub fn two_pane(
    parent: &GridConfig,
    left: &PaneSpec,
    right: &PaneSpec,
) -> Result<TwoPaneLayout, GridError> {
    let left_columns = left.pane_columns(parent);
    let right_columns = right.pane_columns(parent);

    let only_left = left_columns == parent.total_columns;
    let only_right = right_columns == parent.total_columns;

    let fills_parent = left_columns.checked_add(right_columns) == Some(parent.total_columns);
    if !fills_parent && !only_left && !only_right {
        return Err(GridError::column_mismatch(format_args!(
            "{} + {} panes in {} columns",
            left_columns, right_columns, parent.total_columns
        )));
    }

    if only_left || only_right {
        let (side, spec) = if only_right {
            (PaneSide::Right, right)
        } else {
            (PaneSide::Left, left)
        };

        let slot = PaneSlot {
            width: parent.layout_width,
            config: spec.grid(parent, parent.layout_width),
        };
        tracing::debug!("Two pane layout showing {:?} pane only", side);
        return Ok(TwoPaneLayout::Single { side, slot });
    }

    let left_width = width_for_columns(parent, left.column_span) + parent.horizontal_margin;
    let right_width = parent.layout_width - left_width;

    tracing::debug!(
        "Two pane split {}/{} columns: {} | {}",
        left_columns,
        right_columns,
        left_width,
        right_width
    );

    Ok(TwoPaneLayout::Split {
        left: PaneSlot {
            width: left_width,
            config: left.grid(parent, left_width),
        },
        right: PaneSlot {
            width: right_width,
            config: right.grid(parent, right_width),
        },
    })
}
