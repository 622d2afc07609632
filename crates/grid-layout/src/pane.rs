// ABOUTME: Pane specification: how a sub-layout takes columns from its parent grid.
// ABOUTME: Optional margin/gutter overrides fall back to the parent's values.

use std::num::NonZeroU32;

use grid_core::{ColumnSpan, GridConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSpec {
    /// Columns taken from the parent grid
    pub column_span: ColumnSpan,
    /// Margin inside the pane; parent's margin when `None`
    pub horizontal_margin: Option<f32>,
    /// Gutter inside the pane; parent's gutter when `None`
    pub gutter_width: Option<f32>,
    /// Columns the pane divides into; same as its span when `None`
    pub total_columns: Option<NonZeroU32>,
}

impl PaneSpec {
    pub fn new(column_span: ColumnSpan) -> Self {
        Self {
            column_span,
            horizontal_margin: None,
            gutter_width: None,
            total_columns: None,
        }
    }

    /// Pane spanning `count` columns, `None` for zero
    pub fn columns(count: u32) -> Option<Self> {
        ColumnSpan::columns(count).map(Self::new)
    }

    pub fn match_parent() -> Self {
        Self::new(ColumnSpan::MatchParent)
    }

    /// Two panes splitting the parent's columns evenly.
    ///
    /// With an odd column count the halves do not add up and a split of them fails.
    pub fn halves(parent: &GridConfig) -> (Self, Self) {
        let half = ColumnSpan::columns(parent.total_columns / 2).unwrap_or(ColumnSpan::MatchParent);
        (Self::new(half), Self::new(half))
    }

    pub fn with_margin(mut self, horizontal_margin: f32) -> Self {
        self.horizontal_margin = Some(horizontal_margin);
        self
    }

    pub fn with_gutter(mut self, gutter_width: f32) -> Self {
        self.gutter_width = Some(gutter_width);
        self
    }

    pub fn with_total_columns(mut self, total_columns: NonZeroU32) -> Self {
        self.total_columns = Some(total_columns);
        self
    }

    pub fn pane_columns(&self, parent: &GridConfig) -> u32 {
        self.column_span.resolve(parent.total_columns)
    }

    pub fn horizontal_margin(&self, parent: &GridConfig) -> f32 {
        self.horizontal_margin.unwrap_or(parent.horizontal_margin)
    }

    pub fn gutter_width(&self, parent: &GridConfig) -> f32 {
        self.gutter_width.unwrap_or(parent.gutter_width)
    }

    pub fn total_columns(&self, parent: &GridConfig) -> u32 {
        self.total_columns.map_or_else(|| self.pane_columns(parent), NonZeroU32::get)
    }

    /// Grid for this pane laid out at `layout_width`
    pub(crate) fn grid(&self, parent: &GridConfig, layout_width: f32) -> GridConfig {
        GridConfig::new(
            layout_width,
            self.horizontal_margin(parent),
            self.gutter_width(parent),
            self.total_columns(parent),
        )
    }
}
