// ABOUTME: Scoped "current grid" threaded through a layout call tree.
// ABOUTME: Nested scopes override the grid and restore the enclosing one on exit.

use grid_core::{ColumnSpan, GridConfig};

use crate::{
    centered_pane, columned_width, two_pane, width_for_columns, ColumnedWidth, GridError,
    PaneSide, PaneSlot, PaneSpec, TwoPaneLayout,
};

/// Stack of grids; the innermost provided one is current.
///
/// Passed by `&mut` down the layout code instead of living in a global, so
/// each layout pass owns its context.
#[derive(Debug, Default)]
pub struct GridContext {
    stack: Vec<GridConfig>,
}

impl GridContext {
    /// Context with no grid; lookups fail until one is provided
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: GridConfig) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Result<GridConfig, GridError> {
        self.stack.last().copied().ok_or(GridError::MissingContext)
    }

    /// Number of grids currently provided
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `f` with `config` as the current grid
    pub fn provide<R>(&mut self, config: GridConfig, f: impl FnOnce(&mut Self) -> R) -> R {
        self.stack.push(config);
        let result = f(self);
        self.stack.pop();
        result
    }

    pub fn width_for(&self, span: ColumnSpan) -> Result<f32, GridError> {
        Ok(width_for_columns(&self.current()?, span))
    }

    pub fn columned_width(&self, span: ColumnSpan) -> Result<ColumnedWidth, GridError> {
        Ok(columned_width(&self.current()?, span))
    }

    /// Run `f` on the grid of a pane centered in the current grid.
    ///
    /// A match-parent pane runs `f` on the current grid unchanged.
    pub fn centered<R>(
        &mut self,
        pane: &PaneSpec,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, GridError> {
        let parent = self.current()?;
        match centered_pane(&parent, pane)? {
            Some(config) => Ok(self.provide(config, f)),
            None => Ok(f(self)),
        }
    }

    /// Split the current grid into two panes and run each pane's function on
    /// its own grid. A pane that is not shown is not run and yields `None`.
    pub fn split<L, R>(
        &mut self,
        left: &PaneSpec,
        right: &PaneSpec,
        render_left: impl FnOnce(&mut Self, PaneSlot) -> L,
        render_right: impl FnOnce(&mut Self, PaneSlot) -> R,
    ) -> Result<(Option<L>, Option<R>), GridError> {
        let parent = self.current()?;
        let rendered = match two_pane(&parent, left, right)? {
            TwoPaneLayout::Single {
                side: PaneSide::Left,
                slot,
            } => (Some(self.provide(slot.config, |ctx| render_left(ctx, slot))), None),
            TwoPaneLayout::Single {
                side: PaneSide::Right,
                slot,
            } => (None, Some(self.provide(slot.config, |ctx| render_right(ctx, slot)))),
            TwoPaneLayout::Split { left, right } => (
                Some(self.provide(left.config, |ctx| render_left(ctx, left))),
                Some(self.provide(right.config, |ctx| render_right(ctx, right))),
            ),
        };
        Ok(rendered)
    }
}
