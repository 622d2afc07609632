// ABOUTME: Layout primitives built on a responsive column grid.
// ABOUTME: Sizes column spans and derives grids for centered and side by side panes.

mod centered;
mod context;
mod error;
mod overlay;
mod pane;
mod two_pane;
mod width;

pub use centered::centered_pane;
pub use context::GridContext;
pub use error::GridError;
pub use overlay::{GridOverlay, Stripe, StripeKind, BORDER_WIDTH};
pub use pane::PaneSpec;
pub use two_pane::{two_pane, PaneSide, PaneSlot, TwoPaneLayout};
pub use width::{columned_width, width_for_columns, ColumnedWidth};
