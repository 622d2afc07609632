// ABOUTME: Shared types and configuration for responsive-grid.
// ABOUTME: Defines the grid value, column spans, overlay colors and config file handling.

pub mod color;
pub mod config;
pub mod grid;
pub mod memo;
pub mod span;

pub use color::{Color, OverlayColors};
pub use config::{Breakpoint, Config, ConfigError, OverlaySettings};
pub use grid::GridConfig;
pub use memo::GridMemo;
pub use span::ColumnSpan;
