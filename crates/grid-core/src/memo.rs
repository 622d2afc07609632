// ABOUTME: Memoization of grid configurations keyed on their inputs.
// ABOUTME: Returns the same GridConfig a fresh computation would produce.

use std::collections::HashMap;

use crate::GridConfig;

/// Exact input tuple; floats are keyed by bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GridKey {
    layout_width: u32,
    horizontal_margin: u32,
    gutter_width: u32,
    total_columns: u32,
}

impl GridKey {
    fn new(layout_width: f32, horizontal_margin: f32, gutter_width: f32, total_columns: u32) -> Self {
        Self {
            layout_width: layout_width.to_bits(),
            horizontal_margin: horizontal_margin.to_bits(),
            gutter_width: gutter_width.to_bits(),
            total_columns,
        }
    }
}

/// Remembers grids across layout passes so unchanged inputs skip recomputation
#[derive(Debug, Default)]
pub struct GridMemo {
    entries: HashMap<GridKey, GridConfig>,
}

impl GridMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        layout_width: f32,
        horizontal_margin: f32,
        gutter_width: f32,
        total_columns: u32,
    ) -> GridConfig {
        let key = GridKey::new(layout_width, horizontal_margin, gutter_width, total_columns);
        *self.entries.entry(key).or_insert_with(|| {
            GridConfig::new(layout_width, horizontal_margin, gutter_width, total_columns)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
