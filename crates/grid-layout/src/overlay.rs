// ABOUTME: Geometry of the debug grid overlay.
// ABOUTME: Lays out margin, gutter and border stripes a renderer can tint over content.

use grid_core::{Color, GridConfig, OverlayColors};
use serde::Serialize;

/// Width of the edge line drawn along margins and gutters
pub const BORDER_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StripeKind {
    Margin,
    Gutter,
    Border,
}

impl StripeKind {
    pub fn color(self, colors: &OverlayColors) -> Color {
        match self {
            StripeKind::Margin => colors.margin,
            StripeKind::Gutter => colors.gutter,
            StripeKind::Border => colors.border,
        }
    }
}

/// Full height band starting at `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stripe {
    pub kind: StripeKind,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridOverlay {
    pub layout_width: f32,
    /// Left to right; a border follows the stripe it belongs to
    pub stripes: Vec<Stripe>,
}

impl GridOverlay {
    pub fn new(config: &GridConfig, show_border: bool) -> Self {
        let mut stripes = Vec::new();
        let mut push = |kind, x, width| stripes.push(Stripe { kind, x, width });

        let margin = config.horizontal_margin;
        let gutter = config.gutter_width;

        push(StripeKind::Margin, 0.0, margin);
        if show_border {
            push(StripeKind::Border, margin - BORDER_WIDTH, BORDER_WIDTH);
        }

        // One gutter after every column but the last
        for i in 1..config.total_columns {
            let x = margin + config.column_width * i as f32 + gutter * (i - 1) as f32;
            push(StripeKind::Gutter, x, gutter);
            if show_border {
                push(StripeKind::Border, x, BORDER_WIDTH);
                push(StripeKind::Border, x + gutter - BORDER_WIDTH, BORDER_WIDTH);
            }
        }

        let right = config.layout_width - margin;
        push(StripeKind::Margin, right, margin);
        if show_border {
            push(StripeKind::Border, right, BORDER_WIDTH);
        }

        Self {
            layout_width: config.layout_width,
            stripes,
        }
    }

    pub fn stripes_of(&self, kind: StripeKind) -> impl Iterator<Item = &Stripe> + '_ {
        self.stripes.iter().filter(move |s| s.kind == kind)
    }

    /// `(x, width)` of every column cell, the gaps between margins and gutters
    pub fn column_spans(&self) -> Vec<(f32, f32)> {
        let mut bands: Vec<&Stripe> = self
            .stripes
            .iter()
            .filter(|s| s.kind != StripeKind::Border)
            .collect();
        bands.sort_by(|a, b| a.x.total_cmp(&b.x));

        bands
            .windows(2)
            .map(|pair| {
                let start = pair[0].x + pair[0].width;
                (start, pair[1].x - start)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_without_border() {
        let grid = GridConfig::new(360.0, 16.0, 8.0, 4);
        let overlay = GridOverlay::new(&grid, false);

        let xs: Vec<f32> = overlay.stripes.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 92.0, 176.0, 260.0, 344.0]);
        assert_eq!(overlay.stripes_of(StripeKind::Margin).count(), 2);
        assert_eq!(overlay.stripes_of(StripeKind::Gutter).count(), 3);
        assert_eq!(overlay.stripes_of(StripeKind::Border).count(), 0);
    }

    #[test]
    fn borders_line_inner_edges() {
        let grid = GridConfig::new(360.0, 16.0, 8.0, 4);
        let overlay = GridOverlay::new(&grid, true);

        let borders: Vec<f32> = overlay.stripes_of(StripeKind::Border).map(|s| s.x).collect();
        assert_eq!(borders, vec![15.0, 92.0, 99.0, 176.0, 183.0, 260.0, 267.0, 344.0]);
        assert_eq!(overlay.stripes.len(), 13);
    }

    #[test]
    fn gaps_are_columns() {
        let grid = GridConfig::new(1240.0, 32.0, 24.0, 12);
        let overlay = GridOverlay::new(&grid, true);
        let columns = overlay.column_spans();

        assert_eq!(columns.len(), 12);
        for (_, width) in &columns {
            assert!((width - grid.column_width).abs() < 0.001);
        }
        assert_eq!(columns[0].0, 32.0);
    }

    #[test]
    fn single_column_has_only_margins() {
        let grid = GridConfig::new(200.0, 20.0, 8.0, 1);
        let overlay = GridOverlay::new(&grid, false);
        assert_eq!(overlay.stripes.len(), 2);
        assert_eq!(overlay.column_spans(), vec![(20.0, 160.0)]);
    }

    #[test]
    fn stripe_colors_follow_kind() {
        let colors = OverlayColors::default();
        assert_eq!(StripeKind::Gutter.color(&colors), colors.gutter);
        assert_eq!(StripeKind::Border.color(&colors), colors.border);
    }
}
