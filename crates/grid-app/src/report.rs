// ABOUTME: Describes laid out panes for printing.
// ABOUTME: Builds per-pane reports (grid, overlay, column ladder) and renders them as text.

use std::fmt::Write;

use grid_core::{ColumnSpan, Config, GridConfig};
use grid_layout::{GridContext, GridError, GridOverlay, StripeKind};
use serde::Serialize;

/// One element of a ladder row: a span and the width it gets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpanWidth {
    pub columns: u32,
    pub width: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaneReport {
    pub name: String,
    pub width: f32,
    pub grid: GridConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<GridOverlay>,
    /// Row `i` holds spans `i` and `total - i`, skipping empty ones
    pub ladder: Vec<Vec<SpanWidth>>,
}

/// Report on the current grid of `ctx`
pub fn describe(
    ctx: &GridContext,
    name: &str,
    width: f32,
    config: &Config,
) -> Result<PaneReport, GridError> {
    let grid = ctx.current()?;
    let overlay = config
        .overlay
        .enabled
        .then(|| GridOverlay::new(&grid, config.overlay.show_border));

    Ok(PaneReport {
        name: name.to_string(),
        width,
        grid,
        overlay,
        ladder: ladder(ctx)?,
    })
}

fn ladder(ctx: &GridContext) -> Result<Vec<Vec<SpanWidth>>, GridError> {
    let total = ctx.current()?.total_columns;
    let mut rows = Vec::new();

    for i in 0..=total {
        let mut row = Vec::new();
        for columns in [i, total - i] {
            if let Some(span) = ColumnSpan::columns(columns) {
                row.push(SpanWidth {
                    columns,
                    width: ctx.width_for(span)?,
                });
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

pub fn render_text(reports: &[PaneReport]) -> String {
    let mut out = String::new();

    for report in reports {
        let grid = &report.grid;
        let _ = writeln!(out, "== {} ({:.2} wide)", report.name, report.width);
        let _ = writeln!(
            out,
            "   Width:{:.2}  Margin:{:.2}  Gutter:{:.2}  Columns:{} x {:.2}",
            grid.layout_width,
            grid.horizontal_margin,
            grid.gutter_width,
            grid.total_columns,
            grid.column_width
        );

        if let Some(overlay) = &report.overlay {
            let bands: Vec<String> = overlay
                .stripes
                .iter()
                .filter(|s| s.kind != StripeKind::Border)
                .map(|s| format!("{:?}@{:.1}+{:.1}", s.kind, s.x, s.width))
                .collect();
            let _ = writeln!(out, "   overlay: {}", bands.join(" "));
        }

        for row in &report.ladder {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!("[{} = {:.2}]", cell.columns, cell.width))
                .collect();
            let _ = writeln!(out, "   {}", cells.join(" "));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_pairs_complementary_spans() {
        let ctx = GridContext::with_root(GridConfig::new(360.0, 16.0, 8.0, 4));
        let report = describe(&ctx, "root", 360.0, &Config::default()).unwrap();

        assert_eq!(report.ladder.len(), 5);
        assert_eq!(
            report.ladder[0],
            vec![SpanWidth { columns: 4, width: 328.0 }]
        );
        assert_eq!(
            report.ladder[1],
            vec![
                SpanWidth { columns: 1, width: 76.0 },
                SpanWidth { columns: 3, width: 244.0 },
            ]
        );
        assert_eq!(report.ladder[4], vec![SpanWidth { columns: 4, width: 328.0 }]);
        assert!(report.overlay.is_none());
    }

    #[test]
    fn overlay_included_when_enabled() {
        let mut config = Config::default();
        config.overlay.enabled = true;
        let ctx = GridContext::with_root(GridConfig::new(360.0, 16.0, 8.0, 4));
        let report = describe(&ctx, "root", 360.0, &config).unwrap();

        let text = render_text(&[report]);
        assert!(text.contains("Margin@0.0+16.0"));
        assert!(text.contains("Gutter@92.0+8.0"));
    }

    #[test]
    fn describe_needs_a_grid() {
        let ctx = GridContext::new();
        let result = describe(&ctx, "root", 360.0, &Config::default());
        assert!(matches!(result, Err(GridError::MissingContext)));
    }
}
