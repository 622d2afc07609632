// ABOUTME: Main application entry point.
// ABOUTME: Loads config, lays out the requested panes for a viewport width and prints them.

mod report;

use anyhow::{bail, Context, Result};
use grid_core::{ColumnSpan, Config};
use grid_layout::{GridContext, PaneSpec};

use report::PaneReport;

const USAGE: &str = "usage: responsive-grid [WIDTH] [full|centered|two-pane] [--span N] [--json]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Centered,
    TwoPane,
}

#[derive(Debug, PartialEq)]
struct Args {
    width: Option<f32>,
    mode: Mode,
    span: Option<ColumnSpan>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        width: None,
        mode: Mode::Full,
        span: None,
        json: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "full" => parsed.mode = Mode::Full,
            "centered" => parsed.mode = Mode::Centered,
            "two-pane" => parsed.mode = Mode::TwoPane,
            "--json" => parsed.json = true,
            "--span" => {
                let value = args.next().context("--span needs a column count")?;
                parsed.span = Some(if value == "match_parent" {
                    ColumnSpan::MatchParent
                } else {
                    let count: u32 = value
                        .parse()
                        .with_context(|| format!("invalid span '{value}'"))?;
                    ColumnSpan::columns(count).context("span must be at least 1")?
                });
            }
            "-h" | "--help" => bail!(USAGE),
            other => {
                let width: f32 = other
                    .parse()
                    .with_context(|| format!("unexpected argument '{other}'\n{USAGE}"))?;
                parsed.width = Some(width);
            }
        }
    }

    Ok(parsed)
}

/// Lay out `mode` on the root grid for `width`
fn layout(config: &Config, width: f32, mode: Mode, span: ColumnSpan) -> Result<Vec<PaneReport>> {
    let root = config.root_grid(width);
    tracing::info!(
        "Root grid: {} columns of {:.2} in {}",
        root.total_columns,
        root.column_width,
        root.layout_width
    );

    let mut ctx = GridContext::with_root(root);

    let reports = match mode {
        Mode::Full => vec![report::describe(&ctx, "full", width, config)?],
        Mode::Centered => {
            let pane = PaneSpec::new(span);
            vec![ctx.centered(&pane, |ctx| report::describe(ctx, "center", width, config))??]
        }
        Mode::TwoPane => {
            let (left, right) = match span {
                ColumnSpan::MatchParent => PaneSpec::halves(&root),
                ColumnSpan::Columns(n) => {
                    let rest = root.total_columns.saturating_sub(n.get());
                    let right = ColumnSpan::columns(rest).unwrap_or(ColumnSpan::MatchParent);
                    (PaneSpec::new(span), PaneSpec::new(right))
                }
            };
            let (left, right) = ctx.split(
                &left,
                &right,
                |ctx, slot| report::describe(ctx, "left", slot.width, config),
                |ctx, slot| report::describe(ctx, "right", slot.width, config),
            )?;
            left.into_iter().chain(right).collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(reports)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting responsive-grid");

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load_or_default();
    let width = args.width.unwrap_or(config.window_width);
    let span = args.span.unwrap_or(config.center_span);

    let reports = layout(&config, width, args.mode, span)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", report::render_text(&reports));
    }

    Ok(())
}
