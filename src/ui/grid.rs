//! Terminal rendering of one week as a 24-row hour grid.

use crate::config::{ColorToken, Palette};
use crate::core::layout::{OverflowPolicy, layout_with_policy};
use crate::core::week::WeekWindow;
use crate::models::DayEvents;
use crate::utils::colors::{dim, paint};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{fit, pad_left};
use chrono::Datelike;

const HOURS: usize = 24;
const DAYS: usize = 7;
const HOUR_LABEL_WIDTH: usize = 5;

/// Rendering knobs for [`render_week`].
#[derive(Debug, Clone, Copy)]
pub struct GridOptions {
    pub cell_width: usize,
    pub overflow: OverflowPolicy,
    pub color: bool,
}

#[derive(Debug, Clone)]
struct Cell {
    text: String,
    color: ColorToken,
}

/// Render `days` into the columns of `window`.
///
/// Geometry comes from the layout calculator with one row per hour and no
/// gutter. A block always covers at least its starting row; later events
/// overwrite earlier ones where they overlap.
pub fn render_week(
    window: &WeekWindow,
    days: &[DayEvents],
    palette: &Palette,
    opts: &GridOptions,
) -> String {
    let width = opts.cell_width.max(1);
    let mut cells: Vec<Vec<Option<Cell>>> = vec![vec![None; DAYS]; HOURS];

    for day in days {
        let Some(col) = window.column_of(day.date) else {
            log::debug!("{} is outside the displayed week", day.date);
            continue;
        };

        for ev in &day.events {
            let layout = match layout_with_policy(ev, 1, 0, opts.overflow) {
                Ok(Some(b)) => b,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("cannot place {} on {}: {e}", ev.game, day.date);
                    continue;
                }
            };

            let span = layout.row_span();
            let first = span.start.clamp(0, HOURS as i32) as usize;
            let last = span.end.max(span.start + 1).clamp(0, HOURS as i32) as usize;
            let color = palette.color_for(&ev.game);

            for (i, row) in cells.iter_mut().take(last).skip(first).enumerate() {
                let text = match i {
                    0 => ev.game.clone(),
                    1 => ev.range_label(),
                    _ => String::new(),
                };
                row[col] = Some(Cell { text, color });
            }
        }
    }

    let mut out = String::new();

    // Header
    out.push_str(&" ".repeat(HOUR_LABEL_WIDTH));
    for date in window.days() {
        out.push('│');
        let label = format!("{} {}", weekday_short(date.weekday()), date.format("%m-%d"));
        out.push_str(&fit(&label, width));
    }
    out.push('\n');

    out.push_str(&"─".repeat(HOUR_LABEL_WIDTH));
    for _ in 0..DAYS {
        out.push('┼');
        out.push_str(&"─".repeat(width));
    }
    out.push('\n');

    // Hour rows
    for (hour, row) in cells.iter().enumerate() {
        out.push_str(&pad_left(&format!("{hour:02}:00"), HOUR_LABEL_WIDTH));
        for cell in row {
            out.push('│');
            match cell {
                Some(c) => {
                    out.push_str(&paint(&fit(&c.text, width), c.color.ansi_bg(), opts.color))
                }
                None => out.push_str(&dim(&fit("", width), opts.color)),
            }
        }
        out.push('\n');
    }

    out
}
