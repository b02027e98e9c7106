use crate::config::Palette;
use crate::core::layout::{OverflowPolicy, layout_with_policy};
use crate::core::week::WeekWindow;
use crate::models::{DayEvents, LayoutBox};
use crate::utils::date::weekday_short;
use serde::Serialize;

/// Week document for JSON output.
#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    pub start: String,
    pub end: String,
    pub days: Vec<DayExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub events: Vec<EventExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub game: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    /// `None` when the overflow policy skips the block or the times are unusable.
    pub layout: Option<LayoutBox>,
}

/// Flat record for CSV output (one line per event).
#[derive(Serialize, Clone, Debug)]
pub struct EventRecord {
    pub date: String,
    pub weekday: String,
    pub game: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub top_offset: Option<i32>,
    pub height_span: Option<i32>,
}

pub fn build_week_export(
    window: &WeekWindow,
    days: &[DayEvents],
    palette: &Palette,
    unit_height: i32,
    gutter: i32,
    overflow: OverflowPolicy,
) -> WeekExport {
    let days = days
        .iter()
        .map(|d| DayExport {
            date: d.date_str(),
            weekday: weekday_short(d.weekday()).to_string(),
            events: d
                .events
                .iter()
                .map(|ev| EventExport {
                    game: ev.game.clone(),
                    start_time: ev.start_time.clone(),
                    end_time: ev.end_time.clone(),
                    color: palette.color_for(&ev.game).as_str().to_string(),
                    layout: layout_with_policy(ev, unit_height, gutter, overflow)
                        .unwrap_or_else(|e| {
                            log::warn!("no layout for {} on {}: {e}", ev.game, d.date);
                            None
                        }),
                })
                .collect(),
        })
        .collect();

    WeekExport {
        start: window.start.format("%Y-%m-%d").to_string(),
        end: window.end.format("%Y-%m-%d").to_string(),
        days,
    }
}

impl WeekExport {
    pub fn records(&self) -> Vec<EventRecord> {
        self.days
            .iter()
            .flat_map(|d| {
                d.events.iter().map(move |e| EventRecord {
                    date: d.date.clone(),
                    weekday: d.weekday.clone(),
                    game: e.game.clone(),
                    start_time: e.start_time.clone(),
                    end_time: e.end_time.clone(),
                    color: e.color.clone(),
                    top_offset: e.layout.map(|b| b.top_offset),
                    height_span: e.layout.map(|b| b.height_span),
                })
            })
            .collect()
    }
}
