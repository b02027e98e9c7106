//! Geometry of session blocks inside a day column.
//!
//! One unit of height is one hour. Only the hour component of a time takes
//! part in the computation; minutes only show up in the block label.

use crate::errors::AppResult;
use crate::models::{Event, LayoutBox};
use crate::utils::time::parse_hour;
use serde::{Deserialize, Serialize};

/// What to do with an event whose end hour is before its start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the raw, possibly negative, height.
    Raw,
    /// Run the block to the bottom of the column and never go below zero height.
    #[default]
    Clamp,
    /// Do not draw the block.
    Skip,
}

pub fn layout_event(event: &Event, unit_height: i32, gutter: i32) -> AppResult<LayoutBox> {
    let start_hour = parse_hour(&event.start_time)?;
    let end_hour = parse_hour(&event.end_time)?;

    Ok(compute(start_hour, end_hour, unit_height, gutter))
}

pub fn layout_with_policy(
    event: &Event,
    unit_height: i32,
    gutter: i32,
    policy: OverflowPolicy,
) -> AppResult<Option<LayoutBox>> {
    let start_hour = parse_hour(&event.start_time)?;
    let end_hour = parse_hour(&event.end_time)?;

    let boxed = match policy {
        OverflowPolicy::Raw => Some(compute(start_hour, end_hour, unit_height, gutter)),
        OverflowPolicy::Skip if end_hour < start_hour => None,
        OverflowPolicy::Skip => Some(compute(start_hour, end_hour, unit_height, gutter)),
        OverflowPolicy::Clamp => {
            let end_hour = if end_hour < start_hour { 24 } else { end_hour };
            let mut b = compute(start_hour, end_hour, unit_height, gutter);
            b.height_span = b.height_span.max(0);
            Some(b)
        }
    };

    Ok(boxed)
}

fn compute(start_hour: i32, end_hour: i32, unit_height: i32, gutter: i32) -> LayoutBox {
    let duration_hours = end_hour - start_hour;

    LayoutBox {
        top_offset: start_hour.saturating_mul(unit_height),
        height_span: duration_hours
            .saturating_mul(unit_height)
            .saturating_sub(gutter),
    }
}
