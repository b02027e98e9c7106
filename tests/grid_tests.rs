mod common;
use chrono::Weekday;
use common::d;
use playweek::config::Palette;
use playweek::core::layout::OverflowPolicy;
use playweek::core::week::{WeekWindow, week_window};
use playweek::models::{DayEvents, Event};
use playweek::ui::grid::{GridOptions, render_week};

fn may_week() -> WeekWindow {
    // Sun 2024-05-05 .. Sat 2024-05-11
    week_window(d("2024-05-08"), Weekday::Sun, 0).expect("window")
}

fn opts(overflow: OverflowPolicy) -> GridOptions {
    GridOptions {
        cell_width: 12,
        overflow,
        color: false,
    }
}

fn day(date: &str, events: Vec<Event>) -> DayEvents {
    DayEvents {
        date: d(date),
        events,
    }
}

/// Trimmed text of the cell at `hour` / `col` (0 = first day of the window).
fn cell(grid: &str, hour: usize, col: usize) -> String {
    let line = grid.lines().nth(2 + hour).expect("hour line");
    let parts: Vec<&str> = line.split('│').collect();
    assert_eq!(parts[0].trim(), format!("{hour:02}:00"));
    parts[col + 1].trim().to_string()
}

fn render(days: &[DayEvents], overflow: OverflowPolicy) -> String {
    render_week(&may_week(), days, &Palette::default(), &opts(overflow))
}

#[test]
fn test_grid_header_and_rows() {
    let grid = render(&[], OverflowPolicy::Clamp);

    assert_eq!(grid.lines().count(), 2 + 24);
    let header: Vec<&str> = grid.lines().next().expect("header").split('│').collect();
    assert_eq!(header[1].trim(), "Sun 05-05");
    assert_eq!(header[7].trim(), "Sat 05-11");
    assert_eq!(cell(&grid, 23, 6), "");
}

#[test]
fn test_block_placed_in_hour_rows_and_day_column() {
    let days = vec![day("2024-05-06", vec![Event::new("Valorant", "10:00", "12:00")])];
    let grid = render(&days, OverflowPolicy::Clamp);

    assert_eq!(cell(&grid, 10, 1), "Valorant");
    assert_eq!(cell(&grid, 11, 1), "10:00-12:00");
    assert_eq!(cell(&grid, 9, 1), "");
    assert_eq!(cell(&grid, 12, 1), "");
    assert_eq!(cell(&grid, 10, 0), "");
    assert_eq!(cell(&grid, 10, 2), "");
}

#[test]
fn test_zero_height_block_paints_start_row() {
    let days = vec![day("2024-05-07", vec![Event::new("osu!", "10:00", "10:30")])];
    let grid = render(&days, OverflowPolicy::Clamp);

    assert_eq!(cell(&grid, 10, 2), "osu!");
    assert_eq!(cell(&grid, 11, 2), "");
}

#[test]
fn test_midnight_crossing_block_fills_last_row() {
    let days = vec![day("2024-05-08", vec![Event::new("Minecraft", "23:00", "01:00")])];

    let clamped = render(&days, OverflowPolicy::Clamp);
    assert_eq!(cell(&clamped, 23, 3), "Minecraft");
    assert_eq!(cell(&clamped, 0, 3), "");

    let skipped = render(&days, OverflowPolicy::Skip);
    assert_eq!(cell(&skipped, 23, 3), "");
}

#[test]
fn test_later_event_overwrites_overlap() {
    let days = vec![day(
        "2024-05-09",
        vec![
            Event::new("Apex Legends", "10:00", "12:00"),
            Event::new("Valorant", "11:00", "13:00"),
        ],
    )];
    let grid = render(&days, OverflowPolicy::Clamp);

    assert_eq!(cell(&grid, 10, 4), "Apex Legends");
    assert_eq!(cell(&grid, 11, 4), "Valorant");
    assert_eq!(cell(&grid, 12, 4), "11:00-13:00");
}

#[test]
fn test_event_outside_window_is_not_drawn() {
    let days = vec![
        day("2024-05-12", vec![Event::new("Tetris", "10:00", "12:00")]),
        day("2024-05-04", vec![Event::new("Tetris", "10:00", "12:00")]),
    ];
    let grid = render(&days, OverflowPolicy::Clamp);

    assert!(!grid.contains("Tetris"));
}

#[test]
fn test_malformed_event_is_skipped() {
    let days = vec![day(
        "2024-05-06",
        vec![
            Event::new("Broken", "xx:00", "12:00"),
            Event::new("Valorant", "14:00", "15:00"),
        ],
    )];
    let grid = render(&days, OverflowPolicy::Clamp);

    assert!(!grid.contains("Broken"));
    assert_eq!(cell(&grid, 14, 1), "Valorant");
}
