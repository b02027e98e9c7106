use serde::Serialize;

/// Vertical placement of one event inside a 24-row day column.
///
/// Both values are in the caller's units (pixels for exports, rows for the
/// terminal grid). `height_span` may be negative when the event ends before
/// it starts and no overflow policy was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutBox {
    pub top_offset: i32,
    pub height_span: i32,
}

impl LayoutBox {
    /// Rows `[first, last)` a box covers, with a unit height of one row.
    pub fn row_span(&self) -> std::ops::Range<i32> {
        self.top_offset..self.top_offset.saturating_add(self.height_span.max(0))
    }
}
