//! Reveal timing of card elements, in seconds.
//!
//! Delays depend only on indices, never on data values, so two renders of
//! the same layout animate identically.

/// Number of counter rows on the card.
pub const STAT_ROW_COUNT: usize = 13;

/// Gap between consecutive counter rows.
pub const ROW_STEP: f64 = 0.08;
/// Lag of each row's second animation slot behind its first.
pub const ROW_SECONDARY_LAG: f64 = 0.1;

pub const SEGMENT_STEP: f64 = 0.15;
pub const LEGEND_STEP: f64 = 0.1;

pub const FADE_IN: f64 = 0.5;
pub const RANK_FILL: f64 = 1.5;
pub const IMAGE_BLINK: f64 = 1.5;
pub const TITLE_RULE: f64 = 0.5;
pub const BARCODE_REVEAL: f64 = 1.0;
pub const BORDER_TRACE: f64 = 4.0;
pub const CORNER_BLINK: f64 = 0.5;

/// Delay pair attached to a counter row's CSS class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowDelay {
    pub primary: f64,
    pub secondary: f64,
}

/// Delay of the `row`-th counter row, or `None` past the last row.
pub fn row_delay(row: usize) -> Option<RowDelay> {
    if row >= STAT_ROW_COUNT {
        return None;
    }

    let primary = row as f64 * ROW_STEP;
    Some(RowDelay {
        primary,
        secondary: primary + ROW_SECONDARY_LAG,
    })
}

pub fn row_delays() -> impl Iterator<Item = RowDelay> {
    (0..STAT_ROW_COUNT).filter_map(row_delay)
}

/// Ring segments reveal back to front: the last segment appears first.
pub fn segment_delay(index: usize, total: usize) -> f64 {
    total.saturating_sub(index) as f64 * SEGMENT_STEP
}

/// Legend entries reveal front to back.
pub fn legend_delay(index: usize) -> f64 {
    index as f64 * LEGEND_STEP
}

/// `stroke-dashoffset` keyframes of the rank progress arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillAnimation {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
}

impl FillAnimation {
    pub fn new(circumference: f64, target_offset: f64) -> Self {
        Self {
            from: circumference,
            to: target_offset,
            duration: RANK_FILL,
        }
    }
}
