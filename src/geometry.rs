//! Derived coordinates of the card: ring centers, arc lengths, legend slots
//! and image placement. Everything here is a pure function of the
//! configuration (and, for the progress arc, the percentile).

use std::f64::consts::PI;

use crate::assets::EmbeddedImage;
use crate::config::RenderConfig;

/// Rank ring sits this many radii above the vertical midline.
const RANK_CENTER_LIFT: f64 = 1.2;
/// Language ring sits this many radii below the vertical midline.
const LANGUAGE_CENTER_DROP: f64 = 2.0;
const FIRST_COLUMN_OFFSET: f64 = 1.7;
const SECOND_COLUMN_OFFSET: f64 = 2.2;
pub const LEGEND_ROWS_PER_COLUMN: usize = 10;

const STAT_ROW_X: f64 = 30.0;
const STAT_ROW_TOP: f64 = 100.0;
const STAT_ROW_SPACING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub radius: f64,
    pub thickness: f64,
}

impl Ring {
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Arc length covering `percent` of the ring.
    pub fn arc_length(&self, percent: f64) -> f64 {
        percent / 100.0 * self.circumference()
    }
}

/// Dash parameters of the rank progress arc.
///
/// The arc starts fully hidden (`dash_offset == circumference`) and animates
/// to `target_offset`. A higher percentile yields a smaller target, so more of
/// the ring is drawn: 0 leaves it empty, 100 fills it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankProgress {
    pub circumference: f64,
    pub target_offset: f64,
}

impl RankProgress {
    pub fn new(ring: &Ring, percentile: f64) -> Self {
        let circumference = ring.circumference();
        let progress_fraction = (100.0 - percentile) / 100.0;

        Self {
            circumference,
            target_offset: circumference * progress_fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendColumn {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSlot {
    pub column: LegendColumn,
    pub x: f64,
    pub y: f64,
}

/// Two legend columns to the right of the language ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendLayout {
    pub first_column_x: f64,
    pub second_column_x: f64,
    pub top: f64,
    pub row_step: f64,
}

impl LegendLayout {
    fn new(ring: &Ring) -> Self {
        let first_column_x = ring.center.x + ring.radius * FIRST_COLUMN_OFFSET;
        Self {
            first_column_x,
            second_column_x: first_column_x + ring.radius * SECOND_COLUMN_OFFSET + ring.thickness,
            top: ring.center.y - ring.radius,
            row_step: 2.0 * ring.radius / LEGEND_ROWS_PER_COLUMN as f64,
        }
    }

    /// Slot of the `index`-th entry. Indices past the second column's tenth
    /// row keep stepping down and overflow the ring's vertical span.
    pub fn slot(&self, index: usize) -> LegendSlot {
        let (column, x, row) = if index < LEGEND_ROWS_PER_COLUMN {
            (LegendColumn::First, self.first_column_x, index)
        } else {
            (
                LegendColumn::Second,
                self.second_column_x,
                index - LEGEND_ROWS_PER_COLUMN,
            )
        };

        LegendSlot {
            column,
            x,
            y: self.top + row as f64 * self.row_step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub width: f64,
    pub height: f64,
    pub rank_ring: Ring,
    pub language_ring: Ring,
    pub legend: LegendLayout,
}

impl CardGeometry {
    pub fn new(config: &RenderConfig) -> Self {
        let mid_x = config.width / 2.0;
        let mid_y = config.height / 2.0;

        let rank_ring = Ring {
            center: Point {
                x: mid_x,
                y: mid_y - config.rank.ring_radius * RANK_CENTER_LIFT,
            },
            radius: config.rank.ring_radius,
            thickness: config.rank.ring_thickness,
        };

        let language_ring = Ring {
            center: Point {
                x: mid_x,
                y: mid_y + config.language.ring_radius * LANGUAGE_CENTER_DROP,
            },
            radius: config.language.ring_radius,
            thickness: config.language.ring_thickness,
        };

        Self {
            width: config.width,
            height: config.height,
            rank_ring,
            language_ring,
            legend: LegendLayout::new(&language_ring),
        }
    }

    pub fn rank_progress(&self, percentile: f64) -> RankProgress {
        RankProgress::new(&self.rank_ring, percentile)
    }

    /// Fit the image to the inner diameter of the language ring, keeping its
    /// aspect ratio, centered on the ring.
    pub fn image_placement(&self, image: &EmbeddedImage) -> ImagePlacement {
        let ring = &self.language_ring;
        let height = ring.radius * 2.0 - ring.thickness;
        let width = height / f64::from(image.height) * f64::from(image.width);

        ImagePlacement {
            x: ring.center.x - width / 2.0,
            y: ring.center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Origin of the `row`-th counter row.
    pub fn stat_row_origin(&self, row: usize) -> Point {
        Point {
            x: STAT_ROW_X,
            y: STAT_ROW_TOP + row as f64 * STAT_ROW_SPACING,
        }
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format `value` with exactly `decimals` digits. Exact halves round away
/// from zero (12.5 -> "13"); everything else rounds to nearest.
pub fn fmt_fixed(value: f64, decimals: usize) -> String {
    if !is_exact_half(value, decimals) {
        return format!("{:.*}", decimals, value);
    }

    let scale = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * scale).round() / scale;
    format!("{:.*}", decimals, rounded.copysign(value))
}

/// True when `value * 10^decimals` has a fractional part of exactly one half,
/// i.e. the lowest set bit of `value` is worth `2^-(decimals + 1)`.
fn is_exact_half(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    exponent + i64::from(mantissa.trailing_zeros()) == -(decimals as i64 + 1)
}
