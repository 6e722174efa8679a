//! Language ring segments and their legend entries.

use crate::animation::{legend_delay, segment_delay};
use crate::geometry::{LegendLayout, LegendSlot, Ring, fmt_fixed};
use crate::stats::{FALLBACK_LANGUAGE_COLOR, StatsSnapshot};

/// One language's arc, drawn as a dashed stroke around the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub language: String,
    pub color: String,
    pub length: f64,
    /// Rest of the circumference after `length`.
    pub gap: f64,
    /// Negated length of every earlier segment.
    pub dash_offset: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub language: String,
    pub color: String,
    pub percent: f64,
    pub slot: LegendSlot,
    pub delay: f64,
}

impl LegendEntry {
    pub fn percent_label(&self) -> String {
        format!("{}%", fmt_fixed(self.percent, 2))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageRing {
    pub segments: Vec<ArcSegment>,
    pub legend: Vec<LegendEntry>,
    /// Sum of all segment lengths.
    pub total_length: f64,
}

/// Lay the languages end to end around `ring`, in mapping order.
pub fn build_language_ring(
    stats: &StatsSnapshot,
    ring: &Ring,
    legend: &LegendLayout,
) -> LanguageRing {
    let circumference = ring.circumference();
    let total = stats.language_percentages.len();

    let mut out = LanguageRing {
        segments: Vec::with_capacity(total),
        legend: Vec::with_capacity(total),
        total_length: 0.0,
    };

    for (index, (language, &percent)) in stats.language_percentages.iter().enumerate() {
        let color = stats.color_for(language);
        if color == FALLBACK_LANGUAGE_COLOR {
            tracing::debug!(language = %language, "no language color, using fallback");
        }

        let length = ring.arc_length(percent);
        out.segments.push(ArcSegment {
            language: language.clone(),
            color: color.to_string(),
            length,
            gap: circumference - length,
            dash_offset: -out.total_length,
            delay: segment_delay(index, total),
        });

        out.legend.push(LegendEntry {
            language: language.clone(),
            color: color.to_string(),
            percent,
            slot: legend.slot(index),
            delay: legend_delay(index),
        });

        out.total_length += length;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::geometry::{CardGeometry, LegendColumn};
    use crate::stats::tests::octocat;
    use indexmap::IndexMap;
    use proptest::prelude::*;

    fn build(stats: &StatsSnapshot) -> (LanguageRing, CardGeometry) {
        let geometry = CardGeometry::new(&RenderConfig::default());
        let ring = build_language_ring(stats, &geometry.language_ring, &geometry.legend);
        (ring, geometry)
    }

    fn with_shares(shares: &[f64]) -> StatsSnapshot {
        let mut stats = octocat();
        stats.language_percentages = shares
            .iter()
            .enumerate()
            .map(|(i, share)| (format!("Lang{i}"), *share))
            .collect::<IndexMap<_, _>>();
        stats
    }

    #[test]
    fn two_languages_split_the_ring() {
        let stats = octocat();
        let (ring, geometry) = build(&stats);
        let c = geometry.language_ring.circumference();

        assert_eq!(ring.segments.len(), 2);
        let go = &ring.segments[0];
        let rust = &ring.segments[1];

        assert_eq!(go.language, "Go");
        assert_eq!(go.color, "#00ADD8");
        assert!((go.length - 0.6 * c).abs() < 1e-9);
        assert!((go.gap - 0.4 * c).abs() < 1e-9);
        assert_eq!(go.dash_offset, 0.0);

        assert_eq!(rust.color, "#DEA584");
        assert!((rust.dash_offset + go.length).abs() < 1e-9);
        assert!((ring.total_length - c).abs() < 1e-9);

        assert!(go.delay > rust.delay);
        assert!(ring.legend[0].delay < ring.legend[1].delay);
        assert_eq!(ring.legend[1].percent_label(), "40.00%");
    }

    #[test]
    fn legend_label_half_rounds_up() {
        let (ring, _) = build(&with_shares(&[12.125, 87.875]));
        assert_eq!(ring.legend[0].percent_label(), "12.13%");
        assert_eq!(ring.legend[1].percent_label(), "87.88%");
    }

    #[test]
    fn missing_color_uses_fallback_everywhere() {
        let mut stats = octocat();
        stats.top_languages.shift_remove("Rust");
        let (ring, _) = build(&stats);

        assert_eq!(ring.segments[1].color, FALLBACK_LANGUAGE_COLOR);
        assert_eq!(ring.legend[1].color, FALLBACK_LANGUAGE_COLOR);
    }

    #[test]
    fn empty_mapping_draws_nothing() {
        let (ring, _) = build(&with_shares(&[]));
        assert!(ring.segments.is_empty());
        assert!(ring.legend.is_empty());
        assert_eq!(ring.total_length, 0.0);
    }

    #[test]
    fn mapping_order_is_kept() {
        let mut stats = octocat();
        stats.language_percentages = IndexMap::from([
            ("Rust".to_string(), 10.0),
            ("Go".to_string(), 90.0),
        ]);
        let (ring, _) = build(&stats);

        let order: Vec<_> = ring.segments.iter().map(|s| s.language.as_str()).collect();
        assert_eq!(order, ["Rust", "Go"]);
        assert_eq!(ring.legend[0].language, "Rust");
    }

    proptest! {
        #[test]
        fn segments_sum_to_share_of_circumference(
            raw in proptest::collection::vec(0.0f64..1.0, 0..25)
        ) {
            let sum: f64 = raw.iter().sum();
            let shares: Vec<f64> = if sum > 1.0 {
                raw.iter().map(|v| v / sum * 100.0).collect()
            } else {
                raw.iter().map(|v| v * 100.0).collect()
            };
            let total_share: f64 = shares.iter().sum();

            let (ring, geometry) = build(&with_shares(&shares));
            let c = geometry.language_ring.circumference();

            let lengths: f64 = ring.segments.iter().map(|s| s.length).sum();
            prop_assert!((lengths - total_share / 100.0 * c).abs() < 1e-6);
            prop_assert!((ring.total_length - lengths).abs() < 1e-6);

            let mut prior = 0.0;
            for (index, segment) in ring.segments.iter().enumerate() {
                prop_assert!((segment.dash_offset + prior).abs() < 1e-6);
                if index > 0 {
                    prop_assert!(segment.dash_offset.abs() >= ring.segments[index - 1].dash_offset.abs());
                }
                prior += segment.length;
            }

            for (index, entry) in ring.legend.iter().enumerate() {
                let expected = if index < 10 { LegendColumn::First } else { LegendColumn::Second };
                prop_assert_eq!(entry.slot.column, expected);
            }
        }
    }
}
