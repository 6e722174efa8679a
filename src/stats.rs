//! Input statistics for a single card.
//!
//! Every counter is a required field: a snapshot missing one fails to parse
//! instead of rendering a silent zero.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::geometry::fmt_fixed;
use crate::icons::IconKind;

/// Swatch and arc color for languages without a descriptor color.
pub const FALLBACK_LANGUAGE_COLOR: &str = "#cccccc";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rank {
    /// Letter grade such as `A+`.
    pub level: String,
    /// 0-100, higher is better.
    pub percentile: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub name: String,
    pub total_stars: u64,
    pub total_forks: u64,
    pub followers: u64,
    pub total_contributes_to: u64,
    pub total_repos: u64,
    pub total_issues: u64,
    pub total_commits: u64,
    pub total_prs: u64,
    pub total_merged_prs: u64,
    pub total_prs_reviewed: u64,
    pub merged_prs_percentage: f64,
    pub total_discussions_started: u64,
    pub total_discussions_answered: u64,
    pub rank: Rank,
    /// Language name to share of total, in display order.
    pub language_percentages: IndexMap<String, f64>,
    #[serde(default)]
    pub top_languages: IndexMap<String, LanguageDescriptor>,
}

/// One counter line of the card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub icon: IconKind,
    pub label: &'static str,
    pub value: String,
}

impl StatsSnapshot {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CardError::StatsParse(e.to_string()))
    }

    /// Reject values that would draw a misleading card.
    pub fn validate(&self) -> Result<()> {
        let percentile = self.rank.percentile;
        if !percentile.is_finite() || !(0.0..=100.0).contains(&percentile) {
            return Err(CardError::InvalidStats(format!(
                "rank.percentile must be within 0..=100, got {}",
                percentile
            )));
        }

        let merged = self.merged_prs_percentage;
        if !merged.is_finite() || !(0.0..=100.0).contains(&merged) {
            return Err(CardError::InvalidStats(format!(
                "merged_prs_percentage must be within 0..=100, got {}",
                merged
            )));
        }

        for (language, share) in &self.language_percentages {
            if !share.is_finite() || *share < 0.0 {
                return Err(CardError::InvalidStats(format!(
                    "language share for '{}' must be a non-negative number, got {}",
                    language, share
                )));
            }
        }

        Ok(())
    }

    /// Display color of `language`, or the neutral fallback.
    pub fn color_for(&self, language: &str) -> &str {
        self.top_languages
            .get(language)
            .and_then(|d| d.color.as_deref())
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(FALLBACK_LANGUAGE_COLOR)
    }

    /// Copy with languages ordered by descending share; ties keep input order.
    pub fn sorted_by_share(&self) -> Self {
        let mut sorted = self.clone();
        sorted
            .language_percentages
            .sort_by(|_, a, _, b| b.total_cmp(a));
        sorted
    }

    /// Counter rows in display order.
    pub fn rows(&self) -> Vec<StatRow> {
        let row = |icon, label, value: u64| StatRow {
            icon,
            label,
            value: value.to_string(),
        };

        vec![
            row(IconKind::Star, "Total Stars Earned", self.total_stars),
            row(IconKind::Fork, "Total Forks Earned", self.total_forks),
            row(IconKind::Followers, "Total Followers", self.followers),
            row(IconKind::ContributesTo, "Contributed to", self.total_contributes_to),
            row(IconKind::Repo, "Total Repos", self.total_repos),
            row(IconKind::Issue, "Total Issues", self.total_issues),
            row(IconKind::Commit, "Total Commits", self.total_commits),
            row(IconKind::PullRequest, "Total PRs", self.total_prs),
            row(IconKind::MergedPr, "Total PRs Merged", self.total_merged_prs),
            row(IconKind::PrReviewed, "Total PRs Reviewed", self.total_prs_reviewed),
            StatRow {
                icon: IconKind::MergedPrPercentage,
                label: "Merged PRs Percentage",
                value: format!("{}%", fmt_fixed(self.merged_prs_percentage, 0)),
            },
            row(
                IconKind::DiscussionStarted,
                "Total Discussions Started",
                self.total_discussions_started,
            ),
            row(
                IconKind::DiscussionAnswered,
                "Total Discussions Answered",
                self.total_discussions_answered,
            ),
        ]
    }
}
