//! Icon path data for the counter rows.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Side length, in card units, every row icon is scaled to.
pub const ICON_SIZE: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Star,
    Fork,
    Followers,
    ContributesTo,
    Repo,
    Issue,
    Commit,
    PullRequest,
    MergedPr,
    PrReviewed,
    MergedPrPercentage,
    DiscussionStarted,
    DiscussionAnswered,
}

/// SVG path data drawn inside a square `view_box` x `view_box` source grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub path: String,
    #[serde(default = "default_view_box")]
    pub view_box: f64,
}

fn default_view_box() -> f64 {
    16.0
}

impl Icon {
    pub fn scale(&self) -> f64 {
        ICON_SIZE / self.view_box
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSet {
    icons: HashMap<IconKind, Icon>,
}

const BUILTIN_ICONS: &[(IconKind, &str)] = &[
    (
        IconKind::Star,
        "M8 .75l2.2 4.46 4.92.72-3.56 3.47.84 4.9L8 12l-4.4 2.3.84-4.9L.88 5.93l4.92-.72z",
    ),
    (
        IconKind::Fork,
        "M4 1a2 2 0 1 1 0 4 2 2 0 0 1 0-4zm8 0a2 2 0 1 1 0 4 2 2 0 0 1 0-4zM8 11a2 2 0 1 1 0 4 2 2 0 0 1 0-4zM3.25 5h1.5v1.5c0 .14.11.25.25.25h6a.25.25 0 0 0 .25-.25V5h1.5v1.5A1.75 1.75 0 0 1 11 8.25H8.75V11h-1.5V8.25H5A1.75 1.75 0 0 1 3.25 6.5z",
    ),
    (
        IconKind::Followers,
        "M5.5 2a3 3 0 1 1 0 6 3 3 0 0 1 0-6zM0 14.5C0 11.46 2.46 9 5.5 9S11 11.46 11 14.5V15H0zM11.5 3a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5zM12 9.1c2.28.3 4 2.22 4 4.52V15h-3.5v-.5c0-2.02-.82-3.84-2.14-5.16.5-.16 1.07-.24 1.64-.24z",
    ),
    (
        IconKind::ContributesTo,
        "M2 1.75C2 .78 2.78 0 3.75 0h8.5C13.22 0 14 .78 14 1.75v12.5a.75.75 0 0 1-1.2.6L8 11.2l-4.8 3.65a.75.75 0 0 1-1.2-.6zm1.5 0v11l4.05-3.08a.75.75 0 0 1 .9 0l4.05 3.08v-11a.25.25 0 0 0-.25-.25h-8.5a.25.25 0 0 0-.25.25z",
    ),
    (
        IconKind::Repo,
        "M2 2.5A2.5 2.5 0 0 1 4.5 0h8.75a.75.75 0 0 1 .75.75v12.5a.75.75 0 0 1-.75.75h-2.5v-1.5h1.75v-2h-8a1 1 0 0 0-.71 1.7.75.75 0 0 1-1.07 1.05A2.5 2.5 0 0 1 2 11.5zm10.5-1h-8a1 1 0 0 0-1 1v6.7c.3-.13.64-.2 1-.2h8zM5 12.25h4.5v3.25L7.25 14 5 15.5z",
    ),
    (
        IconKind::Issue,
        "M8 9.5a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3zM8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0zM1.5 8a6.5 6.5 0 1 0 13 0 6.5 6.5 0 0 0-13 0z",
    ),
    (
        IconKind::Commit,
        "M11.93 8.5a4 4 0 0 1-7.86 0H.75a.75.75 0 0 1 0-1.5h3.32a4 4 0 0 1 7.86 0h3.32a.75.75 0 0 1 0 1.5zM8 5.5a2.25 2.25 0 1 0 0 4.5 2.25 2.25 0 0 0 0-4.5z",
    ),
    (
        IconKind::PullRequest,
        "M1.5 3.25a2.25 2.25 0 1 1 3 2.12v5.26a2.25 2.25 0 1 1-1.5 0V5.37A2.25 2.25 0 0 1 1.5 3.25zm8.22-.78L11.44.75a.25.25 0 0 1 .43.18V2.5h.38A2.75 2.75 0 0 1 15 5.25v5.38a2.25 2.25 0 1 1-1.5 0V5.25c0-.69-.56-1.25-1.25-1.25h-.38v1.56a.25.25 0 0 1-.43.18L9.72 3.97a.75.75 0 0 1 0-1.06z",
    ),
    (
        IconKind::MergedPr,
        "M5.45 5.15A2.25 2.25 0 1 0 4 5.37v5.26a2.25 2.25 0 1 0 1.5 0V8.1a5.2 5.2 0 0 0 3.75 1.65h1.38a2.25 2.25 0 1 0 0-1.5H9.25A3.75 3.75 0 0 1 5.5 5.14z",
    ),
    (
        IconKind::PrReviewed,
        "M1.68 8C2.8 5.56 5.2 3.5 8 3.5s5.2 2.06 6.32 4.5C13.2 10.44 10.8 12.5 8 12.5S2.8 10.44 1.68 8zM8 2C4.3 2 1.3 4.8.1 7.7a.75.75 0 0 0 0 .6C1.3 11.2 4.3 14 8 14s6.7-2.8 7.9-5.7a.75.75 0 0 0 0-.6C14.7 4.8 11.7 2 8 2zm0 3.5a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5z",
    ),
    (
        IconKind::MergedPrPercentage,
        "M3.5 1a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5zm9 9a2.5 2.5 0 1 1 0 5 2.5 2.5 0 0 1 0-5zM13.47 1.47a.75.75 0 0 1 1.06 1.06l-12 12a.75.75 0 0 1-1.06-1.06z",
    ),
    (
        IconKind::DiscussionStarted,
        "M1.75 1h8.5c.97 0 1.75.78 1.75 1.75v5.5c0 .97-.78 1.75-1.75 1.75H7.06l-2.57 2.32A.75.75 0 0 1 3.25 11.75V10h-1.5C.78 10 0 9.22 0 8.25v-5.5C0 1.78.78 1 1.75 1zm0 1.5a.25.25 0 0 0-.25.25v5.5c0 .14.11.25.25.25h2.25a.75.75 0 0 1 .75.75v.81l1.78-1.62a.75.75 0 0 1 .5-.19h3.22a.25.25 0 0 0 .25-.25v-5.5a.25.25 0 0 0-.25-.25z",
    ),
    (
        IconKind::DiscussionAnswered,
        "M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0zm3.28 5.22a.75.75 0 0 0-1.06 0L7 8.44 5.78 7.22a.75.75 0 0 0-1.06 1.06l1.75 1.75a.75.75 0 0 0 1.06 0l3.75-3.75a.75.75 0 0 0 0-1.06z",
    ),
];

impl IconSet {
    /// Built-in 16-unit line-art icons.
    pub fn builtin() -> Self {
        let icons = BUILTIN_ICONS
            .iter()
            .map(|(kind, path)| {
                (
                    *kind,
                    Icon {
                        path: (*path).to_string(),
                        view_box: default_view_box(),
                    },
                )
            })
            .collect();
        IconSet { icons }
    }

    /// Parse a `{ "star": { "path": "...", "view_box": 512 }, ... }` table.
    /// Kinds absent from the table keep their built-in icon.
    pub fn from_json(content: &str) -> Result<Self> {
        let overrides: IconSet =
            serde_json::from_str(content).map_err(|e| CardError::IconParse(e.to_string()))?;

        for (kind, icon) in &overrides.icons {
            if !icon.view_box.is_finite() || icon.view_box <= 0.0 {
                return Err(CardError::IconParse(format!(
                    "{:?} has a non-positive view_box",
                    kind
                )));
            }
        }

        let mut set = Self::builtin();
        set.icons.extend(overrides.icons);
        Ok(set)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn get(&self, kind: IconKind) -> Option<&Icon> {
        self.icons.get(&kind)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_row() {
        let set = IconSet::builtin();
        for (kind, _) in BUILTIN_ICONS {
            assert!(set.get(*kind).is_some(), "{kind:?} missing");
        }
        assert_eq!(set.icons.len(), 13);
        assert_eq!(set.get(IconKind::Star).map(Icon::scale), Some(ICON_SIZE / 16.0));
    }

    #[test]
    fn json_overrides_single_icon() {
        let set = IconSet::from_json(r#"{ "star": { "path": "M0 0h512v512H0z", "view_box": 512 } }"#)
            .expect("icon table");

        let star = set.get(IconKind::Star).expect("star");
        assert_eq!(star.path, "M0 0h512v512H0z");
        assert_eq!(star.view_box, 512.0);
        assert_eq!(set.get(IconKind::Fork).map(|i| i.view_box), Some(16.0));
    }

    #[test]
    fn rejects_unknown_kind_and_bad_view_box() {
        assert!(IconSet::from_json(r#"{ "rocket": { "path": "M0 0" } }"#).is_err());
        assert!(IconSet::from_json(r#"{ "star": { "path": "M0 0", "view_box": 0 } }"#).is_err());
    }
}
