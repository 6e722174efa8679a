//! Render an animated, self-contained SVG stat card.
//!
//! The card shows a rank ring with a progress arc, one row per counter, and a
//! language ring with a two-column legend. Fonts and the raster image are
//! inlined as base64 data, so the document needs no external resources.
//!
//! ```no_run
//! use statcard::{EmbeddedAssets, IconSet, RenderConfig, StatsSnapshot, render_card};
//!
//! # fn main() -> statcard::Result<()> {
//! let stats = StatsSnapshot::from_json(&std::fs::read_to_string("stats.json").unwrap())?;
//! let svg = render_card(
//!     &stats,
//!     &RenderConfig::default(),
//!     &EmbeddedAssets::default(),
//!     &IconSet::default(),
//! )?;
//! std::fs::write("card.svg", svg).unwrap();
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod assets;
pub mod card;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod icons;
pub mod segments;
pub mod stats;
pub mod xml;

pub use assets::{EmbeddedAssets, EmbeddedImage};
pub use card::{CardRenderer, render_card};
pub use config::RenderConfig;
pub use error::{CardError, Result};
pub use icons::IconSet;
pub use stats::StatsSnapshot;
