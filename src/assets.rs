//! Pre-encoded binary assets inlined into the card.
//!
//! Loading happens once per process; the renderer only borrows the encoded
//! strings and never decodes them again.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use imagesize::ImageType;
use indexmap::IndexMap;

use crate::error::{CardError, Result};

/// Raster image in base64 form, with its declared pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub base64: String,
    pub width: u32,
    pub height: u32,
    pub mime: &'static str,
}

impl EmbeddedImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mime = match imagesize::image_type(bytes) {
            Ok(ImageType::Png) => "image/png",
            Ok(ImageType::Gif) => "image/gif",
            Ok(ImageType::Jpeg) => "image/jpeg",
            Ok(ImageType::Webp) => "image/webp",
            Ok(ImageType::Bmp) => "image/bmp",
            Ok(other) => {
                return Err(CardError::UnsupportedImage(format!(
                    "{:?} cannot be inlined as a data URI",
                    other
                )));
            }
            Err(e) => return Err(CardError::UnsupportedImage(e.to_string())),
        };

        let size =
            imagesize::blob_size(bytes).map_err(|e| CardError::UnsupportedImage(e.to_string()))?;
        if size.width == 0 || size.height == 0 {
            return Err(CardError::UnsupportedImage(
                "image has a zero dimension".to_string(),
            ));
        }

        Ok(Self {
            base64: STANDARD.encode(bytes),
            width: u32::try_from(size.width)
                .map_err(|_| CardError::UnsupportedImage("image too wide".to_string()))?,
            height: u32::try_from(size.height)
                .map_err(|_| CardError::UnsupportedImage("image too tall".to_string()))?,
            mime,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CardError::io(path, e))?;
        Self::from_bytes(&bytes)
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Everything the card inlines: an optional raster image and named fonts.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssets {
    pub image: Option<EmbeddedImage>,
    /// Font identifier (e.g. `Rajdhani-Regular`) to base64 TrueType data.
    pub fonts: IndexMap<String, String>,
}

impl EmbeddedAssets {
    pub fn with_image(mut self, image: EmbeddedImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Embed every `.ttf`/`.otf` file in `dir`, keyed by file stem.
    pub fn load_fonts_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = std::fs::read_dir(dir).map_err(|e| CardError::io(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| CardError::io(dir, e))?.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf"))
                .unwrap_or(false);
            if is_font {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let bytes = std::fs::read(path).map_err(|e| CardError::io(path, e))?;
            tracing::debug!(font = id, bytes = bytes.len(), "embedding font");
            self.fonts.insert(id.to_string(), STANDARD.encode(bytes));
        }

        Ok(paths.len())
    }

    /// Merge a pre-encoded `{ "Font-Id": "<base64>" }` table.
    pub fn load_fonts_json(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::io(path, e))?;
        let table: IndexMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            CardError::FontTable(format!("{}: {}", path.display(), e))
        })?;

        let count = table.len();
        self.fonts.extend(table);
        Ok(count)
    }

    pub fn font(&self, id: &str) -> Option<&str> {
        self.fonts.get(id).map(String::as_str)
    }
}
