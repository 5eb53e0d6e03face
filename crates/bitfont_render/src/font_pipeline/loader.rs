use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::BitFontError;

/// A parsed font fixed at one rasterization size.
pub struct FontFace {
    font: Font,
    px: f32,
    ascent: i32,
}

impl FontFace {
    /// Reads and parses a font file at the requested pixel height.
    pub fn from_path(path: impl AsRef<Path>, size: u32) -> Result<Self, BitFontError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BitFontError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, size)
    }

    pub fn from_bytes(bytes: Vec<u8>, size: u32) -> Result<Self, BitFontError> {
        let font =
            Font::from_bytes(bytes, FontSettings::default()).map_err(BitFontError::FontParse)?;
        let px = size as f32;
        let line = font.horizontal_line_metrics(px).ok_or(BitFontError::MissingLineMetrics)?;
        let ascent = line.ascent.round() as i32;
        Ok(Self { font, px, ascent })
    }

    /// The font's reported name, when its name table carries one.
    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }

    /// Distance from the top of the line box down to the baseline, rounded
    /// to whole pixels. All top-origin layout math hangs off this value.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    pub(crate) fn metrics(&self, scalar: char) -> fontdue::Metrics {
        self.font.metrics(scalar, self.px)
    }

    pub(crate) fn rasterize(&self, scalar: char) -> (fontdue::Metrics, Vec<u8>) {
        self.font.rasterize(scalar, self.px)
    }
}
