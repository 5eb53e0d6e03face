//! Fixed-cell monochrome font tables for embedded LCD drivers.
//!
//! Renders every entry of a charset into a fixed-size cell, thresholds the
//! result to one bit per pixel, and packs the rows into a memory
//! initialization vector, alongside a PNG strip of the charset as a visual
//! sanity check.

mod font_pipeline;
mod table;

use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, trace};

pub use font_pipeline::{
    loader::FontFace,
    measure::{text_bounds, TextBounds},
};
pub use table::{
    charset::{Charset, DEFAULT_CHARSET},
    coe,
    packer::{GlyphTable, RowPacker, THRESHOLD},
};

use font_pipeline::{measure, raster};

#[derive(Debug, thiserror::Error)]
pub enum BitFontError {
    #[error("failed to read font {path:?}: {source}")]
    FontRead { path: PathBuf, source: io::Error },
    #[error("failed to parse font: {0}")]
    FontParse(&'static str),
    #[error("font reports no horizontal line metrics")]
    MissingLineMetrics,
    #[error("font does not report a name; supply one explicitly")]
    MissingName,
    #[error("failed to read charset {path:?}: {source}")]
    CharsetRead { path: PathBuf, source: io::Error },
    #[error("charset is empty")]
    EmptyCharset,
}

#[derive(Clone, Debug)]
pub struct BitFontOptions {
    /// Pixel height of every glyph cell.
    pub size: u32,
    /// Greyscale cutoff; strictly greater channel-0 samples become lit bits.
    pub threshold: u8,
    /// Output base name override; defaults to the font's reported name.
    pub name: Option<String>,
    /// Glyph order and count.
    pub charset: Charset,
}

impl Default for BitFontOptions {
    fn default() -> Self {
        Self { size: 16, threshold: THRESHOLD, name: None, charset: Charset::default() }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// Packed initialization vector rows for the whole charset.
    pub table: GlyphTable,
    /// The charset rendered in one line at natural metrics.
    pub preview: RgbImage,
    /// Sanitized base name both output files share.
    pub file_stem: String,
}

#[derive(Default)]
pub struct BitFontRenderer;

impl BitFontRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: BitFontOptions,
    ) -> Result<RenderOutput, BitFontError> {
        let face = FontFace::from_path(path, options.size)?;
        self.render_face(&face, options)
    }

    pub fn render_face(
        &self,
        face: &FontFace,
        options: BitFontOptions,
    ) -> Result<RenderOutput, BitFontError> {
        if options.charset.is_empty() {
            return Err(BitFontError::EmptyCharset);
        }

        let cell_width = measure::max_cell_width(face, &options.charset);
        let cell_height = options.size as usize;
        let packer = RowPacker::new(cell_width, options.threshold);
        debug!(
            "packing {} glyphs into {}x{} cells, {} bytes per row",
            options.charset.len(),
            cell_width,
            cell_height,
            packer.bytes_per_line()
        );

        let mut table = GlyphTable::new(cell_width, cell_height, packer.bytes_per_line());
        for entry in options.charset.iter() {
            let cell = raster::render_cell(face, entry, cell_width, cell_height);
            trace!("packing {:?}", entry);
            for row in packer.pack_cell(&cell) {
                trace!("|{}|", row.replace('0', " ").replace('1', "#"));
                table.push_row(row);
            }
        }

        let name = match options.name {
            Some(name) => name,
            None => face.name().ok_or(BitFontError::MissingName)?.to_owned(),
        };
        let file_stem = coe::file_stem(&name, options.size);
        let preview = raster::render_line(face, options.charset.line());

        Ok(RenderOutput { table, preview, file_stem })
    }
}
