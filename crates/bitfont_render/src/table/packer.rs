use image::RgbImage;

/// Greyscale cutoff separating lit from unlit pixels; a sample becomes a
/// lit bit only when strictly above this value.
pub const THRESHOLD: u8 = 128;

/// Reduces rasterized glyph cells to byte-aligned rows of bit digits.
#[derive(Clone, Copy, Debug)]
pub struct RowPacker {
    bytes_per_line: usize,
    threshold: u8,
}

impl RowPacker {
    pub fn new(cell_width: usize, threshold: u8) -> Self {
        Self { bytes_per_line: (cell_width + 7) / 8, threshold }
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Packs one cell top-to-bottom into padded bit rows. Only channel 0 of
    /// each pixel is sampled.
    pub fn pack_cell(&self, cell: &RgbImage) -> Vec<String> {
        (0..cell.height()).map(|y| self.pack_row(cell, y)).collect()
    }

    fn pack_row(&self, cell: &RgbImage, y: u32) -> String {
        let padded_len = self.bytes_per_line * 8;
        let mut bits = String::with_capacity(padded_len);
        for x in 0..cell.width() {
            let lit = cell.get_pixel(x, y).0[0] > self.threshold;
            bits.push(if lit { '1' } else { '0' });
        }
        // Low-order padding out to a whole number of bytes.
        while bits.len() < padded_len {
            bits.push('0');
        }
        bits
    }
}

/// The accumulated initialization vector: every glyph's padded bit rows,
/// in charset order.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    cell_width: usize,
    cell_height: usize,
    bytes_per_line: usize,
    rows: Vec<String>,
}

impl GlyphTable {
    pub fn new(cell_width: usize, cell_height: usize, bytes_per_line: usize) -> Self {
        Self { cell_width, cell_height, bytes_per_line, rows: Vec::new() }
    }

    /// Appends one packed row. Every row must occupy exactly
    /// `bytes_per_line * 8` digits; anything else is a sizing bug.
    pub fn push_row(&mut self, bits: String) {
        assert_eq!(
            bits.len(),
            self.bytes_per_line * 8,
            "packed row does not fill {} bytes: {:?}",
            self.bytes_per_line,
            bits
        );
        self.rows.push(bits);
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    pub fn glyph_count(&self) -> usize {
        if self.cell_height == 0 {
            0
        } else {
            self.rows.len() / self.cell_height
        }
    }

    /// Total number of bit digits across the vector.
    pub fn bit_count(&self) -> usize {
        self.rows.len() * self.bytes_per_line * 8
    }
}
