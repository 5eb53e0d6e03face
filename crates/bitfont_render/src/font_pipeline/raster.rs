use image::RgbImage;

use super::loader::FontFace;
use super::measure::{self, place_glyphs};

/// Renders one charset entry centered in a `width` x `height` cell. The
/// cell starts out black; glyph coverage is written to all three channels,
/// and downstream packing reads channel 0 only.
pub fn render_cell(face: &FontFace, text: &str, width: usize, height: usize) -> RgbImage {
    let bounds = measure::text_bounds(face, text);
    let x_margin = centering_margin(width as i32, bounds.right);
    let y_margin = centering_margin(height as i32, bounds.bottom);
    let mut cell = RgbImage::new(width as u32, height as u32);
    draw_text(&mut cell, face, text, x_margin, y_margin);
    cell
}

/// Renders `text` as a single line at natural font metrics, sized to its
/// own ink box — the human-readable preview of the whole charset.
pub fn render_line(face: &FontFace, text: &str) -> RgbImage {
    let bounds = measure::text_bounds(face, text);
    let mut strip = RgbImage::new(bounds.right.max(0) as u32, bounds.bottom.max(0) as u32);
    draw_text(&mut strip, face, text, 0, 0);
    strip
}

/// Margin centering a measured edge inside a cell extent. Floors toward
/// negative infinity, so a line box taller than the cell shifts glyphs up
/// rather than down.
pub(crate) fn centering_margin(cell_extent: i32, text_edge: i32) -> i32 {
    (cell_extent - text_edge).div_euclid(2)
}

fn draw_text(image: &mut RgbImage, face: &FontFace, text: &str, x: i32, y: i32) {
    for glyph in place_glyphs(face, text) {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, coverage) = face.rasterize(glyph.scalar);
        blit_coverage(
            image,
            &coverage,
            metrics.width,
            metrics.height,
            x + glyph.left,
            y + glyph.top,
        );
    }
}

/// Writes a coverage bitmap into the image at (`left`, `top`), clipping at
/// all four edges and compositing with per-channel max so that overlapping
/// glyphs (combining marks) stack instead of erasing each other.
pub(crate) fn blit_coverage(
    image: &mut RgbImage,
    coverage: &[u8],
    width: usize,
    height: usize,
    left: i32,
    top: i32,
) {
    let (image_width, image_height) = image.dimensions();
    for row in 0..height {
        let y = top + row as i32;
        if y < 0 || y >= image_height as i32 {
            continue;
        }
        for column in 0..width {
            let x = left + column as i32;
            if x < 0 || x >= image_width as i32 {
                continue;
            }
            let value = coverage[row * width + column];
            if value == 0 {
                continue;
            }
            let pixel = image.get_pixel_mut(x as u32, y as u32);
            for channel in pixel.0.iter_mut() {
                *channel = (*channel).max(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_margin_floors_toward_negative_infinity() {
        assert_eq!(centering_margin(10, 4), 3);
        assert_eq!(centering_margin(16, 16), 0);
        // A 19px line box in a 16px cell: floor(-3 / 2) = -2, not -1.
        assert_eq!(centering_margin(16, 19), -2);
    }

    #[test]
    fn blit_clips_at_the_edges() {
        let mut image = RgbImage::new(2, 2);
        let coverage = [255u8; 9];
        blit_coverage(&mut image, &coverage, 3, 3, -1, -1);
        assert!(image.pixels().all(|pixel| pixel.0 == [255, 255, 255]));

        let mut image = RgbImage::new(2, 2);
        blit_coverage(&mut image, &coverage, 3, 3, 2, 2);
        assert!(image.pixels().all(|pixel| pixel.0 == [0, 0, 0]));
    }

    #[test]
    fn blit_composites_with_max() {
        let mut image = RgbImage::new(1, 1);
        blit_coverage(&mut image, &[200], 1, 1, 0, 0);
        blit_coverage(&mut image, &[90], 1, 1, 0, 0);
        assert_eq!(image.get_pixel(0, 0).0, [200, 200, 200]);
    }
}
