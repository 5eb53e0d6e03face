use super::loader::FontFace;
use crate::table::charset::Charset;

/// One scalar of a charset entry placed in top-origin coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlacedGlyph {
    pub scalar: char,
    pub left: i32,
    pub top: i32,
    pub width: usize,
    pub height: usize,
}

/// Ink bounding box of laid-out text. The origin sits at the left edge of
/// the line box's top (ascender) edge, so `right` and `bottom` are the
/// extents a renderer measures from the text origin, bearings included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Walks the scalars of `text` with a plain pen advance (no kerning, no
/// shaping) and records where each glyph bitmap lands relative to the text
/// origin. Combining marks carry near-zero advances, so they land on top of
/// the glyph before them.
pub(crate) fn place_glyphs(face: &FontFace, text: &str) -> Vec<PlacedGlyph> {
    let mut placed = Vec::new();
    let mut pen = 0.0f32;
    for scalar in text.chars() {
        let metrics = face.metrics(scalar);
        placed.push(PlacedGlyph {
            scalar,
            left: pen.round() as i32 + metrics.xmin,
            top: face.ascent() - metrics.ymin - metrics.height as i32,
            width: metrics.width,
            height: metrics.height,
        });
        pen += metrics.advance_width;
    }
    placed
}

/// Ink bounds of `text`; zero when nothing inks (whitespace-only input).
pub fn text_bounds(face: &FontFace, text: &str) -> TextBounds {
    let mut bounds: Option<TextBounds> = None;
    for glyph in place_glyphs(face, text) {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let ink = TextBounds {
            left: glyph.left,
            top: glyph.top,
            right: glyph.left + glyph.width as i32,
            bottom: glyph.top + glyph.height as i32,
        };
        bounds = Some(match bounds {
            Some(acc) => acc.union(ink),
            None => ink,
        });
    }
    bounds.unwrap_or_default()
}

/// Uniform cell width: the widest right edge any charset entry renders to.
/// Height never enters into it; that is fixed by the requested pixel size.
pub fn max_cell_width(face: &FontFace, charset: &Charset) -> usize {
    charset
        .iter()
        .map(|entry| text_bounds(face, entry).right)
        .max()
        .unwrap_or(0)
        .max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_expands_every_edge() {
        let a = TextBounds { left: 1, top: -2, right: 4, bottom: 10 };
        let b = TextBounds { left: -1, top: 0, right: 9, bottom: 7 };
        let expected = TextBounds { left: -1, top: -2, right: 9, bottom: 10 };
        assert_eq!(a.union(b), expected);
        assert_eq!(b.union(a), expected);
    }
}
