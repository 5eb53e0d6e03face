use std::fs;
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::BitFontError;

/// Character set burned into the table when no override is supplied:
/// printable ASCII followed by the Cyrillic alphabet.
pub const DEFAULT_CHARSET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдежзийклмнопрстуфхцчшщъыьэюя";

/// Ordered sequence of grapheme clusters defining glyph order and count.
///
/// An entry is a perceived character and may span several code points (a
/// base letter plus combining marks); such a sequence is never split across
/// two glyph slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    line: String,
    entries: Vec<String>,
}

impl Charset {
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        let entries = line.graphemes(true).map(str::to_owned).collect();
        Self { line, entries }
    }

    /// Builds the charset from the first line of `path`; any further lines
    /// are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BitFontError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BitFontError::CharsetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let line = text.lines().next().ok_or(BitFontError::EmptyCharset)?;
        Ok(Self::new(line))
    }

    /// The charset as one string in slot order, used for the preview strip.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::new(DEFAULT_CHARSET)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_charset_covers_ascii_and_cyrillic() {
        let charset = Charset::default();
        // '!'..='~' is 94 printable ASCII characters, plus 64 Cyrillic.
        assert_eq!(charset.len(), 94 + 64);
        assert_eq!(charset.entries()[0], "!");
        assert_eq!(charset.entries()[93], "~");
        assert_eq!(charset.entries()[94], "А");
        assert_eq!(charset.entries()[157], "я");
    }

    #[test]
    fn combining_mark_stays_with_its_base() {
        let charset = Charset::new("а\u{0301}б");
        assert_eq!(charset.len(), 2);
        assert_eq!(charset.entries()[0], "а\u{0301}");
        assert_eq!(charset.entries()[1], "б");
    }

    #[test]
    fn file_override_keeps_only_the_first_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "XY").unwrap();
        writeln!(file, "ignored").unwrap();

        let charset = Charset::from_file(file.path()).unwrap();
        assert_eq!(charset.entries(), ["X", "Y"]);
        assert_eq!(charset.line(), "XY");
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Charset::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BitFontError::EmptyCharset));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = Charset::from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, BitFontError::CharsetRead { .. }));
    }
}
