//! # Glyph Store
//!
//! Loads banner files into an immutable character → art mapping.
//!
//! A banner file is a fixed grid of 95 blocks, one per printable ASCII
//! character from `' '` to `'~'`. Each block is 9 lines long: a separator
//! line (ignored, usually blank) followed by the 8 art rows.
//!
//! ```text
//!                 <- separator
//!            _    <- row 0
//!           / \   <- row 1
//!          / _ \  <- ...
//! ```

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Number of art rows in every glyph
pub const GLYPH_HEIGHT: usize = 8;

/// Lines per block in a banner file (separator + art rows)
pub const BLOCK_SIZE: usize = GLYPH_HEIGHT + 1;

/// First character stored in a banner file
pub const FIRST_GLYPH: char = ' ';

/// Last character stored in a banner file
pub const LAST_GLYPH: char = '~';

/// Number of glyphs in a complete banner file
pub const GLYPH_COUNT: usize = (LAST_GLYPH as usize) - (FIRST_GLYPH as usize) + 1;

/// The art for a single character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: [String; GLYPH_HEIGHT],
}

impl Glyph {
    pub fn new(rows: [String; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Art for row `row` (0-based), `None` past [`GLYPH_HEIGHT`]
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Widest row, in characters
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Immutable set of glyphs keyed by character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphSet {
    /// Build a set from already-split glyphs
    pub fn from_glyphs<I>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        Self {
            glyphs: glyphs.into_iter().collect(),
        }
    }

    /// Read and parse a banner file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&content)?;
        tracing::debug!("Loaded {} glyphs from {}", set.len(), path.display());
        Ok(set)
    }

    /// Parse banner file content
    ///
    /// Line endings are normalized first, so files saved with CRLF or bare CR
    /// load the same as LF files.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = content.split('\n').collect();

        let mut glyphs = HashMap::with_capacity(GLYPH_COUNT);
        for (index, ch) in (FIRST_GLYPH..=LAST_GLYPH).enumerate() {
            let start = index * BLOCK_SIZE + 1;
            let end = start + GLYPH_HEIGHT;
            if end > lines.len() {
                return Err(CoreError::GlyphParse {
                    ch,
                    needed: end,
                    found: lines.len(),
                });
            }

            let rows = std::array::from_fn(|r| lines[start + r].to_string());
            glyphs.insert(ch, Glyph::new(rows));
        }

        Ok(Self { glyphs })
    }

    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over glyphs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.glyphs.iter().map(|(ch, glyph)| (*ch, glyph))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Glyphs for 'A', 'B' and ' ' whose rows read "A0".."A7", "B0".."B7", " 0".." 7"
    pub(crate) fn fake_glyphs() -> GlyphSet {
        GlyphSet::from_glyphs(['A', 'B', ' '].into_iter().map(|ch| {
            let rows = std::array::from_fn(|r| format!("{}{}", ch, r));
            (ch, Glyph::new(rows))
        }))
    }

    /// A complete banner file where every row of `c` reads "<c><row>"
    pub(crate) fn synthetic_banner(line_ending: &str) -> String {
        let mut out = String::new();
        for ch in FIRST_GLYPH..=LAST_GLYPH {
            out.push_str(line_ending);
            for row in 0..GLYPH_HEIGHT {
                out.push_str(&format!("{}{}{}", ch, row, line_ending));
            }
        }
        out
    }

    #[test]
    fn test_glyph_count() {
        assert_eq!(GLYPH_COUNT, 95);
        assert_eq!(BLOCK_SIZE, 9);
    }

    #[test]
    fn test_parse_complete_file() {
        let set = GlyphSet::parse(&synthetic_banner("\n")).unwrap();
        assert_eq!(set.len(), GLYPH_COUNT);

        for ch in FIRST_GLYPH..=LAST_GLYPH {
            let glyph = set.get(ch).unwrap();
            assert_eq!(glyph.rows().len(), GLYPH_HEIGHT);
            assert_eq!(glyph.row(0), Some(format!("{}0", ch).as_str()));
            assert_eq!(glyph.row(7), Some(format!("{}7", ch).as_str()));
        }
    }

    #[test]
    fn test_parse_exact_line_count() {
        // No trailing newline: exactly 95 * 9 lines
        let content = synthetic_banner("\n");
        let content = content.strip_suffix('\n').unwrap();
        assert_eq!(content.split('\n').count(), GLYPH_COUNT * BLOCK_SIZE);

        let set = GlyphSet::parse(content).unwrap();
        assert_eq!(set.len(), GLYPH_COUNT);
        assert_eq!(set.get('~').unwrap().row(7), Some("~7"));
    }

    #[test]
    fn test_parse_crlf_and_cr() {
        let lf = GlyphSet::parse(&synthetic_banner("\n")).unwrap();
        let crlf = GlyphSet::parse(&synthetic_banner("\r\n")).unwrap();
        let cr = GlyphSet::parse(&synthetic_banner("\r")).unwrap();

        assert_eq!(lf, crlf);
        assert_eq!(lf, cr);
        assert!(!crlf.get('A').unwrap().row(0).unwrap().contains('\r'));
    }

    #[test]
    fn test_separator_line_ignored() {
        let content = synthetic_banner("\n").replacen("\n", "garbage\n", 1);
        let set = GlyphSet::parse(&content).unwrap();
        assert_eq!(set.get(' ').unwrap().row(0), Some(" 0"));
    }

    #[test]
    fn test_parse_too_short() {
        let content = synthetic_banner("\n");
        let lines: Vec<&str> = content.split('\n').collect();
        let truncated = lines[..GLYPH_COUNT * BLOCK_SIZE - 1].join("\n");

        match GlyphSet::parse(&truncated) {
            Err(CoreError::GlyphParse { ch, needed, found }) => {
                assert_eq!(ch, '~');
                assert_eq!(needed, GLYPH_COUNT * BLOCK_SIZE);
                assert_eq!(found, GLYPH_COUNT * BLOCK_SIZE - 1);
            }
            other => panic!("expected GlyphParse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_names_first_char() {
        match GlyphSet::parse("") {
            Err(CoreError::GlyphParse { ch, .. }) => assert_eq!(ch, ' '),
            other => panic!("expected GlyphParse, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(synthetic_banner("\n").as_bytes()).unwrap();

        let set = GlyphSet::load(file.path()).unwrap();
        assert_eq!(set.len(), GLYPH_COUNT);
        assert!(set.contains('{'));
        assert!(!set.contains('é'));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = GlyphSet::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_row_out_of_range() {
        let set = fake_glyphs();
        let glyph = set.get('B').unwrap();
        assert_eq!(glyph.row(GLYPH_HEIGHT - 1), Some("B7"));
        assert_eq!(glyph.row(GLYPH_HEIGHT), None);
    }

    #[test]
    fn test_glyph_width() {
        let set = fake_glyphs();
        assert_eq!(set.get('A').unwrap().width(), 2);
    }
}
