use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

use crate::error::{InitError, RenderError};
use crate::geometry::Screen;
use crate::glyph::TextMeasure;

static RESOURCE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources");

pub const BUNDLED_WORDS_FILE: &str = "words.txt";
/// Minimum number of entries a word list must provide
pub const EXPECTED_WORDS: usize = 3000;

/// Validated list of candidate words, one per line in its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Parse a one-word-per-line list. Surrounding whitespace and blank lines
    /// are ignored; fewer than `expected` entries is an error.
    pub fn parse(text: &str, expected: usize) -> Result<Self, InitError> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() || words.len() < expected {
            return Err(InitError::VocabularyTooShort {
                found: words.len(),
                expected,
            });
        }

        Ok(Self { words })
    }

    pub fn load<P: AsRef<Path>>(path: P, expected: usize) -> Result<Self, InitError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InitError::Vocabulary {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, expected)
    }

    /// The word list shipped inside the binary
    pub fn bundled() -> Result<Self, InitError> {
        let text = RESOURCE_DIR
            .get_file(BUNDLED_WORDS_FILE)
            .and_then(|file| file.contents_utf8())
            .unwrap_or_default();
        Self::parse(text, EXPECTED_WORDS)
    }

    /// Fail on the first word the font cannot draw, so no spawn can fail later.
    /// A word that already touches the right edge when spawned would end the
    /// session on its first frame, so it is rejected as well.
    pub fn check_renderable<F: TextMeasure + ?Sized>(
        &self,
        font: &F,
        screen: Screen,
    ) -> Result<(), InitError> {
        for word in &self.words {
            let size = font
                .measure(word)
                .map_err(|source: RenderError| InitError::UnmeasurableWord {
                    word: word.clone(),
                    source,
                })?;
            if size.width >= screen.width {
                return Err(InitError::WordTooWide {
                    word: word.clone(),
                    width: size.width,
                    screen_width: screen.width,
                });
            }
        }
        Ok(())
    }

    /// Uniformly random entry
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // parse() guarantees at least one entry
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::CellFont;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn bundled_list_is_complete() {
        let vocab = Vocabulary::bundled().unwrap();
        assert!(vocab.len() >= EXPECTED_WORDS);
        assert!(vocab.words().iter().all(|w| !w.trim().is_empty()));
    }

    #[test]
    fn bundled_list_renders_with_default_font() {
        let vocab = Vocabulary::bundled().unwrap();
        assert!(vocab
            .check_renderable(&CellFont::default(), Screen::default())
            .is_ok());
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let vocab = Vocabulary::parse("cat\n\n  dog \r\nbird\n", 3).unwrap();
        assert_eq!(vocab.words(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn short_list_is_rejected() {
        assert_matches!(
            Vocabulary::parse("cat\ndog\n", 3),
            Err(InitError::VocabularyTooShort {
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn empty_list_is_rejected_even_without_minimum() {
        assert_matches!(
            Vocabulary::parse("\n\n", 0),
            Err(InitError::VocabularyTooShort { found: 0, .. })
        );
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        let vocab = Vocabulary::load(file.path(), 2).unwrap();
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert_matches!(
            Vocabulary::load(&missing, 1),
            Err(InitError::Vocabulary { path, .. }) if path == missing
        );
    }

    #[test]
    fn unrenderable_word_is_reported() {
        let vocab = Vocabulary::parse("cat\nd\u{7}og\n", 2).unwrap();
        assert_matches!(
            vocab.check_renderable(&CellFont::default(), Screen::default()),
            Err(InitError::UnmeasurableWord { word, .. }) if word == "d\u{7}og"
        );
    }

    #[test]
    fn word_spanning_the_screen_is_reported() {
        let vocab = Vocabulary::parse("cat\nelephant\n", 2).unwrap();
        let font = CellFont::new(10, 20).unwrap();
        assert!(vocab.check_renderable(&font, Screen::new(81, 720)).is_ok());
        assert_matches!(
            vocab.check_renderable(&font, Screen::new(80, 720)),
            Err(InitError::WordTooWide { word, width: 80, screen_width: 80 }) if word == "elephant"
        );
    }

    #[test]
    fn choose_returns_member() {
        let vocab = Vocabulary::parse("cat\ndog\n", 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let w = vocab.choose(&mut rng);
            assert!(w == "cat" || w == "dog");
        }
    }
}
