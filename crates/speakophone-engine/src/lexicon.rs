//! Phonetic dictionary and symbol map loading.
//!
//! The dictionary maps uppercase words to a space-separated phone string
//! (CMU/Sphinx style, one `WORD<TAB>PH1 PH2 ...` entry per line, `;`
//! comments). The symbol map translates dictionary phones into the clip names
//! of a particular allophone library (`phone,clip` per line).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{SpeechError, SpeechResult};

/// Word → phone sequence lookup. Immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct PhoneticDictionary {
    entries: HashMap<String, String>,
}

impl PhoneticDictionary {
    /// Builds a dictionary from `(word, phones)` pairs.
    pub fn from_entries<I, W, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, P)>,
        W: Into<String>,
        P: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(w, p)| (w.into(), p.as_ref().trim().to_string()))
                .collect(),
        }
    }

    /// Reads and parses a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> SpeechResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SpeechError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&source, path)?;
        info!(words = dictionary.len(), path = %path.display(), "loaded phonetic dictionary");
        Ok(dictionary)
    }

    /// Parses dictionary text. `origin` is only used in error messages.
    ///
    /// Lines starting with `;` are skipped. Every other line, blank ones
    /// included, must hold exactly two tab-separated fields. The word is kept
    /// verbatim; the phone string is trimmed and split later, at lookup time.
    pub fn parse(source: &str, origin: &Path) -> SpeechResult<Self> {
        let mut entries = HashMap::new();
        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.starts_with(';') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let &[word, phones] = fields.as_slice() else {
                return Err(SpeechError::format(
                    origin,
                    index + 1,
                    format!(
                        "expected WORD<TAB>PHONES, found {} tab-separated field(s)",
                        fields.len()
                    ),
                ));
            };
            entries.insert(word.to_string(), phones.trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Phone symbols for `word`, in order. `None` if the word is unknown.
    pub fn phones(&self, word: &str) -> Option<Vec<&str>> {
        self.entries
            .get(word)
            .map(|phones| phones.split_whitespace().collect())
    }

    /// Returns true if `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Phone symbol → clip name lookup. Immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct SymbolMap {
    symbols: HashMap<String, String>,
}

impl SymbolMap {
    /// Builds a map from `(symbol, clip)` pairs.
    pub fn from_pairs<I, S, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            symbols: pairs
                .into_iter()
                .map(|(s, c)| (s.into(), c.into()))
                .collect(),
        }
    }

    /// Reads and parses a symbol map file.
    pub fn load(path: impl AsRef<Path>) -> SpeechResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SpeechError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&source, path)?;
        info!(symbols = map.len(), path = %path.display(), "loaded symbol map");
        Ok(map)
    }

    /// Parses `symbol,clip` lines. `origin` is only used in error messages.
    ///
    /// Both fields are trimmed; fields after the second are ignored. A line
    /// without a comma, blank lines included, is malformed.
    pub fn parse(source: &str, origin: &Path) -> SpeechResult<Self> {
        let mut symbols = HashMap::new();
        for (index, line) in source.lines().enumerate() {
            let mut fields = line.split(',');
            let (Some(symbol), Some(clip)) = (fields.next(), fields.next()) else {
                return Err(SpeechError::format(
                    origin,
                    index + 1,
                    "expected SYMBOL,CLIP",
                ));
            };
            symbols.insert(symbol.trim().to_string(), clip.trim().to_string());
        }
        Ok(Self { symbols })
    }

    /// Clip name for `symbol`.
    pub fn clip_for(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(String::as_str)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DICT: &str = ";;; CMU Sphinx 40\n\
                        ;comment\n\
                        HELLO\tHH AH L OW\n\
                        IT'S\tIH T S \n\
                        A(2)\tEY\n";

    #[test]
    fn test_parse_dictionary() {
        let dict = PhoneticDictionary::parse(DICT, Path::new("dict.txt")).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.phones("HELLO").unwrap(), vec!["HH", "AH", "L", "OW"]);
        assert_eq!(dict.phones("IT'S").unwrap(), vec!["IH", "T", "S"]);
        assert!(dict.contains("A(2)"));
        assert!(dict.phones("hello").is_none());
        assert!(!dict.contains(";comment"));
    }

    #[test]
    fn test_dictionary_rejects_missing_tab() {
        let err = PhoneticDictionary::parse("HELLO\tHH AH\nWORLD W ER L D\n", Path::new("d.txt"))
            .unwrap_err();
        match err {
            SpeechError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_dictionary_rejects_extra_field() {
        assert!(PhoneticDictionary::parse("A\tAH\tEY\n", Path::new("d.txt")).is_err());
    }

    #[test]
    fn test_parse_symbol_map() {
        let map = SymbolMap::parse("AA , AA1\nHH,HH2,extra\nOW,OW\n", Path::new("m.txt")).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.clip_for("AA"), Some("AA1"));
        assert_eq!(map.clip_for("HH"), Some("HH2"));
        assert_eq!(map.clip_for("ZH"), None);
    }

    #[test]
    fn test_symbol_map_rejects_single_field() {
        let err = SymbolMap::parse("AA,AA1\nHH\n", Path::new("m.txt")).unwrap_err();
        assert!(err.to_string().starts_with("m.txt:2:"));
    }

    #[test]
    fn test_dictionary_rejects_blank_line() {
        let err = PhoneticDictionary::parse("HELLO\tHH\n\nWORLD\tW\n", Path::new("d.txt"))
            .unwrap_err();
        match err {
            SpeechError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_symbol_map_rejects_blank_line() {
        let err = SymbolMap::parse("AA,AA1\n\nHH,HH1\n", Path::new("m.txt")).unwrap_err();
        match err {
            SpeechError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_newline_is_not_a_blank_line() {
        assert_eq!(
            PhoneticDictionary::parse("HELLO\tHH\n", Path::new("d.txt")).unwrap().len(),
            1
        );
        assert_eq!(SymbolMap::parse("AA,AA1\n", Path::new("m.txt")).unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_files() {
        assert!(matches!(
            PhoneticDictionary::load("/no/dict.txt"),
            Err(SpeechError::Load { .. })
        ));
        assert!(matches!(
            SymbolMap::load("/no/map.txt"),
            Err(SpeechError::Load { .. })
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.txt");
        fs::write(&path, DICT).unwrap();
        let dict = PhoneticDictionary::load(&path).unwrap();
        assert!(dict.contains("HELLO"));
    }
}
