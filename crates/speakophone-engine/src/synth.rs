//! Text to speech by allophone concatenation.
//!
//! Text is normalized to uppercase letters, spaces and apostrophes, split
//! into words, and every word is spelled out through the phonetic dictionary
//! and the symbol map into allophone clips. The clips are joined with a fixed
//! run of silence after each word.

use speakophone_spec::VoiceConfig;
use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::{SpeechError, SpeechResult};
use crate::lexicon::{PhoneticDictionary, SymbolMap};
use crate::library::{ClipTable, SampleLibrary};

pub use speakophone_spec::DEFAULT_PADDING_SAMPLES;

/// Uppercases `text` and drops everything except `A`-`Z`, space and `'`.
pub fn normalize_text(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ' ' || *c == '\'')
        .collect()
}

/// Normalized words of `text`, in order.
pub fn split_words(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Concatenative synthesizer over immutable lookup tables.
///
/// `synthesize` only reads the tables, so one instance can serve any number
/// of requests, including after a failed one.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    dictionary: PhoneticDictionary,
    symbols: SymbolMap,
    clips: ClipTable,
    padding: AudioBuffer,
}

impl Synthesizer {
    /// Creates a synthesizer with the default inter-word padding.
    pub fn new(dictionary: PhoneticDictionary, symbols: SymbolMap, clips: ClipTable) -> Self {
        let padding = AudioBuffer::silence(DEFAULT_PADDING_SAMPLES, clips.sample_rate());
        Self {
            dictionary,
            symbols,
            clips,
            padding,
        }
    }

    /// Replaces the inter-word padding length, in samples.
    pub fn with_padding(mut self, samples: usize) -> Self {
        self.padding = AudioBuffer::silence(samples, self.clips.sample_rate());
        self
    }

    /// Loads clips, dictionary and symbol map described by `config`.
    ///
    /// # Errors
    /// Any load-time failure aborts construction.
    pub fn from_config(config: &VoiceConfig) -> SpeechResult<Self> {
        config.validate()?;
        let clips = SampleLibrary::for_voice(config)?.load(&config.sample_directory)?;
        let dictionary = PhoneticDictionary::load(&config.dictionary)?;
        let symbols = SymbolMap::load(&config.symbol_map)?;
        Ok(Self::new(dictionary, symbols, clips).with_padding(config.padding_samples))
    }

    /// The allophone clips.
    pub fn clips(&self) -> &ClipTable {
        &self.clips
    }

    /// The phonetic dictionary.
    pub fn dictionary(&self) -> &PhoneticDictionary {
        &self.dictionary
    }

    /// The symbol map.
    pub fn symbol_map(&self) -> &SymbolMap {
        &self.symbols
    }

    /// Output sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.clips.sample_rate()
    }

    /// Inter-word padding length, in samples.
    pub fn padding_len(&self) -> usize {
        self.padding.len()
    }

    /// Resolves a normalized word to its clips.
    ///
    /// # Errors
    /// [`SpeechError::UnknownWord`] if the word, any of its symbols, or any
    /// mapped clip is missing.
    pub fn word_clips(&self, word: &str) -> SpeechResult<Vec<&AudioBuffer>> {
        let phones = self
            .dictionary
            .phones(word)
            .ok_or_else(|| SpeechError::unknown_word(word))?;

        let mut clips = Vec::with_capacity(phones.len());
        for phone in phones {
            let clip = self
                .symbols
                .clip_for(phone)
                .and_then(|name| self.clips.get(name).map(|clip| (name, clip)));
            let Some((name, clip)) = clip else {
                debug!(word, phone, "no clip for phone");
                return Err(SpeechError::unknown_word(word));
            };
            debug!(phone, clip = name, samples = clip.len(), "phone");
            clips.push(clip);
        }
        Ok(clips)
    }

    /// Speaks `text`.
    ///
    /// Returns the concatenation of every word's clips, each word followed by
    /// the padding. Text with no words yields an empty buffer.
    ///
    /// # Errors
    /// Fails on the first word that cannot be resolved; no partial audio is
    /// returned.
    pub fn synthesize(&self, text: &str) -> SpeechResult<AudioBuffer> {
        let mut parts: Vec<&AudioBuffer> = Vec::new();
        for word in split_words(text) {
            debug!(word = %word, "saying");
            let clips = self.word_clips(&word)?;
            debug!(
                word = %word,
                samples = clips.iter().map(|c| c.len()).sum::<usize>(),
                "word audio"
            );
            parts.extend(clips);
            parts.push(&self.padding);
        }

        let audio = AudioBuffer::concat(parts, self.sample_rate());
        debug!(samples = audio.len(), "total audio");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn synth() -> Synthesizer {
        let dictionary = PhoneticDictionary::from_entries([
            ("HI", "HH AY"),
            ("I", "AY"),
            ("IT'S", "IH T S"),
            ("ODD", "AA D"),
        ]);
        let symbols = SymbolMap::from_pairs([
            ("HH", "hh"),
            ("AY", "ay"),
            ("IH", "ih"),
            ("T", "t"),
            ("S", "s"),
            ("AA", "aa"),
            ("D", "missing-clip"),
        ]);
        let clips: HashMap<String, AudioBuffer> = [
            ("hh", vec![1, 1]),
            ("ay", vec![2, 2, 2]),
            ("ih", vec![3]),
            ("t", vec![4]),
            ("s", vec![5, 5]),
            ("aa", vec![6]),
        ]
        .into_iter()
        .map(|(name, samples)| (name.to_string(), AudioBuffer::new(samples, 8000)))
        .collect();
        Synthesizer::new(dictionary, symbols, ClipTable::new(clips, 8000)).with_padding(2)
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  it's 4 o'clock!\t"), "  IT'S  O'CLOCK");
        assert_eq!(split_words("hi, i... hi"), vec!["HI", "I", "HI"]);
    }

    #[test]
    fn test_empty_text_gives_empty_buffer() {
        let s = synth();
        assert!(s.synthesize("").unwrap().is_empty());
        assert!(s.synthesize(" 123 !? ").unwrap().is_empty());
    }

    #[test]
    fn test_concatenates_with_padding_after_every_word() {
        let audio = synth().synthesize("Hi, I").unwrap();
        assert_eq!(audio.samples(), &[1, 1, 2, 2, 2, 0, 0, 2, 2, 2, 0, 0]);
        assert_eq!(audio.sample_rate(), 8000);
    }

    #[test]
    fn test_apostrophes_survive() {
        let audio = synth().synthesize("it's").unwrap();
        assert_eq!(audio.samples(), &[3, 4, 5, 5, 0, 0]);
    }

    #[test]
    fn test_unknown_word_aborts() {
        let err = synth().synthesize("hi hello hi").unwrap_err();
        match err {
            SpeechError::UnknownWord { word } => assert_eq!(word, "HELLO"),
            other => panic!("expected unknown word, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_clip_reports_word() {
        let err = synth().synthesize("odd").unwrap_err();
        assert!(matches!(err, SpeechError::UnknownWord { ref word } if word == "ODD"));
    }

    #[test]
    fn test_failure_leaves_synthesizer_usable() {
        let s = synth();
        let before = s.synthesize("hi").unwrap();
        assert!(s.synthesize("nope").is_err());
        assert_eq!(s.synthesize("hi").unwrap(), before);
    }

    #[test]
    fn test_length_invariant() {
        let s = synth();
        let text = "hi it's i";
        let expected: usize = split_words(text)
            .iter()
            .map(|w| {
                s.word_clips(w).unwrap().iter().map(|c| c.len()).sum::<usize>() + s.padding_len()
            })
            .sum();
        assert_eq!(s.synthesize(text).unwrap().len(), expected);
    }
}
