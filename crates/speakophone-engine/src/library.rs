//! Clip libraries loaded from directories of recordings.
//!
//! A [`SampleLibrary`] describes how clips are prepared (sample rate,
//! optional conditioning, post-processing hooks) and loads directories into
//! either a keyed [`ClipTable`] or a categorical [`ClipPool`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use speakophone_spec::{ClipHook, ClipTransform, ConditioningParams, VoiceConfig};
use tracing::{debug, info, warn};

use crate::buffer::AudioBuffer;
use crate::conditioner::Conditioner;
use crate::error::{SpeechError, SpeechResult};
use crate::wav::read_wav;

/// File extension recognized as a recording, matched case-sensitively.
pub const AUDIO_EXTENSION: &str = "wav";

/// Clips keyed by name. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ClipTable {
    clips: HashMap<String, AudioBuffer>,
    sample_rate: u32,
}

impl ClipTable {
    /// Creates a table from already-prepared clips.
    pub fn new(clips: HashMap<String, AudioBuffer>, sample_rate: u32) -> Self {
        Self { clips, sample_rate }
    }

    /// Looks up a clip by its exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&AudioBuffer> {
        self.clips.get(name)
    }

    /// Returns true if a clip named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Clip names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clips.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(name, clip)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AudioBuffer)> {
        self.clips.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Returns true if the table holds no clips.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Sample rate shared by every clip.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// An ordered, non-empty pool of interchangeable clips.
///
/// Clips are kept in file-name order so that a seeded generator always picks
/// the same clip.
#[derive(Debug, Clone)]
pub struct ClipPool {
    clips: Vec<(String, AudioBuffer)>,
    sample_rate: u32,
}

impl ClipPool {
    /// Creates a pool, failing if `clips` is empty.
    pub fn new(
        clips: Vec<(String, AudioBuffer)>,
        sample_rate: u32,
        origin: impl Into<PathBuf>,
    ) -> SpeechResult<Self> {
        if clips.is_empty() {
            return Err(SpeechError::EmptyPool {
                path: origin.into(),
            });
        }
        Ok(Self { clips, sample_rate })
    }

    /// Picks one clip uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &AudioBuffer {
        let index = rng.gen_range(0..self.clips.len());
        &self.clips[index].1
    }

    /// Clip names in pool order.
    pub fn names(&self) -> Vec<&str> {
        self.clips.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Always false; pools are never empty.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Sample rate shared by every clip.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Loader that turns directories of recordings into clip tables.
#[derive(Debug, Clone)]
pub struct SampleLibrary {
    sample_rate: u32,
    conditioner: Option<Conditioner>,
    hooks: Vec<ClipHook>,
}

impl SampleLibrary {
    /// A loader that keeps recordings as they are, only quantizing to 16 bits.
    pub fn raw(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            conditioner: None,
            hooks: Vec::new(),
        }
    }

    /// A loader that trims and low-pass filters every clip.
    ///
    /// # Errors
    /// Returns a config error if the filter cannot be designed for `sample_rate`.
    pub fn conditioned(params: ConditioningParams, sample_rate: u32) -> SpeechResult<Self> {
        Ok(Self {
            sample_rate,
            conditioner: Some(Conditioner::new(params, sample_rate)?),
            hooks: Vec::new(),
        })
    }

    /// The conditioned, hooked loader a voice's allophone clips need.
    pub fn for_voice(config: &VoiceConfig) -> SpeechResult<Self> {
        Ok(Self::conditioned(config.conditioning.clone(), config.sample_rate)?
            .with_hooks(config.hooks.clone()))
    }

    /// Adds post-processing hooks, run after conditioning.
    pub fn with_hooks(mut self, hooks: Vec<ClipHook>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sample rate every loaded file must declare.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Loads every recording in `directory` into a table keyed by file stem.
    ///
    /// # Errors
    /// Fails if the directory cannot be listed or any recording cannot be
    /// decoded or has the wrong sample rate.
    pub fn load(&self, directory: impl AsRef<Path>) -> SpeechResult<ClipTable> {
        let directory = directory.as_ref();
        let mut clips = HashMap::new();

        for path in audio_files(directory)? {
            let name = clip_name(&path);
            let clip = self.load_clip(&path, &name)?;
            if clips.insert(name.clone(), clip).is_some() {
                warn!(clip = %name, path = %path.display(), "duplicate clip name, keeping the later file");
            }
        }

        if clips.is_empty() {
            warn!(directory = %directory.display(), "no recordings found");
        }
        info!(count = clips.len(), directory = %directory.display(), "loaded clip table");
        Ok(ClipTable::new(clips, self.sample_rate))
    }

    /// Loads a table of number-word clips ("forty two.wav" → `"forty two"`).
    ///
    /// Identical to [`SampleLibrary::load`]; names that are not made of
    /// lowercase words are reported since they can never be looked up.
    pub fn load_numbers(&self, directory: impl AsRef<Path>) -> SpeechResult<ClipTable> {
        let table = self.load(directory)?;
        for name in table.names() {
            if !name.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
                warn!(clip = %name, "number clip name is not a lowercase number word");
            }
        }
        Ok(table)
    }

    /// Loads every recording in `directory` into a categorical pool.
    ///
    /// # Errors
    /// As for [`SampleLibrary::load`], and [`SpeechError::EmptyPool`] when
    /// the directory holds no recordings.
    pub fn load_pool(&self, directory: impl AsRef<Path>) -> SpeechResult<ClipPool> {
        let directory = directory.as_ref();
        let mut clips = Vec::new();
        for path in audio_files(directory)? {
            let name = clip_name(&path);
            let clip = self.load_clip(&path, &name)?;
            clips.push((name, clip));
        }
        info!(count = clips.len(), directory = %directory.display(), "loaded clip pool");
        ClipPool::new(clips, self.sample_rate, directory)
    }

    fn load_clip(&self, path: &Path, name: &str) -> SpeechResult<AudioBuffer> {
        let decoded = read_wav(path)?;
        debug!(
            clip = %name,
            samples = decoded.samples.len(),
            sample_rate = decoded.sample_rate,
            "loading clip"
        );
        if decoded.sample_rate != self.sample_rate {
            return Err(SpeechError::SampleRateMismatch {
                path: path.to_path_buf(),
                expected: self.sample_rate,
                found: decoded.sample_rate,
            });
        }

        let prepared = match &self.conditioner {
            Some(conditioner) => conditioner.condition(&decoded.samples),
            None => decoded.samples,
        };
        let mut samples = AudioBuffer::from_scaled(&prepared, self.sample_rate).into_samples();

        for hook in self.hooks.iter().filter(|hook| hook.matches(name)) {
            for transform in &hook.transforms {
                debug!(clip = %name, ?transform, "applying clip hook");
                samples = apply_transform(samples, transform);
            }
        }

        Ok(AudioBuffer::new(samples, self.sample_rate))
    }
}

/// Applies one post-processing transform to a clip's samples.
pub fn apply_transform(samples: Vec<i16>, transform: &ClipTransform) -> Vec<i16> {
    match *transform {
        ClipTransform::Repeat { times } => samples.repeat(times.max(1)),
        ClipTransform::AppendHead { samples: count } => {
            let count = count.min(samples.len());
            let mut out = samples;
            out.extend_from_within(..count);
            out
        }
    }
}

/// Lists recordings in `directory`, sorted by file name.
fn audio_files(directory: &Path) -> SpeechResult<Vec<PathBuf>> {
    let load_err = |source| SpeechError::Load {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(load_err)? {
        let path = entry.map_err(load_err)?.path();
        let is_audio = path
            .extension()
            .is_some_and(|ext| ext == AUDIO_EXTENSION);
        if is_audio && path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-audio entry");
        }
    }
    files.sort();
    Ok(files)
}

/// Derives a clip name from the (symlink-resolved) file stem.
fn clip_name(path: &Path) -> String {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .unwrap_or_default()
}
