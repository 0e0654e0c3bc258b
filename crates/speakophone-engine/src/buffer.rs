//! Mono 16-bit audio buffers.

/// An immutable run of mono 16-bit samples at a known sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Wraps existing samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates a buffer with no samples.
    pub fn empty(sample_rate: u32) -> Self {
        Self::new(Vec::new(), sample_rate)
    }

    /// Creates `len` samples of digital silence.
    pub fn silence(len: usize, sample_rate: u32) -> Self {
        Self::new(vec![0; len], sample_rate)
    }

    /// Quantizes floating-point samples already scaled to the 16-bit range.
    ///
    /// Values are truncated toward zero; out-of-range values saturate.
    pub fn from_scaled(samples: &[f64], sample_rate: u32) -> Self {
        Self::new(samples.iter().map(|&s| s as i16).collect(), sample_rate)
    }

    /// Concatenates `parts` in order.
    pub fn concat<'a, I>(parts: I, sample_rate: u32) -> Self
    where
        I: IntoIterator<Item = &'a AudioBuffer>,
    {
        let mut samples = Vec::new();
        for part in parts {
            samples.extend_from_slice(&part.samples);
        }
        Self::new(samples, sample_rate)
    }

    /// Sample data.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Samples widened to `f64`, still in the 16-bit range.
    pub fn to_scaled(&self) -> Vec<f64> {
        self.samples.iter().map(|&s| s as f64).collect()
    }
}
