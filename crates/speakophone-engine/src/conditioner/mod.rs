//! Sample conditioning: silence trimming followed by a Butterworth low-pass.
//!
//! Raw recordings are trimmed to their audible region and then low-pass
//! filtered so that clips butt together cleanly when concatenated.

mod butterworth;
mod trim;

pub use butterworth::{apply_filter, apply_lowpass, design_lowpass, FilterCoefficients};
pub use trim::trim_silence;

use speakophone_spec::ConditioningParams;

use crate::error::SpeechResult;

/// A conditioning pipeline bound to one sample rate.
///
/// The filter is designed once at construction and reused for every clip.
#[derive(Debug, Clone)]
pub struct Conditioner {
    params: ConditioningParams,
    sample_rate: u32,
    coeffs: FilterCoefficients,
}

impl Conditioner {
    /// Designs the filter for `sample_rate`.
    ///
    /// # Errors
    /// Returns a config error if the filter cannot be designed for this rate.
    pub fn new(params: ConditioningParams, sample_rate: u32) -> SpeechResult<Self> {
        let coeffs = design_lowpass(params.cutoff_hz, sample_rate as f64, params.order)?;
        Ok(Self {
            params,
            sample_rate,
            coeffs,
        })
    }

    /// Parameters this pipeline was built from.
    pub fn params(&self) -> &ConditioningParams {
        &self.params
    }

    /// Sample rate the filter was designed for.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Trims then filters `samples`, returning floating-point output.
    pub fn condition(&self, samples: &[f64]) -> Vec<f64> {
        let trimmed = trim_silence(samples, self.params.threshold);
        apply_filter(&self.coeffs, &trimmed)
    }
}
