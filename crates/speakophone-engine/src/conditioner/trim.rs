//! Amplitude-threshold silence trimming.

use tracing::{debug, warn};

/// Trims leading and trailing "silence" from a clip.
///
/// Finds the first and last samples whose magnitude exceeds `threshold` and
/// returns `samples[first..last]`. The last loud sample itself is excluded,
/// so a clip with a single loud sample trims to nothing.
///
/// If no sample exceeds the threshold the clip is considered silent and a
/// single zero sample is returned instead. That case is logged but is not an
/// error.
pub fn trim_silence(samples: &[f64], threshold: f64) -> Vec<f64> {
    let loud = |s: &f64| s.abs() > threshold;

    let (first, last) = match (
        samples.iter().position(loud),
        samples.iter().rposition(loud),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            warn!(
                threshold,
                len = samples.len(),
                "every sample is below the trim threshold, returning an empty clip"
            );
            return vec![0.0];
        }
    };

    debug!(first, last, "trimming clip");
    samples[first..last].to_vec()
}
