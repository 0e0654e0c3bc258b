//! Digital Butterworth low-pass design and direct-form filtering.
//!
//! The design follows the classic analog-prototype route: place the `N`
//! Butterworth poles on the unit circle, pre-warp the cutoff, scale the
//! poles, then map them to the z-plane with the bilinear transform. All `N`
//! zeros land at z = -1. The resulting transfer function is expanded into
//! numerator/denominator polynomials and applied sample by sample.

use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use crate::error::{SpeechError, SpeechResult};

/// Transfer function coefficients `b` (numerator) and `a` (denominator).
///
/// `a[0]` is always 1 and both vectors have `order + 1` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

impl FilterCoefficients {
    /// Filter order.
    pub fn order(&self) -> usize {
        self.a.len().saturating_sub(1)
    }

    /// Magnitude of the frequency response at `freq_hz`.
    pub fn magnitude_at(&self, freq_hz: f64, sample_rate_hz: f64) -> f64 {
        let w = 2.0 * PI * freq_hz / sample_rate_hz;
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .enumerate()
                .fold(Complex::new(0.0, 0.0), |acc, (k, &c)| {
                    acc + Complex::from_polar(c, -w * k as f64)
                })
        };
        (eval(&self.b) / eval(&self.a)).norm()
    }
}

/// Designs an `order`-pole Butterworth low-pass filter.
///
/// # Arguments
/// * `cutoff_hz` - -3 dB frequency in Hz
/// * `sample_rate_hz` - Sample rate in Hz
/// * `order` - Number of poles, at least 1
///
/// # Errors
/// Returns [`SpeechError::Config`] if the order is zero, the sample rate is
/// not positive, or the cutoff is not strictly between 0 and Nyquist.
pub fn design_lowpass(
    cutoff_hz: f64,
    sample_rate_hz: f64,
    order: usize,
) -> SpeechResult<FilterCoefficients> {
    if order < 1 {
        return Err(SpeechError::config("filter order must be at least 1"));
    }
    if !(sample_rate_hz > 0.0) {
        return Err(SpeechError::config(format!(
            "sample rate must be positive, got {}",
            sample_rate_hz
        )));
    }
    let normalized = cutoff_hz / (sample_rate_hz / 2.0);
    if !(normalized > 0.0 && normalized < 1.0) {
        return Err(SpeechError::config(format!(
            "cutoff {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            cutoff_hz,
            sample_rate_hz / 2.0
        )));
    }

    // Work with a nominal rate of 2 so the normalized cutoff maps straight in.
    let fs = 2.0;
    let warped = 2.0 * fs * (PI * normalized / fs).tan();

    let n = order as i64;
    let analog_poles: Vec<Complex<f64>> = (0..order as i64)
        .map(|i| -n + 1 + 2 * i)
        .map(|m| -Complex::from_polar(1.0, PI * m as f64 / (2.0 * order as f64)) * warped)
        .collect();
    let analog_gain = warped.powi(order as i32);

    let fs2 = Complex::new(2.0 * fs, 0.0);
    let digital_poles: Vec<Complex<f64>> = analog_poles
        .iter()
        .map(|&p| (fs2 + p) / (fs2 - p))
        .collect();
    let denominator = analog_poles
        .iter()
        .fold(Complex::new(1.0, 0.0), |acc, &p| acc * (fs2 - p));
    let gain = analog_gain * (Complex::new(1.0, 0.0) / denominator).re;

    let zeros = vec![Complex::new(-1.0, 0.0); order];
    let b = poly(&zeros).iter().map(|c| c.re * gain).collect();
    let a = poly(&digital_poles).iter().map(|c| c.re).collect();

    Ok(FilterCoefficients { b, a })
}

/// Expands `prod(z - r)` into monic polynomial coefficients, highest power first.
fn poly(roots: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut coeffs = vec![Complex::new(1.0, 0.0)];
    for &root in roots {
        let mut next = vec![Complex::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * root;
        }
        coeffs = next;
    }
    coeffs
}

/// Runs `samples` through the filter (transposed direct form II).
///
/// Output length equals input length. The filter starts from rest.
pub fn apply_filter(coeffs: &FilterCoefficients, samples: &[f64]) -> Vec<f64> {
    let a0 = coeffs.a[0];
    let b: Vec<f64> = coeffs.b.iter().map(|&c| c / a0).collect();
    let a: Vec<f64> = coeffs.a.iter().map(|&c| c / a0).collect();
    let taps = b.len().max(a.len());
    let coeff = |v: &[f64], i: usize| v.get(i).copied().unwrap_or(0.0);

    let mut state = vec![0.0; taps.saturating_sub(1)];
    let mut out = Vec::with_capacity(samples.len());

    for &x in samples {
        let y = coeff(&b, 0) * x + state.first().copied().unwrap_or(0.0);
        let last = state.len();
        for i in 0..last {
            let carried = if i + 1 < last { state[i + 1] } else { 0.0 };
            state[i] = coeff(&b, i + 1) * x + carried - coeff(&a, i + 1) * y;
        }
        out.push(y);
    }

    out
}

/// Designs a Butterworth low-pass and applies it to `samples`.
///
/// The result is left in floating point; quantizing back to 16 bits is the
/// caller's job.
pub fn apply_lowpass(
    samples: &[f64],
    cutoff_hz: f64,
    sample_rate_hz: f64,
    order: usize,
) -> SpeechResult<Vec<f64>> {
    let coeffs = design_lowpass(cutoff_hz, sample_rate_hz, order)?;
    Ok(apply_filter(&coeffs, samples))
}
