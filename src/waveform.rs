//! Analytic waveform sampling
//!
//! Each sampler evaluates one of the seven analytic shapes over a uniform
//! time grid covering the window `[a, b]`.
//!
//! **Grid construction**:
//! - `total_samples = ceil((b - a) / interval) + 1`
//! - `t_i = a + i * interval`
//!
//! The grid may overshoot `b` by up to one interval when `interval` does not
//! divide the window exactly; the pulse shapes compensate with a half-sample
//! tolerance on their support test so the last active sample is not dropped
//! to floating-point misalignment.
//!
//! **Quirks preserved from the reference behavior**:
//! - The triangle support test uses the full width parameter P as its
//!   half-width bound, not P/2 as the square sampler does.
//! - The sinc sampler only substitutes the limit value A at t = 0 when the
//!   phase is zero; with a nonzero phase the raw quotient is evaluated.
//! - The sign shape switches on the sample index, not on t, placing the
//!   discontinuity at the midpoint of the grid.

use std::f64::consts::PI;

use crate::error::PipelineError;
use crate::params::SignalParams;

/// A waveform sampled over a uniform time grid
///
/// `times` and `values` always have equal length. The buffers are owned by
/// one synthesis call and handed to the spectrum engine, never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
    /// Sample spacing T, carried along for spectrum scaling
    pub interval: f64,
}

/// Number of grid points covering `[a, b]` at spacing `interval`
pub fn total_samples(a: f64, b: f64, interval: f64) -> usize {
    ((b - a) / interval).ceil() as usize + 1
}

/// Build the uniform time grid, validating the window first
///
/// # Returns
/// * `Err(InvalidWindow)` if `b - a <= 0` (or NaN), before any allocation
fn sample_grid(a: f64, b: f64, interval: f64) -> Result<Vec<f64>, PipelineError> {
    if !(b - a > 0.0) {
        return Err(PipelineError::InvalidWindow { a, b });
    }
    assert!(interval > 0.0, "interval must be > 0.0");

    let total = total_samples(a, b, interval);
    Ok((0..total).map(|i| a + i as f64 * interval).collect())
}

fn sample_over_grid(
    params: &SignalParams,
    value_at: impl Fn(f64) -> f64,
) -> Result<SampledSignal, PipelineError> {
    let times = sample_grid(params.a, params.b, params.interval)?;
    let values = times.iter().map(|&t| value_at(t)).collect();
    Ok(SampledSignal {
        times,
        values,
        interval: params.interval,
    })
}

/// Rectangular pulse of width P centered at X
///
/// Value is A inside `|t - X| < P/2 + interval/2`, 0 outside. The extra
/// half-sample keeps the outermost active samples on the grid when P/2 does
/// not land exactly on a grid point.
pub fn sample_square(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let pulse = params.pulse();
    let bound = pulse.width / 2.0 + params.interval / 2.0;
    sample_over_grid(params, |t| {
        if (t - pulse.translation).abs() < bound {
            pulse.amplitude
        } else {
            0.0
        }
    })
}

/// Triangular pulse with width parameter P, centered at X
///
/// Value ramps linearly from A at the center to 0 at distance P. The support
/// test bounds `|t - X|` by the full P (plus the half-sample tolerance), so
/// the total base width is 2P.
pub fn sample_triangle(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let pulse = params.pulse();
    let bound = pulse.width + params.interval / 2.0;
    sample_over_grid(params, |t| {
        let dist = (t - pulse.translation).abs();
        if dist < bound {
            pulse.amplitude * (pulse.width - dist) / pulse.width
        } else {
            0.0
        }
    })
}

/// Cardinal sine `A * sin(f0*pi*t - phi) / (f0*pi*t - phi)`
///
/// At exactly t = 0 with zero phase the singularity is replaced by the limit
/// value A. With a nonzero phase the quotient is evaluated as written; the
/// argument is then `-phi`, which is finite but unprotected as phi nears 0.
pub fn sample_sinc(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let carrier = params.carrier();
    sample_over_grid(params, |t| {
        let d = carrier.frequency * PI * t - carrier.phase;
        if t == 0.0 && carrier.phase == 0.0 {
            carrier.amplitude
        } else {
            carrier.amplitude * d.sin() / d
        }
    })
}

/// Sine carrier `A * sin(2*pi*f0*t - phi)`
pub fn sample_sin(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let carrier = params.carrier();
    sample_over_grid(params, |t| {
        carrier.amplitude * (carrier.frequency * 2.0 * PI * t - carrier.phase).sin()
    })
}

/// Cosine carrier `A * cos(2*pi*f0*t - phi)`
pub fn sample_cos(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let carrier = params.carrier();
    sample_over_grid(params, |t| {
        carrier.amplitude * (carrier.frequency * 2.0 * PI * t - carrier.phase).cos()
    })
}

/// Exponential `A * e^t`; frequency and phase are unused
pub fn sample_exp(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let amplitude = params.amplitude;
    sample_over_grid(params, |t| amplitude * t.exp())
}

/// Discrete sign approximation over the sample index
///
/// Index 0 maps to 0, indices `1..=ceil(n/2)` to +1, the rest to -1.
/// Amplitude, frequency and phase are all ignored. The step sits at the
/// midpoint of the grid rather than at t = 0, which differs from sign(t)
/// whenever the window is not centered on zero.
pub fn sample_sign(params: &SignalParams) -> Result<SampledSignal, PipelineError> {
    let times = sample_grid(params.a, params.b, params.interval)?;
    let half = times.len().div_ceil(2);
    let values = (0..times.len())
        .map(|i| {
            if i == 0 {
                0.0
            } else if i <= half {
                1.0
            } else {
                -1.0
            }
        })
        .collect();
    Ok(SampledSignal {
        times,
        values,
        interval: params.interval,
    })
}
