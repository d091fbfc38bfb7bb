//! Spectrum engine: zero-padded FFT, DC centering, scaling, rounding
//!
//! Turns a sampled waveform into a flat table of spectrum rows.
//!
//! **Process**:
//! 1. Zero-pad the real samples to the next power of two
//! 2. Forward FFT (real input, so the spectrum is Hermitian-symmetric)
//! 3. Reindex bins so zero frequency sits at the middle of the table
//! 4. Scale by the sample interval to approximate the continuous-time
//!    Fourier integral
//! 5. Derive the physical frequency axis and round for presentation
//!
//! Rows in the zero-padding region carry NaN in the time-domain columns;
//! those bins exist only because of padding and have no original sample.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use tracing::debug;

use crate::waveform::SampledSignal;

/// One spectrum-table row, the unit of the output contract
///
/// On the wire the columns are named `Freq`, `re(FFT)`, `im(FFT)`,
/// `abs(FFT)`, `input` and `re(signal)` (see [`FftDataRow::COLUMNS`]);
/// downstream consumers key rows by `Freq`. Rounding precision is part of
/// the contract: 2 decimals for the frequency, 5 for everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FftDataRow {
    /// Centered frequency of this bin, rounded to 2 decimals
    pub freq: f64,
    /// Real part of the scaled spectrum, rounded to 5 decimals
    pub re_fft: f64,
    /// Imaginary part of the scaled spectrum, rounded to 5 decimals
    pub im_fft: f64,
    /// Magnitude `hypot(re, im)`, rounded to 5 decimals
    pub abs_fft: f64,
    /// Time value t_k of the original sample, NaN in the padding region
    pub input: f64,
    /// Time-domain sample value, NaN in the padding region
    pub re_signal: f64,
}

impl FftDataRow {
    /// Wire-contract column names, in table order
    pub const COLUMNS: [&'static str; 6] =
        ["Freq", "re(FFT)", "im(FFT)", "abs(FFT)", "input", "re(signal)"];
}

/// Round half away from zero at the given decimal scale
///
/// Non-finite values pass through untouched; NaN sentinels must survive
/// rounding on their way into the table.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Source bin for output index `k` after the zero-frequency-centering shift
fn shift_index(k: usize, size: usize) -> usize {
    (k + size / 2) % size
}

/// Transform a sampled waveform into centered, scaled, rounded spectrum rows
///
/// The output has `next_power_of_two(samples)` rows. Bin 0 holds the most
/// negative frequency `-1 / (2 * interval)`; the zero-frequency bin sits at
/// index `padded_size / 2`.
///
/// # Example
/// ```
/// use spectrogen::{waveform, SignalParams, SignalShape};
///
/// let params = SignalParams { shape: SignalShape::Square, ..SignalParams::default() };
/// let signal = waveform::sample_square(&params)?;
/// let rows = spectrogen::spectrum::transform(&signal);
/// assert_eq!(rows.len(), signal.values.len().next_power_of_two());
/// # Ok::<(), spectrogen::PipelineError>(())
/// ```
pub fn transform(signal: &SampledSignal) -> Vec<FftDataRow> {
    let total = signal.values.len();
    let padded = total.next_power_of_two();
    let interval = signal.interval;
    let center = padded / 2;

    // Real input with zero imaginary part; the forward FFT then yields the
    // full Hermitian-symmetric spectrum directly.
    let mut spectrum: Vec<Complex<f64>> = signal
        .values
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    spectrum.resize(padded, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(padded).process(&mut spectrum);

    debug!(
        total_samples = total,
        padded_size = padded,
        interval,
        "spectrum computed"
    );

    (0..padded)
        .map(|k| {
            let src = shift_index(k, padded);
            let re = spectrum[src].re * interval;
            let im = spectrum[src].im * interval;
            let freq = (k as f64 - center as f64) / (padded as f64 * interval);

            let (input, re_signal) = if k < total {
                (signal.times[k], signal.values[k])
            } else {
                (f64::NAN, f64::NAN)
            };

            FftDataRow {
                freq: round_to(freq, 2),
                re_fft: round_to(re, 5),
                im_fft: round_to(im, 5),
                abs_fft: round_to(re.hypot(im), 5),
                input: round_to(input, 5),
                re_signal: round_to(re_signal, 5),
            }
        })
        .collect()
}
