use snafu::Snafu;

/// Failures raised by the synthesis + spectrum pipeline.
///
/// Numeric degeneracy (NaN rows in the zero-padding region, sinc evaluated
/// away from its limit) is carried through as data, never as an error.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum PipelineError {
    /// Sampling window is empty or reversed
    #[snafu(display("invalid sampling window: b - a must be > 0 (a={a}, b={b})"))]
    InvalidWindow { a: f64, b: f64 },

    /// Waveform shape name outside the supported set
    #[snafu(display("unsupported waveform shape: {shape}"))]
    UnsupportedShape { shape: String },
}
