//! Signal parameter records
//!
//! The wire-level record is flat: `frequency` and `phase` are overloaded and
//! change meaning with the waveform shape. For the pulse shapes (square,
//! triangle) `frequency` is the pulse width parameter P and `phase` is the
//! translation X; for the oscillating shapes (sin, cos, sinc) they are the
//! carrier frequency f0 and phase offset. Samplers never read the flat
//! fields directly; they go through [`SignalParams::pulse`] or
//! [`SignalParams::carrier`] so a pulse width cannot be mistaken for a
//! carrier frequency.

use core::fmt;
use core::str::FromStr;

use crate::error::PipelineError;

/// The seven supported waveform shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalShape {
    Square,
    Triangle,
    Sinc,
    Cos,
    Sin,
    Exp,
    Sign,
}

impl SignalShape {
    pub const ALL: [SignalShape; 7] = [
        SignalShape::Square,
        SignalShape::Triangle,
        SignalShape::Sinc,
        SignalShape::Cos,
        SignalShape::Sin,
        SignalShape::Exp,
        SignalShape::Sign,
    ];

    /// Wire name of the shape, as stored in submitted parameter records
    pub fn name(self) -> &'static str {
        match self {
            SignalShape::Square => "square",
            SignalShape::Triangle => "triangle",
            SignalShape::Sinc => "sinc",
            SignalShape::Cos => "cos",
            SignalShape::Sin => "sin",
            SignalShape::Exp => "exp",
            SignalShape::Sign => "sign",
        }
    }

    /// Human-readable name for display surfaces
    pub fn waveform_label(self) -> &'static str {
        match self {
            SignalShape::Square => "Square",
            SignalShape::Triangle => "Triangle",
            SignalShape::Sinc => "Sinc",
            SignalShape::Cos => "Cosine",
            SignalShape::Sin => "Sine",
            SignalShape::Exp => "exp",
            SignalShape::Sign => "sign",
        }
    }

    /// Label for the `frequency` field under this shape's overload
    pub fn frequency_label(self) -> &'static str {
        match self {
            SignalShape::Square => "Duration (P):",
            SignalShape::Triangle => "Duration (2P):",
            _ => "Frequency (f0):",
        }
    }

    /// Label for the `phase` field under this shape's overload
    pub fn phase_label(self) -> &'static str {
        match self {
            SignalShape::Square | SignalShape::Triangle => "Translate (X):",
            _ => "Phase (phi):",
        }
    }
}

impl fmt::Display for SignalShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalShape {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(SignalShape::Square),
            "triangle" => Ok(SignalShape::Triangle),
            "sinc" => Ok(SignalShape::Sinc),
            "cos" => Ok(SignalShape::Cos),
            "sin" => Ok(SignalShape::Sin),
            "exp" => Ok(SignalShape::Exp),
            "sign" => Ok(SignalShape::Sign),
            _ => Err(PipelineError::UnsupportedShape {
                shape: s.to_string(),
            }),
        }
    }
}

/// Flat parameter record driving one synthesis + transform call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Sampling window start (time units)
    pub a: f64,
    /// Sampling window end; must satisfy `b - a > 0`
    pub b: f64,
    /// Requested waveform shape
    pub shape: SignalShape,
    /// Amplitude scale factor A
    pub amplitude: f64,
    /// Carrier frequency f0, or pulse width P for square/triangle
    pub frequency: f64,
    /// Phase offset, or translation X for square/triangle
    pub phase: f64,
    /// Sample spacing T; must be > 0
    pub interval: f64,
    /// Display-only frequency-axis clip bound for the spectrum view
    pub freqrange: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            a: -20.0,
            b: 20.0,
            shape: SignalShape::Sinc,
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            interval: 0.01,
            freqrange: 4.0,
        }
    }
}

impl SignalParams {
    /// View the overloaded fields as pulse parameters (square, triangle)
    pub fn pulse(&self) -> PulseParams {
        PulseParams {
            amplitude: self.amplitude,
            width: self.frequency,
            translation: self.phase,
        }
    }

    /// View the overloaded fields as carrier parameters (sin, cos, sinc)
    pub fn carrier(&self) -> CarrierParams {
        CarrierParams {
            amplitude: self.amplitude,
            frequency: self.frequency,
            phase: self.phase,
        }
    }
}

/// Pulse-shape parameters: `frequency` reinterpreted as width, `phase` as translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseParams {
    pub amplitude: f64,
    pub width: f64,
    pub translation: f64,
}

/// Carrier parameters for the oscillating shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarrierParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

/// Suggested upper bound for `freqrange` given a sampling configuration
///
/// Uses the grid's resolvable half-bandwidth, snapped down to one decimal.
/// Display surfaces use this to cap their frequency-range slider.
pub fn dynamic_freq_max(a: f64, b: f64, interval: f64) -> f64 {
    let n = ((b - a) / interval).ceil();
    (10.0 * (n - (n / 2.0).round()) / (n * interval)).floor() / 10.0
}
