//! Pipeline dispatcher
//!
//! Single entry point for callers: route a parameter record to the matching
//! sampler, feed the sampled waveform through the spectrum engine, return
//! the row table. One invocation is pure and self-contained; concurrent
//! calls share nothing, so overlapping submissions can only race at the
//! store (last completed write wins).

use tracing::debug;

use crate::error::PipelineError;
use crate::params::{SignalParams, SignalShape};
use crate::spectrum::{self, FftDataRow};
use crate::store::ResultStore;
use crate::waveform;

/// Synthesize the requested waveform and compute its centered spectrum
///
/// Returns one row per padded-spectrum bin. Fails with `InvalidWindow`
/// before any computation when `b - a <= 0`.
///
/// # Example
/// ```
/// use spectrogen::{pipeline, SignalParams, SignalShape};
///
/// let params = SignalParams { shape: SignalShape::Cos, ..SignalParams::default() };
/// let rows = pipeline::compute(&params)?;
/// assert!(rows.len().is_power_of_two());
/// # Ok::<(), spectrogen::PipelineError>(())
/// ```
pub fn compute(params: &SignalParams) -> Result<Vec<FftDataRow>, PipelineError> {
    let sampled = match params.shape {
        SignalShape::Square => waveform::sample_square(params),
        SignalShape::Triangle => waveform::sample_triangle(params),
        SignalShape::Sinc => waveform::sample_sinc(params),
        SignalShape::Cos => waveform::sample_cos(params),
        SignalShape::Sin => waveform::sample_sin(params),
        SignalShape::Exp => waveform::sample_exp(params),
        SignalShape::Sign => waveform::sample_sign(params),
    }?;

    debug!(
        shape = %params.shape,
        samples = sampled.values.len(),
        "waveform sampled"
    );

    Ok(spectrum::transform(&sampled))
}

/// Compute and hand the rows to the persistence collaborator
///
/// The store is only touched after a successful computation; a failed call
/// leaves previously stored rows intact. Returns the number of rows stored.
pub fn compute_and_store(
    params: &SignalParams,
    store: &mut dyn ResultStore,
) -> Result<usize, PipelineError> {
    let rows = compute(params)?;
    let count = rows.len();
    store.clear_and_store(rows);
    Ok(count)
}
