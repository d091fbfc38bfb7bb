
pub mod error;
pub mod params;
pub mod pipeline;
pub mod spectrum;
pub mod store;
pub mod tracing_init;
pub mod waveform;

pub use error::PipelineError;
pub use params::{CarrierParams, PulseParams, SignalParams, SignalShape};
pub use pipeline::{compute, compute_and_store};
pub use spectrum::FftDataRow;
pub use store::{MemoryStore, ResultStore};
