pub mod config;
pub mod export;
pub mod sampler;
pub mod types;

pub use config::{SamplerConfig, SweepRange};
pub use sampler::{linspace, sample_curve};
pub use types::{Curve, ExcludedPoint, ReferenceMarker, Sample, SweepKind, SweptInput};
