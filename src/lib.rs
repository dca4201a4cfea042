pub mod cs;
pub mod error;

pub use cs::randomized;
pub use cs::randomized::{
    reservoir_sampling, reservoir_sampling_with_source, IndexSource, Offer, ReservoirSampler,
};
pub use error::{Error, Result};
