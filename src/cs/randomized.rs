pub mod index_source;
pub mod reservoir_sampling;

pub use index_source::IndexSource;
pub use reservoir_sampling::{
    reservoir_sampling, reservoir_sampling_with_source, Offer, ReservoirSampler,
};
