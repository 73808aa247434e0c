//! Static lookup tables: crop thresholds, regional biases, scheme catalog.

pub mod crops;
pub mod regions;
pub mod schemes;
