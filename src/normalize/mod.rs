mod normalizer;

pub use normalizer::{normalize, Normalized, NormalizedRecord};
