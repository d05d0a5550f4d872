//! Similarity kernels
//!
//! The fidelity kernel encodes each feature vector into a normalized
//! statevector with a [`ZzFeatureMap`] and scores two vectors by the squared
//! overlap of their encodings.

mod feature_map;
mod fidelity;

pub use feature_map::{Amplitude, Entanglement, ZzFeatureMap, MAX_FEATURE_DIMENSION};
pub use fidelity::FidelityKernel;
