//! Contract module containing trait definitions for kernel regression

mod regressor;
mod similarity_kernel;

pub use regressor::Regressor;
pub use similarity_kernel::SimilarityKernel;
