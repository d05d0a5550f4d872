//! Contracts between pipeline stages

mod dated;
mod feature_scaler;
mod observation_source;

pub use dated::Dated;
pub use feature_scaler::FeatureScaler;
pub use observation_source::ObservationSource;
