pub mod customer;
pub mod feature_vector;
pub mod prediction;

pub use customer::{CustomerInput, Gender, Geography};
pub use feature_vector::FeatureVector;
pub use prediction::{PredictionLabel, PredictionResult};
