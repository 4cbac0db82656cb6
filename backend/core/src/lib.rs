pub mod engine;
pub mod error;
pub mod estimate;
pub mod tasks;
pub mod types;

pub use engine::{classify, decide};
pub use error::LensBotError;
pub use estimate::{add_from_age, demand};
pub use tasks::{aggregate_weights, task_weight};
pub use types::{
    ClassificationInput, ClassificationResult, LensCategory, TaskWeight, WeightVector,
};
