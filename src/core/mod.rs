pub mod elements;
pub mod engine;
pub mod houses;
pub mod narrative;
pub mod normalizer;
pub mod placement;
pub mod seed;

pub use crate::domain::model::{BirthForm, ChartInsights, NormalizedInput, Placements};
pub use crate::domain::ports::{ContentProvider, ReadingOptions};
pub use crate::utils::error::Result;
