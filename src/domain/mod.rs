//! Vehicle domain models
//!
//! Static tables describing a single vehicle model. Nothing here is ever
//! mutated after startup.

mod vehicle;

pub use vehicle::{CargoEntry, Dataset, FeatureList, RatingEntry, SpecEntry, Trim};
