//! # Catalog Crate
//!
//! This crate holds the static university catalog the recommendation engine
//! scores against.
//!
//! ## Main Components
//!
//! - **types**: `University` records and the indexed `Catalog`
//! - **parser**: Decode catalog JSON files
//! - **index**: Build and validate a `Catalog`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/universities.json"))?;
//!
//! for uni in catalog.in_country("United Kingdom") {
//!     println!("{} ({})", uni.name, uni.city);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    Catalog,
    CampusLocation,
    CampusSize,
    LivingCost,
    ScoreRange,
    TuitionFee,
    University,
    UniversityId,
};
