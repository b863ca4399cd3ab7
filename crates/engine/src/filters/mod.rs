//! Hard eligibility filters.
//!
//! Each filter removes universities entirely rather than lowering their
//! score. They are composed into a `FilterPipeline`.

pub mod academic;
pub mod budget;
pub mod country;
pub mod language;

// Re-export for convenience
pub use academic::AcademicFloorFilter;
pub use budget::BudgetFilter;
pub use country::CountryFilter;
pub use language::LanguageFilter;
