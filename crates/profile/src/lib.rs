//! # Profile Crate
//!
//! This crate models the student side of a match: the answers from the
//! profile form and the helpers that turn them into engine input.
//!
//! ## Components
//!
//! - **types**: `StudentProfile` and its preference enums
//! - **grades**: Convert percentage / CGPA grades to the 4.0 scale
//! - **update**: `ProfileUpdate`, one variant per editable field
//! - **draft**: `ProfileDraft`, the form state with required-field checks
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{ProfileDraft, ProfileUpdate};
//!
//! let profile = ProfileDraft::new()
//!     .set(ProfileUpdate::FieldOfStudy(Some("Economics".into())))
//!     .set(ProfileUpdate::parse("gpa", "3.7")?)
//!     .set(ProfileUpdate::parse("annualBudget", "45000")?)
//!     .submit()?;
//!
//! assert_eq!(profile.normalized_gpa(), 3.7);
//! ```

pub mod error;
pub mod types;
pub mod grades;
pub mod update;
pub mod draft;

// Re-export commonly used types
pub use error::{ProfileError, Result};
pub use types::{
    DegreeLevel,
    GradeSystem,
    Level,
    LocationPreference,
    SizePreference,
    StudentProfile,
};
pub use grades::normalize_gpa;
pub use update::ProfileUpdate;
pub use draft::ProfileDraft;
