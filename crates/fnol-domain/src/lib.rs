//! FNOL Domain Layer
//!
//! Core domain model for the FNOL (First Notice of Loss) intake pipeline.
//! Defines the closed canonical field set, field values, routing queues,
//! and the trait seams that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Canonical Field**: one of the fixed named data points the system
//!   always attempts to populate from a claim document
//! - **Field Value**: a sanitized text value, a monetary amount, or a
//!   structured contact record — never a placeholder or blank
//! - **Route**: the enumerated destination queue a claim is assigned to
//!
//! ## Architecture
//!
//! Pure domain logic only. Document parsing, routing rules, and the
//! reasoning collaborator live in other crates and depend on this one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod route;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use field::Field;
pub use route::Route;
pub use value::{ContactDetails, FieldMap, FieldValue};
