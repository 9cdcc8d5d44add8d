//! Doxa Domain Layer
//!
//! This crate contains the core domain model for doxa: the typed entities an
//! argument map is made of once the untyped input document has been left
//! behind at the extraction boundary.
//!
//! ## Key Concepts
//!
//! - **Statement**: a claim identified by a unique title, with an optional
//!   credence (stated probability of truth)
//! - **Relation**: a directed logical edge between two statements
//!   (entails, contrary, contradictory, ...)
//! - **Argument**: a named premise-conclusion structure (PCS)
//! - **PropagationTarget**: the derived evidence bundle behind an implied
//!   bottom-line credence
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and business rules only
//! - Everything downstream (checkers, inference, rendering) operates on
//!   these types, never on raw JSON

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod map;
pub mod propagation;
pub mod relation;
pub mod statement;

// Re-exports for convenience
pub use argument::{Argument, PcsMember, Role};
pub use map::{ArgumentMap, Section};
pub use propagation::PropagationTarget;
pub use relation::{Relation, RelationKind};
pub use statement::{Statement, StatementMap};
