//! Doxa Engine
//!
//! The verification and inference engine for argument maps. Given the typed
//! entity set produced by the extractor, it runs:
//!
//! - numeric consistency checks against the logical semantics of each
//!   relation kind (entails / contrary / contradictory)
//! - symbolic expression evaluation per statement
//! - structural checks (entailment cycles, isolated top-level claims)
//! - authoring checks (value ranges, required rationales, stated thesis
//!   credences)
//! - premise-conclusion (PCS) credence inference, which mutates the
//!   statement map
//! - crux analysis and log-odds belief propagation over the mutated map
//!
//! All findings accumulate into one ordered list; the engine never stops at
//! the first error. The PCS-before-propagation ordering dependency is
//! enforced at the type level: crux analysis and propagation only accept the
//! [`InferredStatements`] handle that PCS inference produces.
//!
//! # Examples
//!
//! ```no_run
//! use doxa_engine::{EngineConfig, Verifier};
//!
//! let verifier = Verifier::new(EngineConfig::default());
//! // let report = verifier.run(argument_map);
//! // assert!(report.passed());
//! ```

#![warn(missing_docs)]

pub mod authoring;
pub mod config;
pub mod consistency;
pub mod crux;
pub mod expression;
mod graph;
pub mod pcs;
pub mod pipeline;
pub mod propagation;
mod violation;

pub use config::EngineConfig;
pub use graph::check_structure;
pub use pcs::{InferredStatements, PcsOutcome};
pub use pipeline::{VerificationReport, Verifier};
pub use propagation::{clamp_credence, log_odds};
pub use violation::Violation;
