//! Statement module - the fundamental unit of an argument map

use std::collections::BTreeMap;

/// Map of statement title to statement.
///
/// Titles are the natural stable identifier of an argument map, so they are
/// the public key everywhere; graph algorithms translate to indices
/// internally. A `BTreeMap` keeps iteration deterministic across runs.
pub type StatementMap = BTreeMap<String, Statement>;

/// A statement - a claim identified by a unique title
///
/// Statements are created once per unique title during extraction and live
/// for the duration of one verification run. The `credence` field is the one
/// piece of shared mutable state in the system: the inference engine may
/// overwrite it for statements that are computed conclusions.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Unique title (map key, repeated here for convenience)
    pub title: String,

    /// Display text (first associated content block, may be empty)
    pub text: String,

    /// Stated probability of truth in [0, 1]; `None` means no stated
    /// confidence
    pub credence: Option<f64>,

    /// Optional classification label
    pub tag: Option<String>,

    /// Optional symbolic expression to be evaluated as a truth assertion
    pub expression: Option<String>,

    /// Authoring rationale accompanying the credence
    pub reason: Option<String>,

    /// Whether the input marked this as a top-level statement (a claim
    /// intended to stand on its own)
    pub top_level: bool,
}

impl Statement {
    /// Create an empty statement with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            credence: None,
            tag: None,
            expression: None,
            reason: None,
            top_level: false,
        }
    }

    /// Set the stated credence
    pub fn with_credence(mut self, credence: f64) -> Self {
        self.credence = Some(credence);
        self
    }
}
