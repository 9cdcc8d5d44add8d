//! Typed verification findings

use thiserror::Error;

/// A verification finding
///
/// Violations are collected, never thrown: every check runs to completion
/// and the full list is reported in one pass. The `Display` form is the
/// category-tagged operator string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// An entailment where the target is less credible than the source
    #[error("ENTAILMENT: [{from}] ({from_credence}) entails [{to}] ({to_credence}), but {to_credence} < {from_credence}.")]
    Entailment {
        /// Source statement title
        from: String,
        /// Target statement title
        to: String,
        /// Source credence
        from_credence: f64,
        /// Target credence
        to_credence: f64,
    },

    /// A contrary pair whose credences sum above 1.0
    #[error("CONTRARY: [{from}] ({from_credence}) + [{to}] ({to_credence}) = {:.2} > 1.0.", .from_credence + .to_credence)]
    Contrary {
        /// Source statement title
        from: String,
        /// Target statement title
        to: String,
        /// Source credence
        from_credence: f64,
        /// Target credence
        to_credence: f64,
    },

    /// A contradictory pair whose credences do not sum to 1.0 within
    /// tolerance
    #[error("CONTRADICTION: [{from}] ({from_credence}) + [{to}] ({to_credence}) = {:.2} != 1.0.", .from_credence + .to_credence)]
    Contradiction {
        /// Source statement title
        from: String,
        /// Target statement title
        to: String,
        /// Source credence
        from_credence: f64,
        /// Target credence
        to_credence: f64,
    },

    /// A statement expression that evaluated to false
    #[error("MATH FAIL: [{title}]: '{expression}' is False")]
    MathFail {
        /// Statement title
        title: String,
        /// Expression source
        expression: String,
    },

    /// A statement expression that evaluated to a non-boolean value
    #[error("MATH EVAL: [{title}]: '{expression}' = {value} (not boolean)")]
    MathEval {
        /// Statement title
        title: String,
        /// Expression source
        expression: String,
        /// Evaluated value (numerics at four-decimal precision)
        value: String,
    },

    /// A statement expression that failed to evaluate
    #[error("MATH ERROR: [{title}]: '{expression}' raised {detail}")]
    MathError {
        /// Statement title
        title: String,
        /// Expression source
        expression: String,
        /// Evaluation error detail
        detail: String,
    },

    /// A cycle in the entailment subgraph (circular reasoning)
    #[error("ENTAILMENT CYCLE: {}", .path.join(" -> "))]
    EntailmentCycle {
        /// Cycle path, closing node repeated at the end
        path: Vec<String>,
    },

    /// A top-level statement with no incident relations
    #[error("ISOLATED: [{title}] is a top-level statement with no relations")]
    Isolated {
        /// Statement title
        title: String,
    },

    /// An inference strength above 1.0 (reasoning must not manufacture
    /// confidence)
    #[error("PCS: <{argument}> [{title}] inference={inference} > 1.0")]
    InferenceExceedsUnity {
        /// Argument name
        argument: String,
        /// Conclusion title
        title: String,
        /// Offending inference strength
        inference: f64,
    },

    /// A stated conclusion credence above the product of its premise
    /// credences
    #[error("PCS: <{argument}> [{title}] credence={credence} > product of premises ({product:.3})")]
    ConclusionExceedsPremises {
        /// Argument name
        argument: String,
        /// Conclusion title
        title: String,
        /// Stated conclusion credence
        credence: f64,
        /// Product of the credenced premises
        product: f64,
    },

    /// A premise carrying an inference strength
    #[error("PCS: <{argument}> premise [{title}] has {{inference}} -- only conclusions get inference")]
    PremiseWithInference {
        /// Argument name
        argument: String,
        /// Premise title
        title: String,
    },

    /// A credence or inference outside [0, 1]
    #[error("RANGE: {label} {field}={value} out of [0, 1]")]
    OutOfRange {
        /// Location label, e.g. `[title]` or `[title] in <argument>`
        label: String,
        /// Field name (`credence` or `inference`)
        field: String,
        /// Offending value
        value: f64,
    },

    /// A credence or inference without an accompanying reason
    #[error("MISSING REASON: {label} has {{{field}}} but no {{reason}}")]
    MissingReason {
        /// Location label
        label: String,
        /// Field name (`credence` or `inference`)
        field: String,
    },

    /// A stated credence on an entailment target (thesis credence should be
    /// computed, not authored)
    #[error("TOP-LEVEL: [{title}] has {{credence: {credence}}} -- thesis credence should be computed, not stated")]
    StatedThesisCredence {
        /// Statement title
        title: String,
        /// Authored credence
        credence: f64,
    },
}

impl Violation {
    /// The category keyword this finding is tagged with
    pub fn category(&self) -> &'static str {
        match self {
            Violation::Entailment { .. } => "ENTAILMENT",
            Violation::Contrary { .. } => "CONTRARY",
            Violation::Contradiction { .. } => "CONTRADICTION",
            Violation::MathFail { .. } => "MATH FAIL",
            Violation::MathEval { .. } => "MATH EVAL",
            Violation::MathError { .. } => "MATH ERROR",
            Violation::EntailmentCycle { .. } => "ENTAILMENT CYCLE",
            Violation::Isolated { .. } => "ISOLATED",
            Violation::InferenceExceedsUnity { .. }
            | Violation::ConclusionExceedsPremises { .. }
            | Violation::PremiseWithInference { .. } => "PCS",
            Violation::OutOfRange { .. } => "RANGE",
            Violation::MissingReason { .. } => "MISSING REASON",
            Violation::StatedThesisCredence { .. } => "TOP-LEVEL",
        }
    }
}
