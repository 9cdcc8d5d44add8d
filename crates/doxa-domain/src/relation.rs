//! Relation module - directed logical edges between statements

use std::fmt;

/// Kind of logical relation between two statements
///
/// Only `Entails`, `Contrary` and `Contradictory` carry numeric semantics.
/// The remaining kinds appear in input documents and are retained in the
/// graph (they count toward connectivity) but are ignored by the numeric
/// checks; `Undercut` is additionally resolved by the propagation engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Truth of the source forces truth (or higher confidence) of the target
    Entails,

    /// Both statements cannot simultaneously hold
    Contrary,

    /// Exactly one of the two statements holds
    Contradictory,

    /// The source attacks the inference of a target argument
    Undercut,

    /// Generic support edge (no strict numeric constraint)
    Support,

    /// Generic attack edge (no strict numeric constraint)
    Attack,

    /// Any other relation type found in the input, kept verbatim
    Other(String),
}

impl RelationKind {
    /// Parse a relation kind from the input vocabulary (never fails;
    /// unknown kinds are retained as `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "entails" => RelationKind::Entails,
            "contrary" => RelationKind::Contrary,
            "contradictory" => RelationKind::Contradictory,
            "undercut" => RelationKind::Undercut,
            "support" => RelationKind::Support,
            "attack" => RelationKind::Attack,
            other => RelationKind::Other(other.to_string()),
        }
    }

    /// Get the relation kind as the input vocabulary string
    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::Entails => "entails",
            RelationKind::Contrary => "contrary",
            RelationKind::Contradictory => "contradictory",
            RelationKind::Undercut => "undercut",
            RelationKind::Support => "support",
            RelationKind::Attack => "attack",
            RelationKind::Other(s) => s,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed logical edge `(from, to, kind)` between two statement titles
///
/// Relations are immutable once extracted and deduplicated by
/// `(from, to, kind)` across all source locations in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    /// Source statement title
    pub from: String,

    /// Target statement title (or argument name, for undercut edges)
    pub to: String,

    /// Kind of relation
    pub kind: RelationKind,
}

impl Relation {
    /// Create a new relation
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }
}
