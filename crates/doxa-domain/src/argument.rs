//! Argument module - named premise-conclusion structures

/// Role of a member inside an argument's premise-conclusion structure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// A premise feeding the inference
    Premise,

    /// An intermediary conclusion that feeds the next inference stage
    IntermediaryConclusion,

    /// The argument's main conclusion
    MainConclusion,

    /// Any other role found in the input, kept verbatim
    Other(String),
}

impl Role {
    /// Parse a role from the input vocabulary (never fails; unknown roles
    /// are retained as `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "premise" => Role::Premise,
            "intermediary-conclusion" => Role::IntermediaryConclusion,
            "main-conclusion" => Role::MainConclusion,
            other => Role::Other(other.to_string()),
        }
    }

    /// Get the role as the input vocabulary string
    pub fn as_str(&self) -> &str {
        match self {
            Role::Premise => "premise",
            Role::IntermediaryConclusion => "intermediary-conclusion",
            Role::MainConclusion => "main-conclusion",
            Role::Other(s) => s,
        }
    }

    /// Whether this role is a conclusion (intermediary or main)
    pub fn is_conclusion(&self) -> bool {
        matches!(self, Role::IntermediaryConclusion | Role::MainConclusion)
    }
}

/// One role-tagged member of an argument's premise-conclusion structure
///
/// A conclusion carries either a stated `credence` (legacy explicit mode) or
/// an `inference` strength (computed mode), never a meaningful combination
/// of both.
#[derive(Debug, Clone, PartialEq)]
pub struct PcsMember {
    /// Role of this member
    pub role: Role,

    /// Title of the statement this member refers to
    pub title: String,

    /// Display text
    pub text: String,

    /// Stated credence in [0, 1]
    pub credence: Option<f64>,

    /// Inference strength in [0, 1]: confidence that the conclusion follows
    /// given the premises
    pub inference: Option<f64>,

    /// Authoring rationale accompanying the credence or inference
    pub reason: Option<String>,
}

impl PcsMember {
    /// Create a member with the given role and title and no numeric fields
    pub fn new(role: Role, title: impl Into<String>) -> Self {
        Self {
            role,
            title: title.into(),
            text: String::new(),
            credence: None,
            inference: None,
            reason: None,
        }
    }
}

/// A named argument: an ordered premise-conclusion structure
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Argument name (unique within the document)
    pub name: String,

    /// Ordered PCS members
    pub pcs: Vec<PcsMember>,

    /// Section id this argument is grouped under, if any
    pub section: Option<String>,
}

impl Argument {
    /// Create an argument with the given name and members
    pub fn new(name: impl Into<String>, pcs: Vec<PcsMember>) -> Self {
        Self {
            name: name.into(),
            pcs,
            section: None,
        }
    }

    /// The argument's main conclusion, if it has one
    pub fn main_conclusion(&self) -> Option<&PcsMember> {
        self.pcs.iter().find(|m| m.role == Role::MainConclusion)
    }

    /// Whether the PCS contains at least one premise and one conclusion
    pub fn has_inference_structure(&self) -> bool {
        self.pcs.iter().any(|m| m.role == Role::Premise)
            && self.pcs.iter().any(|m| m.role.is_conclusion())
    }
}
