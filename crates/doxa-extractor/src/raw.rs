//! Raw document shapes as exported by the authoring tool
//!
//! Every field is optional-with-default: the export format carries far more
//! than the verifier consumes, and absence of a field is "no assertion",
//! never an error. Unknown fields are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level shape of the JSON export
///
/// `statements` and `arguments` stay as ordered JSON maps here; their
/// entries are parsed individually (and tolerantly) during extraction so one
/// malformed entry cannot take the whole document down.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    /// Statement title -> statement entity
    pub statements: Map<String, Value>,

    /// Argument name -> argument entity
    pub arguments: Map<String, Value>,

    /// Presentation sections
    pub sections: Vec<RawSection>,
}

/// One statement entity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStatement {
    /// Authored data block (credence, tag, math, reason)
    pub data: Option<RawData>,

    /// Content blocks; the first one provides the display text
    pub members: Vec<RawMember>,

    /// Statement-level relation declarations
    pub relations: Vec<RawRelation>,

    /// Whether the statement is used as a top-level claim
    #[serde(rename = "isUsedAsTopLevelStatement")]
    pub is_used_as_top_level_statement: bool,
}

/// The authored data block attached to statements and PCS members
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawData {
    /// Stated credence
    pub credence: Option<f64>,

    /// Inference strength (conclusions only)
    pub inference: Option<f64>,

    /// Classification label
    pub tag: Option<String>,

    /// Symbolic expression source
    pub math: Option<String>,

    /// Authoring rationale
    pub reason: Option<String>,
}

/// A content block of a statement or argument
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMember {
    /// Display text
    pub text: String,

    /// Section id (argument members only)
    pub section: Option<String>,
}

/// A relation declaration
#[derive(Debug, Clone, Deserialize)]
pub struct RawRelation {
    /// Source statement title
    pub from: String,

    /// Target statement title (or argument name for undercuts)
    pub to: String,

    /// Relation type from the input vocabulary
    #[serde(rename = "relationType")]
    pub relation_type: String,
}

/// One argument entity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArgument {
    /// Ordered premise-conclusion structure
    pub pcs: Vec<RawPcsMember>,

    /// Argument-level relation declarations
    pub relations: Vec<RawRelation>,

    /// Content blocks (carry the section grouping)
    pub members: Vec<RawMember>,
}

/// One role-tagged member of an argument's PCS
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPcsMember {
    /// Role from the input vocabulary
    pub role: String,

    /// Referenced statement title
    pub title: String,

    /// Display text
    pub text: String,

    /// Authored data block
    pub data: Option<RawData>,
}

/// A presentation section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSection {
    /// Section id referenced by argument members
    pub id: String,

    /// Section title
    pub title: String,
}
