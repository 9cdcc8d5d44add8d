//! The extracted entity set of one argument map document

use crate::{Argument, Relation, StatementMap};

/// A document section used to group arguments for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section id referenced by arguments
    pub id: String,

    /// Human-readable section title
    pub title: String,
}

/// The complete typed entity set extracted from one input document
///
/// This is what the verification engine consumes: downstream components
/// never see the raw nested input again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMap {
    /// All statements, keyed by title
    pub statements: StatementMap,

    /// Deduplicated relations in first-seen document order
    pub relations: Vec<Relation>,

    /// All arguments in document order
    pub arguments: Vec<Argument>,

    /// Document sections (presentation grouping only)
    pub sections: Vec<Section>,
}

impl ArgumentMap {
    /// Number of statements carrying a stated or computed credence
    pub fn credenced_count(&self) -> usize {
        self.statements
            .values()
            .filter(|s| s.credence.is_some())
            .count()
    }
}
