//! Doxa Extractor
//!
//! The one module that touches the duck-typed input document. It parses the
//! authoring tool's JSON export and builds the typed entity set
//! ([`doxa_domain::ArgumentMap`]) that every downstream component operates
//! on. No validation happens here: invalid or missing optional fields simply
//! yield `None`/empty defaults, and malformed entries are skipped with a
//! warning rather than aborting the run.

mod error;
mod extractor;
mod raw;

pub use error::ExtractorError;
pub use extractor::{extract, parse_document};
pub use raw::{
    RawArgument, RawData, RawDocument, RawMember, RawPcsMember, RawRelation, RawSection,
    RawStatement,
};
