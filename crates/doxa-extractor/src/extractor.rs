//! Build the typed entity set from a raw document

use crate::error::ExtractorError;
use crate::raw::{RawArgument, RawDocument, RawRelation, RawStatement};
use doxa_domain::{
    Argument, ArgumentMap, PcsMember, Relation, RelationKind, Role, Section, Statement,
    StatementMap,
};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Parse the raw JSON export into its document shape
pub fn parse_document(raw: &str) -> Result<RawDocument, ExtractorError> {
    Ok(serde_json::from_str(raw)?)
}

/// Extract the typed entity set from a parsed document
///
/// Exactly one [`Statement`] is produced per declared title (duplicate
/// titles collapse, last write wins). Relations are gathered from both
/// statement-level and argument-level declarations and deduplicated by
/// `(from, to, kind)`, preserving first-seen document order.
pub fn extract(doc: &RawDocument) -> ArgumentMap {
    let mut statements = StatementMap::new();
    let mut relations = Vec::new();
    let mut seen = HashSet::new();

    for (title, value) in &doc.statements {
        let raw = statement_entry(title, value);
        statements.insert(title.clone(), build_statement(title, &raw));
        for rel in &raw.relations {
            push_unique(&mut relations, &mut seen, rel);
        }
    }

    let mut arguments = Vec::new();
    for (name, value) in &doc.arguments {
        let raw = argument_entry(name, value);
        for rel in &raw.relations {
            push_unique(&mut relations, &mut seen, rel);
        }
        arguments.push(build_argument(name, &raw));
    }

    let sections = doc
        .sections
        .iter()
        .map(|s| Section {
            id: s.id.clone(),
            title: s.title.clone(),
        })
        .collect();

    debug!(
        statements = statements.len(),
        relations = relations.len(),
        arguments = arguments.len(),
        "extracted entity set"
    );

    ArgumentMap {
        statements,
        relations,
        arguments,
        sections,
    }
}

fn build_statement(title: &str, raw: &RawStatement) -> Statement {
    let data = raw.data.clone().unwrap_or_default();
    let mut statement = Statement::new(title);
    statement.credence = data.credence;
    statement.tag = data.tag;
    statement.expression = data.math;
    statement.reason = data.reason;
    statement.top_level = raw.is_used_as_top_level_statement;
    if let Some(member) = raw.members.first() {
        statement.text = member.text.clone();
    }
    statement
}

fn build_argument(name: &str, raw: &RawArgument) -> Argument {
    let pcs = raw
        .pcs
        .iter()
        .map(|m| {
            let data = m.data.clone().unwrap_or_default();
            PcsMember {
                role: Role::parse(&m.role),
                title: m.title.clone(),
                text: m.text.clone(),
                credence: data.credence,
                inference: data.inference,
                reason: data.reason,
            }
        })
        .collect();
    let mut argument = Argument::new(name, pcs);
    argument.section = raw.members.iter().find_map(|m| m.section.clone());
    argument
}

fn push_unique(relations: &mut Vec<Relation>, seen: &mut HashSet<Relation>, raw: &RawRelation) {
    let rel = Relation::new(
        raw.from.clone(),
        raw.to.clone(),
        RelationKind::parse(&raw.relation_type),
    );
    if seen.insert(rel.clone()) {
        relations.push(rel);
    }
}

fn statement_entry(title: &str, value: &Value) -> RawStatement {
    match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("statement [{}] has malformed shape, using defaults: {}", title, e);
            RawStatement::default()
        }
    }
}

fn argument_entry(name: &str, value: &Value) -> RawArgument {
    match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("argument <{}> has malformed shape, using defaults: {}", name, e);
            RawArgument::default()
        }
    }
}
