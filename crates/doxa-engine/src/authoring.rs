//! Authoring checks over the extracted document
//!
//! These checks police the authored values themselves (ranges, rationales,
//! stated thesis credences) rather than the logic between them. They run on
//! the pre-inference entity set and are individually toggleable.

use crate::violation::Violation;
use doxa_domain::{Argument, PcsMember, Relation, RelationKind, StatementMap};
use std::collections::HashSet;

/// Report credence and inference values outside [0, 1]
///
/// Values are reported, never clamped or corrected.
pub fn check_ranges(statements: &StatementMap, arguments: &[Argument]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (title, statement) in statements {
        if let Some(credence) = statement.credence {
            if !(0.0..=1.0).contains(&credence) {
                violations.push(out_of_range(format!("[{}]", title), "credence", credence));
            }
        }
    }
    for arg in arguments {
        for member in &arg.pcs {
            let label = member_label(member, arg);
            if let Some(credence) = member.credence {
                if !(0.0..=1.0).contains(&credence) {
                    violations.push(out_of_range(label.clone(), "credence", credence));
                }
            }
            if let Some(inference) = member.inference {
                if !(0.0..=1.0).contains(&inference) {
                    violations.push(out_of_range(label, "inference", inference));
                }
            }
        }
    }
    violations
}

/// Report credence and inference values that lack an accompanying reason
pub fn check_reasons(statements: &StatementMap, arguments: &[Argument]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (title, statement) in statements {
        if statement.credence.is_some() && statement.reason.is_none() {
            violations.push(Violation::MissingReason {
                label: format!("[{}]", title),
                field: "credence".to_string(),
            });
        }
    }
    for arg in arguments {
        for member in &arg.pcs {
            let field = if member.credence.is_some() {
                "credence"
            } else if member.inference.is_some() {
                "inference"
            } else {
                continue;
            };
            if member.reason.is_none() {
                violations.push(Violation::MissingReason {
                    label: member_label(member, arg),
                    field: field.to_string(),
                });
            }
        }
    }
    violations
}

/// Report stated credences on entailment targets
///
/// A statement that something entails is a thesis: its credence should come
/// out of the propagation engine, not out of the author's head.
pub fn check_thesis_credences(
    statements: &StatementMap,
    relations: &[Relation],
) -> Vec<Violation> {
    let entail_targets: HashSet<&str> = relations
        .iter()
        .filter(|r| r.kind == RelationKind::Entails)
        .map(|r| r.to.as_str())
        .collect();

    let mut violations = Vec::new();
    for (title, statement) in statements {
        if !entail_targets.contains(title.as_str()) {
            continue;
        }
        if let Some(credence) = statement.credence {
            violations.push(Violation::StatedThesisCredence {
                title: title.clone(),
                credence,
            });
        }
    }
    violations
}

fn member_label(member: &PcsMember, arg: &Argument) -> String {
    if member.title.is_empty() {
        format!("[{}] in <{}>", arg.name, arg.name)
    } else {
        format!("[{}] in <{}>", member.title, arg.name)
    }
}

fn out_of_range(label: String, field: &str, value: f64) -> Violation {
    Violation::OutOfRange {
        label,
        field: field.to_string(),
        value,
    }
}
