//! Log-odds belief propagation
//!
//! Combines all incoming supporting and opposing evidence for a statement
//! into one implied bottom-line credence: supporting `entails` edges add
//! their source's log-odds, opposing `contrary` edges subtract them, and the
//! sum converts back to a probability through the logistic sigmoid. The
//! prior is uniform (0 log-odds = 50%).

use crate::pcs::InferredStatements;
use doxa_domain::{Argument, PropagationTarget, Relation, RelationKind};
use std::collections::BTreeMap;

/// Lower clamp bound for source credences entering log-odds math
pub const CREDENCE_FLOOR: f64 = 0.001;

/// Upper clamp bound for source credences entering log-odds math
pub const CREDENCE_CEIL: f64 = 0.999;

/// Clamp a credence away from the probability extremes
///
/// Keeps `ln(c / (1 - c))` finite for sources stated at exactly 0 or 1.
pub fn clamp_credence(c: f64) -> f64 {
    c.clamp(CREDENCE_FLOOR, CREDENCE_CEIL)
}

/// Log-odds (logit) of a credence, clamped
pub fn log_odds(c: f64) -> f64 {
    let c = clamp_credence(c);
    (c / (1.0 - c)).ln()
}

/// Compute the implied credence for every statement targeted by at least one
/// credenced `entails` or `contrary` relation
///
/// Undercut relations are first resolved onto the attacked argument's main
/// conclusion as `contrary` evidence (unresolvable undercuts pass through
/// and are then ignored). The result is a pure function of the post-PCS
/// statement map and the relation list: recomputing it is idempotent
/// bit-for-bit. Every implied value is strictly within (0, 1) by
/// construction of the clamp.
pub fn propagate(
    statements: &InferredStatements,
    relations: &[Relation],
    arguments: &[Argument],
    resolve_undercuts: bool,
) -> BTreeMap<String, PropagationTarget> {
    let resolved: Vec<Relation> = if resolve_undercuts {
        relations
            .iter()
            .map(|rel| resolve_undercut(rel, arguments))
            .collect()
    } else {
        relations.to_vec()
    };

    let mut targets: BTreeMap<String, PropagationTarget> = BTreeMap::new();
    for rel in &resolved {
        let Some(credence) = statements.get(&rel.from).and_then(|s| s.credence) else {
            continue;
        };
        match rel.kind {
            RelationKind::Entails => targets
                .entry(rel.to.clone())
                .or_default()
                .via_entail
                .push((rel.from.clone(), credence)),
            RelationKind::Contrary => targets
                .entry(rel.to.clone())
                .or_default()
                .via_contrary
                .push((rel.from.clone(), credence)),
            _ => {}
        }
    }

    for target in targets.values_mut() {
        let mut total = 0.0;
        for (_, credence) in &target.via_entail {
            total += log_odds(*credence);
        }
        for (_, credence) in &target.via_contrary {
            total -= log_odds(*credence);
        }
        target.log_odds = total;
        target.implied = 1.0 / (1.0 + (-total).exp());
    }
    targets
}

/// Resolve an undercut onto the attacked argument's main conclusion
fn resolve_undercut(rel: &Relation, arguments: &[Argument]) -> Relation {
    if rel.kind == RelationKind::Undercut {
        let conclusion = arguments
            .iter()
            .find(|a| a.name == rel.to)
            .and_then(|a| a.main_conclusion());
        if let Some(conclusion) = conclusion {
            return Relation::new(rel.from.clone(), conclusion.title.clone(), RelationKind::Contrary);
        }
    }
    rel.clone()
}

/// Format propagation results as indented bottom-line notes
pub fn format_bottom_lines(targets: &BTreeMap<String, PropagationTarget>) -> Vec<String> {
    let mut lines = Vec::new();
    for (title, target) in targets {
        lines.push(format!(
            "  [{}] implied credence: {:.2} ({:+.2} log-odds)",
            title, target.implied, target.log_odds
        ));
        for (name, credence) in &target.via_entail {
            lines.push(format!(
                "    + [{}] ({:.2}, {:+.2} log-odds)",
                name,
                credence,
                log_odds(*credence)
            ));
        }
        for (name, credence) in &target.via_contrary {
            lines.push(format!(
                "    - [{}] ({:.2}, {:+.2} log-odds)",
                name,
                credence,
                log_odds(*credence)
            ));
        }
    }
    lines
}
