//! Crux analysis - downstream entailment impact

use crate::graph::TitleGraph;
use crate::pcs::InferredStatements;
use doxa_domain::{Relation, RelationKind};

/// Rank statements by how much of the map their credence reaches
///
/// On the `entails`-only subgraph, every credenced statement with at least
/// one reachable descendant is a crux: changing its credence potentially
/// changes that many downstream conclusions. Advisory output only, never an
/// error.
pub fn analyze(statements: &InferredStatements, relations: &[Relation]) -> Vec<String> {
    let entails = TitleGraph::from_edges(
        relations
            .iter()
            .filter(|r| r.kind == RelationKind::Entails)
            .map(|r| (r.from.as_str(), r.to.as_str())),
    );

    let mut notes = Vec::new();
    for (title, statement) in statements.as_map() {
        let Some(credence) = statement.credence else {
            continue;
        };
        if !entails.contains(title) {
            continue;
        }
        let downstream = entails.descendant_count(title);
        if downstream > 0 {
            notes.push(format!(
                "CRUX: [{}] (credence={:.2}) affects {} downstream statement(s).",
                title, credence, downstream
            ));
        }
    }
    notes
}
