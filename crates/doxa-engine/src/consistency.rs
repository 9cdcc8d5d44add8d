//! Credence consistency against relation semantics

use crate::violation::Violation;
use doxa_domain::{Relation, RelationKind, StatementMap};

/// Check every relation whose endpoints both carry a credence against the
/// logical semantics of its kind
///
/// Relations with either endpoint's credence unknown are silently skipped:
/// absence of stated belief is not a contradiction. Kinds without numeric
/// semantics are ignored.
pub fn check_credences(
    statements: &StatementMap,
    relations: &[Relation],
    tolerance: f64,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rel in relations {
        let (Some(from_credence), Some(to_credence)) =
            (credence_of(statements, &rel.from), credence_of(statements, &rel.to))
        else {
            continue;
        };

        match rel.kind {
            RelationKind::Entails if to_credence < from_credence => {
                violations.push(Violation::Entailment {
                    from: rel.from.clone(),
                    to: rel.to.clone(),
                    from_credence,
                    to_credence,
                });
            }
            RelationKind::Contrary if from_credence + to_credence > 1.0 => {
                violations.push(Violation::Contrary {
                    from: rel.from.clone(),
                    to: rel.to.clone(),
                    from_credence,
                    to_credence,
                });
            }
            RelationKind::Contradictory
                if (from_credence + to_credence - 1.0).abs() > tolerance =>
            {
                violations.push(Violation::Contradiction {
                    from: rel.from.clone(),
                    to: rel.to.clone(),
                    from_credence,
                    to_credence,
                });
            }
            _ => {}
        }
    }
    violations
}

fn credence_of(statements: &StatementMap, title: &str) -> Option<f64> {
    statements.get(title).and_then(|s| s.credence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxa_domain::Statement;

    fn map(entries: &[(&str, Option<f64>)]) -> StatementMap {
        entries
            .iter()
            .map(|(title, credence)| {
                let mut s = Statement::new(*title);
                s.credence = *credence;
                (title.to_string(), s)
            })
            .collect()
    }

    #[test]
    fn test_entailment_violation_cites_both_values() {
        let statements = map(&[("A", Some(0.9)), ("B", Some(0.8))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Entails)];

        let violations = check_credences(&statements, &relations, 0.05);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::Entailment {
                from: "A".into(),
                to: "B".into(),
                from_credence: 0.9,
                to_credence: 0.8,
            }
        );
    }

    #[test]
    fn test_equal_credences_satisfy_entailment() {
        let statements = map(&[("A", Some(0.9)), ("B", Some(0.9))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Entails)];
        assert!(check_credences(&statements, &relations, 0.05).is_empty());
    }

    #[test]
    fn test_contrary_sum_above_one() {
        let statements = map(&[("A", Some(0.6)), ("B", Some(0.6))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Contrary)];

        let violations = check_credences(&statements, &relations, 0.05);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].category(), "CONTRARY");
    }

    #[test]
    fn test_contrary_sum_at_one_passes() {
        let statements = map(&[("A", Some(0.4)), ("B", Some(0.6))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Contrary)];
        assert!(check_credences(&statements, &relations, 0.05).is_empty());
    }

    #[test]
    fn test_contradictory_within_tolerance_passes() {
        let statements = map(&[("A", Some(0.52)), ("B", Some(0.51))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Contradictory)];
        // Sum 1.03, within the default 0.05 tolerance
        assert!(check_credences(&statements, &relations, 0.05).is_empty());
    }

    #[test]
    fn test_contradictory_outside_tolerance_fails() {
        let statements = map(&[("A", Some(0.9)), ("B", Some(0.3))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Contradictory)];

        let violations = check_credences(&statements, &relations, 0.05);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].category(), "CONTRADICTION");
    }

    #[test]
    fn test_tolerance_is_injectable() {
        let statements = map(&[("A", Some(0.9)), ("B", Some(0.3))]);
        let relations = vec![Relation::new("A", "B", RelationKind::Contradictory)];
        // Sum 1.2: a violation at 0.05 tolerance but not at 0.25
        assert!(check_credences(&statements, &relations, 0.25).is_empty());
    }

    #[test]
    fn test_missing_credence_is_skipped() {
        let statements = map(&[("A", Some(0.9)), ("B", None)]);
        let relations = vec![Relation::new("A", "B", RelationKind::Entails)];
        assert!(check_credences(&statements, &relations, 0.05).is_empty());
    }

    #[test]
    fn test_non_numeric_kinds_are_ignored() {
        let statements = map(&[("A", Some(0.9)), ("B", Some(0.1))]);
        let relations = vec![
            Relation::new("A", "B", RelationKind::Support),
            Relation::new("A", "B", RelationKind::Other("related-to".into())),
        ];
        assert!(check_credences(&statements, &relations, 0.05).is_empty());
    }
}
