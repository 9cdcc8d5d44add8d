//! Premise-conclusion credence inference
//!
//! For each argument with a usable premise-conclusion structure, conclusion
//! credence is computed as `product(premise credences) * inference`. The
//! premises are treated as independent evidence whose joint reliability
//! bounds what any valid inference step can conclude; every number in the
//! chain is traceable to an author-stated value.

use crate::violation::Violation;
use doxa_domain::{Argument, Role, Statement, StatementMap};
use std::collections::HashSet;
use tracing::warn;

/// The statement map after inference has written computed conclusion
/// credences
///
/// Crux analysis and propagation only accept this handle, so they cannot run
/// on a pre-inference map: the PCS-before-propagation ordering is a
/// compile-time fact rather than a calling convention.
#[derive(Debug, Clone, PartialEq)]
pub struct InferredStatements(StatementMap);

impl InferredStatements {
    /// Borrow the underlying statement map
    pub fn as_map(&self) -> &StatementMap {
        &self.0
    }

    /// Look up a statement by title
    pub fn get(&self, title: &str) -> Option<&Statement> {
        self.0.get(title)
    }

    /// Consume the handle, returning the statement map
    pub fn into_inner(self) -> StatementMap {
        self.0
    }
}

/// Findings and derivation notes from one inference pass
#[derive(Debug, Clone, Default)]
pub struct PcsOutcome {
    /// PCS violations found during inference
    pub violations: Vec<Violation>,

    /// Human-readable derivation notes, one indented block per conclusion
    pub notes: Vec<String>,
}

/// Run premise-conclusion inference over all arguments, mutating the
/// statement map
///
/// The PCS is walked in order: premises accumulate into a stage pool,
/// conclusions consume it. An intermediary conclusion becomes the sole
/// premise of the next stage, so multi-step chains compound. Conclusions
/// with an author-stated credence (legacy explicit mode) are validated
/// against the premise product but never overwritten.
///
/// Re-running inference is not idempotent when conclusion titles alias
/// across arguments: the statement map write is last-write-wins.
pub fn infer(arguments: &[Argument], statements: StatementMap) -> (InferredStatements, PcsOutcome) {
    let mut statements = statements;
    let mut outcome = PcsOutcome::default();
    let mut computed: HashSet<String> = HashSet::new();

    for arg in arguments {
        if !arg.has_inference_structure() {
            continue;
        }

        // Stage pool: (title, credence) of premises feeding the next
        // conclusion
        let mut stage: Vec<(String, f64)> = Vec::new();

        for member in &arg.pcs {
            match &member.role {
                Role::Premise => {
                    if member.inference.is_some() {
                        outcome.violations.push(Violation::PremiseWithInference {
                            argument: arg.name.clone(),
                            title: member.title.clone(),
                        });
                    }
                    if let Some(credence) = member.credence {
                        stage.push((member.title.clone(), credence));
                    }
                }
                Role::IntermediaryConclusion | Role::MainConclusion => {
                    if stage.is_empty() {
                        continue;
                    }
                    let product: f64 = stage.iter().map(|(_, c)| c).product();
                    let premise_str = stage
                        .iter()
                        .map(|(_, c)| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" * ");

                    if let Some(inference) = member.inference {
                        let computed_credence = product * inference;
                        let rounded = (computed_credence * 10_000.0).round() / 10_000.0;

                        outcome.notes.push(format!("  <{}>: [{}]", arg.name, member.title));
                        outcome
                            .notes
                            .push(format!("    premises: {} = {:.3}", premise_str, product));
                        outcome.notes.push(format!("    inference: {}", inference));
                        outcome.notes.push(format!(
                            "    computed credence: {:.3} * {} = {:.2}",
                            product, inference, computed_credence
                        ));

                        if let Some(statement) = statements.get_mut(&member.title) {
                            if !computed.insert(member.title.clone()) {
                                warn!(
                                    "conclusion [{}] recomputed by <{}>; last write wins",
                                    member.title, arg.name
                                );
                            }
                            statement.credence = Some(rounded);
                        }
                        if inference > 1.0 {
                            outcome.violations.push(Violation::InferenceExceedsUnity {
                                argument: arg.name.clone(),
                                title: member.title.clone(),
                                inference,
                            });
                        }
                        if member.role == Role::IntermediaryConclusion {
                            stage = vec![(member.title.clone(), rounded)];
                        }
                    } else if let Some(credence) = member.credence {
                        if credence > product {
                            outcome.violations.push(Violation::ConclusionExceedsPremises {
                                argument: arg.name.clone(),
                                title: member.title.clone(),
                                credence,
                                product,
                            });
                        }
                        let implied = credence / product;
                        outcome.notes.push(format!(
                            "  <{}>: [{}] credence={}",
                            arg.name, member.title, credence
                        ));
                        outcome
                            .notes
                            .push(format!("    premises: {} = {:.3}", premise_str, product));
                        outcome.notes.push(format!(
                            "    implied inference: {} / {:.3} = {:.2}",
                            credence, product, implied
                        ));
                    }
                    // Neither inference nor credence: skipped silently
                }
                Role::Other(_) => {}
            }
        }
    }

    (InferredStatements(statements), outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxa_domain::PcsMember;

    fn statement_map(titles: &[&str]) -> StatementMap {
        titles
            .iter()
            .map(|t| (t.to_string(), Statement::new(*t)))
            .collect()
    }

    fn premise(title: &str, credence: f64) -> PcsMember {
        let mut m = PcsMember::new(Role::Premise, title);
        m.credence = Some(credence);
        m
    }

    fn conclusion(title: &str, inference: f64) -> PcsMember {
        let mut m = PcsMember::new(Role::MainConclusion, title);
        m.inference = Some(inference);
        m
    }

    #[test]
    fn test_computed_credence_overwrites_conclusion() {
        let statements = statement_map(&["P1", "P2", "C"]);
        let arg = Argument::new(
            "arg",
            vec![premise("P1", 0.9), premise("P2", 0.8), conclusion("C", 0.7)],
        );

        let (inferred, outcome) = infer(&[arg], statements);
        // 0.9 * 0.8 = 0.72; 0.72 * 0.7 = 0.504, stored at 4 decimals
        assert_eq!(inferred.get("C").unwrap().credence, Some(0.504));
        assert!(outcome.violations.is_empty());
        assert!(outcome
            .notes
            .iter()
            .any(|n| n.contains("premises: 0.9 * 0.8 = 0.720")));
    }

    #[test]
    fn test_computed_credence_discards_prior_value() {
        let mut statements = statement_map(&["P", "C"]);
        statements.get_mut("C").unwrap().credence = Some(0.99);
        let arg = Argument::new("arg", vec![premise("P", 0.5), conclusion("C", 0.5)]);

        let (inferred, _) = infer(&[arg], statements);
        assert_eq!(inferred.get("C").unwrap().credence, Some(0.25));
    }

    #[test]
    fn test_inference_above_one_is_a_violation() {
        let statements = statement_map(&["P", "C"]);
        let arg = Argument::new("arg", vec![premise("P", 0.9), conclusion("C", 1.2)]);

        let (_, outcome) = infer(&[arg], statements);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(
            outcome.violations[0].to_string(),
            "PCS: <arg> [C] inference=1.2 > 1.0"
        );
    }

    #[test]
    fn test_legacy_credence_validated_not_overwritten() {
        let statements = statement_map(&["P1", "P2", "C"]);
        let mut legacy = PcsMember::new(Role::MainConclusion, "C");
        legacy.credence = Some(0.5);
        let arg = Argument::new("arg", vec![premise("P1", 0.9), premise("P2", 0.8), legacy]);

        let (inferred, outcome) = infer(&[arg], statements);
        // Not written back: the statement keeps no credence
        assert_eq!(inferred.get("C").unwrap().credence, None);
        assert!(outcome.violations.is_empty());
        assert!(outcome
            .notes
            .iter()
            .any(|n| n.contains("implied inference: 0.5 / 0.720 = 0.69")));
    }

    #[test]
    fn test_legacy_credence_above_premise_product() {
        let statements = statement_map(&["P", "C"]);
        let mut legacy = PcsMember::new(Role::MainConclusion, "C");
        legacy.credence = Some(0.8);
        let arg = Argument::new("arg", vec![premise("P", 0.6), legacy]);

        let (_, outcome) = infer(&[arg], statements);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(
            outcome.violations[0].to_string(),
            "PCS: <arg> [C] credence=0.8 > product of premises (0.600)"
        );
    }

    #[test]
    fn test_uncredenced_premises_are_excluded_from_product() {
        let statements = statement_map(&["P1", "P2", "C"]);
        let bare = PcsMember::new(Role::Premise, "P2");
        let arg = Argument::new("arg", vec![premise("P1", 0.9), bare, conclusion("C", 1.0)]);

        let (inferred, _) = infer(&[arg], statements);
        // P2 contributes neither 1.0 nor 0: the product is just P1
        assert_eq!(inferred.get("C").unwrap().credence, Some(0.9));
    }

    #[test]
    fn test_argument_without_credenced_premises_is_skipped() {
        let statements = statement_map(&["P", "C"]);
        let bare = PcsMember::new(Role::Premise, "P");
        let arg = Argument::new("arg", vec![bare, conclusion("C", 0.7)]);

        let (inferred, outcome) = infer(&[arg], statements);
        assert_eq!(inferred.get("C").unwrap().credence, None);
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_conclusion_without_numbers_is_skipped_silently() {
        let statements = statement_map(&["P", "C"]);
        let bare_conclusion = PcsMember::new(Role::MainConclusion, "C");
        let arg = Argument::new("arg", vec![premise("P", 0.9), bare_conclusion]);

        let (inferred, outcome) = infer(&[arg], statements);
        assert_eq!(inferred.get("C").unwrap().credence, None);
        assert!(outcome.violations.is_empty());
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_premise_with_inference_is_a_violation() {
        let statements = statement_map(&["P", "C"]);
        let mut bad = premise("P", 0.9);
        bad.inference = Some(0.5);
        let arg = Argument::new("arg", vec![bad, conclusion("C", 0.7)]);

        let (_, outcome) = infer(&[arg], statements);
        assert!(outcome.violations.iter().any(|v| v.to_string()
            == "PCS: <arg> premise [P] has {inference} -- only conclusions get inference"));
    }

    #[test]
    fn test_intermediary_conclusion_feeds_next_stage() {
        let statements = statement_map(&["P1", "M", "P2", "C"]);
        let mut intermediary = PcsMember::new(Role::IntermediaryConclusion, "M");
        intermediary.inference = Some(0.5);
        let arg = Argument::new(
            "arg",
            vec![
                premise("P1", 0.8),
                intermediary,
                premise("P2", 0.5),
                conclusion("C", 1.0),
            ],
        );

        let (inferred, _) = infer(&[arg], statements);
        // Stage 1: 0.8 * 0.5 = 0.4 written to M
        assert_eq!(inferred.get("M").unwrap().credence, Some(0.4));
        // Stage 2: M (0.4) * P2 (0.5) * 1.0 = 0.2
        assert_eq!(inferred.get("C").unwrap().credence, Some(0.2));
    }

    #[test]
    fn test_title_collision_is_last_write_wins() {
        let statements = statement_map(&["P1", "P2", "C"]);
        let first = Argument::new("first", vec![premise("P1", 0.8), conclusion("C", 1.0)]);
        let second = Argument::new("second", vec![premise("P2", 0.5), conclusion("C", 1.0)]);

        let (inferred, _) = infer(&[first, second], statements);
        assert_eq!(inferred.get("C").unwrap().credence, Some(0.5));
    }
}
