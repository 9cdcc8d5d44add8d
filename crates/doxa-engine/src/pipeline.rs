//! Verification pipeline - the ordered run over one argument map

use crate::config::EngineConfig;
use crate::pcs::InferredStatements;
use crate::violation::Violation;
use crate::{authoring, consistency, crux, expression, graph, pcs, propagation};
use doxa_domain::{Argument, ArgumentMap, PropagationTarget, Relation, Section};
use std::collections::BTreeMap;
use tracing::info;

/// The verification engine
///
/// Sequences the checks in the required order: the independent checks run on
/// the extracted entity set, then PCS inference mutates the statement map,
/// then crux analysis and propagation consume the post-inference state.
pub struct Verifier {
    config: EngineConfig,
}

impl Verifier {
    /// Create a verifier with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create a verifier with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Run all checks over the extracted entity set
    ///
    /// The map is consumed: its statement map is rebound as the report's
    /// [`InferredStatements`] after PCS inference has written computed
    /// conclusion credences into it.
    pub fn run(&self, map: ArgumentMap) -> VerificationReport {
        let ArgumentMap {
            statements,
            relations,
            arguments,
            sections,
        } = map;

        let mut violations = Vec::new();
        violations.extend(consistency::check_credences(
            &statements,
            &relations,
            self.config.contradiction_tolerance,
        ));
        violations.extend(expression::check_expressions(&statements));
        violations.extend(graph::check_structure(&statements, &relations));
        if self.config.check_ranges {
            violations.extend(authoring::check_ranges(&statements, &arguments));
        }
        if self.config.require_reason {
            violations.extend(authoring::check_reasons(&statements, &arguments));
        }
        if self.config.check_thesis_credence {
            violations.extend(authoring::check_thesis_credences(&statements, &relations));
        }

        // Inference mutates the statement map; everything below reads the
        // post-inference state
        let (statements, pcs_outcome) = pcs::infer(&arguments, statements);
        violations.extend(pcs_outcome.violations);

        let crux_notes = crux::analyze(&statements, &relations);
        let targets = propagation::propagate(
            &statements,
            &relations,
            &arguments,
            self.config.resolve_undercuts,
        );
        let bottom_lines = propagation::format_bottom_lines(&targets);

        info!(
            violations = violations.len(),
            statements = statements.as_map().len(),
            relations = relations.len(),
            "verification pass complete"
        );

        VerificationReport {
            violations,
            pcs_notes: pcs_outcome.notes,
            crux_notes,
            bottom_lines,
            targets,
            statements,
            relations,
            arguments,
            sections,
        }
    }
}

/// The aggregated result of one verification run
///
/// The post-inference statement map, the relation list and the propagation
/// target map are the entire contract with any downstream presentation
/// layer. The violations list determines the run status; all notes are
/// informational.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// All findings, in check order
    pub violations: Vec<Violation>,

    /// PCS derivation notes
    pub pcs_notes: Vec<String>,

    /// Crux analysis notes
    pub crux_notes: Vec<String>,

    /// Bottom-line propagation notes
    pub bottom_lines: Vec<String>,

    /// Propagation targets keyed by statement title
    pub targets: BTreeMap<String, PropagationTarget>,

    /// The statement map after PCS inference
    pub statements: InferredStatements,

    /// The deduplicated relation list
    pub relations: Vec<Relation>,

    /// All arguments
    pub arguments: Vec<Argument>,

    /// Presentation sections
    pub sections: Vec<Section>,
}

impl VerificationReport {
    /// Whether the run found no violations
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations rendered as their category-tagged operator strings
    pub fn error_strings(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// One-line run summary
    pub fn summary(&self) -> String {
        let credenced = self
            .statements
            .as_map()
            .values()
            .filter(|s| s.credence.is_some())
            .count();
        format!(
            "{} statements, {} relations, {} with credences",
            self.statements.as_map().len(),
            self.relations.len(),
            credenced
        )
    }
}
