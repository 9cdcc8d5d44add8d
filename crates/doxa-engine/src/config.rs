//! Engine configuration

/// Default tolerance for the contradictory-relation check: credences of a
/// contradictory pair should sum to 1.0 +/- this
pub const CONTRADICTION_TOLERANCE: f64 = 0.05;

/// Configuration for a verification run
///
/// The numeric core checks (consistency, expressions, structure, PCS) always
/// run; the authoring checks can be toggled individually.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Tolerance for `|c(from) + c(to) - 1.0|` on contradictory relations
    pub contradiction_tolerance: f64,

    /// Report credence/inference values outside [0, 1]
    pub check_ranges: bool,

    /// Report credence/inference values without an accompanying reason
    pub require_reason: bool,

    /// Report stated credences on statements that are entailment targets
    /// (thesis credence should be computed, not authored)
    pub check_thesis_credence: bool,

    /// Resolve undercut relations onto the attacked argument's main
    /// conclusion before propagation
    pub resolve_undercuts: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            contradiction_tolerance: CONTRADICTION_TOLERANCE,
            check_ranges: true,
            require_reason: true,
            check_thesis_credence: true,
            resolve_undercuts: true,
        }
    }
}

impl EngineConfig {
    /// Create a permissive configuration: numeric core checks only
    pub fn permissive() -> Self {
        Self {
            contradiction_tolerance: CONTRADICTION_TOLERANCE,
            check_ranges: false,
            require_reason: false,
            check_thesis_credence: false,
            resolve_undercuts: true,
        }
    }

    /// Create a strict configuration: all checks on, tighter contradiction
    /// tolerance
    pub fn strict() -> Self {
        Self {
            contradiction_tolerance: 0.01,
            check_ranges: true,
            require_reason: true,
            check_thesis_credence: true,
            resolve_undercuts: true,
        }
    }
}
