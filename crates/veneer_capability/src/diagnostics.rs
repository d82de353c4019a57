//! Diagnostic reporting for capability validation
//!
//! Bundles both validator results for one feature matrix into a single
//! report that tests and troubleshooting tools can print or serialize.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::snapshot::FeatureMatrix;
use crate::validator::{self, ConsistencyRule};

/// Both validation results for one feature matrix
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// The matrix that was checked
    pub matrix: FeatureMatrix,
    /// Cross-field rules the matrix violates, in rule order
    pub violations: Vec<ConsistencyRule>,
    /// Whether the matrix matches its platform's canonical profile
    pub matches_platform_profile: bool,
}

impl ConsistencyReport {
    /// Run both validators over a matrix
    pub fn check(matrix: FeatureMatrix) -> Self {
        let violations = validator::violations(&matrix);
        let matches_platform_profile = validator::satisfies_platform_constraints(&matrix);
        if !violations.is_empty() {
            debug!(
                platform = matrix.platform.name(),
                count = violations.len(),
                "feature matrix failed consistency rules"
            );
        }
        Self {
            matrix,
            violations,
            matches_platform_profile,
        }
    }

    /// No violated rules and the platform profile matches
    pub fn is_healthy(&self) -> bool {
        self.violations.is_empty() && self.matches_platform_profile
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "feature matrix for {} ({}, {})",
            self.matrix.platform, self.matrix.device_type, self.matrix.device_context
        )?;
        if self.violations.is_empty() {
            writeln!(f, "  consistency: ok")?;
        } else {
            writeln!(f, "  consistency: {} rule(s) violated", self.violations.len())?;
            for rule in &self.violations {
                writeln!(f, "    - {rule}: {}", rule.describe())?;
            }
        }
        write!(
            f,
            "  platform profile: {}",
            if self.matches_platform_profile { "ok" } else { "mismatch" }
        )
    }
}
