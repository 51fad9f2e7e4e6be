//! Options controlling claim transformation.

use serde::{Deserialize, Serialize};

/// How unmapped values in descriptive code fields are treated.
///
/// Unmapped values in identifier-bearing fields always fail the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodePolicy {
    /// Omit the field, record a warning and keep the resource.
    #[default]
    Lenient,
    /// Fail the claim.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub code_policy: CodePolicy,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options under which every unmapped code fails the claim.
    pub fn strict() -> Self {
        Self {
            code_policy: CodePolicy::Strict,
        }
    }

    pub fn with_code_policy(mut self, code_policy: CodePolicy) -> Self {
        self.code_policy = code_policy;
        self
    }
}
