//! Per-claim transformation context.

use std::fmt;

use ccw_model::{ClaimId, ClaimType, CodedConcept, FieldError, Result};
use ccw_standards::{CodeRole, lookup};
use serde::Serialize;
use tracing::warn;

use crate::options::{CodePolicy, TransformOptions};

/// A descriptive field that was dropped because its code is unmapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformWarning {
    pub field: String,
    pub code: String,
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmapped code {:?} in {} omitted", self.code, self.field)
    }
}

/// State of one transformation call: the claim being transformed, the
/// options in force and the warnings raised so far.
#[derive(Debug)]
pub struct TransformContext<'a> {
    pub claim_type: ClaimType,
    pub claim_id: &'a ClaimId,
    pub options: &'a TransformOptions,
    warnings: Vec<TransformWarning>,
}

impl<'a> TransformContext<'a> {
    pub fn new(
        claim_type: ClaimType,
        claim_id: &'a ClaimId,
        options: &'a TransformOptions,
    ) -> Self {
        Self {
            claim_type,
            claim_id,
            options,
            warnings: Vec::new(),
        }
    }

    /// Maps a raw code of `role`, applying the unmapped-code policy.
    ///
    /// Returns `Ok(None)` when a descriptive code is unmapped under
    /// [`CodePolicy::Lenient`]; the field is then omitted from the resource.
    pub fn code(&mut self, role: CodeRole, raw: &str) -> Result<Option<CodedConcept>> {
        match lookup(role, raw) {
            Ok(concept) => Ok(Some(concept)),
            Err(FieldError::UnmappedCode { field, code })
                if !role.is_identifier_bearing()
                    && self.options.code_policy == CodePolicy::Lenient =>
            {
                warn!(
                    claim_id = %self.claim_id,
                    claim_type = %self.claim_type,
                    field = %field,
                    "unmapped code, field omitted"
                );
                self.warnings.push(TransformWarning { field, code });
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    pub fn code_char(&mut self, role: CodeRole, raw: char) -> Result<Option<CodedConcept>> {
        let mut buffer = [0; 4];
        self.code(role, raw.encode_utf8(&mut buffer))
    }

    pub fn warnings(&self) -> &[TransformWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<TransformWarning> {
        self.warnings
    }
}
