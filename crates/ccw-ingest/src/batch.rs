//! Per-record load results.
//!
//! A bad record never costs the rest of its document: it is set aside as a
//! [`RejectedRecord`] and loading carries on with the next one.

use ccw_model::ClaimAggregate;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::repository::InMemoryRepository;

/// Claims read from one document, with the records that could not be read.
#[derive(Debug, Default)]
pub struct ClaimBatch {
    /// Decoded claims in document order.
    pub claims: Vec<ClaimAggregate>,
    /// Records left out, in document order.
    pub rejected: Vec<RejectedRecord>,
}

impl ClaimBatch {
    /// Records seen, accepted or not.
    pub fn records(&self) -> usize {
        self.claims.len() + self.rejected.len()
    }

    /// Index the claims. A claim repeating an earlier type and id joins the
    /// rejected records instead.
    pub fn into_repository(self) -> (InMemoryRepository, Vec<RejectedRecord>) {
        let mut repository = InMemoryRepository::new();
        let mut rejected = self.rejected;
        for claim in self.claims {
            let claim_type = claim.claim_type().to_string();
            let claim_id = claim.claim_id().to_string();
            if let Err(error) = repository.insert(claim) {
                warn!(%claim_type, %claim_id, "duplicate claim rejected");
                rejected.push(RejectedRecord {
                    claim_type: Some(claim_type),
                    claim_id: Some(claim_id),
                    error,
                });
            }
        }
        debug!(
            claims = repository.len(),
            rejected = rejected.len(),
            "indexed claim batch"
        );
        (repository, rejected)
    }
}

/// A source record that did not become a claim aggregate.
#[derive(Debug)]
pub struct RejectedRecord {
    /// `claimType` as written in the record, when readable.
    pub claim_type: Option<String>,
    /// `claimId` as written in the record, when readable.
    pub claim_id: Option<String>,
    pub error: IngestError,
}

impl RejectedRecord {
    /// Keeps whatever identity the raw record still offers.
    pub(crate) fn from_value(value: &Value, error: IngestError) -> Self {
        Self {
            claim_type: text_field(value, "claimType"),
            claim_id: text_field(value, "claimId"),
            error,
        }
    }

    pub(crate) fn unreadable(error: IngestError) -> Self {
        Self {
            claim_type: None,
            claim_id: None,
            error,
        }
    }
}

fn text_field(value: &Value, name: &str) -> Option<String> {
    value
        .get(name)?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;
    use crate::error::RecordLocation;

    fn parse_error() -> IngestError {
        IngestError::Parse {
            path: PathBuf::from("claims.jsonl"),
            location: Some(RecordLocation::Line(3)),
            source: serde_json::from_str::<Value>("{").unwrap_err(),
        }
    }

    #[test]
    fn identity_is_taken_from_the_raw_record() {
        let record = RejectedRecord::from_value(
            &json!({"claimType": "hospice", "claimId": " 42 "}),
            parse_error(),
        );
        assert_eq!(record.claim_type.as_deref(), Some("hospice"));
        assert_eq!(record.claim_id.as_deref(), Some("42"));
        assert!(record.error.to_string().contains("claims.jsonl line 3"));
    }

    #[test]
    fn blank_or_non_text_identity_is_absent() {
        let record =
            RejectedRecord::from_value(&json!({"claimType": 7, "claimId": "  "}), parse_error());
        assert_eq!(record.claim_type, None);
        assert_eq!(record.claim_id, None);
    }
}
