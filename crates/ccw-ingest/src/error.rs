//! Error types for claim ingestion.

use std::fmt;
use std::path::PathBuf;

use ccw_model::{ClaimId, ClaimType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("claim file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document, line or array element is not a valid claim aggregate.
    #[error("invalid claim in {path}{}: {source}", location_suffix(*.location))]
    Parse {
        path: PathBuf,
        location: Option<RecordLocation>,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {claim_type} claim {claim_id}")]
    DuplicateClaim {
        claim_type: ClaimType,
        claim_id: ClaimId,
    },
}

/// Where a record sits in its document. Both positions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLocation {
    Line(usize),
    Element(usize),
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => write!(f, "line {line}"),
            Self::Element(index) => write!(f, "element {index}"),
        }
    }
}

fn location_suffix(location: Option<RecordLocation>) -> String {
    location
        .map(|location| format!(" {location}"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, IngestError>;
