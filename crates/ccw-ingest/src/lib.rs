//! Claim aggregate ingestion.
//!
//! Claims reach the transformer as fully populated [`ClaimAggregate`]
//! values. This crate supplies them from JSON documents and holds them in
//! a repository keyed the two ways callers look claims up: by claim id, and
//! by beneficiary id plus claim type.
//!
//! Loading is per record. A record that does not decode, or repeats a claim
//! already loaded, comes back as a [`RejectedRecord`] next to the claims
//! that did load.
//!
//! # Example
//!
//! ```ignore
//! use ccw_ingest::{ClaimRepository, load_claims};
//!
//! let batch = load_claims(Path::new("claims.jsonl"))?;
//! let (repository, rejected) = batch.into_repository();
//! let claim = repository.find_claim(ClaimType::Hospice, &claim_id);
//! ```
//!
//! [`ClaimAggregate`]: ccw_model::ClaimAggregate

mod batch;
mod error;
mod loader;
mod repository;

pub use batch::{ClaimBatch, RejectedRecord};
pub use error::{IngestError, RecordLocation, Result};
pub use loader::{ClaimFileFormat, load_claims, read_claims};
pub use repository::{ClaimRepository, InMemoryRepository};
