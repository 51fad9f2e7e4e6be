//! Claim lookup.

use std::collections::{BTreeMap, HashMap};

use ccw_model::{BeneficiaryId, ClaimAggregate, ClaimId, ClaimType};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Source of claim aggregates for the transformer.
///
/// Claim ids are unique within a claim type, so single-claim lookup is
/// keyed by both.
pub trait ClaimRepository {
    fn find_claim(&self, claim_type: ClaimType, claim_id: &ClaimId) -> Option<&ClaimAggregate>;

    /// Claims of one type for a beneficiary, in insertion order.
    fn find_by_beneficiary(
        &self,
        beneficiary_id: &BeneficiaryId,
        claim_type: ClaimType,
    ) -> Vec<&ClaimAggregate>;
}

/// Repository holding claims in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    claims: Vec<ClaimAggregate>,
    by_claim: HashMap<(ClaimType, ClaimId), usize>,
    by_beneficiary: BTreeMap<(BeneficiaryId, ClaimType), Vec<usize>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: impl IntoIterator<Item = ClaimAggregate>) -> Result<Self> {
        let mut repository = Self::new();
        for claim in claims {
            repository.insert(claim)?;
        }
        debug!(claims = repository.len(), "built in-memory claim repository");
        Ok(repository)
    }

    /// Add a claim. A second claim with the same type and id is rejected.
    pub fn insert(&mut self, claim: ClaimAggregate) -> Result<()> {
        let claim_type = claim.claim_type();
        let key = (claim_type, claim.claim_id().clone());
        if self.by_claim.contains_key(&key) {
            return Err(IngestError::DuplicateClaim {
                claim_type,
                claim_id: key.1,
            });
        }

        let index = self.claims.len();
        self.by_claim.insert(key, index);
        self.by_beneficiary
            .entry((claim.beneficiary_id().clone(), claim_type))
            .or_default()
            .push(index);
        self.claims.push(claim);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClaimAggregate> {
        self.claims.iter()
    }

    pub fn into_claims(self) -> Vec<ClaimAggregate> {
        self.claims
    }
}

impl ClaimRepository for InMemoryRepository {
    fn find_claim(&self, claim_type: ClaimType, claim_id: &ClaimId) -> Option<&ClaimAggregate> {
        self.by_claim
            .get(&(claim_type, claim_id.clone()))
            .map(|&index| &self.claims[index])
    }

    fn find_by_beneficiary(
        &self,
        beneficiary_id: &BeneficiaryId,
        claim_type: ClaimType,
    ) -> Vec<&ClaimAggregate> {
        self.by_beneficiary
            .get(&(beneficiary_id.clone(), claim_type))
            .map(|indices| indices.iter().map(|&index| &self.claims[index]).collect())
            .unwrap_or_default()
    }
}
