//! Code systems and static mapping tables for CCW claim fields.
//!
//! The URIs in [`systems`] are an interchange contract with downstream
//! consumers of the produced resources. Changing one is a breaking change.

#![deny(unsafe_code)]

pub mod categories;
pub mod claim_types;
pub mod codes;
pub mod systems;

pub use categories::{AdjudicationCategory, BenefitCategory, FinancialType};
pub use claim_types::{ClaimTypeProfile, FhirClaimType, profile};
pub use codes::{CodeRole, lookup};
