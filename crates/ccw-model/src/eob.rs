//! `ExplanationOfBenefit`-shaped output resource tree.
//!
//! Field names follow the FHIR JSON element names so any serializer
//! reproduces the resource field for field. Lists serialize in insertion
//! order and empty lists and absent values are omitted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::coded::CodedConcept;
use crate::money::Money;

/// A single coding inside a [`CodeableConcept`].
pub type Coding = CodedConcept;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

impl CodeableConcept {
    pub fn of(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }

    pub fn first(&self) -> Option<&Coding> {
        self.coding.first()
    }

    pub fn contains(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|coding| coding.matches(system, code))
    }
}

impl From<Coding> for CodeableConcept {
    fn from(coding: Coding) -> Self {
        Self::of(coding)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub system: String,
    pub value: String,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

impl Reference {
    pub fn to(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            identifier: None,
        }
    }

    pub fn by_identifier(identifier: Identifier) -> Self {
        Self {
            reference: None,
            identifier: Some(identifier),
        }
    }
}

/// Temporal precision a period's bounds are rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemporalPrecision {
    #[default]
    Day,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(skip)]
    pub precision: TemporalPrecision,
}

impl Period {
    pub fn days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start,
            end,
            precision: TemporalPrecision::Day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Quantity {
    pub fn of(value: Decimal) -> Self {
        Self {
            value,
            system: None,
            code: None,
        }
    }
}

/// Typed extension payload; serialized as `valueCoding`, `valueMoney`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionValue {
    ValueCoding(Coding),
    ValueQuantity(Quantity),
    ValueMoney(Money),
    ValueIdentifier(Identifier),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub value: ExtensionValue,
}

impl Extension {
    pub fn coding(url: impl Into<String>, coding: Coding) -> Self {
        Self {
            url: url.into(),
            value: ExtensionValue::ValueCoding(coding),
        }
    }

    pub fn money(url: impl Into<String>, money: Money) -> Self {
        Self {
            url: url.into(),
            value: ExtensionValue::ValueMoney(money),
        }
    }

    pub fn quantity(url: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            url: url.into(),
            value: ExtensionValue::ValueQuantity(quantity),
        }
    }

    pub fn identifier(url: impl Into<String>, identifier: Identifier) -> Self {
        Self {
            url: url.into(),
            value: ExtensionValue::ValueIdentifier(identifier),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EobStatus {
    /// Claims coming out of CCW are final; no other status is produced.
    #[default]
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insurance {
    pub coverage: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingInformation {
    pub sequence: u32,
    pub category: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareTeam {
    pub sequence: u32,
    pub provider: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub sequence: u32,
    #[serde(rename = "diagnosisCodeableConcept")]
    pub diagnosis: CodeableConcept,
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Procedure {
    pub sequence: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "procedureCodeableConcept")]
    pub procedure: CodeableConcept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BenefitUsed {
    UsedUnsignedInt(u32),
    UsedMoney(Money),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Financial {
    #[serde(rename = "type")]
    pub kind: CodeableConcept,
    #[serde(flatten)]
    pub used: BenefitUsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitBalance {
    pub category: CodeableConcept,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub financial: Vec<Financial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjudication {
    pub category: CodeableConcept,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub state: String,
}

/// The revenue center of a line, with its supplemental codings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revenue {
    pub coding: Vec<Coding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub sequence: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub care_team_link_id: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Revenue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifier: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
    pub adjudication: Vec<Adjudication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl Item {
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            care_team_link_id: Vec::new(),
            revenue: None,
            service: None,
            modifier: Vec::new(),
            location_address: None,
            quantity: None,
            unit_price: None,
            net: None,
            adjudication: Vec::new(),
            extension: Vec::new(),
        }
    }
}

/// The output resource for one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefit {
    pub resource_type: &'static str,
    pub id: String,
    pub identifier: Vec<Identifier>,
    #[serde(rename = "type")]
    pub kind: CodeableConcept,
    pub status: EobStatus,
    pub patient: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub care_team: Vec<CareTeam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub information: Vec<SupportingInformation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnosis: Vec<Diagnosis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub procedure: Vec<Procedure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<Period>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub benefit_balance: Vec<BenefitBalance>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl ExplanationOfBenefit {
    pub const RESOURCE_TYPE: &'static str = "ExplanationOfBenefit";

    /// An empty active resource with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            resource_type: Self::RESOURCE_TYPE,
            id: id.into(),
            identifier: Vec::new(),
            kind: CodeableConcept::default(),
            status: EobStatus::Active,
            patient: Reference::default(),
            insurance: None,
            billable_period: None,
            provider: None,
            organization: None,
            care_team: Vec::new(),
            information: Vec::new(),
            diagnosis: Vec::new(),
            procedure: Vec::new(),
            hospitalization: None,
            item: Vec::new(),
            total_cost: None,
            payment: None,
            benefit_balance: Vec::new(),
            extension: Vec::new(),
        }
    }

    /// Appends a supporting-information entry with the next sequence number.
    pub fn add_information(&mut self, category: CodeableConcept, code: Option<CodeableConcept>) {
        let sequence = next_sequence(self.information.len());
        self.information.push(SupportingInformation {
            sequence,
            category,
            code,
        });
    }

    pub fn identifier_value(&self, system: &str) -> Option<&str> {
        self.identifier
            .iter()
            .find(|identifier| identifier.system == system)
            .map(|identifier| identifier.value.as_str())
    }

    pub fn extension(&self, url: &str) -> Option<&ExtensionValue> {
        self.extension
            .iter()
            .find(|extension| extension.url == url)
            .map(|extension| &extension.value)
    }
}

/// 1-based sequence number for the entry appended after `len` entries.
pub fn next_sequence(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |len| len.saturating_add(1))
}
