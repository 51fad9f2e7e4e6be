//! Coded-field types.
//!
//! CCW records carry codes as bare strings and characters; code systems are
//! implied by the column. These types make the system explicit and keep the
//! (code, version) pairs of diagnosis and procedure slots together.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// A code qualified by the system it belongs to.
///
/// The code is never empty; see [`normalize_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodedConcept {
    pub system: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl CodedConcept {
    /// Builds a concept from trusted constants.
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: None,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn matches(&self, system: &str, code: &str) -> bool {
        self.system == system && self.code == code
    }
}

/// Normalizes a raw source code into a [`CodedConcept`] of `system`.
///
/// Surrounding whitespace is removed. A value that is blank after trimming
/// fails with [`FieldError::InvalidCodeFormat`].
pub fn normalize_code(field: &str, raw: &str, system: &str) -> Result<CodedConcept> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(FieldError::InvalidCodeFormat {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(CodedConcept::new(system, code))
}

/// ICD revision a diagnosis or procedure code is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IcdVersion {
    Icd9,
    Icd10,
}

impl IcdVersion {
    /// Resolves the CCW version indicator (`'9'` for ICD-9, `'0'` for ICD-10).
    pub fn from_indicator(indicator: char) -> Option<Self> {
        match indicator {
            '9' => Some(Self::Icd9),
            '0' => Some(Self::Icd10),
            _ => None,
        }
    }

    pub fn indicator(&self) -> char {
        match self {
            Self::Icd9 => '9',
            Self::Icd10 => '0',
        }
    }
}

impl fmt::Display for IcdVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Icd9 => f.write_str("ICD-9"),
            Self::Icd10 => f.write_str("ICD-10"),
        }
    }
}

/// A diagnosis code together with its ICD revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionedDiagnosisCode {
    pub code: String,
    pub version: IcdVersion,
    pub present_on_admission: Option<char>,
}

/// A procedure code together with its ICD revision and performed date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionedProcedureCode {
    pub code: String,
    pub version: IcdVersion,
    pub date: Option<NaiveDate>,
}

/// One positional diagnosis slot exactly as it appears in the source record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSlot {
    pub code: Option<String>,
    pub version: Option<char>,
    pub present_on_admission: Option<char>,
}

impl CodeSlot {
    pub fn new(code: impl Into<String>, version: char) -> Self {
        Self {
            code: Some(code.into()),
            version: Some(version),
            present_on_admission: None,
        }
    }

    /// True when the slot carries a non-blank code.
    pub fn is_populated(&self) -> bool {
        self.code.as_deref().is_some_and(|code| !code.trim().is_empty())
    }

    /// Resolves the slot; an empty slot yields `Ok(None)`.
    ///
    /// A populated code whose version indicator is absent or unknown fails
    /// with [`FieldError::DiagnosisVersionMismatch`].
    pub fn resolve(&self, field: &str) -> Result<Option<VersionedDiagnosisCode>> {
        let Some(code) = populated(self.code.as_deref()) else {
            return Ok(None);
        };
        let version = resolve_version(field, code, self.version)?;
        Ok(Some(VersionedDiagnosisCode {
            code: code.to_string(),
            version,
            present_on_admission: self.present_on_admission,
        }))
    }
}

/// One positional procedure slot exactly as it appears in the source record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcedureSlot {
    pub code: Option<String>,
    pub version: Option<char>,
    pub date: Option<NaiveDate>,
}

impl ProcedureSlot {
    pub fn new(code: impl Into<String>, version: char, date: Option<NaiveDate>) -> Self {
        Self {
            code: Some(code.into()),
            version: Some(version),
            date,
        }
    }

    pub fn resolve(&self, field: &str) -> Result<Option<VersionedProcedureCode>> {
        let Some(code) = populated(self.code.as_deref()) else {
            return Ok(None);
        };
        let version = resolve_version(field, code, self.version)?;
        Ok(Some(VersionedProcedureCode {
            code: code.to_string(),
            version,
            date: self.date,
        }))
    }
}

fn populated(code: Option<&str>) -> Option<&str> {
    code.map(str::trim).filter(|code| !code.is_empty())
}

fn resolve_version(field: &str, code: &str, indicator: Option<char>) -> Result<IcdVersion> {
    indicator
        .and_then(IcdVersion::from_indicator)
        .ok_or_else(|| FieldError::DiagnosisVersionMismatch {
            field: field.to_string(),
            code: code.to_string(),
            version: indicator,
        })
}

/// Deserializes a fixed run of slots from a list of at most `N` entries,
/// padding the tail with empty slots.
pub(crate) fn deserialize_slots<'de, D, T, const N: usize>(
    deserializer: D,
) -> Result<[T; N], D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let values = Vec::<T>::deserialize(deserializer)?;
    if values.len() > N {
        let expected = format!("at most {N} slots");
        return Err(de::Error::invalid_length(values.len(), &expected.as_str()));
    }
    let mut values = values.into_iter();
    Ok(std::array::from_fn(|_| values.next().unwrap_or_default()))
}

/// Role marker attached to an output diagnosis entry.
///
/// Declaration order is the precedence order of the output list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosisRole {
    Principal,
    Additional,
    ExternalCauseFirst,
    ExternalCause,
    ReasonForVisit,
}

impl DiagnosisRole {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Additional => "additional",
            Self::ExternalCauseFirst => "externalFirst",
            Self::ExternalCause => "external",
            Self::ReasonForVisit => "reasonForVisit",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Principal => "The single medical diagnosis that is most relevant to the patient's chief complaint or need for treatment.",
            Self::Additional => "A diagnosis that coexists with the principal diagnosis or develops subsequently.",
            Self::ExternalCauseFirst => "The code used to identify the 1st external cause of injury, poisoning, or other adverse effect.",
            Self::ExternalCause => "A code used to identify an external cause of injury, poisoning, or other adverse effect.",
            Self::ReasonForVisit => "A diagnosis code used to identify the patient's reason for the visit.",
        }
    }
}
