//! Identifier newtypes for claim records.

use std::fmt;

use crate::error::FieldError;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Trims the raw value; blank values are rejected.
            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(FieldError::InvalidCodeFormat {
                        field: $field.to_string(),
                        value,
                    });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(
    /// CCW claim identifier (`CLM_ID`).
    ClaimId,
    "claimId"
);

identifier!(
    /// CCW claim group identifier (`CLM_GRP_ID`), kept in its plain textual form.
    ClaimGroupId,
    "claimGroupId"
);

identifier!(
    /// CCW beneficiary identifier (`BENE_ID`).
    BeneficiaryId,
    "beneficiaryId"
);
