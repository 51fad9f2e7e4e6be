//! Benefit-balance and adjudication categories.

use ccw_model::CodedConcept;

use crate::systems;

/// Coverage category a benefit balance is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BenefitCategory {
    Medical,
}

impl BenefitCategory {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
        }
    }

    pub const fn display(&self) -> &'static str {
        match self {
            Self::Medical => "Medical Health Coverage",
        }
    }

    pub fn coding(&self) -> CodedConcept {
        CodedConcept::new(systems::BENEFIT_CATEGORY, self.code()).with_display(self.display())
    }
}

/// Kind of utilization or financial entry inside a benefit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialType {
    SystemUtilizationDayCount,
    PrimaryPayerPaidAmount,
    BloodDeductibleLiability,
    ProfessionalComponentCharge,
    PartBDeductible,
    PartBCoinsurance,
    ProviderPaymentAmount,
    BeneficiaryPaymentAmount,
}

impl FinancialType {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SystemUtilizationDayCount => "System Utilization Day Count",
            Self::PrimaryPayerPaidAmount => "Primary Payer Paid Amount",
            Self::BloodDeductibleLiability => "Blood Deductible Liability Amount",
            Self::ProfessionalComponentCharge => "Professional Component Charge Amount",
            Self::PartBDeductible => "Part B Deductible Amount",
            Self::PartBCoinsurance => "Part B Coinsurance Amount",
            Self::ProviderPaymentAmount => "Provider Payment Amount",
            Self::BeneficiaryPaymentAmount => "Beneficiary Payment Amount",
        }
    }

    pub fn coding(&self) -> CodedConcept {
        CodedConcept::new(systems::BENEFIT_BALANCE_TYPE, self.code())
    }
}

/// Category of a line adjudication amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjudicationCategory {
    ProviderPayment,
    BeneficiaryPayment,
    Payment,
}

impl AdjudicationCategory {
    /// Output order of the adjudications on every claim line.
    pub const LINE_ORDER: [AdjudicationCategory; 3] = [
        Self::ProviderPayment,
        Self::BeneficiaryPayment,
        Self::Payment,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::ProviderPayment => "Provider Payment Amount",
            Self::BeneficiaryPayment => "Beneficiary Payment Amount",
            Self::Payment => "Payment Amount",
        }
    }

    /// Source field the amount of this category is read from.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ProviderPayment => "providerPaymentAmount",
            Self::BeneficiaryPayment => "beneficiaryPaymentAmount",
            Self::Payment => "paymentAmount",
        }
    }

    pub fn coding(&self) -> CodedConcept {
        CodedConcept::new(systems::ADJUDICATION_CATEGORY, self.code())
    }
}
