//! Line adjudications.

use ccw_model::eob::{Adjudication, CodeableConcept};
use ccw_model::{LinePayments, Result, to_money};
use ccw_standards::AdjudicationCategory;

/// Builds the adjudications of one claim line: provider payment,
/// beneficiary payment and total payment, in that order.
///
/// All three are always emitted; zero is a valid adjudicated amount.
pub fn build_line_adjudications(payments: &LinePayments) -> Result<Vec<Adjudication>> {
    AdjudicationCategory::LINE_ORDER
        .iter()
        .map(|category| {
            let value = match category {
                AdjudicationCategory::ProviderPayment => payments.provider_payment_amount,
                AdjudicationCategory::BeneficiaryPayment => payments.beneficiary_payment_amount,
                AdjudicationCategory::Payment => payments.payment_amount,
            };
            Ok(Adjudication {
                category: CodeableConcept::of(category.coding()),
                amount: to_money(category.field(), value)?,
            })
        })
        .collect()
}
