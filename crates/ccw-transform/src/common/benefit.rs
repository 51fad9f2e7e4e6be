//! Benefit balances.

use ccw_model::eob::{BenefitBalance, BenefitUsed, CodeableConcept, Financial};
use ccw_model::{ExplanationOfBenefit, Money};
use ccw_standards::{BenefitCategory, FinancialType};

pub fn utilization(kind: FinancialType, count: u32) -> Financial {
    Financial {
        kind: CodeableConcept::of(kind.coding()),
        used: BenefitUsed::UsedUnsignedInt(count),
    }
}

pub fn amount(kind: FinancialType, money: Money) -> Financial {
    Financial {
        kind: CodeableConcept::of(kind.coding()),
        used: BenefitUsed::UsedMoney(money),
    }
}

/// Groups financial entries under one category; `None` when there are none.
pub fn build_benefit_balance(
    category: BenefitCategory,
    financial: Vec<Financial>,
) -> Option<BenefitBalance> {
    if financial.is_empty() {
        return None;
    }
    Some(BenefitBalance {
        category: CodeableConcept::of(category.coding()),
        financial,
    })
}

/// Adds entries to the resource's balance for `category`, creating the
/// balance on first use.
pub fn add_benefit_balance(
    eob: &mut ExplanationOfBenefit,
    category: BenefitCategory,
    financial: Vec<Financial>,
) {
    let Some(balance) = build_benefit_balance(category, financial) else {
        return;
    };
    match eob
        .benefit_balance
        .iter_mut()
        .find(|existing| existing.category == balance.category)
    {
        Some(existing) => existing.financial.extend(balance.financial),
        None => eob.benefit_balance.push(balance),
    }
}
