//! Revenue-center fields shared by institutional claim lines.

use ccw_model::eob::{Extension, Item, Quantity, Revenue};
use ccw_model::{ExplanationOfBenefit, Result, RevenueCenterLine, to_money};
use ccw_standards::{CodeRole, lookup, systems};

use crate::common::provider::{CareTeamRole, add_care_team_member};
use crate::common::{non_blank, require};

/// Maps the revenue center, rates, charges, units, NDC quantity and
/// rendering physician of one line onto its item.
///
/// The non-covered charge is mandatory on institutional lines.
pub fn map_item_revenue(
    item: &mut Item,
    eob: &mut ExplanationOfBenefit,
    revenue: &RevenueCenterLine,
) -> Result<()> {
    let mut entry = Revenue {
        coding: vec![lookup(CodeRole::RevenueCenter, &revenue.revenue_center_code)?],
        extension: Vec::new(),
    };

    item.unit_price = Some(to_money("rateAmount", revenue.rate_amount)?);
    item.net = Some(to_money("totalChargeAmount", revenue.total_charge_amount)?);

    let non_covered = require(revenue.non_covered_charge_amount, "nonCoveredChargeAmount")?;
    entry.extension.push(Extension::money(
        systems::NON_COVERED_CHARGE_AMOUNT,
        to_money("nonCoveredChargeAmount", non_covered)?,
    ));
    item.revenue = Some(entry);

    item.quantity = Some(Quantity::of(revenue.unit_count));
    if let Some(quantity) = revenue.national_drug_code_quantity {
        let qualifier = non_blank(revenue.national_drug_code_qualifier_code.as_deref());
        item.extension.push(Extension::quantity(
            systems::NDC_QUANTITY,
            Quantity {
                value: quantity,
                system: qualifier.map(|_| systems::NDC_QUANTITY_QUALIFIER.to_string()),
                code: qualifier.map(str::to_string),
            },
        ));
    }

    if let Some(sequence) = add_care_team_member(
        eob,
        revenue.rendering_physician_npi.as_deref(),
        CareTeamRole::Primary,
    ) {
        item.care_team_link_id.push(sequence);
    }
    Ok(())
}
