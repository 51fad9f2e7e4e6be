//! Claim line items.

use ccw_model::eob::{Address, CodeableConcept, Extension, Item};
use ccw_model::{CodedConcept, HcpcsCoding, LineNumber, Result, normalize_code, to_money};
use ccw_standards::systems;
use rust_decimal::Decimal;

use crate::common::non_blank;

/// Starts a line item: sequence, HCPCS service and modifiers, the provider
/// state as location and the clinical-services invoice group marker.
pub fn start_item(
    line_number: LineNumber,
    hcpcs: &HcpcsCoding,
    provider_state_code: &str,
) -> Result<Item> {
    let mut item = Item::new(line_number.get());
    if let Some(code) = non_blank(hcpcs.hcpcs_code.as_deref()) {
        item.service = Some(CodeableConcept::of(normalize_code(
            "hcpcsCode",
            code,
            systems::HCPCS,
        )?));
    }
    item.location_address = Some(Address {
        state: provider_state_code.trim().to_string(),
    });
    for (field, modifier) in [
        ("hcpcsInitialModifierCode", &hcpcs.hcpcs_initial_modifier_code),
        ("hcpcsSecondModifierCode", &hcpcs.hcpcs_second_modifier_code),
    ] {
        if let Some(modifier) = non_blank(modifier.as_deref()) {
            item.modifier.push(CodeableConcept::of(normalize_code(
                field,
                modifier,
                systems::HCPCS,
            )?));
        }
    }
    item.extension.push(Extension::coding(
        systems::ACT_INVOICE_GROUP,
        CodedConcept::new(
            systems::ACT_INVOICE_GROUP,
            systems::ACT_INVOICE_GROUP_CLINICAL_SERVICES,
        ),
    ));
    Ok(item)
}

/// Attaches the line's national drug code, when present.
pub fn add_national_drug_code(item: &mut Item, national_drug_code: Option<&str>) -> Result<()> {
    if let Some(code) = non_blank(national_drug_code) {
        let concept = normalize_code("nationalDrugCode", code, systems::NDC)?;
        item.extension.push(Extension::coding(systems::NDC, concept));
    }
    Ok(())
}

/// Attaches a line amount as a money extension.
pub fn add_amount_extension(
    item: &mut Item,
    url: &str,
    field: &str,
    value: Decimal,
) -> Result<()> {
    item.extension
        .push(Extension::money(url, to_money(field, value)?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: u32) -> LineNumber {
        LineNumber::new(number).unwrap()
    }

    #[test]
    fn item_without_hcpcs_still_has_location_and_marker() {
        let item = start_item(line(1), &HcpcsCoding::default(), "AZ").unwrap();
        assert_eq!(item.sequence, 1);
        assert!(item.service.is_none());
        assert!(item.modifier.is_empty());
        assert_eq!(item.location_address.unwrap().state, "AZ");
        assert_eq!(item.extension.len(), 1);
    }

    #[test]
    fn modifiers_keep_their_order() {
        let hcpcs = HcpcsCoding {
            hcpcs_code: Some("651".into()),
            hcpcs_initial_modifier_code: Some("Q9999".into()),
            hcpcs_second_modifier_code: Some("GW".into()),
        };
        let item = start_item(line(2), &hcpcs, "AZ").unwrap();
        let codes: Vec<_> = item
            .modifier
            .iter()
            .filter_map(|modifier| modifier.first())
            .map(|coding| coding.code.as_str())
            .collect();
        assert_eq!(codes, ["Q9999", "GW"]);
    }
}
