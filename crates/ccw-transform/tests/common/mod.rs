//! Claim fixtures shared by the transformer tests.

#![allow(dead_code)]

use ccw_model::{
    BeneficiaryId, ClaimGroupId, ClaimId, CodeSlot, HcpcsCoding, HospiceClaim, HospiceClaimLine,
    InstitutionalGroup, LineNumber, LinePayments, OutpatientClaim, OutpatientClaimLine,
    ProcedureSlot, RevenueCenterLine,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fills the first slots with `codes`, leaving the rest empty.
pub fn slots<const N: usize>(codes: &[(&str, char)]) -> [CodeSlot; N] {
    std::array::from_fn(|index| {
        codes
            .get(index)
            .map(|(code, version)| CodeSlot::new(*code, *version))
            .unwrap_or_default()
    })
}

fn institutional() -> InstitutionalGroup {
    InstitutionalGroup {
        organization_npi: Some("999999999".into()),
        claim_facility_type_code: '8',
        claim_frequency_code: '1',
        claim_non_payment_reason_code: Some("P".into()),
        patient_discharge_status_code: Some("30".into()),
        claim_service_classification_type_code: '1',
        claim_primary_payer_code: Some('A'),
        attending_physician_npi: Some("8888888888".into()),
        total_charge_amount: dec!(199.99),
        primary_payer_paid_amount: dec!(0),
    }
}

fn revenue(revenue_center_code: &str) -> RevenueCenterLine {
    RevenueCenterLine {
        revenue_center_code: revenue_center_code.into(),
        rate_amount: dec!(0),
        total_charge_amount: dec!(2555.00),
        non_covered_charge_amount: Some(dec!(300.00)),
        unit_count: dec!(0),
        national_drug_code_quantity: None,
        national_drug_code_qualifier_code: None,
        rendering_physician_npi: Some("345345345".into()),
    }
}

pub fn hospice_line(line_number: u32) -> HospiceClaimLine {
    HospiceClaimLine {
        line_number: LineNumber::new(line_number).unwrap(),
        hcpcs: HcpcsCoding {
            hcpcs_code: Some("651".into()),
            hcpcs_initial_modifier_code: Some("Q9999".into()),
            hcpcs_second_modifier_code: None,
        },
        national_drug_code: None,
        payments: LinePayments {
            provider_payment_amount: dec!(29.00),
            beneficiary_payment_amount: dec!(28.00),
            payment_amount: dec!(26.00),
        },
        revenue: revenue("0651"),
        deductible_coinsurance_code: Some('0'),
    }
}

pub fn hospice_claim() -> HospiceClaim {
    HospiceClaim {
        claim_id: ClaimId::new("9992").unwrap(),
        claim_group_id: ClaimGroupId::new("900").unwrap(),
        beneficiary_id: BeneficiaryId::new("567834").unwrap(),
        near_line_record_id_code: 'V',
        claim_type_code: "50".into(),
        date_from: date(2014, 1, 1),
        date_through: date(2014, 1, 30),
        provider_number: "12345".into(),
        provider_state_code: "AZ".into(),
        payment_amount: dec!(130.32),
        patient_status_code: Some('C'),
        utilization_day_count: 30,
        claim_hospice_start_date: Some(date(2014, 7, 6)),
        beneficiary_discharge_date: Some(date(2015, 6, 29)),
        institutional: institutional(),
        diagnosis_principal: CodeSlot::new("R5555", '0'),
        diagnoses: slots(&[("R8888", '0'), ("R5555", '0'), ("R9999", '9')]),
        diagnosis_external_first: CodeSlot::new("R1111", '0'),
        diagnoses_external: slots(&[("R1111", '0'), ("R2222", '0')]),
        lines: vec![hospice_line(1)],
    }
}

pub fn outpatient_line(line_number: u32) -> OutpatientClaimLine {
    OutpatientClaimLine {
        line_number: LineNumber::new(line_number).unwrap(),
        hcpcs: HcpcsCoding {
            hcpcs_code: Some("M99".into()),
            hcpcs_initial_modifier_code: Some("XX".into()),
            hcpcs_second_modifier_code: Some("YY".into()),
        },
        national_drug_code: Some("000000000".into()),
        payments: LinePayments {
            provider_payment_amount: dec!(200),
            beneficiary_payment_amount: dec!(300),
            payment_amount: dec!(5000),
        },
        revenue: RevenueCenterLine {
            national_drug_code_quantity: Some(dec!(77)),
            national_drug_code_qualifier_code: Some("GG".into()),
            ..revenue("0001")
        },
        blood_deductible_amount: dec!(10.45),
        cash_deductible_amount: dec!(12.89),
        wage_adjusted_coinsurance_amount: dec!(15.23),
        reduced_coinsurance_amount: dec!(11.00),
        patient_responsibility_amount: dec!(30.00),
    }
}

pub fn outpatient_claim() -> OutpatientClaim {
    OutpatientClaim {
        claim_id: ClaimId::new("1234567890").unwrap(),
        claim_group_id: ClaimGroupId::new("900").unwrap(),
        beneficiary_id: BeneficiaryId::new("567834").unwrap(),
        near_line_record_id_code: 'W',
        claim_type_code: "40".into(),
        date_from: date(2011, 1, 24),
        date_through: date(2011, 1, 24),
        provider_number: "999999".into(),
        provider_state_code: "KY".into(),
        payment_amount: dec!(693.11),
        institutional: InstitutionalGroup {
            claim_facility_type_code: '1',
            claim_frequency_code: '1',
            claim_service_classification_type_code: '3',
            patient_discharge_status_code: Some("01".into()),
            claim_primary_payer_code: None,
            claim_non_payment_reason_code: None,
            total_charge_amount: dec!(8888.85),
            primary_payer_paid_amount: dec!(11.00),
            ..institutional()
        },
        operating_physician_npi: Some("2222222222".into()),
        other_physician_npi: Some("3333333333".into()),
        blood_deductible_liability_amount: dec!(6.00),
        professional_component_charge: dec!(66.89),
        deductible_amount: dec!(112.00),
        coinsurance_amount: dec!(175.73),
        provider_payment_amount: dec!(1200.00),
        beneficiary_payment_amount: dec!(1000.00),
        diagnosis_principal: CodeSlot::new("A40", '0'),
        diagnoses: slots(&[("A40", '0'), ("A52", '0')]),
        diagnosis_external_first: CodeSlot::new("A06", '0'),
        diagnoses_external: slots(&[("A15", '0')]),
        diagnoses_reason_for_visit: slots(&[("A37", '0'), ("A40", '0')]),
        procedures: std::array::from_fn(|index| match index {
            0 => ProcedureSlot::new("CD1YYZZ", '0', Some(date(2016, 1, 16))),
            1 => ProcedureSlot::new("302", '9', None),
            _ => ProcedureSlot::default(),
        }),
        lines: vec![outpatient_line(1)],
    }
}
