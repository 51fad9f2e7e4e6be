mod common;

use std::thread;

use ccw_model::{ClaimAggregate, ClaimType};
use ccw_transform::{
    ClaimTransformer, HospiceTransformer, OutpatientTransformer, TransformOptions,
    parse_resource_id, supported_claim_types, transform, transform_with,
};
use common::{hospice_claim, outpatient_claim};

#[test]
fn dispatch_follows_the_type_tag() {
    let hospice = ClaimAggregate::from(hospice_claim());
    let outpatient = ClaimAggregate::from(outpatient_claim());

    let options = TransformOptions::default();
    assert_eq!(
        transform_with(&hospice, &options).unwrap(),
        HospiceTransformer.transform(&hospice, &options).unwrap()
    );
    assert_eq!(
        transform_with(&outpatient, &options).unwrap(),
        OutpatientTransformer.transform(&outpatient, &options).unwrap()
    );
}

#[test]
fn supported_types_match_the_aggregate_variants() {
    assert_eq!(
        supported_claim_types(),
        [ClaimType::Hospice, ClaimType::Outpatient]
    );
}

#[test]
fn resource_ids_round_trip() {
    let eob = transform(&hospice_claim().into()).unwrap();
    let (claim_type, claim_id) = parse_resource_id(&eob.id).unwrap();
    assert_eq!(claim_type, ClaimType::Hospice);
    assert_eq!(claim_id.as_str(), "9992");
}

#[test]
fn one_failed_claim_does_not_affect_others() {
    let mut broken = hospice_claim();
    broken.lines[0].revenue.non_covered_charge_amount = None;
    let claims = [
        ClaimAggregate::from(hospice_claim()),
        ClaimAggregate::from(broken),
        ClaimAggregate::from(outpatient_claim()),
    ];

    let results: Vec<_> = claims.iter().map(transform).collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}

#[test]
fn transform_is_safe_to_run_concurrently() {
    let aggregate = ClaimAggregate::from(hospice_claim());
    let expected = transform(&aggregate).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| transform(&aggregate).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
