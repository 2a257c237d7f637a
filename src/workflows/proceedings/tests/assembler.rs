use pretty_assertions::assert_eq;

use super::common::*;
use crate::workflows::proceedings::assembler::{build_prosecution_case, case_markers, fee_records};
use crate::workflows::proceedings::canonical::{FeeRecord, FeeStatus, FeeType};
use crate::workflows::proceedings::context::{ConversionParameters, DerivationContext};
use crate::workflows::proceedings::domain::{
    CivilFees, GroupMembership, InitiationCode, SubmissionChannel,
};
use crate::workflows::proceedings::error::ConversionError;
use crate::workflows::proceedings::party::build_defendants;

#[test]
fn unmatched_markers_are_dropped() {
    let markers = case_markers(
        &tables(),
        case_id(),
        &["DV".to_string(), "XX".to_string(), " DV ".to_string()],
    );

    assert_eq!(markers.len(), 2);
    assert!(markers
        .iter()
        .all(|marker| marker.marker_type_id == id(0x5001)));
    assert_eq!(markers[0].marker_type_description, "Domestic violence");
}

#[test]
fn civil_fees_include_only_supplied_statuses() {
    let mut submitted = case(SubmissionChannel::Civil, InitiationCode::Summons);
    submitted.civil_fees = Some(CivilFees {
        initial_fee_status: Some("satisfied".to_string()),
        initial_payment_reference: Some("PAY-001".to_string()),
        contested_fee_status: Some("  ".to_string()),
        contested_payment_reference: None,
    });

    assert_eq!(
        fee_records(&submitted).expect("fees"),
        vec![FeeRecord {
            fee_type: FeeType::Initial,
            fee_status: FeeStatus::Satisfied,
            payment_reference: Some("PAY-001".to_string()),
        }]
    );
}

#[test]
fn unknown_civil_fee_status_is_unsupported() {
    let mut submitted = case(SubmissionChannel::Civil, InitiationCode::Summons);
    submitted.civil_fees = Some(CivilFees {
        contested_fee_status: Some("PAID".to_string()),
        ..CivilFees::default()
    });

    match fee_records(&submitted) {
        Err(ConversionError::Unsupported { field, value }) => {
            assert_eq!(field, "fee status");
            assert_eq!(value, "PAID");
        }
        other => panic!("expected unsupported fee status, got {other:?}"),
    }
}

#[test]
fn criminal_cases_carry_no_fees() {
    let mut submitted = magistrates_trial_case();
    submitted.civil_fees = Some(CivilFees {
        initial_fee_status: Some("OUTSTANDING".to_string()),
        ..CivilFees::default()
    });

    assert!(fee_records(&submitted).expect("fees").is_empty());
}

#[test]
fn group_cases_always_carry_both_fee_records() {
    let mut submitted = case(SubmissionChannel::Grouped, InitiationCode::Summons);
    submitted.group = Some(GroupMembership {
        group_id: id(0x6666),
        is_group_master: true,
    });

    let unpaid = fee_records(&submitted).expect("fees");
    assert_eq!(unpaid[0].fee_status, FeeStatus::Outstanding);
    assert_eq!(unpaid[1].fee_type, FeeType::Contested);
    assert_eq!(unpaid[1].fee_status, FeeStatus::NotApplicable);

    submitted.payment_reference = Some("PAY-777".to_string());
    let paid = fee_records(&submitted).expect("fees");
    assert_eq!(
        paid[0],
        FeeRecord {
            fee_type: FeeType::Initial,
            fee_status: FeeStatus::Satisfied,
            payment_reference: Some("PAY-777".to_string()),
        }
    );
    assert_eq!(paid.len(), 2);
}

#[test]
fn prosecution_case_takes_facts_from_first_defendant_first_offence() {
    let mut submitted = magistrates_trial_case();
    submitted.case_marker_codes = vec!["DV".to_string()];
    let mut second = defendant();
    second.id = id(0xDEF2);
    second.offences[0].id = id(0x0FF2);
    second.offences[0].statement_of_facts = Some("A different account.".to_string());
    submitted.defendants.push(second);

    let accessor = reference_data();
    let bundle = bundle_for(&submitted, &accessor);
    let parameters = ConversionParameters::at(now());
    let ctx = DerivationContext::build(&submitted, &bundle, &accessor, &parameters);
    let defendants = build_defendants(&ctx, &submitted.defendants).expect("defendants");

    let built = build_prosecution_case(&ctx, &submitted, defendants).expect("case builds");

    assert_eq!(built.id, case_id());
    assert_eq!(
        built.initiation_code,
        InitiationCode::TrialOrCommittalForSentence
    );
    assert_eq!(built.origination_organisation, ORIGINATING_COURT);
    assert_eq!(
        built.statement_of_facts.as_deref(),
        Some("The defendant was stopped at the barrier.")
    );
    assert_eq!(built.defendants.len(), 2);
    assert_eq!(built.case_markers.len(), 1);
    assert_eq!(
        built.prosecution_case_identifier.prosecution_authority_code.as_deref(),
        Some("TFL")
    );
    assert!(!built.is_civil);
    assert!(!built.is_group_member);
    assert!(built.fees.is_empty());

    let json = serde_json::to_value(&built).expect("serialize case");
    assert_eq!(json["initiationCode"], "O");
    assert!(json.get("groupId").is_none());
}
