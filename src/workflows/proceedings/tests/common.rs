use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::workflows::proceedings::domain::{
    InitialHearing, InitiationCode, SubmissionChannel, SubmittedCase, SubmittedDefendant,
    SubmittedIndividual, SubmittedOffence, SubmittedPlea, SubmittedProsecutor, SubmittedVerdict,
};
use crate::workflows::proceedings::reference::{
    AlcoholLevelMethod, ApplicationTypeReference, BailStatusReference, CaseMarkerReference,
    CourtRoom, EthnicityReference, HearingTypeReference, InMemoryReferenceData, ModeOfTrialReason,
    NationalityReference, OffenceReference, OrganisationUnit, ProsecutorReference,
    ReferenceDataAccessor, ReferenceDataBundle, ReferenceDataError, ReferenceTables,
    FIRST_HEARING_LINK_TYPE, SUMMARY_ONLY_REASON_DESCRIPTION,
};

pub(super) const ORIGINATING_COURT: &str = "B01LY00";
pub(super) const CROWN_COURT: &str = "C01LY00";
pub(super) const CONVICTING_COURT: &str = "B01CN00";
pub(super) const SUMMARY_CODE: &str = "CA03012";
pub(super) const EITHER_WAY_CODE: &str = "TH68001";

pub(super) fn id(value: u128) -> Uuid {
    Uuid::from_u128(value)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn case_id() -> Uuid {
    id(0xCA5E)
}

pub(super) fn defendant_id() -> Uuid {
    id(0xDEF1)
}

pub(super) fn offence_id() -> Uuid {
    id(0x0FF1)
}

pub(super) fn either_way_reason_id() -> Uuid {
    id(0x4002)
}

pub(super) fn summary_only_reason_id() -> Uuid {
    id(0x4001)
}

pub(super) fn court_unit(oucode: &str, level_one: &str, id_value: u128) -> OrganisationUnit {
    OrganisationUnit {
        id: id(id_value),
        oucode: oucode.to_string(),
        org_level1_code: Some(level_one.to_string()),
        level3_name: format!("{oucode} Court"),
        level3_welsh_name: Some(format!("Llys {oucode}")),
        lja: Some("2577".to_string()),
        court_location_code: None,
        court_room: Some(CourtRoom {
            id: id(id_value + 1),
            name: "Courtroom 01".to_string(),
        }),
    }
}

pub(super) fn offence_reference(code: &str, mode_of_trial: &str) -> OffenceReference {
    OffenceReference {
        cjs_offence_code: code.to_string(),
        title: format!("Offence {code}"),
        welsh_title: None,
        legislation: Some("Contrary to section 1".to_string()),
        welsh_legislation: None,
        mode_of_trial: Some(mode_of_trial.to_string()),
        dvla_code: Some("CU80".to_string()),
        max_penalty: Some("Level 3 fine".to_string()),
        endorsable: true,
        report_restriction: None,
    }
}

pub(super) fn prosecutor() -> ProsecutorReference {
    ProsecutorReference {
        id: id(0x9000),
        short_name: "TFL".to_string(),
        full_name: "Transport for London".to_string(),
        oucode: Some("GAFTL00".to_string()),
        address: None,
        contact_email: Some("prosecutions@tfl.example".to_string()),
    }
}

pub(super) fn first_hearing_application_type() -> ApplicationTypeReference {
    ApplicationTypeReference {
        id: id(0x7000),
        code: "MC80527".to_string(),
        application_type: "Application for a summons".to_string(),
        legislation: Some("Magistrates' Courts Act 1980, s.1".to_string()),
        link_type: FIRST_HEARING_LINK_TYPE.to_string(),
    }
}

pub(super) fn tables() -> ReferenceTables {
    ReferenceTables {
        self_defined_ethnicities: vec![EthnicityReference {
            id: id(0x1001),
            code: "W1".to_string(),
            description: "White - British".to_string(),
        }],
        observed_ethnicities: vec![EthnicityReference {
            id: id(0x1002),
            code: "01".to_string(),
            description: "White - North European".to_string(),
        }],
        nationalities: vec![NationalityReference {
            id: id(0x2001),
            iso_code: "GBR".to_string(),
            cjs_code: Some("UK".to_string()),
            description: "British".to_string(),
        }],
        mode_of_trial_reasons: vec![
            ModeOfTrialReason {
                id: summary_only_reason_id(),
                seq_num: 10,
                code: "01".to_string(),
                description: SUMMARY_ONLY_REASON_DESCRIPTION.to_string(),
            },
            ModeOfTrialReason {
                id: either_way_reason_id(),
                seq_num: 40,
                code: "04".to_string(),
                description: "Court directs trial by jury".to_string(),
            },
        ],
        bail_statuses: vec![BailStatusReference {
            id: id(0x3001),
            code: "C".to_string(),
            description: "Custody".to_string(),
        }],
        alcohol_level_methods: vec![AlcoholLevelMethod {
            code: "B".to_string(),
            description: "Breath".to_string(),
        }],
        case_markers: vec![CaseMarkerReference {
            id: id(0x5001),
            code: "DV".to_string(),
            description: "Domestic violence".to_string(),
        }],
        hearing_type: Some(HearingTypeReference {
            id: id(0x6001),
            description: "First hearing".to_string(),
            default_duration_minutes: Some(20),
        }),
    }
}

pub(super) fn reference_data() -> InMemoryReferenceData {
    InMemoryReferenceData::new()
        .with_offence(offence_reference(SUMMARY_CODE, "Summary"))
        .with_offence(offence_reference(EITHER_WAY_CODE, "Either Way"))
        .with_organisation_unit(court_unit(ORIGINATING_COURT, "B", 0xA000))
        .with_organisation_unit(court_unit(CROWN_COURT, "C", 0xB000))
        .with_organisation_unit(court_unit(CONVICTING_COURT, "B", 0xC000))
        .with_prosecutor(prosecutor())
        .with_application_type(first_hearing_application_type())
}

pub(super) fn initial_hearing() -> InitialHearing {
    InitialHearing {
        date_of_hearing: Some("2024-03-20".to_string()),
        time_of_hearing: Some("10:00:00".to_string()),
        court_room_id: None,
        court_room_name: None,
        hearing_duration_minutes: None,
    }
}

pub(super) fn offence() -> SubmittedOffence {
    SubmittedOffence {
        id: offence_id(),
        cjs_offence_code: SUMMARY_CODE.to_string(),
        order_index: None,
        wording: "Travelled without a valid ticket".to_string(),
        wording_welsh: None,
        arrest_date: None,
        charge_date: Some(date(2024, 1, 5)),
        committed_date: date(2024, 1, 2),
        committed_end_date: None,
        laid_date: None,
        plea: None,
        verdict: None,
        mode_of_trial_reason_id: None,
        convicting_court_code: None,
        vehicle_code: None,
        vehicle_registration: None,
        alcohol_level_method: None,
        alcohol_level_amount: None,
        statement_of_facts: Some("The defendant was stopped at the barrier.".to_string()),
        statement_of_facts_welsh: None,
    }
}

pub(super) fn guilty_plea() -> SubmittedPlea {
    SubmittedPlea {
        plea_value: "GUILTY".to_string(),
        plea_date: date(2024, 1, 10),
    }
}

pub(super) fn guilty_verdict() -> SubmittedVerdict {
    SubmittedVerdict {
        category: "guilty".to_string(),
        category_type: Some("GUILTY_CONVICTED".to_string()),
        description: None,
        verdict_date: date(2024, 2, 12),
    }
}

pub(super) fn individual() -> SubmittedIndividual {
    SubmittedIndividual {
        title: Some("Ms".to_string()),
        forename: "Jane".to_string(),
        surname: "Doe".to_string(),
        date_of_birth: Some(date(1990, 5, 17)),
        gender: Some("F".to_string()),
        ..SubmittedIndividual::default()
    }
}

pub(super) fn defendant() -> SubmittedDefendant {
    SubmittedDefendant {
        id: defendant_id(),
        prosecutor_defendant_reference: Some("TFL-0001".to_string()),
        individual: Some(individual()),
        organisation_name: None,
        address: None,
        contact: None,
        custody_status: None,
        language_requirement: None,
        initial_hearing: Some(initial_hearing()),
        aliases: Vec::new(),
        defence_organisation: None,
        offences: vec![offence()],
    }
}

pub(super) fn case(channel: SubmissionChannel, initiation_code: InitiationCode) -> SubmittedCase {
    SubmittedCase {
        case_id: case_id(),
        channel,
        initiation_code,
        is_civil: false,
        originating_organisation: ORIGINATING_COURT.to_string(),
        received_from_court_code: None,
        prosecutor: SubmittedProsecutor {
            prosecution_authority_id: Some(prosecutor().id),
            ..SubmittedProsecutor::default()
        },
        urn: "TFL24000001".to_string(),
        defendants: vec![defendant()],
        case_marker_codes: Vec::new(),
        payment_reference: None,
        civil_fees: None,
        group: None,
        summons_approval: None,
        new_hearing: None,
        application: None,
        posting_date: None,
    }
}

pub(super) fn magistrates_trial_case() -> SubmittedCase {
    case(
        SubmissionChannel::MagistratesSubmission,
        InitiationCode::TrialOrCommittalForSentence,
    )
}

pub(super) fn bundle_for(
    case: &SubmittedCase,
    accessor: &dyn ReferenceDataAccessor,
) -> ReferenceDataBundle {
    ReferenceDataBundle::for_case(tables(), accessor, case).expect("reference bundle builds")
}

/// Accessor fake that records every query it answers.
#[derive(Default)]
pub(super) struct RecordingAccessor {
    inner: InMemoryReferenceData,
    calls: Mutex<Vec<String>>,
}

impl RecordingAccessor {
    pub(super) fn new(inner: InMemoryReferenceData) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

impl ReferenceDataAccessor for RecordingAccessor {
    fn offence(
        &self,
        cjs_offence_code: &str,
    ) -> Result<Option<OffenceReference>, ReferenceDataError> {
        self.record(format!("offence:{cjs_offence_code}"));
        self.inner.offence(cjs_offence_code)
    }

    fn organisation_units(
        &self,
        oucode: &str,
    ) -> Result<Vec<OrganisationUnit>, ReferenceDataError> {
        self.record(format!("organisation_units:{oucode}"));
        self.inner.organisation_units(oucode)
    }

    fn prosecutor_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        self.record(format!("prosecutor_by_id:{id}"));
        self.inner.prosecutor_by_id(id)
    }

    fn prosecutor_by_ou_code(
        &self,
        oucode: &str,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        self.record(format!("prosecutor_by_ou_code:{oucode}"));
        self.inner.prosecutor_by_ou_code(oucode)
    }

    fn application_type(
        &self,
        id: Uuid,
    ) -> Result<Option<ApplicationTypeReference>, ReferenceDataError> {
        self.record(format!("application_type:{id}"));
        self.inner.application_type(id)
    }

    fn application_types(&self) -> Result<Vec<ApplicationTypeReference>, ReferenceDataError> {
        self.record("application_types".to_string());
        self.inner.application_types()
    }
}

/// Accessor fake whose store is always down.
pub(super) struct UnavailableAccessor;

impl ReferenceDataAccessor for UnavailableAccessor {
    fn offence(&self, _: &str) -> Result<Option<OffenceReference>, ReferenceDataError> {
        Err(unavailable())
    }

    fn organisation_units(&self, _: &str) -> Result<Vec<OrganisationUnit>, ReferenceDataError> {
        Err(unavailable())
    }

    fn prosecutor_by_id(&self, _: Uuid) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        Err(unavailable())
    }

    fn prosecutor_by_ou_code(
        &self,
        _: &str,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        Err(unavailable())
    }

    fn application_type(
        &self,
        _: Uuid,
    ) -> Result<Option<ApplicationTypeReference>, ReferenceDataError> {
        Err(unavailable())
    }

    fn application_types(&self) -> Result<Vec<ApplicationTypeReference>, ReferenceDataError> {
        Err(unavailable())
    }
}

fn unavailable() -> ReferenceDataError {
    ReferenceDataError::Unavailable("reference store offline".to_string())
}
