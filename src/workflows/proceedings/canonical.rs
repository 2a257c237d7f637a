//! Canonical entities handed to court progression.
//!
//! Optional values are omitted from the serialized form rather than written
//! as `null`, so "no facts" and "facts with blank fields" stay distinct.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{Address, ContactDetails, InitiationCode, SummonsApprovedOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCentre {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welsh_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingType {
    pub id: Uuid,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JurisdictionType {
    Magistrates,
    Crown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub court_schedule_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_room_id: Option<Uuid>,
    pub session_start: DateTime<Utc>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    English,
    Welsh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummonsRequired {
    FirstHearing,
}

/// Listing needs of one defendant within a hearing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDefendantRequest {
    pub prosecution_case_id: Uuid,
    pub defendant_id: Uuid,
    pub offence_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_language_needs: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summons_required: Option<SummonsRequired>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summons_approved_outcome: Option<SummonsApprovedOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingRequest {
    pub court_centre: CourtCentre,
    pub hearing_type: HearingType,
    pub jurisdiction_type: JurisdictionType,
    pub estimated_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_start_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_end_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_start_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booked_slots: Vec<BookedSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_requirements: Vec<String>,
    pub defendant_listing_needs: Vec<ListDefendantRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plea {
    pub offence_id: Uuid,
    pub plea_value: String,
    pub plea_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictType {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub offence_id: Uuid,
    pub verdict_date: NaiveDate,
    pub verdict_type: VerdictType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDecision {
    pub offence_id: Uuid,
    pub mot_reason_id: Uuid,
    pub sequence_number: i32,
    pub mot_reason_code: String,
    pub mot_reason_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtHouseType {
    Magistrates,
    Crown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittingCourt {
    pub court_house_type: CourtHouseType,
    pub court_house_code: String,
    pub court_house_name: String,
    pub court_centre_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenceFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_reading_method_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_reading_method_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_reading_amount: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offence {
    pub id: Uuid,
    pub offence_code: String,
    pub order_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_title_welsh: Option<String>,
    pub wording: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wording_welsh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrest_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_date: Option<NaiveDate>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laid_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_of_trial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_legislation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_legislation_welsh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_decision: Option<AllocationDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plea: Option<Plea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conviction_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committing_court: Option<CommittingCourt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convicting_court: Option<CourtCentre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_time_limit: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_facts: Option<OffenceFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dvla_offence_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_penalty: Option<String>,
    #[serde(default)]
    pub endorsable_flag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_restriction: Option<String>,
    #[serde(default)]
    pub is_civil: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    NotKnown,
    NotSpecified,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ethnicity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_defined_ethnicity_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_defined_ethnicity_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_defined_ethnicity_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_ethnicity_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_ethnicity_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_ethnicity_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nationality {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BailStatus {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Ethnicity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Nationality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_nationality: Option<Nationality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_language_needs: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_insurance_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDefendant {
    pub person_details: Person,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bail_status: Option<BailStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrest_summons_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnc_id: Option<String>,
}

/// A defendant is either a person or a legal entity, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefendantParty {
    PersonDefendant(Box<PersonDefendant>),
    LegalEntityDefendant(Box<Organisation>),
}

impl DefendantParty {
    pub fn display_name(&self) -> String {
        match self {
            DefendantParty::PersonDefendant(person) => format!(
                "{} {}",
                person.person_details.first_name, person.person_details.last_name
            ),
            DefendantParty::LegalEntityDefendant(organisation) => organisation.name.clone(),
        }
    }

    pub fn person(&self) -> Option<&PersonDefendant> {
        match self {
            DefendantParty::PersonDefendant(person) => Some(person.as_ref()),
            DefendantParty::LegalEntityDefendant(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_entity_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociatedRole {
    ParentGuardian,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedPerson {
    pub person: Person,
    pub role: AssociatedRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defendant {
    pub id: Uuid,
    pub master_defendant_id: Uuid,
    pub prosecution_case_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_reference: Option<String>,
    #[serde(flatten)]
    pub party: DefendantParty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Alias>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associated_persons: Vec<AssociatedPerson>,
    pub offences: Vec<Offence>,
    pub is_youth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutionCaseIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_code: Option<String>,
    pub prosecution_authority_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_ou_code: Option<String>,
    pub case_urn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseMarker {
    pub marker_type_id: Uuid,
    pub marker_type_code: String,
    pub marker_type_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Initial,
    Contested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    Outstanding,
    Satisfied,
    NotApplicable,
    Redirected,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub fee_type: FeeType,
    pub fee_status: FeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutionCase {
    pub id: Uuid,
    pub initiation_code: InitiationCode,
    pub origination_organisation: String,
    pub prosecution_case_identifier: ProsecutionCaseIdentifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub case_markers: Vec<CaseMarker>,
    pub defendants: Vec<Defendant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_of_facts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_of_facts_welsh: Option<String>,
    #[serde(default)]
    pub is_civil: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub is_group_master: bool,
    #[serde(default)]
    pub is_group_member: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fees: Vec<FeeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplicationType {
    pub id: Uuid,
    pub code: String,
    pub application_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legislation: Option<String>,
    pub link_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutingAuthority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_authority_code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantParty {
    pub id: Uuid,
    pub prosecuting_authority: ProsecutingAuthority,
}

/// Respondents are identified as a person or a legal entity, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RespondentIdentity {
    PersonDetails(Box<Person>),
    LegalEntity(Box<Organisation>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentParty {
    pub id: Uuid,
    pub master_defendant_id: Uuid,
    #[serde(flatten)]
    pub identity: RespondentIdentity,
    pub summons_required: bool,
    pub notification_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplicationCase {
    pub prosecution_case_id: Uuid,
    pub prosecution_case_identifier: ProsecutionCaseIdentifier,
    pub is_sjp: bool,
    pub offence_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplication {
    pub id: Uuid,
    pub application_type: CourtApplicationType,
    pub application_received_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_particulars: Option<String>,
    pub applicant: ApplicantParty,
    pub subject: RespondentParty,
    pub respondents: Vec<RespondentParty>,
    pub application_status: ApplicationStatus,
    pub court_application_cases: Vec<CourtApplicationCase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub case_markers: Vec<CaseMarker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxHearingRequest {
    pub court_centre: CourtCentre,
    pub jurisdiction_type: JurisdictionType,
    pub application_due_date: NaiveDate,
}
