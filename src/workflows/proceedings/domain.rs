//! Raw intake shapes as submitted by the upstream channels.
//!
//! Values here are untrusted in the sense that optional reference codes may
//! not resolve; the derivation modules decide what survives into the
//! canonical command.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::canonical::{
    BookedSlot, CourtCentre, HearingType, JurisdictionType, ListDefendantRequest,
};
use super::error::ConversionError;

/// Upstream channel a case arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionChannel {
    MagistratesSubmission,
    StagingProsecutorFeed,
    Civil,
    SingleJusticeProcedure,
    Grouped,
}

impl SubmissionChannel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MagistratesSubmission => "magistrates submission",
            Self::StagingProsecutorFeed => "staging prosecutor feed",
            Self::Civil => "civil",
            Self::SingleJusticeProcedure => "single justice procedure",
            Self::Grouped => "grouped cases",
        }
    }
}

/// How proceedings were initiated, carried on the wire as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InitiationCode {
    Charge,
    Summons,
    Requisition,
    TrialOrCommittalForSentence,
    SingleJusticeProcedure,
    Other,
}

impl InitiationCode {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Charge => "C",
            Self::Summons => "S",
            Self::Requisition => "R",
            Self::TrialOrCommittalForSentence => "O",
            Self::SingleJusticeProcedure => "J",
            Self::Other => "Z",
        }
    }

    pub fn from_code(value: &str) -> Result<Self, ConversionError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Self::Charge),
            "S" => Ok(Self::Summons),
            "R" => Ok(Self::Requisition),
            "O" => Ok(Self::TrialOrCommittalForSentence),
            "J" => Ok(Self::SingleJusticeProcedure),
            "Z" => Ok(Self::Other),
            _ => Err(ConversionError::unsupported("initiation code", value)),
        }
    }
}

impl TryFrom<String> for InitiationCode {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<InitiationCode> for String {
    fn from(value: InitiationCode) -> Self {
        value.code().to_string()
    }
}

/// A case as received from an upstream channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedCase {
    pub case_id: Uuid,
    pub channel: SubmissionChannel,
    pub initiation_code: InitiationCode,
    #[serde(default)]
    pub is_civil: bool,
    /// Organisation-unit code of the originating court.
    pub originating_organisation: String,
    /// Court the case was committed or sent from.
    #[serde(default)]
    pub received_from_court_code: Option<String>,
    pub prosecutor: SubmittedProsecutor,
    pub urn: String,
    pub defendants: Vec<SubmittedDefendant>,
    #[serde(default)]
    pub case_marker_codes: Vec<String>,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub civil_fees: Option<CivilFees>,
    #[serde(default)]
    pub group: Option<GroupMembership>,
    #[serde(default)]
    pub summons_approval: Option<SummonsApprovedOutcome>,
    #[serde(default)]
    pub new_hearing: Option<ExplicitHearingRequest>,
    #[serde(default)]
    pub application: Option<SubmittedApplication>,
    #[serde(default)]
    pub posting_date: Option<NaiveDate>,
}

impl SubmittedCase {
    pub fn civil(&self) -> bool {
        self.is_civil || self.channel == SubmissionChannel::Civil
    }

    pub fn is_group_master(&self) -> bool {
        self.group
            .as_ref()
            .is_some_and(|group| group.is_group_master)
    }
}

/// Prosecuting authority as named on the submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedProsecutor {
    #[serde(default)]
    pub prosecution_authority_id: Option<Uuid>,
    #[serde(default)]
    pub prosecution_authority_code: Option<String>,
    #[serde(default)]
    pub prosecution_authority_name: Option<String>,
    #[serde(default)]
    pub prosecution_authority_ou_code: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact: Option<ContactDetails>,
    #[serde(default)]
    pub informant: Option<String>,
}

impl SubmittedProsecutor {
    /// Whether the submission carries enough to build the identifier without lookups.
    pub fn is_embedded(&self) -> bool {
        self.prosecution_authority_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Defendant as received. Exactly one of `individual` or `organisation_name`
/// is expected; organisation name wins when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedDefendant {
    pub id: Uuid,
    #[serde(default)]
    pub prosecutor_defendant_reference: Option<String>,
    #[serde(default)]
    pub individual: Option<SubmittedIndividual>,
    #[serde(default)]
    pub organisation_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact: Option<ContactDetails>,
    #[serde(default)]
    pub custody_status: Option<String>,
    #[serde(default)]
    pub language_requirement: Option<String>,
    #[serde(default)]
    pub initial_hearing: Option<InitialHearing>,
    #[serde(default)]
    pub aliases: Vec<SubmittedAlias>,
    #[serde(default)]
    pub defence_organisation: Option<DefenceOrganisation>,
    pub offences: Vec<SubmittedOffence>,
}

impl SubmittedDefendant {
    pub fn organisation_name(&self) -> Option<&str> {
        self.organisation_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedIndividual {
    #[serde(default)]
    pub title: Option<String>,
    pub forename: String,
    #[serde(default)]
    pub forename2: Option<String>,
    #[serde(default)]
    pub forename3: Option<String>,
    pub surname: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub self_defined_ethnicity: Option<String>,
    #[serde(default)]
    pub observed_ethnicity: Option<i32>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub additional_nationality: Option<String>,
    #[serde(default)]
    pub national_insurance_number: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub driver_number: Option<String>,
    #[serde(default)]
    pub arrest_summons_number: Option<String>,
    #[serde(default)]
    pub pnc_id: Option<String>,
    #[serde(default)]
    pub parent_guardian: Option<ParentGuardian>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentGuardian {
    #[serde(default)]
    pub title: Option<String>,
    pub forename: String,
    #[serde(default)]
    pub forename2: Option<String>,
    #[serde(default)]
    pub forename3: Option<String>,
    pub surname: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact: Option<ContactDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAlias {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub forename: Option<String>,
    #[serde(default)]
    pub forename2: Option<String>,
    #[serde(default)]
    pub forename3: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub organisation_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenceOrganisation {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// First listing details supplied with the defendant.
///
/// Date and time stay as submitted strings; the hearing builder combines
/// them into a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialHearing {
    #[serde(default)]
    pub date_of_hearing: Option<String>,
    #[serde(default)]
    pub time_of_hearing: Option<String>,
    #[serde(default)]
    pub court_room_id: Option<Uuid>,
    #[serde(default)]
    pub court_room_name: Option<String>,
    #[serde(default)]
    pub hearing_duration_minutes: Option<u32>,
}

impl InitialHearing {
    pub fn hearing_date(&self) -> Option<NaiveDate> {
        self.date_of_hearing
            .as_deref()
            .and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedOffence {
    pub id: Uuid,
    pub cjs_offence_code: String,
    #[serde(default)]
    pub order_index: Option<u32>,
    #[serde(default)]
    pub wording: String,
    #[serde(default)]
    pub wording_welsh: Option<String>,
    #[serde(default)]
    pub arrest_date: Option<NaiveDate>,
    #[serde(default)]
    pub charge_date: Option<NaiveDate>,
    pub committed_date: NaiveDate,
    #[serde(default)]
    pub committed_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub laid_date: Option<NaiveDate>,
    #[serde(default)]
    pub plea: Option<SubmittedPlea>,
    #[serde(default)]
    pub verdict: Option<SubmittedVerdict>,
    #[serde(default)]
    pub mode_of_trial_reason_id: Option<Uuid>,
    #[serde(default)]
    pub convicting_court_code: Option<String>,
    #[serde(default)]
    pub vehicle_code: Option<String>,
    #[serde(default)]
    pub vehicle_registration: Option<String>,
    #[serde(default)]
    pub alcohol_level_method: Option<String>,
    #[serde(default)]
    pub alcohol_level_amount: Option<u32>,
    #[serde(default)]
    pub statement_of_facts: Option<String>,
    #[serde(default)]
    pub statement_of_facts_welsh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedPlea {
    pub plea_value: String,
    pub plea_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedVerdict {
    pub category: String,
    #[serde(default)]
    pub category_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub verdict_date: NaiveDate,
}

/// Membership of a case in a group submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub group_id: Uuid,
    #[serde(default)]
    pub is_group_master: bool,
}

/// Fee statuses as typed in by the civil prosecutor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilFees {
    #[serde(default)]
    pub initial_fee_status: Option<String>,
    #[serde(default)]
    pub initial_payment_reference: Option<String>,
    #[serde(default)]
    pub contested_fee_status: Option<String>,
    #[serde(default)]
    pub contested_payment_reference: Option<String>,
}

/// Outcome recorded when a legal adviser approves a summons application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonsApprovedOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecutor_cost: Option<String>,
    #[serde(default)]
    pub personal_service: bool,
    #[serde(default)]
    pub summons_suppressed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prosecutor_emails: Vec<String>,
}

/// Listing request spelled out by the prosecutor instead of derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitHearingRequest {
    pub court_centre: CourtCentre,
    pub hearing_type: HearingType,
    pub jurisdiction_type: JurisdictionType,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub listed_start_date_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub earliest_start_date_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub booked_slots: Vec<BookedSlot>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub special_requirements: Vec<String>,
    #[serde(default)]
    pub defendant_listing_needs: Vec<ListDefendantRequest>,
}

/// Court application raised with the case, e.g. a summons application that
/// needs a box hearing before approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub application_id: Uuid,
    #[serde(default)]
    pub application_type_id: Option<Uuid>,
    pub received_date: NaiveDate,
    #[serde(default)]
    pub application_reference: Option<String>,
    #[serde(default)]
    pub particulars: Option<String>,
}
