use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::domain::{
    ExplicitHearingRequest, InitiationCode, SubmissionChannel, SubmittedCase,
    SummonsApprovedOutcome,
};
use super::reference::{ReferenceDataAccessor, ReferenceDataBundle};

/// Per-call inputs that do not travel on the submission itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionParameters {
    /// Custody time limit computed by the custody timeline upstream.
    pub custody_time_limit: Option<NaiveDate>,
    pub now: DateTime<Utc>,
}

impl ConversionParameters {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            custody_time_limit: None,
            now,
        }
    }

    pub fn with_custody_time_limit(mut self, limit: NaiveDate) -> Self {
        self.custody_time_limit = Some(limit);
        self
    }
}

/// Everything the derivation rules read, assembled once per case.
#[derive(Clone, Copy)]
pub struct DerivationContext<'a> {
    pub case_id: Uuid,
    pub channel: SubmissionChannel,
    pub initiation_code: InitiationCode,
    pub civil: bool,
    pub originating_court_code: &'a str,
    pub received_from_court_code: Option<&'a str>,
    pub reference: &'a ReferenceDataBundle,
    pub accessor: &'a dyn ReferenceDataAccessor,
    pub custody_time_limit: Option<NaiveDate>,
    pub summons_approved: Option<&'a SummonsApprovedOutcome>,
    pub new_hearing: Option<&'a ExplicitHearingRequest>,
    pub now: DateTime<Utc>,
}

impl<'a> DerivationContext<'a> {
    pub fn build(
        case: &'a SubmittedCase,
        reference: &'a ReferenceDataBundle,
        accessor: &'a dyn ReferenceDataAccessor,
        parameters: &ConversionParameters,
    ) -> Self {
        Self {
            case_id: case.case_id,
            channel: case.channel,
            initiation_code: case.initiation_code,
            civil: case.civil(),
            originating_court_code: case.originating_organisation.as_str(),
            received_from_court_code: case
                .received_from_court_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty()),
            reference,
            accessor,
            custody_time_limit: parameters.custody_time_limit,
            summons_approved: case.summons_approval.as_ref(),
            new_hearing: case.new_hearing.as_ref(),
            now: parameters.now,
        }
    }

    pub fn is_magistrates_submission(&self) -> bool {
        self.channel == SubmissionChannel::MagistratesSubmission
    }

    pub fn is_trial_or_committal(&self) -> bool {
        self.initiation_code == InitiationCode::TrialOrCommittalForSentence
    }
}
