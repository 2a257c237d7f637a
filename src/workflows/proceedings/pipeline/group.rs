use tracing::{debug, warn};

use super::super::assembler::build_prosecution_case;
use super::super::commands::InitiateCourtProceedingsForGroupCases;
use super::super::context::{ConversionParameters, DerivationContext};
use super::super::domain::SubmittedCase;
use super::super::error::ConversionError;
use super::super::hearing::build_hearing_requests;
use super::super::party::build_defendants;
use super::super::reference::{ReferenceDataAccessor, ReferenceDataBundle};
use super::require_defendants;
use crate::config::ConversionConfig;

/// One case of a group submission with the reference snapshot built for it.
#[derive(Debug, Clone, Copy)]
pub struct GroupMember<'a> {
    pub case: &'a SubmittedCase,
    pub reference: &'a ReferenceDataBundle,
}

/// Every member becomes a prosecution case; only the master case is listed.
///
/// A group without a master yields `Ok(None)` rather than an error. The master
/// may arrive without defendants; every other member needs at least one.
pub fn initiate_group_proceedings(
    members: &[GroupMember<'_>],
    accessor: &dyn ReferenceDataAccessor,
    parameters: &ConversionParameters,
    config: &ConversionConfig,
) -> Result<Option<InitiateCourtProceedingsForGroupCases>, ConversionError> {
    let Some(master) = members.iter().find(|member| member.case.is_group_master()) else {
        warn!(
            members = members.len(),
            "group submission has no master case, nothing to initiate"
        );
        return Ok(None);
    };

    let Some(group_id) = master.case.group.as_ref().map(|group| group.group_id) else {
        return Ok(None);
    };

    let mut prosecution_cases = Vec::with_capacity(members.len());
    let mut list_hearing_requests = Vec::new();

    for member in members {
        let ctx = DerivationContext::build(member.case, member.reference, accessor, parameters);
        let is_master = member.case.case_id == master.case.case_id;
        if !is_master {
            require_defendants(&ctx, member.case)?;
        }

        let defendants = build_defendants(&ctx, &member.case.defendants)?;
        if is_master {
            list_hearing_requests = build_hearing_requests(
                &ctx,
                &member.case.defendants,
                config.default_hearing_minutes,
            )?;
        }

        prosecution_cases.push(build_prosecution_case(&ctx, member.case, defendants)?);
    }

    debug!(%group_id, cases = prosecution_cases.len(), "group cases assembled");

    Ok(Some(InitiateCourtProceedingsForGroupCases {
        group_id,
        master_case_id: master.case.case_id,
        prosecution_cases,
        list_hearing_requests,
    }))
}
