use std::sync::Arc;

use tracing::{info, warn};

use super::commands::{InitiateCourtProceedings, ProceedingsCommand};
use super::context::{ConversionParameters, DerivationContext};
use super::domain::{SubmissionChannel, SubmittedCase};
use super::error::ConversionError;
use super::pipeline::{self, GroupMember};
use super::reference::{ReferenceDataAccessor, ReferenceDataBundle, ReferenceTables};
use crate::config::ConversionConfig;

/// Entry point for the transport boundary: builds the per-case reference
/// snapshot and routes each submission to its pipeline.
pub struct CaseConverter<A> {
    accessor: Arc<A>,
    tables: ReferenceTables,
    config: ConversionConfig,
}

impl<A> CaseConverter<A>
where
    A: ReferenceDataAccessor + 'static,
{
    pub fn new(accessor: Arc<A>, tables: ReferenceTables, config: ConversionConfig) -> Self {
        Self {
            accessor,
            tables,
            config,
        }
    }

    /// Convert one submission.
    ///
    /// Single justice procedure cases become `CreateSjpCase`; cases carrying
    /// an application go to a box hearing; everything else initiates
    /// proceedings, followed by any defence notifications.
    pub fn convert(
        &self,
        case: &SubmittedCase,
        parameters: &ConversionParameters,
    ) -> Result<Vec<ProceedingsCommand>, ConversionError> {
        info!(
            case_id = %case.case_id,
            channel = case.channel.label(),
            initiation_code = case.initiation_code.code(),
            "converting submitted case"
        );

        let reference = self.reference_for(case)?;
        let ctx = DerivationContext::build(case, &reference, self.accessor.as_ref(), parameters);

        let result: Result<Vec<ProceedingsCommand>, ConversionError> =
            if case.channel == SubmissionChannel::SingleJusticeProcedure {
                pipeline::create_sjp_case(&ctx, case).map(|command| vec![command.into()])
            } else if case.application.is_some() {
                pipeline::initiate_application_proceedings(&ctx, case, &self.config)
                    .map(|command| vec![command.into()])
            } else {
                pipeline::initiate_court_proceedings(&ctx, case, &self.config)
                    .map(|command| with_defence_notifications(case, command))
            };

        self.log_outcome(case, &result);
        result
    }

    /// Convert a group submission. `Ok(None)` when no case is flagged as master.
    pub fn convert_group(
        &self,
        cases: &[SubmittedCase],
        parameters: &ConversionParameters,
    ) -> Result<Option<ProceedingsCommand>, ConversionError> {
        let references = cases
            .iter()
            .map(|case| self.reference_for(case))
            .collect::<Result<Vec<_>, _>>()?;
        let members: Vec<GroupMember<'_>> = cases
            .iter()
            .zip(references.iter())
            .map(|(case, reference)| GroupMember { case, reference })
            .collect();

        let command = pipeline::initiate_group_proceedings(
            &members,
            self.accessor.as_ref(),
            parameters,
            &self.config,
        )?;

        match command.as_ref() {
            Some(command) => info!(
                group_id = %command.group_id,
                master_case_id = %command.master_case_id,
                cases = command.prosecution_cases.len(),
                "group submission converted"
            ),
            None => info!(
                cases = cases.len(),
                "group submission produced no command"
            ),
        }

        Ok(command.map(ProceedingsCommand::InitiateCourtProceedingsForGroupCases))
    }

    /// Convert defendants added to a case already in progression.
    pub fn add_defendants(
        &self,
        case: &SubmittedCase,
        parameters: &ConversionParameters,
    ) -> Result<ProceedingsCommand, ConversionError> {
        let reference = self.reference_for(case)?;
        let ctx = DerivationContext::build(case, &reference, self.accessor.as_ref(), parameters);

        let command = pipeline::add_defendants(&ctx, case, &self.config)?;
        info!(
            case_id = %case.case_id,
            defendants = command.defendants.len(),
            "defendants converted for existing case"
        );

        Ok(ProceedingsCommand::AddDefendantsToCourtProceedings(command))
    }

    fn reference_for(&self, case: &SubmittedCase) -> Result<ReferenceDataBundle, ConversionError> {
        let accessor = self.accessor.as_ref();
        let bundle = ReferenceDataBundle::for_case(self.tables.clone(), accessor, case)?;
        Ok(bundle)
    }

    fn log_outcome(
        &self,
        case: &SubmittedCase,
        result: &Result<Vec<ProceedingsCommand>, ConversionError>,
    ) {
        match result {
            Ok(commands) => info!(
                case_id = %case.case_id,
                commands = ?commands.iter().map(ProceedingsCommand::name).collect::<Vec<_>>(),
                "case converted"
            ),
            Err(error) => warn!(case_id = %case.case_id, %error, "case conversion failed"),
        }
    }
}

fn with_defence_notifications(
    case: &SubmittedCase,
    command: InitiateCourtProceedings,
) -> Vec<ProceedingsCommand> {
    let notifications =
        pipeline::defence::notifications(case, &command.prosecution_case.defendants);

    let mut commands = Vec::with_capacity(notifications.len() + 1);
    commands.push(command.into());
    commands.extend(
        notifications
            .into_iter()
            .map(ProceedingsCommand::NotifyDefenceOfNewCase),
    );
    commands
}
