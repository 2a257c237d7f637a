//! Thin orchestrations over the builders, one per produced command.

mod add_defendants;
mod application;
pub mod defence;
mod group;
mod single;
mod sjp;

pub use add_defendants::add_defendants;
pub use application::initiate_application_proceedings;
pub use group::{initiate_group_proceedings, GroupMember};
pub use single::initiate_court_proceedings;
pub use sjp::create_sjp_case;

use super::context::DerivationContext;
use super::domain::SubmittedCase;
use super::error::ConversionError;

fn require_defendants(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
) -> Result<(), ConversionError> {
    if case.defendants.is_empty() {
        return Err(ConversionError::missing_data(ctx.case_id, "no defendants on the submission"));
    }
    Ok(())
}
