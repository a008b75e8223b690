use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::projections::summary_view::summary_hours;
use crate::modules::attendance::use_cases::month_summary::inbound::graphql::GqlSummaryHours;
use crate::modules::attendance::use_cases::submit_month_closure::command::SubmitMonthClosure;
use crate::modules::attendance::use_cases::submit_month_closure::handler::SubmittedClosure;
use crate::shared::core::month_key::MonthKey;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthClosure {
    pub user_id: String,
    pub month: String,
    pub submitted_at: String,
    pub resubmission: bool,
    pub totals: GqlSummaryHours,
    pub worked_day_count: u32,
}

impl From<SubmittedClosure> for GqlMonthClosure {
    fn from(v: SubmittedClosure) -> Self {
        Self {
            user_id: v.closure.user_id,
            month: v.closure.month.to_string(),
            submitted_at: v.closure.submitted_at.to_rfc3339(),
            resubmission: v.resubmission,
            totals: summary_hours(&v.period.totals).into(),
            worked_day_count: v.period.worked_day_count,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_month_closure(
        &self,
        context: &Context<'_>,
        user_id: String,
        month: String,
    ) -> GqlResult<GqlMonthClosure> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let month: MonthKey = month.parse()?;

        let command = SubmitMonthClosure {
            actor: actor.clone(),
            user_id,
            month,
            submitted_at: Utc::now(),
        };

        let submitted = state
            .submit_month_closure
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(submitted.into())
    }
}
