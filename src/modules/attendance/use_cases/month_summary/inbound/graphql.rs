use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::projections::summary_view::{
    SummaryHours, SummaryRow, SummaryView, summary_view,
};
use crate::shared::core::month_key::MonthKey;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSummaryHours {
    pub total: String,
    pub overtime: String,
    pub shortfall: String,
    pub vacation: String,
}

impl From<SummaryHours> for GqlSummaryHours {
    fn from(v: SummaryHours) -> Self {
        Self {
            total: v.total,
            overtime: v.overtime,
            shortfall: v.shortfall,
            vacation: v.vacation,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSummaryRow {
    pub date: String,
    pub status: String,
    pub hours: GqlSummaryHours,
    pub notes: String,
}

impl From<SummaryRow> for GqlSummaryRow {
    fn from(v: SummaryRow) -> Self {
        Self {
            date: v.date.to_string(),
            status: v.status.as_str().to_string(),
            hours: v.hours.into(),
            notes: v.notes,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthSummary {
    pub month: String,
    pub rows: Vec<GqlSummaryRow>,
    pub totals: GqlSummaryHours,
    pub worked_day_count: u32,
}

impl From<SummaryView> for GqlMonthSummary {
    fn from(v: SummaryView) -> Self {
        Self {
            month: v.month.to_string(),
            rows: v.rows.into_iter().map(Into::into).collect(),
            totals: v.totals.into(),
            worked_day_count: v.worked_day_count,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn month_summary(
        &self,
        context: &Context<'_>,
        user_id: String,
        month: String,
    ) -> GqlResult<GqlMonthSummary> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let month: MonthKey = month.parse()?;

        let period = state
            .month_summary
            .handle(actor, &user_id, month)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary_view(month, &period).into())
    }
}
