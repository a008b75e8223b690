// In memory implementation of the MonthlyClosureStore port.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::modules::attendance::core::ports::{MonthlyClosureStore, StoreError};
use crate::shared::core::month_key::MonthKey;

#[derive(Default)]
pub struct InMemoryMonthlyClosures {
    inner: RwLock<HashMap<(String, MonthKey), MonthlyClosure>>,
    is_offline: bool,
}

impl InMemoryMonthlyClosures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Closure store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MonthlyClosureStore for InMemoryMonthlyClosures {
    async fn upsert_closure(&self, closure: MonthlyClosure) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.insert(closure.key(), closure);
        Ok(())
    }

    async fn find_closure(
        &self,
        user_id: &str,
        month: MonthKey,
    ) -> Result<Option<MonthlyClosure>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(&(user_id.to_string(), month)).cloned())
    }

    async fn list_closures(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<MonthlyClosure>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut closures: Vec<MonthlyClosure> = guard
            .values()
            .filter(|closure| user_id.is_none_or(|user_id| closure.user_id == user_id))
            .cloned()
            .collect();
        closures.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(closures)
    }
}
