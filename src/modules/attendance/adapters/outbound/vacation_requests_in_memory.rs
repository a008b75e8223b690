// In memory implementation of the VacationRequestStore port.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::attendance::core::ports::{
    StoreError, VacationRequestFilter, VacationRequestStore,
};
use crate::modules::attendance::core::vacation_request::VacationRequest;

#[derive(Default)]
pub struct InMemoryVacationRequests {
    inner: RwLock<HashMap<String, VacationRequest>>,
    is_offline: bool,
}

impl InMemoryVacationRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Vacation store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl VacationRequestStore for InMemoryVacationRequests {
    async fn insert_request(&self, request: VacationRequest) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(&request.id) {
            return Err(StoreError::Duplicate { key: request.id });
        }
        guard.insert(request.id.clone(), request);
        Ok(())
    }

    async fn find_request(&self, id: &str) -> Result<Option<VacationRequest>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(id).cloned())
    }

    async fn update_request(&self, request: VacationRequest) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.get_mut(&request.id) {
            Some(existing) => {
                *existing = request;
                Ok(())
            }
            None => Err(StoreError::NotFound { key: request.id }),
        }
    }

    async fn list_requests(
        &self,
        filter: &VacationRequestFilter,
    ) -> Result<Vec<VacationRequest>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut requests: Vec<VacationRequest> = guard
            .values()
            .filter(|request| filter.matches(request))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(requests)
    }
}
