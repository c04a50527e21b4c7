use crate::{
    AppResult,
    store::{StatusStore, StoreError},
};

use super::{ClientName, StatusCheck};

/// Upper bound on how many records a single listing returns.
pub const LIST_LIMIT: u32 = 1000;

#[derive(Clone)]
pub struct StatusService {
    store: StatusStore,
}

impl StatusService {
    pub fn new(store: StatusStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, client_name: Option<String>) -> AppResult<StatusCheck> {
        let client_name = ClientName::try_from(client_name)?;
        if !self.store.is_connected() {
            return Err(StoreError::Unavailable.into());
        }

        let record = StatusCheck::new(client_name);
        self.store.insert(&record).await?;
        Ok(record)
    }

    pub async fn list(&self) -> AppResult<Vec<StatusCheck>> {
        if !self.store.is_connected() {
            return Err(StoreError::Unavailable.into());
        }

        Ok(self.store.list_all(LIST_LIMIT).await?)
    }
}
