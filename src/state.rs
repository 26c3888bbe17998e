// src/state.rs
// Shared application state handed to every request handler

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::EntityStore;

/// Source of the calendar date used for overdue checks
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Current UTC date
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Entity store. Inserts go through the write lock so the duplicate-id
    /// check and the insert happen as one step.
    store: Arc<RwLock<EntityStore>>,
    clock: Clock,
}

impl AppState {
    pub fn new(store: EntityStore) -> Self {
        Self::with_clock(store, Arc::new(utc_today))
    }

    pub fn with_clock(store: EntityStore, clock: Clock) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock,
        }
    }

    /// Consistent read-only view of the store
    pub async fn read(&self) -> RwLockReadGuard<'_, EntityStore> {
        self.store.read().await
    }

    /// Exclusive access for inserts
    pub async fn write(&self) -> RwLockWriteGuard<'_, EntityStore> {
        self.store.write().await
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
