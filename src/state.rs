// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, store::Datastore};

/// Process-wide handle to the store, shared by every request.
pub type SharedStore = Arc<dyn Datastore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
