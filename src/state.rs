//! Shared application state for all routes.

use crate::service::PetRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Single long-lived store handle, read-only after startup.
    pub pets: Arc<dyn PetRepository>,
}

impl AppState {
    pub fn new(pets: impl PetRepository + 'static) -> Self {
        Self { pets: Arc::new(pets) }
    }
}
