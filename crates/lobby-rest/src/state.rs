//! Application state for Axum handlers.

use crate::links::LinkGenerator;
use lobby_service::UserService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub links: Arc<dyn LinkGenerator>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, links: Arc<dyn LinkGenerator>) -> Self {
        Self {
            user_service,
            links,
        }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M, links: Arc<dyn LinkGenerator>) -> Self
    where
        M: Module + HasComponent<dyn UserService>,
    {
        Self::new(module.resolve(), links)
    }
}
