//! Dependency injection module using Shaku.
//!
//! `UsersModule` owns the single in-memory repository instance for the
//! lifetime of the process and injects it into the user service.

use lobby_repository::InMemoryUserRepository;
use lobby_service::UserServiceImpl;
use shaku::module;
use std::sync::Arc;

module! {
    pub UsersModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the users module with an empty repository.
#[must_use]
pub fn build_users_module() -> Arc<UsersModule> {
    Arc::new(UsersModule::builder().build())
}
