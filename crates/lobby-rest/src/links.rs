//! Absolute link generation for `Location` headers and pagination links.

use lobby_config::ServerConfig;
use lobby_core::UserId;

/// Path under which the users resource is mounted.
pub const USERS_PATH: &str = "/api/users";

/// Produces absolute URIs for the user operations.
pub trait LinkGenerator: Send + Sync {
    /// Link to the get-by-id operation.
    fn user(&self, id: UserId) -> String;

    /// Link to the list operation for one page.
    fn users_page(&self, page_number: usize, page_size: usize) -> String;
}

/// Links rooted at a fixed public base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlLinks {
    base: String,
}

impl BaseUrlLinks {
    /// Creates a generator for `base`. A trailing slash is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Creates a generator from the server's public URL.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.public_base())
    }
}

impl LinkGenerator for BaseUrlLinks {
    fn user(&self, id: UserId) -> String {
        format!("{}{}/{}", self.base, USERS_PATH, id)
    }

    fn users_page(&self, page_number: usize, page_size: usize) -> String {
        format!(
            "{}{}?pageNumber={}&pageSize={}",
            self.base, USERS_PATH, page_number, page_size
        )
    }
}
