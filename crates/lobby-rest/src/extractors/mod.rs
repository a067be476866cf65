//! Custom Axum extractors.

mod accept;
mod body;
mod pagination;

pub use accept::*;
pub use body::*;
pub use pagination::*;
