//! Data models for the Zeta Design site.

mod project;
mod store;

pub use project::{ProjectRecord, Year};
pub use store::ProjectStore;
