//! Zeta Design - portfolio site interaction layer
//!
//! Project grid with per-card carousels, category filter chips, a project
//! detail modal, a mailto contact form and social embeds. The state lives in
//! [`SiteApp`]; the browser binding in `web` turns page events into
//! [`Message`]s and applies the returned [`Effect`]s.

pub mod app;
pub mod config;
pub mod constants;
pub mod contact;
pub mod embeds;
pub mod error;
pub mod filter;
pub mod grid;
mod handlers;
pub mod message;
pub mod modal;
pub mod model;
pub mod nav;
pub mod views;

pub use app::SiteApp;
pub use config::{LogLevel, SiteConfig};
pub use error::SiteError;
pub use message::{Effect, Message};
pub use model::{ProjectRecord, ProjectStore};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
