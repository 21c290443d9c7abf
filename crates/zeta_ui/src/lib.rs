//! zeta_ui - interaction primitives for the Zeta Design portfolio site
//!
//! This crate holds the renderer-independent half of the site: carousel index
//! transitions, the modal lifecycle (focus capture and scroll lock), exclusive
//! chip selection and hit-region classification. Nothing here touches the DOM;
//! the site crate turns the results into effects for its browser binding.

mod application;
pub mod constants;
mod event;
mod state;
mod widgets;

pub use application::{Application, Host};
pub use event::{EventStatus, HitTest, Key};
pub use state::*;
pub use widgets::carousel::{handle_click as handle_carousel_click, CarouselHit};
pub use widgets::modal::ModalHit;

