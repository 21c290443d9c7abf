//! View-models and their markup.
//!
//! Views are pure functions of a record and its interaction state. Nothing in
//! this module touches the page.

mod card;
mod detail;
pub mod markup;

pub use card::{CardView, CarouselView, ImageView, IndicatorView};
pub use detail::{DetailView, MainImage, ThumbView, main_image};
