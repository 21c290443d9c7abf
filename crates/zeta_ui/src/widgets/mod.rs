//! Hit classification and event ownership for the interactive regions.

pub mod carousel;
pub mod modal;
