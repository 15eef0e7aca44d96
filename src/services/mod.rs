//! Business logic layer.
//!
//! Category navigation and the hero slideshow timer. Called by the
//! `commands` layer; persistence is delegated to the `storage` layer.

pub mod navigation;
pub mod slideshow;
