//! Data models for the country explorer.
//!
//! Plain data shared across layers: browse categories, landing-page content,
//! and persisted settings. Favorites are a bare list of country codes and
//! need no model of their own.

pub mod category;
pub mod home;
pub mod settings;

/// Opaque country identifier as stored in the favorites list.
pub type CountryCode = String;
