//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`portfolio`] - Aggregate portfolio payload and section types
//! - [`contact`] - Contact form submission DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional sections**: `Option<T>` with `#[serde(default)]`, so a
//!   payload that omits a section still deserializes
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`,
//!   with an `Other` catch-all so unknown values never fail the whole payload

pub mod contact;
pub mod portfolio;

pub use contact::*;
pub use portfolio::*;
