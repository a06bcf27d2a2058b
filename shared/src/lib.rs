//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the portfolio frontend and
//! the backend API. All DTOs use `serde` for (de)serialization.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::portfolio`]**: The aggregate `GET /api/portfolio/` payload and
//!     its per-section types (profile, skills, projects, ...)
//!   - **[`dto::contact`]**: The `POST /api/contact/` request/response pair
//! - **[`utils`]**: Small helpers shared between sections (display names,
//!   tag lists)
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to snake_case JSON
//!   by default
//! - Every section of the portfolio payload is optional: an absent field
//!   means "the frontend keeps its default content", not "render empty"
//! - Dates arrive as ISO-8601 strings and deserialize into
//!   `chrono::NaiveDate` / `chrono::NaiveDateTime`

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience; shared is a DTO library
// where all exports are meant to be public API.
pub use dto::*;
pub use utils::*;
