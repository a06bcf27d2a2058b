//! Backend API services

pub mod portfolio;

pub use portfolio::{fetch_portfolio, submit_contact};
