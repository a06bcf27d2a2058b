//! Utility modules

pub mod constants;
pub mod format;
pub mod icons;
