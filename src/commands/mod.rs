//! Command implementations for Kiln CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod provision;
pub mod resolve;
pub mod version;
