//! Dashboard modules
//!
//! - views: pure selection → display tree rendering
//! - export: CSV and JSON export of the static tables

pub mod export;
pub mod views;
