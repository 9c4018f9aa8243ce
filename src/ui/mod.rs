//! Terminal output
//!
//! Views return strings; commands decide where to print them.

pub mod context;
pub mod error;
pub mod header;
pub mod icon;
pub mod terminal;
pub mod theme;
pub mod views;
