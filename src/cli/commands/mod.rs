//! Command implementations

pub mod completions;
pub mod list;
pub mod menu;
pub mod register;
