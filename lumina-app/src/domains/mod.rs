//! Stateful domains of the application shell.

pub mod access;
pub mod listing;
pub mod locale;
