//! Top-level routed pages.

pub mod home;
pub mod projects;
