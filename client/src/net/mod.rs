//! Networking modules for the contact submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and response interpretation, `types`
//! defines the wire schema shared with the external contact service.

pub mod api;
pub mod types;
