//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each section owns a plain state struct held in an `RwSignal`. The structs
//! have no Leptos dependency so every transition is unit-testable.

pub mod contact;
pub mod gallery;
pub mod toast;
