//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (scrolling, HTML rendering) from
//! component logic so they can be tested without a DOM.

pub mod markdown;
pub mod scroll;
