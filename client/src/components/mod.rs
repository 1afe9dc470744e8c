//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections. Each section owns its state
//! signal; only the toast stack is shared through context.

pub mod contact_section;
pub mod project_card;
pub mod project_modal;
pub mod project_showcase;
pub mod toast_stack;
