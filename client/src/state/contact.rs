//! Contact form state machine.
//!
//! DESIGN
//! ======
//! A submission is split into `begin_submit`, which guards re-entrancy and
//! yields the request to send, and `complete`, which applies exactly one
//! transition for the outcome. Components run the network call between the
//! two inside a `spawn_local` task, because a signal cannot stay borrowed
//! across an await.
//!
//! ```text
//! Idle ──submit──▶ Pending ──ok──▶ Succeeded ──reset──▶ Idle
//!   ▲                 │
//!   │                 └──err──▶ Failed ──submit──▶ Pending
//! ```

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::toast::Notice;
use crate::net::api::SubmitError;
use crate::net::types::ContactRequest;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// One of the three form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Contact form state: field values plus submission status.
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub form: FormState,
    pub status: SubmissionStatus,
}

impl ContactFormState {
    /// Overwrite one field. No validation; the inputs carry `required`.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Enter `Pending` and return the request to send.
    ///
    /// Returns `None` while a submission is already in flight; the caller
    /// must then issue no request.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.is_pending() {
            return None;
        }
        self.status = SubmissionStatus::Pending;
        Some(self.form.to_request())
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// Returns the notice to surface, or `None` if nothing was pending.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) -> Option<Notice> {
        if !self.is_pending() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                Some(Notice::success(SUCCESS_MESSAGE))
            }
            Err(err) => {
                log::warn!("contact form submission failed: {err}");
                self.status = SubmissionStatus::Failed;
                Some(Notice::error(err.user_message()))
            }
        }
    }

    /// "Send another message": clear the fields and return to `Idle`.
    ///
    /// Only valid from `Succeeded`; returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if self.status != SubmissionStatus::Succeeded {
            return false;
        }
        self.form = FormState::default();
        self.status = SubmissionStatus::Idle;
        true
    }
}
