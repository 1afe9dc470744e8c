//! Contact submission transport and response interpretation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports the service as unreachable,
//! since a submission is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into a `SubmitError`. The variant is kept for
//! diagnostics only; the visitor sees the same notice for all of them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{ContactRequest, RawReply, is_truthy};

/// Notice text shown for any failed submission.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Why a contact submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("contact service unreachable: {0}")]
    NetworkUnreachable(String),

    /// The service answered with a status outside 2xx.
    #[error("contact service returned status {status}")]
    NonSuccessResponse { status: u16 },

    /// The service answered 2xx but the body was not a success payload.
    #[error("malformed contact response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Text shown to the visitor. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NetworkUnreachable(_) | Self::NonSuccessResponse { .. } | Self::MalformedResponse(_) => FAILURE_MESSAGE,
        }
    }
}

/// Seam between the contact state machine and the network.
///
/// Implementations perform one POST of `request` as JSON to `url` and hand
/// back the raw status and body. Interpretation happens in [`interpret_reply`].
pub trait ContactTransport {
    fn post_json(&self, url: &str, request: &ContactRequest) -> impl Future<Output = Result<RawReply, SubmitError>>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl ContactTransport for HttpTransport {
    async fn post_json(&self, url: &str, request: &ContactRequest) -> Result<RawReply, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(request)
                .map_err(|e| SubmitError::NetworkUnreachable(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::NetworkUnreachable(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
            Ok(RawReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(SubmitError::NetworkUnreachable("not available on server".to_owned()))
        }
    }
}

/// Decide whether a reply counts as a successful submission.
///
/// Success needs a 2xx status and a JSON body with a truthy `success` member.
///
/// # Errors
///
/// Returns `NonSuccessResponse` for any other status and `MalformedResponse`
/// when the body is not JSON or lacks a truthy `success`.
pub fn interpret_reply(reply: &RawReply) -> Result<(), SubmitError> {
    if !reply.is_ok() {
        return Err(SubmitError::NonSuccessResponse { status: reply.status });
    }
    let body: serde_json::Value =
        serde_json::from_str(&reply.body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
    if body.get("success").is_some_and(is_truthy) {
        Ok(())
    } else {
        Err(SubmitError::MalformedResponse("response lacks a truthy `success`".to_owned()))
    }
}

/// POST `request` to `endpoint` through `transport` and interpret the reply.
///
/// # Errors
///
/// Propagates transport failures and any rejection from [`interpret_reply`].
pub async fn submit_contact<T: ContactTransport>(
    transport: &T,
    endpoint: &str,
    request: &ContactRequest,
) -> Result<(), SubmitError> {
    let reply = transport.post_json(endpoint, request).await?;
    interpret_reply(&reply)
}
