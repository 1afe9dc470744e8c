use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

struct FixedTransport {
    reply: Result<RawReply, SubmitError>,
    seen: RefCell<Vec<(String, ContactRequest)>>,
}

impl FixedTransport {
    fn new(reply: Result<RawReply, SubmitError>) -> Self {
        Self { reply, seen: RefCell::new(Vec::new()) }
    }
}

impl ContactTransport for FixedTransport {
    async fn post_json(&self, url: &str, request: &ContactRequest) -> Result<RawReply, SubmitError> {
        self.seen.borrow_mut().push((url.to_owned(), request.clone()));
        self.reply.clone()
    }
}

fn sample_request() -> ContactRequest {
    ContactRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Let's talk".to_owned(),
    }
}

// =============================================================
// interpret_reply
// =============================================================

#[test]
fn interpret_reply_accepts_success_true() {
    assert_eq!(interpret_reply(&RawReply::new(200, r#"{"success":true}"#)), Ok(()));
}

#[test]
fn interpret_reply_accepts_truthy_success_with_extra_fields() {
    let reply = RawReply::new(201, r#"{"success":1,"message":"queued"}"#);
    assert_eq!(interpret_reply(&reply), Ok(()));
}

#[test]
fn interpret_reply_rejects_server_error_status() {
    let err = interpret_reply(&RawReply::new(500, r#"{"success":true}"#)).unwrap_err();
    assert_eq!(err, SubmitError::NonSuccessResponse { status: 500 });
}

#[test]
fn interpret_reply_rejects_non_json_body() {
    let err = interpret_reply(&RawReply::new(200, "<html>oops</html>")).unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

#[test]
fn interpret_reply_rejects_false_success() {
    let err = interpret_reply(&RawReply::new(200, r#"{"success":false}"#)).unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

#[test]
fn interpret_reply_rejects_missing_success() {
    let err = interpret_reply(&RawReply::new(200, r#"{"status":"ok"}"#)).unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

// =============================================================
// SubmitError
// =============================================================

#[test]
fn user_message_is_the_same_for_every_failure() {
    let errors = [
        SubmitError::NetworkUnreachable("dns".to_owned()),
        SubmitError::NonSuccessResponse { status: 502 },
        SubmitError::MalformedResponse("eof".to_owned()),
    ];
    for err in errors {
        assert_eq!(err.user_message(), "Failed to send message. Please try again later.");
    }
}

#[test]
fn html_bodies_get_the_generic_notice() {
    let gateway_ok = interpret_reply(&RawReply::new(200, "<html>gateway</html>")).unwrap_err();
    assert!(matches!(gateway_ok, SubmitError::MalformedResponse(_)));
    assert_eq!(gateway_ok.user_message(), FAILURE_MESSAGE);

    let bad_gateway = interpret_reply(&RawReply::new(502, "<html>bad gateway</html>")).unwrap_err();
    assert_eq!(bad_gateway, SubmitError::NonSuccessResponse { status: 502 });
    assert_eq!(bad_gateway.user_message(), FAILURE_MESSAGE);
}

#[test]
fn display_keeps_diagnostic_detail() {
    let err = SubmitError::NonSuccessResponse { status: 503 };
    assert_eq!(err.to_string(), "contact service returned status 503");
}

// =============================================================
// submit_contact
// =============================================================

#[test]
fn submit_contact_posts_once_to_endpoint() {
    let transport = FixedTransport::new(Ok(RawReply::new(200, r#"{"success":true}"#)));
    let result = block_on(submit_contact(&transport, "https://api.example.test/contact", &sample_request()));
    assert_eq!(result, Ok(()));

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "https://api.example.test/contact");
    assert_eq!(seen[0].1, sample_request());
}

#[test]
fn submit_contact_propagates_transport_error() {
    let transport = FixedTransport::new(Err(SubmitError::NetworkUnreachable("refused".to_owned())));
    let result = block_on(submit_contact(&transport, "/contact", &sample_request()));
    assert_eq!(result, Err(SubmitError::NetworkUnreachable("refused".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_is_unreachable_outside_browser() {
    let result = block_on(HttpTransport.post_json("/contact", &sample_request()));
    assert!(matches!(result, Err(SubmitError::NetworkUnreachable(_))));
}
