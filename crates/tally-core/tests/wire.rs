#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::wire::{self, ErrorBody};
use tally_core::{ClientCode, TallyError};

#[test]
fn json_media_type_matching() {
    assert!(wire::is_json(Some("application/json")));
    assert!(wire::is_json(Some("Application/JSON; charset=utf-8")));
    assert!(!wire::is_json(Some("text/plain")));
    assert!(!wire::is_json(Some("application/json-patch+json")));
    assert!(!wire::is_json(None));
}

#[test]
fn whitespace_body_is_no_body() {
    let v: Option<serde_json::Value> = wire::decode_optional(None, b"  \n").unwrap();
    assert!(v.is_none());
}

#[test]
fn status_codes_are_stable() {
    let cases = [
        (TallyError::BadRequest("x".into()), 400, "BAD_REQUEST"),
        (TallyError::NotFound("x".into()), 404, "NOT_FOUND"),
        (TallyError::MethodNotAllowed("x".into()), 405, "METHOD_NOT_ALLOWED"),
        (TallyError::Conflict("x".into()), 409, "CONFLICT"),
        (TallyError::PayloadTooLarge("x".into()), 413, "PAYLOAD_TOO_LARGE"),
        (TallyError::UnsupportedMediaType("x".into()), 415, "UNSUPPORTED_MEDIA_TYPE"),
        (TallyError::Internal("x".into()), 500, "INTERNAL"),
    ];
    for (err, status, code) in cases {
        assert_eq!(err.http_status(), status);
        assert_eq!(err.client_code().as_str(), code);
    }
    assert_eq!(ClientCode::UnsupportedVersion.http_status(), 400);
}

#[test]
fn error_body_shape() {
    let err = TallyError::NotFound("counter 'foo' was not found".into());
    let body = ErrorBody::from(&err);
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(v["status"], 404);
    assert_eq!(v["error"], "NOT_FOUND");
    assert_eq!(v["message"], "counter 'foo' was not found");
}
