//! Translation of request failures into the external error contract
//!
//! Every failure that escapes a handler ends up here and leaves as an HTTP
//! status plus an [`ErrorResponse`]. Translation is a pure function: no
//! state is shared between calls and every call builds its own envelope.

#![allow(clippy::must_use_candidate)]

mod classify;
mod failure;
pub mod json;
pub mod vendor;

use dbfront_core::{ErrorResponse, HttpError};
use http::StatusCode;

pub use classify::classify;
pub use failure::{Category, Failure, InternalKind};
pub use json::{BodyCause, PathSegment, UnreadableBody};
pub use vendor::{ClientError, SqlError, StatementError};

/// Translate a failure into its status and a freshly built envelope
pub fn translate(failure: &Failure) -> (StatusCode, ErrorResponse) {
    (failure.status_code(), failure.to_error_response())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    const ALLOWED: [u16; 7] = [400, 401, 404, 405, 409, 415, 500];

    fn sample_failures() -> Vec<Failure> {
        vec![
            Failure::unclassified("boom"),
            Failure::unclassified(""),
            Failure::bad_request("bad id"),
            Failure::unauthorized("no token"),
            Failure::not_found("no table"),
            Failure::conflict("exists"),
            Failure::UnsupportedMediaType("text/plain".to_owned()),
            Failure::MethodNotAllowed("PATCH".to_owned()),
            UnreadableBody::mapping(
                vec![PathSegment::Field("rows".to_owned()), PathSegment::Index(0)],
                "invalid type",
            )
            .into(),
            UnreadableBody::syntax("expected value").into(),
            UnreadableBody::new("unreadable", BodyCause::Unknown).into(),
            Failure::internal(InternalKind::Encoding, "bad utf-8"),
            SqlError::new(42, "syntax error").into(),
            ClientError::new(10005, "auth").into(),
            ClientError::new(1008, "bad input").into(),
            ClientError::new(99999, "unknown").into(),
            StatementError::new(10100, "auth").into(),
            StatementError::new(99999, "unknown").into(),
        ]
    }

    #[test]
    fn every_status_is_in_the_contract() {
        for failure in sample_failures() {
            let (status, _) = translate(&failure);
            assert!(ALLOWED.contains(&status.as_u16()), "{failure:?} -> {status}");
        }
    }

    #[test]
    fn client_code_table() {
        let (status, body) = translate(&ClientError::new(10005, "auth").into());
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error_code, 10005);

        let (status, body) = translate(&ClientError::new(1008, "bad input").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error_code, 1008);

        let (status, body) = translate(&ClientError::new(99999, "unknown").into());
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error_code, 99999);
        assert_eq!(body.error_message.as_deref(), Some("unknown"));
    }

    #[test]
    fn statement_code_table() {
        let (status, _) = translate(&StatementError::new(10100, "auth").into());
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = translate(&StatementError::new(99999, "unknown").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error_code, 99999);
    }

    #[test]
    fn sql_code_passes_through() {
        let (status, body) = translate(&SqlError::new(42, "syntax error").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorResponse::new(42, Some("syntax error".to_owned())));
    }

    #[test]
    fn mapping_path_message() {
        let failure = UnreadableBody::mapping(
            vec![
                PathSegment::Field("name".to_owned()),
                PathSegment::Index(2),
                PathSegment::Field("value".to_owned()),
            ],
            "invalid type: string, expected i64",
        )
        .into();

        let (status, body) = translate(&failure);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error_code, 0);
        assert_eq!(
            body.error_message.as_deref(),
            Some("Mapping JSON data error at  field 'name' object 3 field 'value'")
        );
    }

    #[test]
    fn fallback_without_message() {
        let (status, body) = translate(&Failure::unclassified(""));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorResponse::new(0, None));
    }

    #[test]
    fn translation_is_idempotent() {
        for failure in sample_failures() {
            assert_eq!(translate(&failure), translate(&failure.clone()));
        }
    }

    #[test]
    fn concurrent_translation_matches_sequential() {
        let failures = sample_failures();
        let expected: Vec<_> = failures.iter().map(translate).collect();

        let actual: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = failures
                .iter()
                .map(|failure| {
                    scope.spawn(move || {
                        (0..1000)
                            .map(|_| translate(failure))
                            .reduce(|first, next| {
                                assert_eq!(first, next);
                                first
                            })
                            .unwrap()
                    })
                })
                .collect();

            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(actual, expected);
    }
}
