//! Classification of opaque error chains into the failure taxonomy
//!
//! Handlers are free to bubble up `anyhow::Error`. Each rule below looks at
//! every layer of the error, both values attached with `.context(..)` and
//! the `source()` chain, before the next rule runs. A more specific failure
//! buried under context therefore still wins over a generic one on top.

use std::fmt::{Debug, Display};

use crate::failure::{Failure, InternalKind};
use crate::json::UnreadableBody;
use crate::vendor::{ClientError, SqlError, StatementError};

type Rule = fn(&anyhow::Error) -> Option<Failure>;

/// Rules in priority order, most specific first
const RULES: [Rule; 6] = [
    unreadable_body,
    database_client,
    sql_layer,
    application,
    bad_request_shaped,
    internal,
];

/// Classify an error chain, falling back to [`Failure::Unclassified`]
pub fn classify(error: &anyhow::Error) -> Failure {
    RULES
        .iter()
        .find_map(|rule| rule(error))
        .unwrap_or_else(|| Failure::unclassified(error.to_string()))
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        classify(&error)
    }
}

/// Find the outermost `T` in the error
///
/// `anyhow::Error::downcast_ref` sees context values and the root error,
/// the chain walk covers errors only reachable through `source()`.
fn find<T>(error: &anyhow::Error) -> Option<&T>
where
    T: std::error::Error + Display + Debug + Send + Sync + 'static,
{
    error
        .downcast_ref::<T>()
        .or_else(|| error.chain().find_map(|cause| cause.downcast_ref::<T>()))
}

fn message_of<T>(error: &anyhow::Error) -> Option<String>
where
    T: std::error::Error + Display + Debug + Send + Sync + 'static,
{
    find::<T>(error).map(ToString::to_string)
}

fn unreadable_body(error: &anyhow::Error) -> Option<Failure> {
    if let Some(body) = find::<UnreadableBody>(error) {
        return Some(body.clone().into());
    }
    match find::<Failure>(error) {
        Some(Failure::UnreadableBody(body)) => Some(body.clone().into()),
        _ => None,
    }
}

fn database_client(error: &anyhow::Error) -> Option<Failure> {
    if let Some(statement) = find::<StatementError>(error) {
        return Some(statement.clone().into());
    }
    find::<ClientError>(error).map(|client| client.clone().into())
}

fn sql_layer(error: &anyhow::Error) -> Option<Failure> {
    find::<SqlError>(error).map(|sql| sql.clone().into())
}

/// Failures raised directly by application code
fn application(error: &anyhow::Error) -> Option<Failure> {
    find::<Failure>(error).cloned()
}

fn bad_request_shaped(error: &anyhow::Error) -> Option<Failure> {
    message_of::<std::num::ParseIntError>(error)
        .or_else(|| message_of::<std::num::ParseFloatError>(error))
        .or_else(|| message_of::<std::str::ParseBoolError>(error))
        .or_else(|| message_of::<std::num::TryFromIntError>(error))
        .or_else(|| message_of::<std::io::Error>(error))
        .map(Failure::bad_request)
}

fn internal(error: &anyhow::Error) -> Option<Failure> {
    if let Some(message) = message_of::<std::string::FromUtf8Error>(error)
        .or_else(|| message_of::<std::str::Utf8Error>(error))
    {
        return Some(Failure::internal(InternalKind::Encoding, message));
    }
    message_of::<serde_json::Error>(error).map(|message| Failure::internal(InternalKind::Parse, message))
}
