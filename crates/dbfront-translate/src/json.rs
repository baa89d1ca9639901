//! Request bodies that could not be read as JSON

use std::fmt::Write as _;

use serde_json::error::Category;
use thiserror::Error;

const MAPPING_PREFIX: &str = "Mapping JSON data error at ";

/// One step of the path to the value that failed to map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named object field
    Field(String),
    /// Zero-based array element
    Index(usize),
}

/// What went wrong underneath an unreadable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyCause {
    /// Parsed JSON could not be converted into the target type
    Mapping {
        /// Location of the offending value, outermost first
        path: Vec<PathSegment>,
        /// The mapping failure's own message
        message: String,
    },
    /// The body is not syntactically valid JSON
    Syntax {
        /// The parse failure's own message
        message: String,
    },
    /// No JSON failure could be identified
    Unknown,
}

/// Request body that could not be turned into the expected value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnreadableBody {
    /// Outer message describing the read failure
    pub message: String,
    /// Underlying JSON failure, if one was identified
    pub cause: BodyCause,
}

impl UnreadableBody {
    pub fn new(message: impl Into<String>, cause: BodyCause) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// Body failure caused by a JSON-to-value mapping problem
    pub fn mapping(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(message.clone(), BodyCause::Mapping { path, message })
    }

    /// Body failure caused by malformed JSON
    pub fn syntax(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(message.clone(), BodyCause::Syntax { message })
    }

    /// Message shown to the caller
    pub fn client_message(&self) -> String {
        match &self.cause {
            BodyCause::Mapping { path, message } if path.is_empty() => message.clone(),
            BodyCause::Mapping { path, .. } => describe_path(path),
            BodyCause::Syntax { message } => message.clone(),
            BodyCause::Unknown => self.message.clone(),
        }
    }
}

/// Render a mapping path as `Mapping JSON data error at  field 'a' object 2`
///
/// Array indices are shown 1-based.
pub fn describe_path(path: &[PathSegment]) -> String {
    let mut out = String::from(MAPPING_PREFIX);
    for segment in path {
        match segment {
            PathSegment::Index(index) => {
                let _ = write!(out, " object {}", index + 1);
            }
            PathSegment::Field(name) => {
                let _ = write!(out, " field '{name}'");
            }
        }
    }
    out
}

impl From<serde_json::Error> for UnreadableBody {
    fn from(error: serde_json::Error) -> Self {
        let message = error.to_string();
        match error.classify() {
            Category::Data => Self::mapping(Vec::new(), message),
            Category::Syntax | Category::Eof => Self::syntax(message),
            Category::Io => Self::new(message, BodyCause::Unknown),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for UnreadableBody {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = error
            .path()
            .iter()
            .filter_map(|segment| match segment {
                serde_path_to_error::Segment::Seq { index } => Some(PathSegment::Index(*index)),
                serde_path_to_error::Segment::Map { key } => Some(PathSegment::Field(key.clone())),
                serde_path_to_error::Segment::Enum { variant } => Some(PathSegment::Field(variant.clone())),
                serde_path_to_error::Segment::Unknown => None,
            })
            .collect();

        let inner = error.into_inner();
        match inner.classify() {
            Category::Data => Self::mapping(path, inner.to_string()),
            _ => Self::from(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Row {
        name: Vec<Cell>,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Cell {
        value: i64,
    }

    fn parse_row(input: &str) -> UnreadableBody {
        let deserializer = &mut serde_json::Deserializer::from_str(input);
        serde_path_to_error::deserialize::<_, Row>(deserializer).unwrap_err().into()
    }

    #[test]
    fn describes_nested_path() {
        let path = vec![
            PathSegment::Field("name".to_owned()),
            PathSegment::Index(2),
            PathSegment::Field("value".to_owned()),
        ];
        assert_eq!(
            describe_path(&path),
            "Mapping JSON data error at  field 'name' object 3 field 'value'"
        );
    }

    #[test]
    fn empty_path_uses_mapping_message() {
        let body = UnreadableBody::mapping(Vec::new(), "invalid type: string, expected i64");
        assert_eq!(body.client_message(), "invalid type: string, expected i64");
    }

    #[test]
    fn syntax_uses_parse_message() {
        let body = UnreadableBody::new(
            "could not read body",
            BodyCause::Syntax {
                message: "expected value at line 1 column 1".to_owned(),
            },
        );
        assert_eq!(body.client_message(), "expected value at line 1 column 1");
    }

    #[test]
    fn unknown_cause_uses_outer_message() {
        let body = UnreadableBody::new("could not read body", BodyCause::Unknown);
        assert_eq!(body.client_message(), "could not read body");
    }

    #[test]
    fn tracks_path_through_deserialization() {
        let body = parse_row(r#"{"name": [{"value": 1}, {"value": 2}, {"value": "x"}]}"#);
        let BodyCause::Mapping { path, .. } = &body.cause else {
            panic!("expected mapping cause, got {:?}", body.cause);
        };
        assert_eq!(
            path,
            &vec![
                PathSegment::Field("name".to_owned()),
                PathSegment::Index(2),
                PathSegment::Field("value".to_owned()),
            ]
        );
        assert_eq!(
            body.client_message(),
            "Mapping JSON data error at  field 'name' object 3 field 'value'"
        );
    }

    #[test]
    fn malformed_json_is_syntax() {
        let body = parse_row(r#"{"name": [}"#);
        assert!(matches!(body.cause, BodyCause::Syntax { .. }));
        assert!(!body.client_message().starts_with(MAPPING_PREFIX));
    }

    #[test]
    fn truncated_json_is_syntax() {
        let body = UnreadableBody::from(serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err());
        assert!(matches!(body.cause, BodyCause::Syntax { .. }));
    }

    #[test]
    fn bare_data_error_has_empty_path() {
        let error = serde_json::from_str::<Cell>(r#"{"value": "x"}"#).unwrap_err();
        let expected = error.to_string();
        let body = UnreadableBody::from(error);
        assert_eq!(body.client_message(), expected);
    }
}
