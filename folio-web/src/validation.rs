//! Payload extraction and validation failure handling.
//!
//! All three extractor families (JSON bodies, query strings, path segments)
//! funnel their failures through the same handler so clients always see the
//! standard error envelope.

use actix_web::HttpRequest;
use actix_web_validator::{Error, JsonConfig, PathConfig, QueryConfig};
use folio_error::web::{FieldError, WebError};
use validator::{ValidationErrors, ValidationErrorsKind};

pub(crate) fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(handle_rejection)
}

pub(crate) fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(handle_rejection)
}

pub(crate) fn path_config() -> PathConfig {
    PathConfig::default().error_handler(handle_rejection)
}

/// Convert extractor failures into the JSON error envelope.
///
/// Validation failures list every offending field; malformed payloads (bad
/// JSON, wrong types, unparsable path segments) become a plain 400.
fn handle_rejection(err: Error, _req: &HttpRequest) -> actix_web::Error {
    match err {
        Error::Validate(errors) => WebError::Validation(flatten_errors(&errors)).into(),
        other => WebError::BadRequest(other.to_string()).into(),
    }
}

/// Flatten possibly nested validation failures into `(field, message)` pairs.
fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields = Vec::new();
    collect_errors(errors, &mut fields);
    // HashMap iteration order is unstable; sort for a deterministic envelope
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

fn collect_errors(errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(items) => {
                for item in items {
                    out.push(FieldError {
                        field: field.to_string(),
                        message: item
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| item.code.to_string()),
                    });
                }
            }
            // Nested params are flattened in the payload, so the inner field
            // names already read naturally without a prefix
            ValidationErrorsKind::Struct(nested) => collect_errors(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_errors(nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_models::domain::prelude::{NewContact, PageParams, ProjectPageParams};
    use validator::Validate;

    #[test]
    fn test_flatten_reports_every_invalid_field() {
        let contact = NewContact {
            name: "A".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "too short".into(),
        };
        let errors = contact.validate().unwrap_err();
        let fields = flatten_errors(&errors);

        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["email", "message", "name", "subject"]);
        assert!(fields[1].message.contains("10-2000"));
    }

    #[test]
    fn test_flatten_unwraps_nested_page_params() {
        let params = ProjectPageParams {
            category: None,
            is_featured: None,
            is_active: None,
            page: PageParams {
                page: Some(0),
                limit: Some(500),
            },
        };
        let errors = params.validate().unwrap_err();
        let fields = flatten_errors(&errors);

        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["limit", "page"]);
    }
}
