//! Validation of JSON values against the registry schemas

use crate::error::{SchemaError, SchemaResult};
use crate::registry::PLACEHOLDER;
use serde_json::Value;

/// Validate a single JSON value against `schema`
///
/// Reports the first violation with the instance path and the rule that
/// failed.
///
/// # Errors
/// `SchemaError::Compile` if the schema itself is invalid,
/// `SchemaError::Violation` if the value does not conform.
pub fn validate_single(value: &Value, schema: &Value) -> SchemaResult<()> {
    let validator =
        jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;

    if let Some(error) = validator.iter_errors(value).next() {
        return Err(SchemaError::Violation {
            path: error.instance_path.to_string(),
            rule: error.to_string(),
        });
    }
    Ok(())
}

/// Validate every element of a JSON array against `schema`, in order
///
/// Short-circuits on the first violation, reporting the element index as
/// the leading path segment.
///
/// # Errors
/// `SchemaError::TypeMismatch` if `values` is not an array; otherwise the
/// first element's violation, if any.
pub fn validate_many(values: &Value, schema: &Value) -> SchemaResult<()> {
    let items = values
        .as_array()
        .ok_or_else(|| SchemaError::TypeMismatch {
            expected: "array",
            actual: value_kind(values).to_string(),
        })?;

    for (index, item) in items.iter().enumerate() {
        validate_single(item, schema).map_err(|e| match e {
            SchemaError::Violation { path, rule } => SchemaError::Violation {
                path: format!("/{index}{path}"),
                rule,
            },
            other => other,
        })?;
    }
    Ok(())
}

/// Return a copy of `schema` with every occurrence of the reserved
/// placeholder token replaced by `concrete_path`
///
/// Operates by structural traversal (object keys, string values, array
/// elements); numeric constants are never round-tripped, and the input
/// schema is left untouched so it can be reused across test cases.
pub fn resolve_placeholder(schema: &Value, concrete_path: &str) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    (
                        key.replace(PLACEHOLDER, concrete_path),
                        resolve_placeholder(value, concrete_path),
                    )
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_placeholder(item, concrete_path))
                .collect(),
        ),
        Value::String(s) => Value::String(s.replace(PLACEHOLDER, concrete_path)),
        other => other.clone(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        author_schema, bad_request_schema, book_schema, unsupported_media_type_schema,
    };
    use serde_json::json;

    fn valid_book() -> Value {
        json!({
            "id": 1,
            "title": "Book Title abc123",
            "description": null,
            "pageCount": 500,
            "excerpt": "Excerpt text",
            "publishDate": "2026-08-25T12:00:00Z"
        })
    }

    #[test]
    fn valid_objects_pass() {
        assert_eq!(validate_single(&valid_book(), book_schema()), Ok(()));

        let author = json!({
            "id": 3,
            "idBook": 12,
            "firstName": "First",
            "lastName": null
        });
        assert_eq!(validate_single(&author, author_schema()), Ok(()));
    }

    #[test]
    fn unknown_properties_are_rejected() {
        let mut book = valid_book();
        book["publisher"] = json!("surprise");
        let err = validate_single(&book, book_schema()).unwrap_err();
        assert!(matches!(err, SchemaError::Violation { .. }));
    }

    #[test]
    fn minimum_and_type_rules_are_enforced() {
        let mut book = valid_book();
        book["pageCount"] = json!(0);
        assert!(validate_single(&book, book_schema()).is_err());

        book["pageCount"] = json!("not_a_number");
        assert!(validate_single(&book, book_schema()).is_err());
    }

    #[test]
    fn nullable_unions_accept_null_but_not_numbers() {
        let mut book = valid_book();
        book["title"] = json!(null);
        assert!(validate_single(&book, book_schema()).is_ok());

        book["title"] = json!(123);
        assert!(validate_single(&book, book_schema()).is_err());
    }

    #[test]
    fn validate_many_rejects_non_sequences() {
        let err = validate_many(&json!({"id": 1}), book_schema()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                expected: "array",
                actual: "object".to_string()
            }
        );
    }

    #[test]
    fn validate_many_reports_the_failing_index() {
        let values = json!([valid_book(), {"id": 2}]);
        let err = validate_many(&values, book_schema()).unwrap_err();
        match err {
            SchemaError::Violation { path, .. } => assert!(path.starts_with("/1")),
            other => panic!("expected a violation, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_resolution_rewrites_keys_and_required() {
        let resolved = resolve_placeholder(bad_request_schema(), "x");
        let errors = &resolved["properties"]["errors"];

        assert_eq!(errors["required"], json!(["x"]));
        let keys: Vec<&String> = errors["properties"]
            .as_object()
            .expect("errors.properties is an object")
            .keys()
            .collect();
        assert_eq!(keys, vec!["x"]);
    }

    #[test]
    fn placeholder_resolution_does_not_mutate_the_input() {
        let before = bad_request_schema().clone();
        let _ = resolve_placeholder(bad_request_schema(), "$.pageCount");
        assert_eq!(bad_request_schema(), &before);
    }

    #[test]
    fn resolved_bad_request_schema_validates_the_envelope() {
        let schema = resolve_placeholder(bad_request_schema(), "id");
        let envelope = json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.1",
            "title": "One or more validation errors occurred.",
            "status": 400,
            "traceId": "00-abc-def-00",
            "errors": {"id": ["The value 'abc' is not valid."]}
        });
        assert_eq!(validate_single(&envelope, &schema), Ok(()));

        // A different field key must fail the closed errors object.
        let wrong_key = json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.1",
            "title": "One or more validation errors occurred.",
            "status": 400,
            "traceId": "00-abc-def-00",
            "errors": {"$.pageCount": ["..."]}
        });
        assert!(validate_single(&wrong_key, &schema).is_err());
    }

    #[test]
    fn media_type_schema_pins_constants() {
        let body = json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.13",
            "title": "Unsupported Media Type",
            "status": 415,
            "traceId": "00-abc-def-00"
        });
        assert_eq!(
            validate_single(&body, unsupported_media_type_schema()),
            Ok(())
        );

        let wrong_status = json!({
            "type": "https://tools.ietf.org/html/rfc7231#section-6.5.13",
            "title": "Unsupported Media Type",
            "status": 400,
            "traceId": "00-abc-def-00"
        });
        assert!(validate_single(&wrong_status, unsupported_media_type_schema()).is_err());
    }
}
