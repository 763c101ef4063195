use serde_json::{Value, json};

pub mod products;
pub mod query;

/// JSON error payload shared by both transport bindings.
pub(crate) fn error_body(message: impl Into<String>) -> Value {
    json!({ "message": message.into() })
}
