use crate::core::error::{ArgumentErrors, FieldViolation, ScanError};
use crate::mcp::McpCallResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Turns schema-validated arguments into the handler's typed struct.
pub fn typed_arguments<T: DeserializeOwned>(validated: Map<String, Value>) -> Result<T, ScanError> {
    serde_json::from_value(Value::Object(validated)).map_err(|e| {
        ScanError::InvalidArguments(ArgumentErrors(vec![FieldViolation::new("", e.to_string())]))
    })
}

/// Wraps an upstream JSON document as a single text block, indented two spaces.
pub fn json_text_response(body: &Value) -> McpCallResponse {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    McpCallResponse::text(text)
}
