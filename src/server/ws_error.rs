/// Centralized helper for WebSocket error payloads.
///
/// Keeps error messages consistent: every error carries a code, a
/// human-readable message, and optional context.
use serde_json::json;

/// Formats a WebSocket error message as a JSON string.
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}
