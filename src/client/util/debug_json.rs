//! JSON rendering for the diagnostics page.

use serde::Serialize;
use serde_json::json;

use crate::client::service::ServiceError;

/// Renders an operation result in the raw `{success, ...}` shape the
/// diagnostics page displays. Errors become plain name/message/stack
/// objects; absent values serialize as JSON null.
pub fn render_result<T: Serialize>(result: &Result<T, ServiceError>) -> String {
    let value = match result {
        Ok(data) => json!({ "success": true, "data": data }),
        Err(error) => json!({ "success": false, "error": error_object(error) }),
    };

    pretty(&value)
}

pub fn error_object(error: &ServiceError) -> serde_json::Value {
    json!({
        "name": error.name(),
        "message": error.to_string(),
        "stack": null,
    })
}

pub fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
