use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// Payload returned for every request.
///
/// Serialises as `{"result": ...}`, `{"error": "..."}` or `{"status": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success { result: Value },
    Failure { error: String },
    Status { status: String },
}

impl Response {
    /// Success payload, or an error payload when the value holds a
    /// non-finite number. serde_json encodes `inf` and `NaN` as `null`.
    pub fn success<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(result) if has_null(&result) => {
                Response::failure("Result is not a finite number")
            }
            Ok(result) => Response::Success { result },
            Err(e) => Response::failure(format!("Failed to encode result: {}", e)),
        }
    }

    /// Error payload carrying `message` verbatim.
    pub fn failure<M: Display>(message: M) -> Self {
        Response::Failure {
            error: message.to_string(),
        }
    }

    pub fn health() -> Self {
        Response::Status {
            status: "ok".to_string(),
        }
    }

    pub fn from_result<T: Serialize, E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Response::success(&value),
            Err(e) => Response::failure(e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Failure { .. })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"error":"Failed to encode response: {}"}}"#, e)
        })
    }
}

fn has_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(has_null),
        Value::Object(fields) => fields.values().any(has_null),
        _ => false,
    }
}
