use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Input event for one collector run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvocationEvent {
    /// Limit each operation category to a single page.
    #[serde(default)]
    pub test_mode: bool,
}

impl InvocationEvent {
    /// Lenient conversion: `test_mode` counts when it is truthy
    /// (anything but `false`, `null`, `0`, `""`, `[]` or `{}`). Non-object
    /// events are a full run.
    pub fn from_value(value: &Value) -> Self {
        let test_mode = value
            .as_object()
            .and_then(|obj| obj.get("test_mode"))
            .is_some_and(is_truthy);
        Self { test_mode }
    }

    /// Parse raw event text; blank input is the default event.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from_value(&value))
    }

    pub fn max_pages(&self) -> Option<i64> {
        self.test_mode.then_some(1)
    }
}

/// Status-plus-body envelope returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub const OK: u16 = 200;
    pub const FAILED: u16 = 500;

    pub fn success(body: &SuccessBody) -> Self {
        Self {
            status_code: Self::OK,
            body: render(body),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status_code: Self::FAILED,
            body: render(&FailureBody {
                error: error.into(),
            }),
        }
    }

    /// Failure envelope for errors outside the collector's own taxonomy.
    pub fn unexpected(error: &impl std::fmt::Display) -> Self {
        Self::failure(format!("Unexpected error: {error}"))
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub message: String,
    pub timestamp: String,
    pub sale_pages: u32,
    pub rent_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render<T: Serialize>(body: &T) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(body).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}
