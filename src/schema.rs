//! JSON Schema for logger configuration

use schemars::schema_for;
use serde_json::Value;

use crate::LoggerConfig;

/// JSON schema describing [`LoggerConfig`]
pub fn config_schema() -> Value {
    let schema = schema_for!(LoggerConfig);
    serde_json::to_value(&schema).unwrap_or(Value::Null)
}
