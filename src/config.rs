//! Logger configuration

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::style::Palette;
use crate::{Error, Result};

/// Settings a [`Logger`](crate::Logger) is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Label shown in front of every message; empty means no label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Render debug messages
    pub show_debug: bool,

    /// Show the calling function on error and fatal messages
    pub show_caller: bool,

    /// Append the call stack to fatal messages
    pub show_trace: bool,

    /// Prefix messages with the local time
    pub show_time: bool,

    /// Styling applied to markers and tags
    pub palette: Palette,
}

impl LoggerConfig {
    /// Configuration with a module label and every flag off
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: Some(module_name.into()),
            ..Self::default()
        }
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject module names that would break the rendered line
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.module_name {
            if name.chars().any(char::is_control) {
                return Err(Error::InvalidConfig(format!(
                    "Module name contains control characters: {:?}",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.module_name, None);
        assert!(!config.show_debug);
        assert_eq!(config.palette, Palette::Ansi);
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(
            r#"{"module_name": "db", "show_debug": true, "show_time": true, "palette": "plain"}"#,
        )
        .unwrap();

        assert_eq!(config.module_name.as_deref(), Some("db"));
        assert!(config.show_debug);
        assert!(config.show_time);
        assert!(!config.show_caller);
        assert!(!config.show_trace);
        assert_eq!(config.palette, Palette::Plain);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = LoggerConfig::from_json(r#"{"show_level": true}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_control_characters_rejected() {
        let result = LoggerConfig::from_json(r#"{"module_name": "bad\nname"}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        assert!(LoggerConfig::new("ok name").validate().is_ok());
    }
}
