// File: ./src/model/notice.rs
use serde::{Deserialize, Serialize};
use strum::Display;

pub const WORKFLOW_AUTOMATION_MESSAGE: &str =
    "Workflow automation triggered! Check your schedule for reminders.";
pub const REMINDER_SUGGESTION_MESSAGE: &str = "Reminder: Stay hydrated and take regular breaks!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// The outcome of a screen operation: what the user should be told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tags_severity() {
        assert_eq!(Notice::success("Task added").to_string(), "[success] Task added");
        assert_eq!(
            Notice::error("Please enter a valid task").to_string(),
            "[error] Please enter a valid task"
        );
        assert_eq!(Notice::info("Task removed").to_string(), "[info] Task removed");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Notice::info("x")).unwrap();
        assert_eq!(json, r#"{"severity":"info","message":"x"}"#);
    }
}
