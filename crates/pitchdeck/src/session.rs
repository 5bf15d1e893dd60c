//! Append-only session log backing the diagnostics view.
//!
//! Lives only for the process lifetime; nothing is persisted.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
    System,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Ai => "ai",
            Self::System => "system",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub role: Role,
    pub content: String,
    /// Which slide was selected when the entry was logged, if any.
    pub slide_index: Option<usize>,
    pub slide_title: Option<String>,
}

#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        role: Role,
        content: impl Into<String>,
        slide_index: Option<usize>,
        slide_title: Option<String>,
    ) {
        self.entries.push(LogEntry {
            at: Local::now(),
            role,
            content: content.into(),
            slide_index,
            slide_title,
        });
    }

    /// Log a message with no slide context.
    pub fn system(&mut self, content: impl Into<String>) {
        self.push(Role::System, content, None, None);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_append_in_order() {
        let mut log = SessionLog::new();
        log.system("starting up");
        log.push(Role::User, "improve this", Some(2), Some("Market".to_string()));
        log.push(Role::Ai, "done", Some(2), Some("Market".to_string()));

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[0].role, Role::System);
        assert_eq!(log.entries()[1].slide_index, Some(2));
        assert_eq!(log.entries()[2].role.label(), "ai");
        assert!(log.entries()[0].at <= log.entries()[2].at);
    }
}
