// File: src/screen.rs
//! The assistant screen: two independent lists, their input buffers and the
//! two static reminder actions.
//!
//! Every operation is synchronous and returns the [`Notice`] the caller
//! should surface. Nothing here performs IO.
use crate::model::notice::{REMINDER_SUGGESTION_MESSAGE, WORKFLOW_AUTOMATION_MESSAGE};
use crate::model::{Entry, EntryId, EntryList, ListKind, Notice};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    /// The submit buffer was empty after trimming.
    EmptyInput(ListKind),
}

impl ScreenError {
    pub fn kind(&self) -> ListKind {
        match self {
            ScreenError::EmptyInput(kind) => *kind,
        }
    }

    /// The notice shown to the user for this rejection.
    pub fn to_notice(&self) -> Notice {
        Notice::error(self.kind().invalid_message())
    }
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::EmptyInput(kind) => write!(f, "{}", kind.invalid_message()),
        }
    }
}

impl std::error::Error for ScreenError {}

/// Whitespace as stripped by ECMAScript `String.prototype.trim`: Unicode
/// `White_Space` without U+0085 NEXT LINE, plus U+FEFF BYTE ORDER MARK.
pub fn is_input_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// One list plus its pending input.
#[derive(Debug, Clone)]
pub struct Section {
    kind: ListKind,
    entries: EntryList,
    buffer: String,
}

impl Section {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: EntryList::new(),
            buffer: String::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Appends the trimmed buffer and clears it, or rejects and leaves both untouched.
    pub fn try_submit(&mut self) -> Result<EntryId, ScreenError> {
        let trimmed = self.buffer.trim_matches(is_input_whitespace);
        if trimmed.is_empty() {
            return Err(ScreenError::EmptyInput(self.kind));
        }
        let id = self.entries.push(trimmed);
        self.buffer.clear();
        Ok(id)
    }

    pub fn submit(&mut self) -> Notice {
        match self.try_submit() {
            Ok(id) => {
                log::debug!("{}: appended {}", self.kind, id);
                Notice::success(self.kind.added_message())
            }
            Err(e) => {
                log::debug!("{}: rejected blank input", self.kind);
                e.to_notice()
            }
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Notice> {
        match self.entries.remove_at(index) {
            Some(removed) => Some(self.removed(removed)),
            None => {
                log::warn!(
                    "{}: ignoring remove of index {} (len {})",
                    self.kind,
                    index,
                    self.entries.len()
                );
                None
            }
        }
    }

    pub fn remove_by_id(&mut self, id: EntryId) -> Option<Notice> {
        match self.entries.remove_by_id(id) {
            Some(removed) => Some(self.removed(removed)),
            None => {
                log::warn!("{}: ignoring remove of unknown entry {}", self.kind, id);
                None
            }
        }
    }

    fn removed(&self, entry: Entry) -> Notice {
        log::debug!("{}: removed {}", self.kind, entry.id);
        Notice::info(self.kind.removed_message())
    }
}

/// Serializable view of everything the display surface needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: EntryList,
    pub appointments: EntryList,
    pub task_buffer: String,
    pub appointment_buffer: String,
}

#[derive(Debug, Clone)]
pub struct ListScreen {
    tasks: Section,
    appointments: Section,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            tasks: Section::new(ListKind::Tasks),
            appointments: Section::new(ListKind::Appointments),
        }
    }

    pub fn section(&self, kind: ListKind) -> &Section {
        match kind {
            ListKind::Tasks => &self.tasks,
            ListKind::Appointments => &self.appointments,
        }
    }

    pub fn section_mut(&mut self, kind: ListKind) -> &mut Section {
        match kind {
            ListKind::Tasks => &mut self.tasks,
            ListKind::Appointments => &mut self.appointments,
        }
    }

    // --- Tasks ---

    pub fn update_task_buffer(&mut self, text: impl Into<String>) {
        self.tasks.set_buffer(text);
    }

    pub fn submit_task(&mut self) -> Notice {
        self.tasks.submit()
    }

    pub fn try_submit_task(&mut self) -> Result<EntryId, ScreenError> {
        self.tasks.try_submit()
    }

    pub fn remove_task(&mut self, index: usize) -> Option<Notice> {
        self.tasks.remove_at(index)
    }

    pub fn remove_task_by_id(&mut self, id: EntryId) -> Option<Notice> {
        self.tasks.remove_by_id(id)
    }

    pub fn tasks(&self) -> &EntryList {
        self.tasks.entries()
    }

    pub fn task_buffer(&self) -> &str {
        self.tasks.buffer()
    }

    // --- Appointments ---

    pub fn update_appointment_buffer(&mut self, text: impl Into<String>) {
        self.appointments.set_buffer(text);
    }

    pub fn submit_appointment(&mut self) -> Notice {
        self.appointments.submit()
    }

    pub fn try_submit_appointment(&mut self) -> Result<EntryId, ScreenError> {
        self.appointments.try_submit()
    }

    pub fn remove_appointment(&mut self, index: usize) -> Option<Notice> {
        self.appointments.remove_at(index)
    }

    pub fn remove_appointment_by_id(&mut self, id: EntryId) -> Option<Notice> {
        self.appointments.remove_by_id(id)
    }

    pub fn appointments(&self) -> &EntryList {
        self.appointments.entries()
    }

    pub fn appointment_buffer(&self) -> &str {
        self.appointments.buffer()
    }

    // --- Static actions ---

    pub fn trigger_workflow_automation(&self) -> Notice {
        Notice::info(WORKFLOW_AUTOMATION_MESSAGE)
    }

    pub fn trigger_reminder_suggestion(&self) -> Notice {
        Notice::info(REMINDER_SUGGESTION_MESSAGE)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.entries().clone(),
            appointments: self.appointments.entries().clone(),
            task_buffer: self.tasks.buffer().to_string(),
            appointment_buffer: self.appointments.buffer().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn screen_with_tasks(items: &[&str]) -> ListScreen {
        let mut screen = ListScreen::new();
        for item in items {
            screen.update_task_buffer(*item);
            screen.submit_task();
        }
        screen
    }

    #[test]
    fn test_submit_appends_trimmed_and_clears_buffer() {
        let mut screen = ListScreen::new();
        screen.update_task_buffer("  Buy milk \t");
        let notice = screen.submit_task();

        assert_eq!(notice, Notice::success("Task added"));
        assert_eq!(screen.tasks().texts(), vec!["Buy milk"]);
        assert_eq!(screen.task_buffer(), "");
    }

    #[test]
    fn test_blank_submit_is_rejected_and_keeps_buffer() {
        let mut screen = screen_with_tasks(&["Buy milk"]);
        for blank in ["", "   ", "\t\n ", "\u{3000}"] {
            screen.update_task_buffer(blank);
            let notice = screen.submit_task();
            assert_eq!(notice, Notice::error("Please enter a valid task"));
            assert_eq!(screen.tasks().texts(), vec!["Buy milk"]);
            assert_eq!(screen.task_buffer(), blank);
        }
    }

    #[test]
    fn test_trim_matches_input_field_whitespace() {
        let mut screen = ListScreen::new();

        screen.update_task_buffer("\u{FEFF}\u{3000} ");
        assert!(screen.submit_task().is_error());
        assert!(screen.tasks().is_empty());

        screen.update_task_buffer("\u{0085}");
        assert_eq!(screen.submit_task(), Notice::success("Task added"));
        assert_eq!(screen.tasks().texts(), vec!["\u{0085}"]);

        screen.update_appointment_buffer("\u{FEFF}Dentist\u{2028}");
        screen.submit_appointment();
        assert_eq!(screen.appointments().texts(), vec!["Dentist"]);
    }

    #[test]
    fn test_try_submit_reports_empty_input() {
        let mut screen = ListScreen::new();
        screen.update_appointment_buffer(" ");
        let err = screen.try_submit_appointment().unwrap_err();
        assert_eq!(err, ScreenError::EmptyInput(ListKind::Appointments));
        assert_eq!(err.to_string(), "Please enter appointment details");
    }

    #[test]
    fn test_update_buffer_is_verbatim() {
        let mut screen = ListScreen::new();
        screen.update_task_buffer("  spaced  ");
        assert_eq!(screen.task_buffer(), "  spaced  ");
        assert!(screen.tasks().is_empty());
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut screen = screen_with_tasks(&["a", "b", "c", "d"]);
        let notice = screen.remove_task(1).unwrap();

        assert_eq!(notice, Notice::info("Task removed"));
        assert_eq!(screen.tasks().texts(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut screen = screen_with_tasks(&["a"]);
        assert!(screen.remove_task(1).is_none());
        assert!(screen.remove_appointment(0).is_none());
        assert_eq!(screen.tasks().len(), 1);
    }

    #[test]
    fn test_remove_by_id_after_prior_delete() {
        let mut screen = ListScreen::new();
        screen.update_task_buffer("first");
        screen.submit_task();
        screen.update_task_buffer("second");
        let second = screen.try_submit_task().unwrap();
        screen.update_task_buffer("third");
        screen.submit_task();

        screen.remove_task(0);
        let notice = screen.remove_task_by_id(second).unwrap();
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(screen.tasks().texts(), vec!["third"]);
        assert!(screen.remove_task_by_id(second).is_none());
    }

    #[test]
    fn test_appointments_mirror_tasks() {
        let mut screen = ListScreen::new();
        screen.update_appointment_buffer(" Dentist 3pm ");
        assert_eq!(
            screen.submit_appointment(),
            Notice::success("Appointment scheduled")
        );
        assert_eq!(screen.appointments().texts(), vec!["Dentist 3pm"]);
        assert_eq!(screen.appointment_buffer(), "");

        screen.update_appointment_buffer("");
        assert_eq!(
            screen.submit_appointment(),
            Notice::error("Please enter appointment details")
        );

        assert_eq!(
            screen.remove_appointment(0),
            Some(Notice::info("Appointment canceled"))
        );
        assert!(screen.appointments().is_empty());
    }

    #[test]
    fn test_lists_are_independent() {
        let mut screen = ListScreen::new();
        screen.update_appointment_buffer("Standup");
        screen.submit_appointment();
        screen.update_appointment_buffer("draft");
        let before = screen.snapshot();

        screen.update_task_buffer("Buy milk");
        screen.submit_task();
        screen.update_task_buffer("  ");
        screen.submit_task();
        screen.remove_task(0);

        let after = screen.snapshot();
        assert_eq!(after.appointments, before.appointments);
        assert_eq!(after.appointment_buffer, "draft");
    }

    #[test]
    fn test_triggers_do_not_mutate_state() {
        let mut screen = screen_with_tasks(&["a", "b"]);
        screen.update_task_buffer("pending");
        screen.update_appointment_buffer("later");
        let before = screen.snapshot();

        let automate = screen.trigger_workflow_automation();
        let suggest = screen.trigger_reminder_suggestion();

        assert_eq!(
            automate,
            Notice::info("Workflow automation triggered! Check your schedule for reminders.")
        );
        assert_eq!(
            suggest,
            Notice::info("Reminder: Stay hydrated and take regular breaks!")
        );
        assert_eq!(screen.snapshot(), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut screen = ListScreen::new();

        screen.update_task_buffer("Buy milk");
        assert_eq!(screen.submit_task().severity, Severity::Success);
        assert_eq!(screen.tasks().texts(), vec!["Buy milk"]);
        assert_eq!(screen.task_buffer(), "");

        screen.update_task_buffer("   ");
        assert_eq!(screen.submit_task().severity, Severity::Error);
        assert_eq!(screen.tasks().texts(), vec!["Buy milk"]);
        assert_eq!(screen.task_buffer(), "   ");

        screen.update_task_buffer("Call Bob");
        screen.submit_task();
        assert_eq!(screen.tasks().texts(), vec!["Buy milk", "Call Bob"]);

        assert_eq!(screen.remove_task(0).map(|n| n.severity), Some(Severity::Info));
        assert_eq!(screen.tasks().texts(), vec!["Call Bob"]);
    }
}
