// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::model::{EntryId, ListKind, Notice};
use crate::notify::NotificationSink;
use crate::screen::ListScreen;
use crate::tui::action::Action;
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter)]
pub enum Focus {
    TaskInput,
    TaskList,
    AppointmentInput,
    AppointmentList,
    Actions,
}

impl Focus {
    pub fn kind(self) -> Option<ListKind> {
        match self {
            Focus::TaskInput | Focus::TaskList => Some(ListKind::Tasks),
            Focus::AppointmentInput | Focus::AppointmentList => Some(ListKind::Appointments),
            Focus::Actions => None,
        }
    }

    pub fn input_of(kind: ListKind) -> Self {
        match kind {
            ListKind::Tasks => Focus::TaskInput,
            ListKind::Appointments => Focus::AppointmentInput,
        }
    }

    pub fn list_of(kind: ListKind) -> Self {
        match kind {
            ListKind::Tasks => Focus::TaskList,
            ListKind::Appointments => Focus::AppointmentList,
        }
    }

    pub fn next(self) -> Self {
        let all: Vec<Focus> = Focus::iter().collect();
        let i = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Focus> = Focus::iter().collect();
        let i = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter)]
pub enum QuickAction {
    AutomateWorkflows,
    SuggestReminders,
}

impl QuickAction {
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::AutomateWorkflows => "Automate Workflows",
            QuickAction::SuggestReminders => "Suggest Reminders",
        }
    }

    pub fn action(self) -> Action {
        match self {
            QuickAction::AutomateWorkflows => Action::AutomateWorkflows,
            QuickAction::SuggestReminders => Action::SuggestReminders,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Short-lived on-screen notices, newest last.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    pub duration: Duration,
    pub max: usize,
}

impl ToastQueue {
    pub fn new(duration: Duration, max: usize) -> Self {
        Self {
            items: VecDeque::new(),
            duration,
            max: max.max(1),
        }
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        self.items.push_back(Toast {
            notice,
            shown_at: now,
        });
        while self.items.len() > self.max {
            self.items.pop_front();
        }
    }

    /// Drops toasts older than the configured duration.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.duration;
        self.items
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, notice: &Notice) {
        self.push_at(notice.clone(), Instant::now());
    }
}

// --- INPUT HELPERS ---

/// Inserts `c` at char position `cursor`. Returns the new text and cursor.
pub fn insert_char(text: &str, cursor: usize, c: char) -> (String, usize) {
    // Safe insertion for UTF-8 strings
    let byte_index = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(cursor)
        .unwrap_or(text.len());
    let mut out = text.to_string();
    out.insert(byte_index, c);
    (out, cursor + 1)
}

/// Deletes the char before `cursor`, if any.
pub fn delete_char_before(text: &str, cursor: usize) -> Option<(String, usize)> {
    if cursor == 0 {
        return None;
    }
    let before = text.chars().take(cursor - 1);
    let after = text.chars().skip(cursor);
    Some((before.chain(after).collect(), cursor - 1))
}

/// Deletes the char under `cursor`, if any.
pub fn delete_char_at(text: &str, cursor: usize) -> Option<String> {
    if cursor >= text.chars().count() {
        return None;
    }
    let before = text.chars().take(cursor);
    let after = text.chars().skip(cursor + 1);
    Some(before.chain(after).collect())
}

pub struct AppState {
    pub screen: ListScreen,

    // UI State
    pub focus: Focus,
    pub task_list_state: ListState,
    pub appointment_list_state: ListState,
    pub action_state: ListState,
    pub task_cursor: usize,
    pub appointment_cursor: usize,
    pub show_full_help: bool,

    pub toasts: ToastQueue,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(cfg: &Config) -> Self {
        let mut action_state = ListState::default();
        action_state.select(Some(0));

        Self {
            screen: ListScreen::new(),
            focus: Focus::TaskInput,
            task_list_state: ListState::default(),
            appointment_list_state: ListState::default(),
            action_state,
            task_cursor: 0,
            appointment_cursor: 0,
            show_full_help: false,
            toasts: ToastQueue::new(Duration::from_secs(cfg.toast_duration_secs), cfg.max_toasts),
        }
    }

    pub fn list_state(&self, kind: ListKind) -> &ListState {
        match kind {
            ListKind::Tasks => &self.task_list_state,
            ListKind::Appointments => &self.appointment_list_state,
        }
    }

    pub fn list_state_mut(&mut self, kind: ListKind) -> &mut ListState {
        match kind {
            ListKind::Tasks => &mut self.task_list_state,
            ListKind::Appointments => &mut self.appointment_list_state,
        }
    }

    pub fn cursor(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Tasks => self.task_cursor,
            ListKind::Appointments => self.appointment_cursor,
        }
    }

    /// Sets the cursor, clamped to the current buffer length.
    pub fn set_cursor(&mut self, kind: ListKind, pos: usize) {
        let max = self.screen.section(kind).buffer().chars().count();
        let pos = pos.min(max);
        match kind {
            ListKind::Tasks => self.task_cursor = pos,
            ListKind::Appointments => self.appointment_cursor = pos,
        }
    }

    pub fn move_cursor_left(&mut self, kind: ListKind) {
        let pos = self.cursor(kind).saturating_sub(1);
        self.set_cursor(kind, pos);
    }

    pub fn move_cursor_right(&mut self, kind: ListKind) {
        let pos = self.cursor(kind).saturating_add(1);
        self.set_cursor(kind, pos);
    }

    pub fn move_cursor_home(&mut self, kind: ListKind) {
        self.set_cursor(kind, 0);
    }

    pub fn move_cursor_end(&mut self, kind: ListKind) {
        self.set_cursor(kind, usize::MAX);
    }

    /// The id of the selected entry, looked up in the list as it is now.
    pub fn selected_entry_id(&self, kind: ListKind) -> Option<EntryId> {
        let idx = self.list_state(kind).selected()?;
        self.screen.section(kind).entries().get(idx).map(|e| e.id)
    }

    // --- NAVIGATION ---
    pub fn next(&mut self, kind: ListKind) {
        let len = self.screen.section(kind).entries().len();
        if len == 0 {
            return;
        }
        let state = self.list_state_mut(kind);
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self, kind: ListKind) {
        let len = self.screen.section(kind).entries().len();
        if len == 0 {
            return;
        }
        let state = self.list_state_mut(kind);
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn next_action(&mut self) {
        let len = QuickAction::iter().count();
        let i = self.action_state.selected().map_or(0, |i| (i + 1) % len);
        self.action_state.select(Some(i));
    }

    pub fn previous_action(&mut self) {
        let len = QuickAction::iter().count();
        let i = self
            .action_state
            .selected()
            .map_or(0, |i| (i + len - 1) % len);
        self.action_state.select(Some(i));
    }

    pub fn selected_action(&self) -> Option<QuickAction> {
        QuickAction::iter().nth(self.action_state.selected()?)
    }

    /// Keeps the selection inside the list after it shrank.
    fn clamp_selection(&mut self, kind: ListKind) {
        let len = self.screen.section(kind).entries().len();
        let state = self.list_state_mut(kind);
        if len == 0 {
            state.select(None);
        } else if let Some(i) = state.selected()
            && i >= len
        {
            state.select(Some(len - 1));
        }
    }

    /// Applies an action to the screen. The resulting notice is shown as a
    /// toast and returned so the caller can forward it elsewhere.
    pub fn dispatch(&mut self, action: Action) -> Option<Notice> {
        let notice = match action {
            Action::EditBuffer { kind, text, cursor } => {
                self.screen.section_mut(kind).set_buffer(text);
                self.set_cursor(kind, cursor);
                None
            }
            Action::Submit(kind) => {
                let notice = self.screen.section_mut(kind).submit();
                if !notice.is_error() {
                    self.set_cursor(kind, 0);
                }
                Some(notice)
            }
            Action::Remove(kind, id) => {
                let notice = self.screen.section_mut(kind).remove_by_id(id);
                self.clamp_selection(kind);
                notice
            }
            Action::AutomateWorkflows => Some(self.screen.trigger_workflow_automation()),
            Action::SuggestReminders => Some(self.screen.trigger_reminder_suggestion()),
            Action::ToggleHelp => {
                self.show_full_help = !self.show_full_help;
                None
            }
            Action::Quit => None,
        };

        if let Some(n) = &notice {
            self.toasts.notify(n);
        }
        notice
    }
}
