// File: ./src/notify.rs
//! Notification sinks. A sink is fire-and-forget: the screen never depends on
//! what happens to a notice once it has been handed over.
use crate::model::{Notice, Severity};

pub trait NotificationSink {
    fn notify(&mut self, notice: &Notice);
}

/// Writes notices through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, notice: &Notice) {
        match notice.severity {
            Severity::Error => log::warn!("notice: {}", notice.message),
            Severity::Success | Severity::Info => log::info!("notice: {}", notice.message),
        }
    }
}

/// Keeps every notice it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub notices: Vec<Notice>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl NotificationSink for Recorder {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice);
    }
}

/// Forwards to both sinks.
pub struct Tee<A, B>(pub A, pub B);

impl<A: NotificationSink, B: NotificationSink> NotificationSink for Tee<A, B> {
    fn notify(&mut self, notice: &Notice) {
        self.0.notify(notice);
        self.1.notify(notice);
    }
}

/// Hands an optional notice to the sink. Screen removals yield `None` when
/// the target no longer exists; nothing is surfaced in that case.
pub fn emit(sink: &mut dyn NotificationSink, notice: Option<Notice>) {
    if let Some(n) = notice {
        sink.notify(&n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut rec = Recorder::new();
        rec.notify(&Notice::success("one"));
        rec.notify(&Notice::info("two"));
        assert_eq!(rec.notices.len(), 2);
        assert_eq!(rec.last(), Some(&Notice::info("two")));

        let drained = rec.drain();
        assert_eq!(drained[0].message, "one");
        assert!(rec.notices.is_empty());
    }

    #[test]
    fn test_emit_skips_none() {
        let mut rec = Recorder::new();
        emit(&mut rec, None);
        emit(&mut rec, Some(Notice::error("bad")));
        assert_eq!(rec.notices, vec![Notice::error("bad")]);
    }

    #[test]
    fn test_tee_forwards_to_both() {
        let mut a = Recorder::new();
        let mut b = Recorder::new();
        {
            let mut tee = Tee(&mut a, &mut b);
            tee.notify(&Notice::info("x"));
        }
        assert_eq!(a.notices.len(), 1);
        assert_eq!(b.notices.len(), 1);
    }
}
