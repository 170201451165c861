// File: ./src/system.rs
use crate::model::{Notice, Severity};
use crate::notify::{LogSink, NotificationSink};
use notify_rust::Notification;
use tokio::sync::mpsc;

pub const APP_NAME: &str = "Virtual Personal Assistant";

/// Spawns the background notifier.
/// returns: Sender that accepts notices to surface outside the terminal.
///
/// Must be called from within a tokio runtime.
pub fn spawn_notifier(desktop: bool) -> mpsc::Sender<Notice> {
    let (tx, mut rx) = mpsc::channel::<Notice>(32);

    tokio::spawn(async move {
        let mut log_sink = LogSink;
        while let Some(notice) = rx.recv().await {
            log_sink.notify(&notice);

            if desktop {
                let summary = match notice.severity {
                    Severity::Error => format!("{} - error", APP_NAME),
                    _ => APP_NAME.to_string(),
                };
                let body = notice.message;
                // notify-rust blocks on the session bus; keep it off the runtime.
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = Notification::new()
                        .summary(&summary)
                        .body(&body)
                        .appname("vpa")
                        .show()
                    {
                        log::warn!("Desktop notification failed: {}", e);
                    }
                });
            }
        }
        log::debug!("Notifier channel closed");
    });

    tx
}

/// Sink that hands notices to the notifier actor without waiting.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Notice>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Notice>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&mut self, notice: &Notice) {
        if let Err(e) = self.tx.try_send(notice.clone()) {
            log::debug!("Dropping notice for notifier: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_sink_forwards() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut sink = ChannelSink::new(tx);
        sink.notify(&Notice::success("Task added"));
        assert_eq!(rx.recv().await, Some(Notice::success("Task added")));
    }

    #[tokio::test]
    async fn test_channel_sink_full_channel_does_not_block() {
        let (tx, _rx) = mpsc::channel(1);
        let mut sink = ChannelSink::new(tx);
        sink.notify(&Notice::info("a"));
        // Second send finds the channel full and is dropped.
        sink.notify(&Notice::info("b"));
    }

    #[tokio::test]
    async fn test_notifier_without_desktop_accepts_notices() {
        let tx = spawn_notifier(false);
        tx.send(Notice::info("hello")).await.unwrap();
    }
}
