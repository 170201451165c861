// File: tests/tui_notify_flow.rs
#![cfg(feature = "tui")]
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use vpa::config::Config;
use vpa::model::Notice;
use vpa::notify::emit;
use vpa::system::ChannelSink;
use vpa::tui::handlers::handle_key_event;
use vpa::tui::state::{AppState, Focus};

fn press(state: &mut AppState, sink: &mut ChannelSink, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(action) = handle_key_event(key, state) {
        emit(sink, state.dispatch(action));
    }
}

#[tokio::test]
async fn test_key_presses_reach_notifier_and_toasts() {
    let cfg = Config {
        max_toasts: 2,
        ..Config::default()
    };
    let mut state = AppState::with_config(&cfg);
    let (tx, mut rx) = mpsc::channel(16);
    let mut sink = ChannelSink::new(tx);

    for c in "Pay rent".chars() {
        press(&mut state, &mut sink, KeyCode::Char(c));
    }
    press(&mut state, &mut sink, KeyCode::Enter);
    press(&mut state, &mut sink, KeyCode::Enter);

    state.focus = Focus::Actions;
    press(&mut state, &mut sink, KeyCode::Char('r'));

    assert_eq!(rx.recv().await, Some(Notice::success("Task added")));
    assert_eq!(
        rx.recv().await,
        Some(Notice::error("Please enter a valid task"))
    );
    assert_eq!(
        rx.recv().await,
        Some(Notice::info("Reminder: Stay hydrated and take regular breaks!"))
    );

    assert_eq!(state.screen.tasks().texts(), vec!["Pay rent"]);
    // Oldest toast is dropped once the queue is full.
    assert_eq!(state.toasts.len(), 2);
    let shown: Vec<_> = state.toasts.iter().map(|t| t.notice.clone()).collect();
    assert_eq!(shown[0], Notice::error("Please enter a valid task"));
}
