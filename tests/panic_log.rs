// File: tests/panic_log.rs
// Panic hooks are process-global, so this file holds a single test.
use vpa::context::{AppContext, TestContext};
use vpa::logging;

#[test]
fn test_panic_is_appended_to_panic_log() {
    let ctx = TestContext::new();
    logging::install_panic_hook(&ctx);

    let result = std::panic::catch_unwind(|| {
        panic!("toast queue exploded");
    });
    assert!(result.is_err());
    let _ = std::panic::take_hook();

    let path = ctx.get_panic_log_path().unwrap();
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("PANIC"));
    assert!(contents.contains("toast queue exploded"));
}
