// File: tests/batch_run.rs
use vpa::notify::Recorder;
use vpa::screen::ListScreen;
use vpa::script::{self, PrintSink};

fn run_script(input: &str) -> (ListScreen, String, String, bool) {
    let mut screen = ListScreen::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut notices = Vec::new();
    let report = {
        let mut sink = PrintSink::new(&mut notices);
        script::run(&mut screen, input.as_bytes(), &mut out, &mut err, &mut sink).unwrap()
    };
    let mut combined = String::from_utf8(notices).unwrap();
    combined.push_str(&String::from_utf8(out).unwrap());
    (
        screen,
        combined,
        String::from_utf8(err).unwrap(),
        report.is_ok(),
    )
}

#[test]
fn test_full_session() {
    let input = concat!(
        "# morning planning\n",
        "task Buy milk\n",
        "task   \n",
        "appt Dentist at 3pm\n",
        "appt-buffer Gym\n",
        "submit-appt\n",
        "rm-task 0\n",
        "automate\n",
        "suggest\n",
        "list\n",
    );
    let (screen, out, err, ok) = run_script(input);
    assert!(ok);
    assert_eq!(err, "");
    assert!(screen.tasks().is_empty());
    assert_eq!(screen.appointments().texts(), vec!["Dentist at 3pm", "Gym"]);

    assert!(out.contains("[success] Task added"));
    assert!(out.contains("[error] Please enter a valid task"));
    assert!(out.contains("[success] Appointment scheduled"));
    assert!(out.contains("[info] Task removed"));
    assert!(out.contains("[info] Workflow automation triggered!"));
    assert!(out.contains("[info] Reminder: Stay hydrated"));
    assert!(out.contains("Appointments (2)\n  0. Dentist at 3pm\n  1. Gym\n"));
}

#[test]
fn test_bad_lines_are_reported_and_skipped() {
    let (screen, _out, err, ok) = run_script("task a\nfrobnicate\nrm-task x\ntask b\n");
    assert!(!ok);
    assert!(err.contains("line 2"));
    assert!(err.contains("line 3"));
    assert_eq!(screen.tasks().texts(), vec!["a", "b"]);
}

#[test]
fn test_remove_out_of_range_prints_nothing() {
    let mut screen = ListScreen::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut recorder = Recorder::new();
    let report = script::run(
        &mut screen,
        "rm-appt 4\n".as_bytes(),
        &mut out,
        &mut err,
        &mut recorder,
    )
    .unwrap();
    assert!(report.is_ok());
    assert_eq!(report.executed, 1);
    assert!(recorder.drain().is_empty());
}

#[test]
fn test_dump_is_json() {
    let (_, out, _, ok) = run_script("task-buffer pending\nappt Dentist\ndump\n");
    assert!(ok);
    let start = out.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
    assert_eq!(value["task_buffer"], "pending");
    assert_eq!(value["appointments"][0]["text"], "Dentist");
    assert_eq!(value["tasks"].as_array().unwrap().len(), 0);
}
