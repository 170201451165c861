// File: ./src/help.rs
//! Keyboard help shown by the `?` popup.

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: &'static str,
    pub items: Vec<HelpItem>,
}

pub fn get_keyboard_help() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Global",
            items: vec![
                HelpItem {
                    keys: "Tab / Shift+Tab",
                    desc: "Move focus between inputs, lists and actions",
                },
                HelpItem {
                    keys: "?",
                    desc: "Toggle this help",
                },
                HelpItem {
                    keys: "q / Ctrl+C",
                    desc: "Quit (q only outside inputs)",
                },
            ],
        },
        HelpSection {
            title: "Inputs",
            items: vec![
                HelpItem {
                    keys: "Enter",
                    desc: "Add the task / schedule the appointment",
                },
                HelpItem {
                    keys: "Left / Right / Home / End",
                    desc: "Move the cursor",
                },
                HelpItem {
                    keys: "Backspace / Del",
                    desc: "Delete before / under the cursor",
                },
                HelpItem {
                    keys: "Esc / Down",
                    desc: "Leave the input for its list",
                },
            ],
        },
        HelpSection {
            title: "Lists",
            items: vec![
                HelpItem {
                    keys: "j / k",
                    desc: "Select next / previous entry",
                },
                HelpItem {
                    keys: "d / Del",
                    desc: "Remove the selected entry",
                },
                HelpItem {
                    keys: "i / Enter",
                    desc: "Jump to the input of this list",
                },
            ],
        },
        HelpSection {
            title: "Workflow Automation",
            items: vec![
                HelpItem {
                    keys: "a",
                    desc: "Automate workflows",
                },
                HelpItem {
                    keys: "r",
                    desc: "Suggest reminders",
                },
                HelpItem {
                    keys: "Enter",
                    desc: "Run the selected action",
                },
            ],
        },
    ]
}
