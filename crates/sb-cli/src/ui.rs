use std::io::IsTerminal;
use std::sync::OnceLock;

use sb_actions::{Notification, Notifier, Variant};

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub notify_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let table_color = std::io::stdout().is_terminal()
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && !no_color;
    let notify_color = std::io::stderr().is_terminal() && !no_color;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        notify_color,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        notify_color: false,
        term_width: None,
    })
}

/// Shows action notifications on stderr, keeping stdout for command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_notification(&notification, prefs().notify_color));
    }
}

fn format_notification(notification: &Notification, color: bool) -> String {
    let (mark, code) = match notification.variant {
        Variant::Success => ("✓", "32"),
        Variant::Error => ("✗", "31"),
    };
    if color {
        format!("\u{1b}[{code}m{mark}\u{1b}[0m {}", notification.message)
    } else {
        format!("{mark} {}", notification.message)
    }
}
