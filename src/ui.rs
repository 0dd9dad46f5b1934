/// User interface and status output utilities
///
/// This module handles:
/// - Serialized access to the terminal
/// - Colored error output on stderr
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

lazy_static! {
    static ref CONSOLE: Mutex<()> = Mutex::new(());
}

/// Print colored text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color) {
    if let Some(mut t) = term::stderr() {
        if t.fg(fg).is_ok() {
            let _ = t.attr(term::Attr::Bold);
            let written = write!(t, "{}", s).is_ok();
            let _ = t.reset();
            if written {
                return;
            }
        }
    }
    eprint!("{}", s);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    let _guard = CONSOLE.lock();
    eprint_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

/// Print a one-line status message on stderr, keeping stdout for the report
pub fn status(msg: &str) {
    let _guard = CONSOLE.lock();
    eprintln!("ci-test-summary: {}", msg);
}
