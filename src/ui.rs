//! Standardized diagnostic lines on stderr (color-aware).

/// Print a standardized warning line to stderr.
pub fn warn_print(msg: &str) {
    let use_err = crate::color_enabled_stderr();
    eprintln!(
        "{}",
        crate::paint(use_err, "\x1b[33;1m", &format!("warning: {}", msg))
    );
}

/// Print an informational line to stderr.
pub fn info_print(msg: &str) {
    let use_err = crate::color_enabled_stderr();
    eprintln!("{}", crate::paint(use_err, "\x1b[36;1m", msg));
}

/// Print a standardized error line to stderr.
pub fn error_print(msg: &str) {
    let use_err = crate::color_enabled_stderr();
    eprintln!(
        "{}",
        crate::paint(use_err, "\x1b[31;1m", &format!("error: {}", msg))
    );
}
