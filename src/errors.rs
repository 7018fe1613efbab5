//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - Execution errors relay the docker exit code when it fits in 1..=255.

use std::fmt;
use std::io;

/// Failures surfaced by the hook. No internal recovery or retries; every
/// error propagates to the immediate caller.
#[derive(Debug)]
pub enum HookError {
    /// docker exited non-zero; carries the captured standard-error text.
    Execution { code: i32, stderr: String },
    /// A required environment variable is missing.
    Configuration(String),
    /// Spawning or waiting on the subprocess failed.
    Io(io::Error),
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookError::Execution { code, stderr } => {
                if stderr.is_empty() {
                    write!(f, "docker failed with exit code {code}")
                } else {
                    write!(f, "{stderr}")
                }
            }
            HookError::Configuration(msg) => write!(f, "{msg}"),
            HookError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HookError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HookError {
    fn from(e: io::Error) -> Self {
        HookError::Io(e)
    }
}

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Convert HookError to a process exit code (parity with the io::Error
/// mapping). Out-of-range docker codes (signals report -1) collapse to 1.
pub fn exit_code_for_hook_error(e: &HookError) -> u8 {
    match e {
        HookError::Execution { code, .. } => {
            if *code > 0 && *code < 256 {
                *code as u8
            } else {
                1
            }
        }
        HookError::Configuration(_) => 1,
        HookError::Io(ioe) => exit_code_for_io_error(ioe),
    }
}
