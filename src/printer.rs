// Print support. The exported HTML document is handed to the system
// spooler over `lp`, behind a trait so the editor logic can be exercised
// against a mock spooler in tests.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

// Spooler job name for every print of the single live document.
pub const PRINT_JOB_NAME: &str = "document";

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("printing unavailable: 'lp' command not found")]
    Unavailable,
    #[error("failed to run lp: {0}")]
    Spawn(String),
    #[error("print job failed: {0}")]
    Job(String),
}

pub trait PrintBackend {
    fn print(&self, job_name: &str, contents: &str) -> Result<(), PrintError>;
}

/// CUPS backend piping the document to `lp`.
pub struct CupsBackend;

impl CupsBackend {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available() -> bool {
        Command::new("which")
            .arg("lp")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl Default for CupsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintBackend for CupsBackend {
    fn print(&self, job_name: &str, contents: &str) -> Result<(), PrintError> {
        if !Self::is_available() {
            return Err(PrintError::Unavailable);
        }

        let mut child = Command::new("lp")
            .arg("-t")
            .arg(job_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| PrintError::Spawn(err.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(contents.as_bytes())
                .map_err(|err| PrintError::Spawn(err.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|err| PrintError::Spawn(err.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PrintError::Job(stderr.trim().to_string()))
        }
    }
}

/// Prints the standalone HTML document through the CUPS backend. Runs
/// inside a task; the editor receives the outcome as a message.
pub async fn print_document(html: String) -> Result<(), String> {
    CupsBackend::new()
        .print(PRINT_JOB_NAME, &html)
        .map_err(|err| err.to_string())
}
