//! # Pronunciation
//!
//! Speaks the term by running an external text-to-speech command
//! (`say` on macOS by default) with the term as the final argument.
//!
//! Best-effort: the child runs on a background tokio task, failures are
//! logged and never reach the display loop.

use log::{debug, warn};
use std::process::Stdio;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct Speaker {
    program: String,
    args: Vec<String>,
    enabled: bool,
}

impl Speaker {
    /// `command` may carry its own arguments, e.g. `"espeak -s 120"`.
    pub fn new(command: &str, enabled: bool) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        let args = parts.collect();
        Self {
            program,
            args,
            enabled: enabled && !command.trim().is_empty(),
        }
    }

    pub fn disabled() -> Self {
        Self::new("", false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start speaking `term` in the background. Returns `None` when speech is
    /// disabled or there is no runtime to run it on.
    pub fn speak(&self, term: &str) -> Option<JoinHandle<()>> {
        if !self.enabled || term.is_empty() {
            return None;
        }
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("No async runtime for speech: {}", e);
                return None;
            }
        };

        let program = self.program.clone();
        let args = self.args.clone();
        let term = term.to_string();
        debug!("Speaking {:?} via {}", term, program);

        Some(handle.spawn(async move {
            let status = tokio::process::Command::new(&program)
                .args(&args)
                .arg(&term)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(false)
                .status()
                .await;
            match status {
                Ok(s) if s.success() => debug!("Pronounced {:?}", term),
                Ok(s) => warn!("Speech command {} exited with {}", program, s),
                Err(e) => warn!("Speech command {} unavailable: {}", program, e),
            }
        }))
    }
}
