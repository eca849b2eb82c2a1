//! Scripting runner invocation
//!
//! Runs one snippet per child process and blocks until it exits. No timeout
//! is applied: a hung application hangs the caller.

use crate::error::ScriptError;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Executes scripting snippets
pub trait ScriptRunner {
    /// Run `script` and report only success or failure
    fn run(&self, script: &str) -> Result<(), ScriptError>;

    /// Run `script` and return its standard output
    fn run_with_output(&self, script: &str) -> Result<String, ScriptError>;
}

/// Runner backed by `osascript -e <script>`
///
/// The program is looked up on every invocation, so a missing runner is
/// reported by the action that needed it.
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    program: OsString,
}

impl OsaScriptRunner {
    /// Create a runner for `program`, a bare name on `PATH` or a path
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    /// Locate the runner program
    pub fn resolve(&self) -> Result<PathBuf, ScriptError> {
        which::which(&self.program).map_err(|e| ScriptError::FacilityUnavailable {
            diagnostic: format!("{}: {}", self.program.to_string_lossy(), e),
        })
    }

    fn execute(&self, script: &str) -> Result<Output, ScriptError> {
        let program = self.resolve()?;
        tracing::debug!("Running snippet with {}:\n{}", program.display(), script);

        let output = Command::new(&program)
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ScriptError::FacilityUnavailable {
                diagnostic: format!("failed to run {}: {}", program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = match stderr.trim() {
                "" => format!("{} exited with {}", program.display(), output.status),
                message => message.to_string(),
            };
            tracing::warn!("Scripting runner failed: {}", diagnostic);
            return Err(ScriptError::ExecutionFailed { diagnostic });
        }

        Ok(output)
    }
}

impl ScriptRunner for OsaScriptRunner {
    fn run(&self, script: &str) -> Result<(), ScriptError> {
        self.execute(script).map(|_| ())
    }

    fn run_with_output(&self, script: &str) -> Result<String, ScriptError> {
        let output = self.execute(script)?;
        String::from_utf8(output.stdout).map_err(|e| ScriptError::ExecutionFailed {
            diagnostic: format!("runner output is not valid UTF-8: {}", e),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_runner(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("fake-osascript");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_missing_runner_is_unavailable() {
        let runner = OsaScriptRunner::new("definitely-not-a-real-osascript");
        let err = runner.run("ignored").unwrap_err();
        assert!(matches!(err, ScriptError::FacilityUnavailable { .. }));
        assert!(err.diagnostic().contains("definitely-not-a-real-osascript"));
    }

    #[test]
    fn test_capture_returns_stdout() {
        let dir = TempDir::new().unwrap();
        let path = write_runner(&dir, r#"printf 'A|Connected\n'"#);
        let runner = OsaScriptRunner::new(&path);

        assert_eq!(runner.run_with_output("ignored").unwrap(), "A|Connected\n");
    }

    #[test]
    fn test_snippet_passed_after_dash_e() {
        let dir = TempDir::new().unwrap();
        let path = write_runner(&dir, r#"[ "$1" = "-e" ] && printf '%s' "$2""#);
        let runner = OsaScriptRunner::new(&path);

        let script = "tell application \"Viscosity\"\n    disconnectall\nend tell";
        assert_eq!(runner.run_with_output(script).unwrap(), script);
    }

    #[test]
    fn test_non_zero_exit_carries_stderr() {
        let dir = TempDir::new().unwrap();
        let path = write_runner(&dir, "echo 'Viscosity got an error' >&2\nexit 1");
        let runner = OsaScriptRunner::new(&path);

        let err = runner.run("ignored").unwrap_err();
        assert_eq!(
            err,
            ScriptError::ExecutionFailed {
                diagnostic: "Viscosity got an error".to_string()
            }
        );
    }

    #[test]
    fn test_non_zero_exit_without_stderr_reports_status() {
        let dir = TempDir::new().unwrap();
        let path = write_runner(&dir, "exit 3");
        let runner = OsaScriptRunner::new(&path);

        let err = runner.run_with_output("ignored").unwrap_err();
        assert!(err.diagnostic().contains("exited with"));
    }

    #[test]
    fn test_non_utf8_output_is_execution_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_runner(&dir, r"printf '\377'");
        let runner = OsaScriptRunner::new(&path);

        let err = runner.run_with_output("ignored").unwrap_err();
        assert!(matches!(err, ScriptError::ExecutionFailed { .. }));
        assert!(err.diagnostic().contains("UTF-8"));
    }
}
