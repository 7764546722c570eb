use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::models::invocation::{EngineOutput, Invocation};
use crate::core::traits::exec::ProcessRunner;

/// Process runner backed by `std::process::Command`.
///
/// Each call spawns one child with all three standard streams piped,
/// writes the input buffer once, and blocks until the child exits.
/// Handles and pipes are released on every exit path.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<EngineOutput> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A child that fails fast may close its stdin before the
            // write lands; its exit status carries the real error.
            if let Err(e) = stdin.write_all(invocation.stdin.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
        }
        // Dropping the handle closes the child's stdin before we wait.

        let output = child.wait_with_output()?;

        Ok(EngineOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
