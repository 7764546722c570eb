use crate::core::models::invocation::{EngineOutput, Invocation};

/// Port for spawning the engine process.
///
/// Kept narrow so tests can script output and exit codes without a
/// real binary. A failure to launch is an `io::Error`; translating
/// it into a domain error is the engine adapter's job.
pub trait ProcessRunner {
    /// Spawn the program, write the input buffer to its stdin, and
    /// capture both output streams until the process exits.
    fn run(&self, invocation: &Invocation) -> std::io::Result<EngineOutput>;
}
