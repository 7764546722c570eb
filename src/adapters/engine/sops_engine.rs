use std::path::PathBuf;

use crate::adapters::exec::system_runner::SystemRunner;
use crate::core::errors::{Result, SopskitError};
use crate::core::models::invocation::Invocation;
use crate::core::models::recipient::Recipient;
use crate::core::traits::engine::EncryptionEngine;
use crate::core::traits::exec::ProcessRunner;

/// Regex handed to sops selecting which top-level keys get
/// encrypted. Everything outside `data`/`stringData` stays in
/// cleartext so the manifest remains diffable.
pub const ENCRYPTED_FIELD_REGEX: &str = "^(data|stringData)$";

/// Encryption engine that shells out to the `sops` binary.
///
/// sops owns the actual cryptography; this adapter owns the
/// invocation contract: fixed YAML options first, one flag per
/// recipient in caller order, `/dev/stdin` last, the plaintext piped
/// through standard input. Each encrypt call spawns exactly one
/// process and blocks until it exits.
pub struct SopsEngine<R: ProcessRunner = SystemRunner> {
    runner: R,
    sops_path: PathBuf,
}

impl SopsEngine {
    /// Engine using a specific sops binary path.
    pub fn with_path(sops_path: PathBuf) -> Self {
        Self::with_runner(SystemRunner, sops_path)
    }
}

impl<R: ProcessRunner> SopsEngine<R> {
    /// Engine with an injected process runner. Tests use this to
    /// substitute scripted output and exit codes.
    pub fn with_runner(runner: R, sops_path: PathBuf) -> Self {
        Self { runner, sops_path }
    }

    /// Check that the sops binary can be spawned at all.
    pub fn is_available(&self) -> bool {
        let probe = Invocation {
            program: self.sops_path.clone(),
            args: vec!["--version".to_string()],
            stdin: String::new(),
        };
        self.runner.run(&probe).is_ok_and(|out| out.success())
    }

    /// Build the argument list and input buffer for one call.
    ///
    /// Order matters to sops: fixed options first, then recipient
    /// flags in caller order, then the stdin sentinel.
    fn build_invocation(&self, plaintext: &str, recipients: &[Recipient]) -> Invocation {
        let mut args = vec![
            "--input-type=yaml".to_string(),
            "--output-type=yaml".to_string(),
            format!("--encrypted-regex={ENCRYPTED_FIELD_REGEX}"),
            "--encrypt".to_string(),
        ];

        args.extend(recipients.iter().filter_map(Recipient::engine_flag));
        args.push("/dev/stdin".to_string());

        Invocation {
            program: self.sops_path.clone(),
            args,
            stdin: plaintext.to_string(),
        }
    }
}

impl<R: ProcessRunner> EncryptionEngine for SopsEngine<R> {
    fn encrypt(&self, plaintext: &str, recipients: &[Recipient]) -> Result<String> {
        let invocation = self.build_invocation(plaintext, recipients);

        let output = self
            .runner
            .run(&invocation)
            .map_err(|e| SopskitError::Engine {
                cause: format!("failed to run {}: {e}", self.sops_path.display()),
                stderr: String::new(),
            })?;

        if !output.success() {
            return Err(SopskitError::Engine {
                cause: output.status_label(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        // The engine's stdout is the ciphertext, returned verbatim.
        String::from_utf8(output.stdout).map_err(|e| SopskitError::Engine {
            cause: format!("engine produced non-UTF-8 output: {e}"),
            stderr: String::new(),
        })
    }

    fn name(&self) -> &str {
        "sops"
    }
}
