use std::path::PathBuf;

/// All domain errors for sopskit.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SopskitError {
    #[error(
        "File not found: {}\n\n  \
         Check that the path is correct and the file exists.",
        .path.display()
    )]
    FileNotFound { path: PathBuf },

    /// The external engine failed to launch or exited nonzero.
    ///
    /// `cause` describes the process-level failure (launch error or
    /// exit status); `stderr` carries the engine's own diagnostic
    /// text in full. Neither is parsed here, only surfaced.
    #[error("sops encryption error: {cause}\n{stderr}")]
    Engine { cause: String, stderr: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SopskitError>;
