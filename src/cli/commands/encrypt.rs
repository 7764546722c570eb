use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use crate::adapters::engine::sops_engine::SopsEngine;
use crate::cli::output;
use crate::core::errors::{Result, SopskitError};
use crate::core::models::recipient::Recipient;
use crate::core::traits::engine::EncryptionEngine;

/// Execute the `sopskit encrypt` command.
///
/// Reads the plaintext manifest from `file` (or standard input),
/// encrypts it for the recipients given on the command line, and
/// writes the ciphertext to `output_path` (or standard output).
pub fn execute(
    file: Option<&str>,
    recipient_specs: &[String],
    output_path: Option<&str>,
    engine_path: &str,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let recipients = recipient_specs
        .iter()
        .map(|spec| Recipient::from_str(spec))
        .collect::<Result<Vec<_>>>()?;

    let plaintext = read_plaintext(file)?;

    let engine = SopsEngine::with_path(PathBuf::from(engine_path));
    if !engine.is_available() {
        return Err(SopskitError::Engine {
            cause: format!("{engine_path} is not installed or not found in PATH"),
            stderr: String::new(),
        });
    }

    if verbose {
        output::detail(&format!("Engine: {engine_path}"));
        for recipient in &recipients {
            output::detail(&format!("Recipient: {recipient}"));
        }
    }

    match output_path {
        Some(dest) => encrypt_to_file(&engine, &plaintext, &recipients, dest, quiet),
        None => {
            // Ciphertext goes to stdout; keep it clean for piping.
            let ciphertext = engine.encrypt(&plaintext, &recipients)?;
            print!("{ciphertext}");
            Ok(())
        }
    }
}

/// Encrypt and save to a file, with progress output.
fn encrypt_to_file<E: EncryptionEngine>(
    engine: &E,
    plaintext: &str,
    recipients: &[Recipient],
    dest: &str,
    quiet: bool,
) -> Result<()> {
    if quiet {
        let ciphertext = engine.encrypt(plaintext, recipients)?;
        std::fs::write(dest, ciphertext)?;
        return Ok(());
    }

    let sp = output::spinner(&format!(
        "Encrypting with {} for {} recipient(s)...",
        engine.name(),
        recipients.len()
    ));
    let ciphertext = match engine.encrypt(plaintext, recipients) {
        Ok(ciphertext) => {
            output::finish_spinner(
                sp,
                &format!(
                    "Encrypted with {} for {} recipient(s)",
                    engine.name(),
                    recipients.len()
                ),
            );
            ciphertext
        }
        Err(e) => {
            sp.finish_and_clear();
            return Err(e);
        }
    };

    std::fs::write(dest, ciphertext)?;
    output::success(&format!("Saved to {dest}"));

    Ok(())
}

/// Read the plaintext manifest from a file or standard input.
fn read_plaintext(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(SopskitError::FileNotFound { path });
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
