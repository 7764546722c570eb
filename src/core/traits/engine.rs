use crate::core::errors::Result;
use crate::core::models::recipient::Recipient;

/// Port for the external encryption engine.
///
/// Implementations live in `adapters::engine`. The core layer only
/// depends on this trait, never on a concrete engine.
pub trait EncryptionEngine {
    /// Encrypt a YAML document for the given recipients.
    ///
    /// Recipients are forwarded in caller order, without
    /// deduplication. An empty list is still a valid call; the
    /// engine decides whether to accept it.
    fn encrypt(&self, plaintext: &str, recipients: &[Recipient]) -> Result<String>;

    /// Human-readable name of this engine (e.g. "sops").
    fn name(&self) -> &str;
}
