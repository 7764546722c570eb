use std::str::FromStr;

use crate::core::errors::SopskitError;

/// One authorized decrypting party for an encryption call.
///
/// Each variant renders its own sops recipient flag; adding a key
/// scheme means adding a variant here, and the compiler forces the
/// flag mapping to be extended with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// An age X25519 public key (`age1...`).
    Age(String),
    /// A PGP key fingerprint.
    Pgp(String),
    /// A scheme this build does not recognize. Carried through
    /// unchanged; contributes no engine flag.
    Other { scheme: String, identifier: String },
}

impl Recipient {
    /// The sops flag for this recipient, or `None` when the scheme
    /// has no flag mapping.
    pub fn engine_flag(&self) -> Option<String> {
        match self {
            Self::Age(key) => Some(format!("--age={key}")),
            Self::Pgp(fingerprint) => Some(format!("--pgp={fingerprint}")),
            Self::Other { .. } => None,
        }
    }

    /// The key scheme tag: "age", "pgp", or the unrecognized tag
    /// exactly as the caller supplied it.
    pub fn scheme(&self) -> &str {
        match self {
            Self::Age(_) => "age",
            Self::Pgp(_) => "pgp",
            Self::Other { scheme, .. } => scheme,
        }
    }

    /// The opaque key identifier; its meaning depends on the scheme.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Age(key) => key,
            Self::Pgp(fingerprint) => fingerprint,
            Self::Other { identifier, .. } => identifier,
        }
    }
}

impl FromStr for Recipient {
    type Err = SopskitError;

    /// Parse a `SCHEME:IDENTIFIER` spec as given on the command line.
    ///
    /// Unknown schemes parse successfully: they are skipped later
    /// when flags are rendered, not rejected here. Identifier syntax
    /// is not validated; sops is the authority on key material.
    fn from_str(spec: &str) -> std::result::Result<Self, Self::Err> {
        let (scheme, identifier) =
            spec.split_once(':')
                .ok_or_else(|| SopskitError::InvalidConfig {
                    detail: format!(
                        "Invalid recipient '{spec}': expected SCHEME:IDENTIFIER, e.g. age:age1..."
                    ),
                })?;

        Ok(match scheme {
            "age" => Self::Age(identifier.to_string()),
            "pgp" => Self::Pgp(identifier.to_string()),
            _ => Self::Other {
                scheme: scheme.to_string(),
                identifier: identifier.to_string(),
            },
        })
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.scheme(), self.identifier())
    }
}
