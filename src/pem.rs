//! Extraction of DER bytes from PEM armor.
//!
//! PEM wraps binary DER in Base64 between `-----BEGIN ...-----` and
//! `-----END ...-----` marker lines so it can travel through text channels.
//! The Base64 decoding itself is delegated to the `base64` crate; this
//! module only finds the armored body and hands the result back as bytes.

use {
    base64::{engine::general_purpose, Engine as _},
    std::{error, fmt, str},
};

/// The prefix that marks armored data.
const ARMOR_BEGIN: &str = "-----BEGIN";

/// The prefix of the closing marker line.
const ARMOR_END: &str = "-----END";

/// Decode a PEM document into the DER bytes of its first armored block.
pub fn pem_to_der(text: &[u8]) -> Result<Vec<u8>, PemError> {
    let text = str::from_utf8(text).map_err(|_| PemError::NotText)?;
    let mut lines = text.lines();
    loop {
        let line = lines.next().ok_or(PemError::MissingArmor)?;
        if line.starts_with(ARMOR_BEGIN) {
            break;
        }
    }
    let mut body = String::new();
    let mut terminated = false;
    for line in lines {
        if line.starts_with(ARMOR_END) {
            terminated = true;
            break;
        }
        body.push_str(line.trim());
    }
    if !terminated {
        return Err(PemError::TruncatedArmor);
    }
    general_purpose::STANDARD
        .decode(body.as_bytes())
        .map_err(PemError::Base64)
}

/// Return the DER bytes of a document that may be either PEM or raw DER.
///
/// PEM is recognized by its literal `-----BEGIN` prefix; anything else is
/// assumed to already be DER and copied through.
pub fn extract_der(bytes: &[u8]) -> Result<Vec<u8>, PemError> {
    if bytes.starts_with(ARMOR_BEGIN.as_bytes()) {
        pem_to_der(bytes)
    } else {
        Ok(bytes.to_vec())
    }
}

/// Failure while unwrapping PEM armor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PemError {
    /// The document is not text.
    NotText,
    /// No `-----BEGIN` marker line was found.
    MissingArmor,
    /// The armored block has no `-----END` marker line.
    TruncatedArmor,
    /// The armored body is not valid Base64.
    Base64(base64::DecodeError),
}

impl fmt::Display for PemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => f.write_str("document is not text"),
            Self::MissingArmor => f.write_str("no armor begin marker"),
            Self::TruncatedArmor => f.write_str("no armor end marker"),
            Self::Base64(e) => write!(f, "armored body is not valid base64: {e}"),
        }
    }
}

impl error::Error for PemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Base64(e) => Some(e),
            _ => None,
        }
    }
}
