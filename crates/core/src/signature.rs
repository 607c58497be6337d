use std::fmt;

use sha2::{Digest, Sha256};

use crate::normalize::clean_text;

/// Dedup key of a block: SHA-256 of its cleaned text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 32]);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

/// Compute the signature of raw block text.
///
/// Texts that clean to the same string share a signature.
pub fn signature(text: &str) -> Signature {
    signature_of_clean(&clean_text(text))
}

/// Signature of text that has already been through [`clean_text`].
pub(crate) fn signature_of_clean(cleaned: &str) -> Signature {
    Signature(Sha256::digest(cleaned.as_bytes()).into())
}
