//! Signing credential handling.
//!
//! A credential is a raw private key read from the environment and exposed to
//! the deployment toolchain with a `0x` marker prepended. The value never
//! shows up in `Debug` or `Display` output, so descriptors can be logged or
//! printed without leaking key material.

use {
    crate::{Error, Result},
    serde::{Serialize, Serializer},
    std::fmt,
};

/// Marker prepended to raw key material.
pub const CREDENTIAL_PREFIX: &str = "0x";

/// Hex digits in a secp256k1 private key.
pub const KEY_HEX_LEN: usize = 64;

/// Placeholder shown wherever a credential would otherwise be displayed.
pub const REDACTED: &str = "0x****";

/// A `0x`-prefixed signing key.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredential(String);

impl SigningCredential {
    /// Builds a credential from raw key material.
    ///
    /// Surrounding whitespace is ignored and a marker already present is not
    /// doubled. `field` names the configuration entry in error messages.
    ///
    /// # Errors
    /// Returns a configuration error if the key is empty, is not hexadecimal,
    /// or does not have exactly 64 digits.
    pub fn from_raw(field: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let digits = raw
            .strip_prefix(CREDENTIAL_PREFIX)
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);

        if digits.is_empty() {
            return Err(Error::config(field, "signing key is empty"));
        }

        // Offsets only; the key itself never goes into an error message.
        if let Some(pos) = digits.find(|c: char| !c.is_ascii_hexdigit()) {
            return Err(Error::config(
                field,
                format!("signing key is not hexadecimal (invalid character at offset {pos})"),
            ));
        }

        if digits.len() != KEY_HEX_LEN {
            return Err(Error::config(
                field,
                format!(
                    "signing key must be {KEY_HEX_LEN} hex digits, got {}",
                    digits.len()
                ),
            ));
        }

        Ok(Self(format!("{CREDENTIAL_PREFIX}{digits}")))
    }

    /// Returns the prefixed key for handing to a signer.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningCredential").field(&REDACTED).finish()
    }
}

impl fmt::Display for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Serializes the real key; only used for the toolchain hand-off.
impl Serialize for SigningCredential {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
