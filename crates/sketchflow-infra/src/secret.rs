//! Credential lookup from the process environment.
//!
//! The model API key is read once at startup and handed to the gateway;
//! nothing else in the process keeps a copy.

use secrecy::SecretString;

/// Read a credential from environment variable `var`.
///
/// Unset, blank, or non-Unicode values are treated as absent.
pub fn api_key_from_env(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val.trim().to_string())),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}
