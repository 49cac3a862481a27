//! One-way-revealed secret values (bearer tokens, freshly minted PATs)

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use crate::domain::DomainError;

/// A bearer token or personal access token value.
///
/// `Debug` and `Display` never print the value. The only ways to read it are
/// [`ApiToken::expose`] (used when building the `Authorization` header) and
/// serialization, which the CLI relies on to show a newly created token once.
/// The backing buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a raw token, rejecting empty or whitespace-only values.
    ///
    /// The input buffer is wiped once the trimmed value has been copied out.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let mut raw = raw.into();
        let token = raw.trim().to_string();
        raw.zeroize();
        if token.is_empty() {
            return Err(DomainError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Borrow the raw value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl Drop for ApiToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(****)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl Serialize for ApiToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ApiToken::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_token_when_debug_formatted_then_value_is_hidden() {
        let token = ApiToken::new("pat_supersecret").unwrap();
        let debug = format!("{token:?}");
        let display = token.to_string();
        assert!(!debug.contains("supersecret"));
        assert!(!display.contains("supersecret"));
    }

    #[test]
    fn given_token_when_bearer_then_prefixes_scheme() {
        let token = ApiToken::new("  pat_abc \n").unwrap();
        assert_eq!(token.bearer(), "Bearer pat_abc");
    }

    #[test]
    fn given_blank_token_when_new_then_rejected() {
        assert!(matches!(ApiToken::new("   "), Err(DomainError::EmptyToken)));
    }

    #[test]
    fn given_token_when_serialized_then_value_is_revealed() {
        let token = ApiToken::new("pat_once").unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"pat_once\"");
    }

    #[test]
    fn given_padded_owned_input_when_new_then_trimmed_value_kept() {
        let raw = String::from("\n  psc_owned_7c1e \t");
        let token = ApiToken::new(raw).unwrap();
        assert_eq!(token.expose(), "psc_owned_7c1e");
    }
}
