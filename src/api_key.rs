use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Static API credential, sent as the `X-API-Key` header.
///
/// `Display` is redacted so keys never end up in logs or error output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiKeyError {
    #[error("API key must be non-empty printable ASCII without whitespace")]
    Match,
    #[error("API key regex error")]
    Regex(#[from] regex::Error),
}

impl ApiKey {
    // Printable ASCII, no whitespace
    const PATTERN: &str = r"^[!-~]+$";

    /// # Errors
    ///
    /// Will fail if `raw` is empty or contains whitespace or
    /// non-printable characters.
    pub fn new(raw: &str) -> Result<Self, ApiKeyError> {
        let re = Regex::new(Self::PATTERN)?;

        if re.is_match(raw) {
            Ok(Self(raw.into()))
        } else {
            Err(ApiKeyError::Match)
        }
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "********")
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_api_key() {
        assert!(ApiKey::new("c3f1a9b2-4711-4d26-9e87-1f0c2d3e4a5b").is_ok());
    }

    #[test]
    fn test_empty_api_key() {
        assert!(ApiKey::new("").is_err());
    }

    #[test]
    fn test_api_key_with_whitespace() {
        assert!(ApiKey::new("abc def").is_err());
        assert!(ApiKey::new("abc\n").is_err());
    }

    #[test]
    fn test_display_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        let shown = format!("{key}");
        assert!(!shown.contains("super-secret"));
    }

    #[test]
    fn test_as_ref_exposes_raw_value() {
        let key = ApiKey::new("super-secret").unwrap();
        let as_str: &str = key.as_ref();
        assert_eq!(as_str, "super-secret");
    }
}
