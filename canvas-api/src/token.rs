//! API access tokens.

use std::fmt;

use canvas_api_derive::{DerefWrapper, FromWrapper};
use serde::{Deserialize, Serialize};

/// A Canvas API access token, sent as a bearer token with every request.
///
/// Generate one on the Canvas website under *Account > Settings > Approved
/// Integrations*.
#[derive(DerefWrapper, FromWrapper, Serialize, Deserialize, Clone, Eq, Hash, PartialEq)]
#[serde(transparent)]
pub struct AccessToken(String);

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_serde() -> serde_json::Result<()> {
        assert_eq!(
            AccessToken::from("7~abcdef"),
            serde_json::from_value(serde_json::json!("7~abcdef"))?
        );
        assert_eq!(
            "\"7~abcdef\"".to_string(),
            serde_json::to_string(&AccessToken::from("7~abcdef"))?
        );
        Ok(())
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::from(String::from("secret"));
        assert_eq!(&*token, "secret");
        assert!(!format!("{token:?}").contains("secret"));
        assert_eq!(String::from(token), "secret");
    }
}
