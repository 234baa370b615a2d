use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use http::HeaderValue;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Credential wrapper that never renders its contents.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

/// HTTP basic credentials for one Jenkins instance.
#[derive(Clone, Debug)]
pub struct BasicAuth {
    user: String,
    token: SecretString,
}

impl BasicAuth {
    #[must_use]
    pub fn new(user: impl Into<String>, token: impl Into<SecretString>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
        }
    }

    /// `Basic base64(user:token)`, marked sensitive so it stays out of
    /// header dumps.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let raw = format!(
            "Basic {}",
            B64.encode(format!("{}:{}", self.user, self.token.expose()))
        );
        let mut value = HeaderValue::from_str(&raw).map_err(|err| Error::InvalidConfig {
            message: "invalid Authorization header value".into(),
            source: Some(Box::new(err)),
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_string_redacts_debug_and_display() {
        let secret = SecretString::new("hunter2");
        assert_eq!(format!("{secret:?}"), "<redacted>");
        assert_eq!(secret.to_string(), "<redacted>");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn basic_auth_header_encodes_user_and_key() {
        let value = BasicAuth::new("user", "key").header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic dXNlcjprZXk=");
    }

    #[test]
    fn basic_auth_header_is_sensitive() {
        let value = BasicAuth::new("user", "key").header_value().unwrap();
        assert!(value.is_sensitive());
    }
}
