use crate::error::{ModelError, ModelResult};

/// A single `key=value` token borrowed from strategy text.
///
/// The key is everything before the first `=`, the value everything after it.
/// Neither side is trimmed; tokens are expected to be whitespace-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> KeyValue<'a> {
    /// Create a new key–value pair.
    pub fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }

    /// Split a `key=value` token.
    ///
    /// Fails with [`ModelError::MalformedToken`] if there is no `=` or the key is empty.
    pub fn parse(token: &'a str) -> ModelResult<Self> {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self { key, value }),
            _ => Err(ModelError::MalformedToken(token.to_string())),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Get the value.
    pub fn value(&self) -> &'a str {
        self.value
    }
}
