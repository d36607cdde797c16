use crate::error::{Error, Result};

/// Raw payload shared by requests and responses, readable once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    raw: String,
    used: bool,
}

impl Body {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            used: false,
        }
    }

    pub fn body_used(&self) -> bool {
        self.used
    }

    /// The payload, whether or not it has been read.
    pub fn raw_body(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Reads the payload and flags the body as used.
    pub fn text(&mut self) -> Result<String> {
        if self.used {
            return Err(Error::BodyAlreadyUsed);
        }
        self.used = true;
        Ok(self.raw.clone())
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}
