use std::fmt;

/// Caller-supplied identifier of a translation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationId(String);

impl TranslationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TranslationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
