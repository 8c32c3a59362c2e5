use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    Loading,
    Completed,
    Failed,
}

impl TranslationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::Loading => "loading",
            TranslationStatus::Completed => "completed",
            TranslationStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TranslationStatus::Loading)
    }

    /// Only `loading` may move, and only to a terminal state.
    pub fn can_transition_to(&self, next: TranslationStatus) -> bool {
        matches!(
            (self, next),
            (
                TranslationStatus::Loading,
                TranslationStatus::Completed | TranslationStatus::Failed
            )
        )
    }
}

impl FromStr for TranslationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loading" => Ok(TranslationStatus::Loading),
            "completed" => Ok(TranslationStatus::Completed),
            "failed" => Ok(TranslationStatus::Failed),
            _ => Err(format!("Invalid translation status: {}", s)),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
