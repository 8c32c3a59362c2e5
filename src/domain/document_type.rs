use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Genre of the submitted document; selects the instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(
        rename = "Books, Academic Papers, and Technical Content",
        alias = "academic"
    )]
    Academic,
    #[serde(rename = "News/Journalistic Writing", alias = "journalistic")]
    Journalistic,
    #[serde(rename = "Literary (Poetry or Prose)", alias = "literary")]
    Literary,
    #[serde(rename = "Legal", alias = "legal")]
    Legal,
}

/// Static instruction set for one document type, and the tag vocabulary it
/// tells the model to use.
#[derive(Debug)]
pub struct PromptTemplate {
    pub system_prompt: &'static str,
    pub payload_tag: &'static str,
    pub sentinel_tag: &'static str,
}

static ACADEMIC: PromptTemplate = PromptTemplate {
    system_prompt: include_str!("../../prompts/academic.md"),
    payload_tag: "translation",
    sentinel_tag: "is_done",
};

static JOURNALISTIC: PromptTemplate = PromptTemplate {
    system_prompt: include_str!("../../prompts/journalistic.md"),
    payload_tag: "translation",
    sentinel_tag: "is_done",
};

static LITERARY: PromptTemplate = PromptTemplate {
    system_prompt: include_str!("../../prompts/literary.md"),
    payload_tag: "translation",
    sentinel_tag: "is_done",
};

static LEGAL: PromptTemplate = PromptTemplate {
    system_prompt: include_str!("../../prompts/legal.md"),
    payload_tag: "translation",
    sentinel_tag: "is_done",
};

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Academic,
        DocumentType::Journalistic,
        DocumentType::Literary,
        DocumentType::Legal,
    ];

    /// Human-readable label; also the value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Academic => "Books, Academic Papers, and Technical Content",
            DocumentType::Journalistic => "News/Journalistic Writing",
            DocumentType::Literary => "Literary (Poetry or Prose)",
            DocumentType::Legal => "Legal",
        }
    }

    pub fn template(&self) -> &'static PromptTemplate {
        match self {
            DocumentType::Academic => &ACADEMIC,
            DocumentType::Journalistic => &JOURNALISTIC,
            DocumentType::Literary => &LITERARY,
            DocumentType::Legal => &LEGAL,
        }
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid document type: {}", s))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
