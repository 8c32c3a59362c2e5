pub const UNIT_SEPARATOR: &str = "\n\n---\n\n";
pub const DOCUMENT_HEADING: &str = "Document";

const PREVIEW_MAX_CHARS: usize = 100;
const PREVIEW_LINES: usize = 2;

/// The extracted translation of one document or chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedUnit {
    pub heading: String,
    pub text: String,
}

impl TranslatedUnit {
    pub fn document(text: String) -> Self {
        Self {
            heading: DOCUMENT_HEADING.to_string(),
            text,
        }
    }

    /// `position` is 1-based and counts skipped chapters.
    pub fn chapter(position: usize, text: String) -> Self {
        Self {
            heading: format!("Chapter {position}"),
            text,
        }
    }
}

pub fn combine_units(units: &[TranslatedUnit]) -> String {
    units
        .iter()
        .map(|unit| format!("{}\n\n{}", unit.heading, unit.text))
        .collect::<Vec<_>>()
        .join(UNIT_SEPARATOR)
}

/// Title shown in listings: the first two non-blank lines, capped at 100
/// characters, always followed by an ellipsis.
pub fn preview_title(text: &str) -> String {
    let preview = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join(" ");

    if preview.chars().count() > PREVIEW_MAX_CHARS {
        let truncated: String = preview.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        format!("{preview}...")
    }
}
