use crate::domain::DocumentType;

use super::TranslatedUnit;

const FULL_TRANSLATION_RULES: &str = "DO NOT write anything outside the XML tags. \
Ensure that the entire content is translated with the same length, without leaving out any sentences. \
DO NOT TRUNCATE OR SUMMARIZE! TRANSLATE FULLY:";

/// Opening user turn for a standalone document or the first translated
/// chapter.
pub fn initial_prompt(document_type: DocumentType, target_language: &str, text: &str) -> String {
    format!(
        "Follow your instruction to think step-by-step and translate the following {document_type} \
to {target_language} language. {FULL_TRANSLATION_RULES}\n\n{text}"
    )
}

/// Opening user turn for the chapter at zero-based `index`. Every chapter
/// after the first recaps the translations produced so far; blank chapters
/// keep their position but add nothing to the recap.
pub fn chapter_prompt(
    document_type: DocumentType,
    target_language: &str,
    index: usize,
    previous: &[TranslatedUnit],
    chapter: &str,
) -> String {
    if index == 0 {
        return initial_prompt(document_type, target_language, chapter);
    }

    let recap = previous
        .iter()
        .map(|unit| format!("{} Translation:\n{}", unit.heading, unit.text))
        .collect::<Vec<_>>()
        .join("\n\n");
    let scope = if index > 1 { "chapters" } else { "chapter" };

    format!(
        "Follow your instruction to think step-by-step and translate the next {document_type} \
to {target_language} language. In your thought process and writing, make sure that there is \
consistency from the previous {scope}. {FULL_TRANSLATION_RULES}\n\n{recap}\n\n\
Current Chapter Text:\n{chapter}"
    )
}
