use konnect::application::services::{TranslatedUnit, chapter_prompt, initial_prompt};
use konnect::domain::DocumentType;

#[test]
fn given_document_when_building_initial_prompt_then_names_type_language_and_ends_with_text() {
    let prompt = initial_prompt(DocumentType::Legal, "German", "The parties agree.");

    assert!(prompt.contains("translate the following Legal to German language"));
    assert!(prompt.contains("DO NOT TRUNCATE OR SUMMARIZE"));
    assert!(prompt.ends_with("\n\nThe parties agree."));
}

#[test]
fn given_first_chapter_when_building_chapter_prompt_then_matches_initial_prompt() {
    let chapter = chapter_prompt(DocumentType::Academic, "French", 0, &[], "Chapter text");

    assert_eq!(
        chapter,
        initial_prompt(DocumentType::Academic, "French", "Chapter text")
    );
}

#[test]
fn given_previous_chapters_when_building_chapter_prompt_then_recaps_each_translation() {
    let previous = vec![
        TranslatedUnit::chapter(1, "Uno".to_string()),
        TranslatedUnit::chapter(2, "Dos".to_string()),
    ];

    let prompt = chapter_prompt(
        DocumentType::Literary,
        "Spanish",
        2,
        &previous,
        "Third chapter",
    );

    assert!(prompt.contains("consistency from the previous chapters"));
    assert!(prompt.contains("Chapter 1 Translation:\nUno\n\nChapter 2 Translation:\nDos"));
    assert!(prompt.ends_with("Current Chapter Text:\nThird chapter"));
}

#[test]
fn given_one_previous_chapter_when_building_chapter_prompt_then_uses_singular() {
    let previous = vec![TranslatedUnit::chapter(1, "Uno".to_string())];

    let prompt = chapter_prompt(DocumentType::Journalistic, "Spanish", 1, &previous, "Next");

    assert!(prompt.contains("consistency from the previous chapter."));
}

#[test]
fn given_blank_first_chapter_when_building_second_chapter_prompt_then_uses_next_wording_with_empty_recap()
{
    let prompt = chapter_prompt(DocumentType::Legal, "Italian", 1, &[], "Body");

    assert!(prompt.contains("translate the next Legal to Italian language"));
    assert!(prompt.contains("consistency from the previous chapter."));
    assert!(prompt.ends_with("TRANSLATE FULLY:\n\n\n\nCurrent Chapter Text:\nBody"));
}

#[test]
fn given_third_position_after_one_translation_when_building_prompt_then_scope_follows_position() {
    let previous = vec![TranslatedUnit::chapter(2, "Dos".to_string())];

    let prompt = chapter_prompt(DocumentType::Literary, "Spanish", 2, &previous, "Tres");

    assert!(prompt.contains("consistency from the previous chapters."));
    assert!(prompt.contains("Chapter 2 Translation:\nDos"));
}
