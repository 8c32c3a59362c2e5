use konnect::application::ports::{InterviewRepository, RepositoryError, TranslationRepository};
use konnect::domain::{
    DocumentType, Interview, InterviewMessage, InterviewStatus, MessageRole, NewTranslation,
    Translation, TranslationId, TranslationStatus, TranslationUpdate, UserId,
};

use crate::helpers::TestPostgres;

fn chapters_translation(id: &str) -> Translation {
    Translation::new(
        UserId::new("user-1"),
        NewTranslation {
            id: TranslationId::new(id),
            input_document: None,
            chapters: Some(vec!["One".to_string(), "Two".to_string()]),
            document_type: DocumentType::Literary,
            target_language: "Spanish".to_string(),
        },
    )
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_translation_when_inserted_and_read_then_fields_round_trip() {
    let pg = TestPostgres::new().await;
    let record = chapters_translation("pg-1");

    pg.translation_repository.insert(&record).await.unwrap();
    let stored = pg
        .translation_repository
        .find_by_id(&record.id)
        .await
        .unwrap()
        .expect("translation not found");

    assert_eq!(stored.chapters, record.chapters);
    assert_eq!(stored.document_type, DocumentType::Literary);
    assert_eq!(stored.status, TranslationStatus::Loading);
    assert_eq!(stored.name, record.name);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_duplicate_id_when_inserting_then_constraint_violation() {
    let pg = TestPostgres::new().await;
    let record = chapters_translation("pg-dup");
    pg.translation_repository.insert(&record).await.unwrap();

    let result = pg.translation_repository.insert(&record).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_completed_record_when_failing_later_then_status_is_unchanged() {
    let pg = TestPostgres::new().await;
    let record = chapters_translation("pg-2");
    pg.translation_repository.insert(&record).await.unwrap();

    let completed = pg
        .translation_repository
        .update(
            &record.id,
            &TranslationUpdate::completed("Chapter 1\n\nUno".to_string(), "Uno...".to_string()),
        )
        .await
        .unwrap();
    let failed = pg
        .translation_repository
        .update(&record.id, &TranslationUpdate::failed())
        .await
        .unwrap();

    assert!(completed);
    assert!(!failed);
    let stored = pg
        .translation_repository
        .find_by_id(&record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, TranslationStatus::Completed);
    assert_eq!(stored.name, "Uno...");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn given_interview_turns_when_reading_then_chronological_and_status_updates() {
    let pg = TestPostgres::new().await;
    let interview = Interview::new(UserId::new("user-1"));
    pg.interview_repository
        .create_interview(&interview)
        .await
        .unwrap();

    for (role, content) in [(MessageRole::User, "answer"), (MessageRole::Assistant, "question")] {
        pg.interview_repository
            .append_message(&InterviewMessage::new(interview.id, role, content.to_string()))
            .await
            .unwrap();
    }
    pg.interview_repository
        .update_status(interview.id, InterviewStatus::Completed)
        .await
        .unwrap();

    let messages = pg
        .interview_repository
        .get_messages(interview.id)
        .await
        .unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[1].content, "question");

    let stored = pg
        .interview_repository
        .get_interview(interview.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, InterviewStatus::Completed);
}
