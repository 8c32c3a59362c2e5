use konnect::domain::TranslationStatus;

#[test]
fn given_loading_when_checking_transitions_then_only_terminal_targets_allowed() {
    assert!(TranslationStatus::Loading.can_transition_to(TranslationStatus::Completed));
    assert!(TranslationStatus::Loading.can_transition_to(TranslationStatus::Failed));
    assert!(!TranslationStatus::Loading.can_transition_to(TranslationStatus::Loading));
}

#[test]
fn given_terminal_status_when_checking_transitions_then_nothing_allowed() {
    for terminal in [TranslationStatus::Completed, TranslationStatus::Failed] {
        assert!(terminal.is_terminal());
        assert!(!terminal.can_transition_to(TranslationStatus::Loading));
        assert!(!terminal.can_transition_to(TranslationStatus::Completed));
        assert!(!terminal.can_transition_to(TranslationStatus::Failed));
    }
}

#[test]
fn given_stored_value_when_parsing_then_matches_serialized_form() {
    assert_eq!(
        "completed".parse::<TranslationStatus>().unwrap(),
        TranslationStatus::Completed
    );
    assert_eq!(
        serde_json::to_string(&TranslationStatus::Loading).unwrap(),
        r#""loading""#
    );
    assert!("done".parse::<TranslationStatus>().is_err());
}
