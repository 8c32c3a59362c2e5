use konnect::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log("  \n "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_for_log("  Hello world \n"), "Hello world");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total_count() {
    let text = "a".repeat(250);

    let sanitized = sanitize_for_log(&text);

    assert_eq!(sanitized, format!("{}... (250 chars total)", "a".repeat(100)));
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_cuts_on_char_boundary() {
    let text = "日本語".repeat(50);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"日本語".repeat(33)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_values_are_redacted() {
    let sanitized = sanitize_for_log("Authorization: Bearer sk-abc123 and api_key=xyz&token=t1");

    assert!(!sanitized.contains("sk-abc123"));
    assert!(!sanitized.contains("xyz"));
    assert!(!sanitized.contains("t1"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("api_key=[REDACTED]&token=[REDACTED]"));
}

#[test]
fn given_repeated_secret_when_sanitizing_then_every_occurrence_is_redacted() {
    let sanitized = sanitize_for_log("password=one password=two");

    assert_eq!(sanitized, "password=[REDACTED] password=[REDACTED]");
}
