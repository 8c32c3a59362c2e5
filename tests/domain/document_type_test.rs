use konnect::domain::DocumentType;

#[test]
fn given_full_label_when_deserializing_then_maps_to_variant() {
    let parsed: DocumentType =
        serde_json::from_str(r#""News/Journalistic Writing""#).unwrap();

    assert_eq!(parsed, DocumentType::Journalistic);
}

#[test]
fn given_short_alias_when_deserializing_then_maps_to_variant() {
    let parsed: DocumentType = serde_json::from_str(r#""literary""#).unwrap();

    assert_eq!(parsed, DocumentType::Literary);
}

#[test]
fn given_unknown_label_when_deserializing_then_fails() {
    let parsed = serde_json::from_str::<DocumentType>(r#""Cookbook""#);

    assert!(parsed.is_err());
}

#[test]
fn given_every_type_when_round_tripping_label_then_parses_back() {
    for document_type in DocumentType::ALL {
        assert_eq!(
            document_type.as_str().parse::<DocumentType>().unwrap(),
            document_type
        );
    }
}

#[test]
fn given_every_type_when_loading_template_then_prompt_uses_tag_vocabulary() {
    for document_type in DocumentType::ALL {
        let template = document_type.template();
        assert_eq!(template.payload_tag, "translation");
        assert_eq!(template.sentinel_tag, "is_done");
        assert!(template.system_prompt.contains("<translation>"));
        assert!(template.system_prompt.contains("<is_done>"));
    }
}
