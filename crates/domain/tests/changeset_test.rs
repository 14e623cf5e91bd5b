use dns_failover_domain::{ChangeAction, Changeset, DeclaredRecordType, DomainError, RecordType};

#[test]
fn test_parse_full_changeset() {
    let json = r#"[
        {"order": 1, "action": "upsert", "type": "A", "fqdn": "www.example.com", "value": "203.0.113.10", "ttl": 300},
        {"order": 2, "action": "delete", "type": "cname", "fqdn": "legacy.example.com", "value": "", "ttl": 0}
    ]"#;

    let cs = Changeset::parse(json).unwrap();

    assert_eq!(cs.len(), 2);
    let first = &cs.directives()[0];
    assert_eq!(first.order, 1);
    assert_eq!(first.action, ChangeAction::Upsert);
    assert_eq!(first.record_type, DeclaredRecordType::Supported(RecordType::A));
    assert_eq!(first.value.as_deref(), Some("203.0.113.10"));
    assert_eq!(first.ttl, Some(300));

    let second = &cs.directives()[1];
    assert_eq!(second.action, ChangeAction::Delete);
    assert_eq!(
        second.record_type,
        DeclaredRecordType::Supported(RecordType::CNAME)
    );
}

#[test]
fn test_parse_sorts_by_order() {
    let json = r#"[
        {"order": 2, "action": "delete", "type": "A", "fqdn": "a.example.com"},
        {"order": 1, "action": "upsert", "type": "A", "fqdn": "a.example.com", "value": "1.2.3.4", "ttl": 300}
    ]"#;

    let cs = Changeset::parse(json).unwrap();
    let orders: Vec<i64> = cs.iter().map(|d| d.order).collect();

    assert_eq!(orders, vec![1, 2]);
    assert_eq!(cs.directives()[0].action, ChangeAction::Upsert);
}

#[test]
fn test_parse_action_and_type_case_insensitive() {
    let json = r#"[{"order": 1, "action": "UpSeRt", "type": "aaaa", "fqdn": "v6.example.com", "value": "2001:db8::1", "ttl": 60}]"#;

    let cs = Changeset::parse(json).unwrap();

    assert_eq!(cs.directives()[0].action, ChangeAction::Upsert);
    assert_eq!(
        cs.directives()[0].record_type.supported(),
        Some(RecordType::AAAA)
    );
}

#[test]
fn test_parse_keeps_unsupported_type_for_apply_time() {
    let json = r#"[{"order": 1, "action": "upsert", "type": "LOC", "fqdn": "x.example.com", "value": "x", "ttl": 60}]"#;

    let cs = Changeset::parse(json).unwrap();

    assert_eq!(
        cs.directives()[0].record_type,
        DeclaredRecordType::Unsupported("LOC".into())
    );
}

#[test]
fn test_parse_empty_array() {
    let cs = Changeset::parse("[]").unwrap();
    assert!(cs.is_empty());
}

#[test]
fn test_parse_rejects_non_array() {
    let result = Changeset::parse(r#"{"order": 1}"#);
    assert!(matches!(result, Err(DomainError::InvalidChangeset(_))));
}

#[test]
fn test_parse_rejects_unknown_action() {
    let json = r#"[{"order": 1, "action": "rename", "type": "A", "fqdn": "a.example.com"}]"#;
    let err = Changeset::parse(json).unwrap_err();
    assert!(err.to_string().contains("unknown action"));
}

#[test]
fn test_parse_rejects_missing_order() {
    let json = r#"[{"action": "delete", "type": "A", "fqdn": "a.example.com"}]"#;
    let err = Changeset::parse(json).unwrap_err();
    assert!(err.to_string().contains("order"));
}

#[test]
fn test_parse_rejects_empty_fqdn() {
    let json = r#"[{"order": 1, "action": "delete", "type": "A", "fqdn": "  "}]"#;
    assert!(Changeset::parse(json).is_err());
}

#[test]
fn test_parse_rejects_upsert_without_value() {
    let json = r#"[{"order": 1, "action": "upsert", "type": "A", "fqdn": "a.example.com", "ttl": 300}]"#;
    let err = Changeset::parse(json).unwrap_err();
    assert!(err.to_string().contains("value"));
}

#[test]
fn test_parse_rejects_upsert_without_ttl() {
    let json = r#"[{"order": 1, "action": "upsert", "type": "A", "fqdn": "a.example.com", "value": "1.2.3.4"}]"#;
    let err = Changeset::parse(json).unwrap_err();
    assert!(err.to_string().contains("ttl"));
}

#[test]
fn test_parse_rejects_negative_ttl() {
    let json = r#"[{"order": 1, "action": "upsert", "type": "A", "fqdn": "a.example.com", "value": "1.2.3.4", "ttl": -5}]"#;
    assert!(Changeset::parse(json).is_err());
}

#[test]
fn test_to_json_parses_back_to_same_changeset() {
    let json = r#"[
        {"order": 1, "action": "upsert", "type": "TXT", "fqdn": "t.example.com", "value": "v=spf1 -all", "ttl": 120},
        {"order": 5, "action": "delete", "type": "MX", "fqdn": "m.example.com"}
    ]"#;
    let cs = Changeset::parse(json).unwrap();

    let stored = cs.to_json().unwrap();

    assert_eq!(Changeset::parse(&stored).unwrap(), cs);
}

#[test]
fn test_parse_rejects_upsert_with_zero_ttl() {
    let json = r#"[{"order": 1, "action": "upsert", "type": "A", "fqdn": "a.example.com", "value": "203.0.113.1", "ttl": 0}]"#;

    let err = Changeset::parse(json).unwrap_err();

    assert!(matches!(err, DomainError::InvalidChangeset(_)));
    assert!(err.to_string().contains("ttl must be positive"));
}

#[test]
fn test_parse_accepts_delete_with_zero_ttl() {
    let json = r#"[{"order": 1, "action": "delete", "type": "A", "fqdn": "a.example.com", "ttl": 0}]"#;

    let cs = Changeset::parse(json).unwrap();

    assert_eq!(cs.directives()[0].ttl, Some(0));
}
