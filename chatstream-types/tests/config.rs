use chatstream_types::{ChatMessage, ProviderConfig, ProviderKind, Role};

#[test]
fn provider_config_defaults_max_tokens() {
    let cfg: ProviderConfig = serde_json::from_value(serde_json::json!({
        "kind": "anthropic",
        "api_key": "sk-test",
        "base_url": "https://api.anthropic.com",
        "model": "claude-sonnet-4-20250514"
    }))
    .unwrap();

    assert_eq!(cfg.kind, ProviderKind::Anthropic);
    assert_eq!(cfg.max_tokens, 4096);
    assert!(cfg.system_prompt.is_none());
}

#[test]
fn provider_kind_deserializes_lowercase() {
    let kind: ProviderKind = serde_json::from_str("\"openai\"").unwrap();
    assert_eq!(kind, ProviderKind::OpenAi);
}

#[test]
fn role_serializes_lowercase() {
    let msg = ChatMessage::user("hi");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "hi");
}

#[test]
fn role_roundtrip() {
    for (role, wire) in [
        (Role::User, "\"user\""),
        (Role::Assistant, "\"assistant\""),
        (Role::System, "\"system\""),
    ] {
        assert_eq!(serde_json::to_string(&role).unwrap(), wire);
        let back: Role = serde_json::from_str(wire).unwrap();
        assert_eq!(back, role);
    }
}
