//! End-to-end tests: configuration map in, streamed text out.

use std::collections::HashMap;

use chatstream::prelude::*;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(kind: ProviderKind, base_url: String) -> ProviderConfig {
    ProviderConfig {
        kind,
        api_key: "test-key".into(),
        base_url,
        model: "test-model".into(),
        system_prompt: None,
        max_tokens: 256,
    }
}

async fn stream_text(provider: &ChatProvider) -> String {
    let mut handle = provider
        .stream_chat(CancellationToken::new(), vec![ChatMessage::user("hi")])
        .await
        .expect("expected a stream");

    let mut text = String::new();
    while let Some(chunk) = handle.recv().await {
        assert!(chunk.error.is_none(), "unexpected error: {chunk:?}");
        text.push_str(&chunk.content);
    }
    text
}

#[tokio::test]
async fn configured_anthropic_provider_streams_text() {
    let mock_server = MockServer::start().await;

    let body = "\
event: content_block_delta
data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"type\":\"text_delta\",\"text\":\"Hello\"}}

event: content_block_delta
data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"type\":\"text_delta\",\"text\":\" there\"}}

event: message_stop
data: {\"type\":\"message_stop\"}
";
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let mut configs = HashMap::new();
    configs.insert(
        "claude".to_string(),
        config(ProviderKind::Anthropic, mock_server.uri()),
    );

    let providers = build_providers(configs);
    assert_eq!(stream_text(&providers["claude"]).await, "Hello there");
}

#[tokio::test]
async fn configured_openai_provider_streams_text() {
    let mock_server = MockServer::start().await;

    let body = "\
data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hello\"},\"finish_reason\":null}]}

data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\" there\"},\"finish_reason\":null}]}

data: [DONE]
";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let mut configs = HashMap::new();
    configs.insert(
        "gpt".to_string(),
        config(ProviderKind::OpenAi, mock_server.uri()),
    );

    let providers = build_providers(configs);
    assert_eq!(stream_text(&providers["gpt"]).await, "Hello there");
}
