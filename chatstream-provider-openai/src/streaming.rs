//! Delta-typed SSE decoding for the Chat Completions API.
//!
//! Payloads are either the literal `[DONE]` sentinel or a JSON object with a
//! `choices` array of incremental deltas. Only the sentinel ends the stream:
//! a `finish_reason` on a choice is informational and deliberately does not
//! stop it.
//!
//! Reference: <https://platform.openai.com/docs/api-reference/chat/streaming>

use chatstream_sse::{Decoded, SseDecoder};
use chatstream_types::{Chunk, StreamError};

/// Terminator sentinel sent as the final data payload.
const DONE_SENTINEL: &str = "[DONE]";

/// Decoder for the delta-typed Chat Completions streaming protocol.
pub struct ChatCompletionsDecoder;

impl SseDecoder for ChatCompletionsDecoder {
    fn decode(&mut self, payload: &str) -> Decoded {
        if payload == DONE_SENTINEL {
            return Decoded::finish(Chunk::done());
        }

        let json: serde_json::Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(e) => {
                return Decoded::finish(Chunk::error(StreamError::non_retryable(format!(
                    "failed to parse stream chunk: {e}"
                ))));
            }
        };

        match json["choices"].as_array().and_then(|c| c.first()) {
            Some(choice) => {
                // `content` is absent on role-announcement and finish chunks;
                // an empty fragment is emitted and suppressed downstream.
                let content = choice["delta"]["content"].as_str().unwrap_or("");
                Decoded::emit(Chunk::content(content))
            }
            None => Decoded::skip(),
        }
    }
}
