//! Event-typed SSE decoding for the Anthropic Messages API.
//!
//! Each payload carries a `type` discriminant. Only three kinds matter to a
//! chat caller: text deltas, the stop marker, and explicit error events;
//! everything else (`message_start`, `content_block_start`, `ping`, ...) is
//! structural and ignored.
//!
//! Reference: <https://docs.anthropic.com/en/api/messages-streaming>

use chatstream_sse::{Decoded, SseDecoder};
use chatstream_types::{Chunk, StreamError};

/// Decoder for the event-typed Messages streaming protocol.
pub struct MessagesDecoder;

impl SseDecoder for MessagesDecoder {
    fn decode(&mut self, payload: &str) -> Decoded {
        let json: serde_json::Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(e) => {
                return Decoded::finish(Chunk::error(StreamError::non_retryable(format!(
                    "failed to parse stream event: {e}"
                ))));
            }
        };

        match json["type"].as_str() {
            Some("content_block_delta") => match json["delta"]["text"].as_str() {
                Some(text) => Decoded::emit(Chunk::content(text)),
                // Non-text delta kinds legitimately omit `text`; ignore them
                // rather than tightening validation.
                None => Decoded::skip(),
            },
            Some("message_stop") => Decoded::finish(Chunk::done()),
            Some("error") => {
                let message = json["error"]["message"].as_str().unwrap_or("unknown error");
                Decoded::finish(Chunk::error(StreamError::non_retryable(message)))
            }
            // message_start, content_block_start/stop, message_delta, ping,
            // unknown kinds, and payloads without a type discriminant
            _ => Decoded::skip(),
        }
    }
}
