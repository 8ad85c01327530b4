//! The decoder seam between the pipeline and provider protocols.

use chatstream_types::Chunk;

/// Whether the stream continues after a decoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep reading the source.
    Continue,
    /// End the stream after the accompanying chunk is delivered.
    Stop,
}

/// The tagged outcome of decoding one payload event.
#[derive(Debug)]
pub struct Decoded {
    /// The chunk to publish. Empty chunks are suppressed by the pipeline.
    pub chunk: Chunk,
    /// Whether the decoder wants the stream to continue.
    pub disposition: Disposition,
}

impl Decoded {
    /// Emit a chunk and keep reading.
    #[must_use]
    pub fn emit(chunk: Chunk) -> Self {
        Self {
            chunk,
            disposition: Disposition::Continue,
        }
    }

    /// Emit a final chunk and stop the stream.
    #[must_use]
    pub fn finish(chunk: Chunk) -> Self {
        Self {
            chunk,
            disposition: Disposition::Stop,
        }
    }

    /// Emit nothing and keep reading.
    ///
    /// Used for structural protocol events and for malformed-but-parseable
    /// payloads, which the decoders deliberately tolerate.
    #[must_use]
    pub fn skip() -> Self {
        Self {
            chunk: Chunk::default(),
            disposition: Disposition::Continue,
        }
    }
}

/// Interprets one SSE payload event as a chat-stream update.
///
/// Implementations are driven strictly in source order by a single pipeline
/// worker, so `&mut self` is available for protocols that need to accumulate
/// state across payloads. Neither shipped decoder does.
pub trait SseDecoder: Send + 'static {
    /// Decode the bytes that followed one `data: ` prefix.
    fn decode(&mut self, payload: &str) -> Decoded;
}
