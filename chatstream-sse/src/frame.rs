//! SSE frame classification.
//!
//! Only `data:` lines carry payloads at this layer. Event-type
//! discrimination, where a protocol needs it, is re-derived by the decoder
//! from the JSON payload itself — never from an `event:` field — so frame
//! extraction stays protocol-agnostic.

/// The payload prefix defined by the SSE wire format.
const DATA_PREFIX: &str = "data: ";

/// One classified SSE line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Record separator. No event-boundary semantics are needed here; every
    /// data line is processed independently.
    Blank,
    /// A `:` comment line.
    Comment,
    /// The payload bytes following `data: `.
    Data(&'a str),
    /// Any other field (`event:`, `id:`, `retry:`); ignored at this layer.
    Field,
}

impl<'a> SseLine<'a> {
    /// Classify one line of an SSE body.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with(':') {
            Self::Comment
        } else if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
            Self::Data(payload)
        } else {
            Self::Field
        }
    }
}
