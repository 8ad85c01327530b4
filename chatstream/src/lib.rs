#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub use chatstream_provider_anthropic;
pub use chatstream_provider_openai;
pub use chatstream_sse;
pub use chatstream_types;

pub mod registry;

pub use registry::{ChatProvider, build_providers};

/// Happy-path imports for streaming from a configured provider.
pub mod prelude {
    pub use chatstream_provider_anthropic::Anthropic;
    pub use chatstream_provider_openai::OpenAi;
    pub use chatstream_types::{
        ChatMessage, Chunk, Provider, ProviderConfig, ProviderError, ProviderKind, Role,
        StreamError, StreamHandle,
    };

    pub use crate::registry::{ChatProvider, build_providers};
}
