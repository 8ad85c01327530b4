#![doc = include_str!("../README.md")]

pub mod decode;
pub mod frame;
pub mod line;
pub mod pipeline;

pub use decode::{Decoded, Disposition, SseDecoder};
