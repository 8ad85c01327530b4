#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod stream;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::*;
pub use stream::*;
pub use traits::*;
pub use types::*;
