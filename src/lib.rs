pub mod clipboard;
pub mod codec;
pub mod error;
pub mod form;
pub mod generate;
pub mod recommend;
pub mod render;
pub mod types;

pub use codec::encode_all;
pub use error::{PassforgeError, Result};
pub use generate::{generate, Generated};
pub use recommend::{recommend, SymbolPolicy, DEFAULT_LIMIT};
pub use render::Style;
pub use types::{Context, EncodingKind, EncodingResultSet, OutputDest, OutputMode, Request};
