mod digest;
pub mod registry;
mod text;

pub use registry::Registry;

use crate::error::Result;
use crate::types::{CodecMeta, EncodingKind, EncodingResultSet};

pub trait Codec: Send + Sync {
    fn kind(&self) -> EncodingKind;
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &str) -> Result<String>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

/// Encodes `input` with every codec and appends `symbol` to each value.
pub fn encode_all(input: &str, symbol: &str) -> Result<EncodingResultSet> {
    Registry::global().encode_all(input, symbol)
}
