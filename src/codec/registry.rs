use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use super::Codec;
use crate::error::{PassforgeError, Result};
use crate::types::{EncodingKind, EncodingResultSet};

macro_rules! register_codecs {
    ($($module:ident :: $codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$module::$codec)),*
            ];

            for (codec, kind) in codecs.iter().zip(EncodingKind::ALL) {
                if codec.kind() != kind {
                    panic!(
                        "Codec '{}' registered where '{}' belongs",
                        codec.name(), kind
                    );
                }
            }

            let mut name_map = HashMap::new();
            for (idx, codec) in codecs.iter().enumerate() {
                name_map.insert(codec.name(), idx);
                for alias in codec.meta().aliases {
                    if let Some(existing) = name_map.insert(*alias, idx) {
                        panic!(
                            "Duplicate codec name '{}' for '{}' and '{}'",
                            alias, codecs[existing].name(), codec.name()
                        );
                    }
                }
            }

            Registry { codecs, name_map }
        }
    };
}

// Order must follow EncodingKind::ALL.
register_codecs! {
    text::Base64,
    text::Hex,
    text::Unicode,
    text::Ascii,
    digest::Md5Hex,
    digest::Sha1Hex,
    digest::Sha256Hex,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        let name_lower = name.trim().to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| PassforgeError::unsupported_mode(name))
    }

    pub fn codec(&self, kind: EncodingKind) -> &dyn Codec {
        self.codecs[kind as usize].as_ref()
    }

    pub fn encode_all(&self, input: &str, symbol: &str) -> Result<EncodingResultSet> {
        let mut values: [String; 7] = Default::default();
        for (slot, kind) in values.iter_mut().zip(EncodingKind::ALL) {
            *slot = self.codec(kind).encode(input)?;
        }
        debug!(
            "encoded {} chars with {} codecs, symbol length {}",
            input.chars().count(),
            values.len(),
            symbol.chars().count()
        );
        Ok(EncodingResultSet::new(values).append_symbol(symbol))
    }
}
