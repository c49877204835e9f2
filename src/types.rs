use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::path::PathBuf;

use crate::codec::Registry;
use crate::error::{PassforgeError, Result};
use crate::recommend::SymbolPolicy;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// The closed set of encodings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    Base64,
    Hex,
    Unicode,
    Ascii,
    Md5,
    Sha1,
    Sha256,
}

impl EncodingKind {
    pub const ALL: [EncodingKind; 7] = [
        EncodingKind::Base64,
        EncodingKind::Hex,
        EncodingKind::Unicode,
        EncodingKind::Ascii,
        EncodingKind::Md5,
        EncodingKind::Sha1,
        EncodingKind::Sha256,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EncodingKind::Base64 => "base64",
            EncodingKind::Hex => "hex",
            EncodingKind::Unicode => "unicode",
            EncodingKind::Ascii => "ascii",
            EncodingKind::Md5 => "md5",
            EncodingKind::Sha1 => "sha1",
            EncodingKind::Sha256 => "sha256",
        }
    }

    pub fn label(self) -> String {
        self.name().to_uppercase()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single invocation renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Single(EncodingKind),
    Recommend,
    #[default]
    All,
}

impl OutputMode {
    /// Drop-down order used by the form.
    pub const CHOICES: [OutputMode; 9] = [
        OutputMode::All,
        OutputMode::Single(EncodingKind::Base64),
        OutputMode::Single(EncodingKind::Hex),
        OutputMode::Single(EncodingKind::Unicode),
        OutputMode::Single(EncodingKind::Ascii),
        OutputMode::Single(EncodingKind::Md5),
        OutputMode::Single(EncodingKind::Sha1),
        OutputMode::Single(EncodingKind::Sha256),
        OutputMode::Recommend,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputMode::Single(kind) => kind.name(),
            OutputMode::Recommend => "recommend",
            OutputMode::All => "all",
        }
    }

    /// Resolves a mode name, accepting any codec alias known to the registry.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(OutputMode::All),
            "recommend" => Ok(OutputMode::Recommend),
            _ => Registry::global()
                .get(s)
                .map(|codec| OutputMode::Single(codec.kind())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => OutputDest::File(p),
            _ => OutputDest::Stdout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// One encoded value per `EncodingKind`, kept in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingResultSet {
    values: [String; 7],
}

impl EncodingResultSet {
    pub(crate) fn new(values: [String; 7]) -> Self {
        Self { values }
    }

    pub(crate) fn append_symbol(mut self, symbol: &str) -> Self {
        if !symbol.is_empty() {
            for value in self.values.iter_mut() {
                value.push_str(symbol);
            }
        }
        self
    }

    pub fn get(&self, kind: EncodingKind) -> &str {
        &self.values[kind.index()]
    }

    pub fn base64(&self) -> &str {
        self.get(EncodingKind::Base64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EncodingKind, &str)> + '_ {
        EncodingKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for EncodingResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.name(), value)?;
        }
        map.end()
    }
}

/// Per-invocation configuration shared by both front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub input: String,
    pub limit: Option<i64>,
    pub symbol: String,
    pub mode: OutputMode,
    pub policy: SymbolPolicy,
}

impl Request {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            limit: None,
            symbol: String::new(),
            mode: OutputMode::All,
            policy: SymbolPolicy::Repeat,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(PassforgeError::invalid_input("input string must not be empty"));
        }
        Ok(())
    }
}
