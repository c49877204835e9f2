use base64::prelude::*;
use data_encoding::HEXLOWER;

use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, EncodingKind};

pub struct Base64;

impl Codec for Base64 {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Base64
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64",
            aliases: &["b64", "base64pad"],
            description: "RFC4648 Base64 with padding",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(BASE64_STANDARD.encode(input.as_bytes()))
    }
}

pub struct Hex;

impl Codec for Hex {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Hex
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "hex",
            aliases: &["base16", "hexlower"],
            description: "Lowercase hexadecimal of the UTF-8 bytes",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(HEXLOWER.encode(input.as_bytes()))
    }
}

pub struct Unicode;

impl Codec for Unicode {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Unicode
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "unicode",
            aliases: &["escape", "uescape"],
            description: "\\uXXXX escape per code point, at least four hex digits",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input
            .chars()
            .map(|c| format!("\\u{:04x}", c as u32))
            .collect())
    }
}

pub struct Ascii;

impl Codec for Ascii {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Ascii
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "ascii",
            aliases: &["decimal", "ord"],
            description: "Decimal code points separated by spaces",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input
            .chars()
            .map(|c| (c as u32).to_string())
            .collect::<Vec<_>>()
            .join(" "))
    }
}
