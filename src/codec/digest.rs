use data_encoding::HEXLOWER;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, EncodingKind};

fn hex_digest<D: Digest>(input: &str) -> String {
    HEXLOWER.encode(&D::digest(input.as_bytes()))
}

pub struct Md5Hex;

impl Codec for Md5Hex {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Md5
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "md5",
            aliases: &["md-5"],
            description: "MD5 digest, lowercase hex",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(hex_digest::<Md5>(input))
    }
}

pub struct Sha1Hex;

impl Codec for Sha1Hex {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Sha1
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "sha1",
            aliases: &["sha-1"],
            description: "SHA-1 digest, lowercase hex",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(hex_digest::<Sha1>(input))
    }
}

pub struct Sha256Hex;

impl Codec for Sha256Hex {
    fn kind(&self) -> EncodingKind {
        EncodingKind::Sha256
    }

    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "sha256",
            aliases: &["sha-256", "sha2"],
            description: "SHA-256 digest, lowercase hex",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(hex_digest::<Sha256>(input))
    }
}
