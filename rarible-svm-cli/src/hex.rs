//! Text encodings for raw account and instruction bytes.

use std::str::FromStr;

use base58::FromBase58;

use crate::error::{CliError, CliResult};

pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn hex_decode(hex: &str) -> CliResult<Vec<u8>> {
    let hex = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if hex.len() % 2 != 0 {
        return Err(CliError::InvalidInput(format!("Hex string has odd length: {}", hex.len())));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| CliError::InvalidInput(format!("Invalid hex at position {}", i)))
        })
        .collect()
}

/// How an account dump is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Bytes exactly as stored on chain
    #[default]
    Raw,
    Hex,
    Base58,
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Encoding::Raw),
            "hex" => Ok(Encoding::Hex),
            "base58" => Ok(Encoding::Base58),
            _ => Err(format!("Unknown encoding '{}' (raw, hex, base58)", s)),
        }
    }
}

/// Decode file contents. Text encodings ignore surrounding whitespace.
pub fn decode_contents(contents: &[u8], encoding: Encoding) -> CliResult<Vec<u8>> {
    let text = || {
        std::str::from_utf8(contents)
            .map(str::trim)
            .map_err(|_| CliError::InvalidInput("Encoded account data is not UTF-8".into()))
    };
    match encoding {
        Encoding::Raw => Ok(contents.to_vec()),
        Encoding::Hex => hex_decode(text()?),
        Encoding::Base58 => text()?
            .from_base58()
            .map_err(|e| CliError::InvalidInput(format!("Invalid base58: {:?}", e))),
    }
}
