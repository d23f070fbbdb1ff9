//! Discriminator-prefixed borsh encoding.
//!
//! Instruction payloads and account state share one layout: an 8-byte
//! tag followed by the borsh encoding of the record's fields in
//! declaration order. Decoding tolerates trailing bytes.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};

pub const DISCRIMINATOR_LEN: usize = 8;

fn namespaced(namespace: &str, name: &str) -> [u8; 8] {
    let hash = Sha256::new()
        .chain_update(namespace)
        .chain_update(b":")
        .chain_update(name)
        .finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    out
}

/// Tag for an instruction, keyed by its snake_case name.
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    namespaced("global", name)
}

/// Tag for an account type, keyed by its struct name.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    namespaced("account", name)
}

/// First 8 bytes of a payload, if there are that many.
pub fn peek_discriminator(data: &[u8]) -> Option<[u8; 8]> {
    data.get(..DISCRIMINATOR_LEN)
        .and_then(|tag| tag.try_into().ok())
}

pub fn encode_tagged<T: BorshSerialize>(name: &str, tag: [u8; 8], record: &T) -> CoreResult<Vec<u8>> {
    let mut out = tag.to_vec();
    record
        .serialize(&mut out)
        .map_err(|e| CoreError::malformed(name, e.to_string()))?;
    Ok(out)
}

pub fn decode_tagged<T: BorshDeserialize>(name: &str, tag: [u8; 8], data: &[u8]) -> CoreResult<T> {
    let actual = peek_discriminator(data).ok_or_else(|| {
        CoreError::malformed(
            name,
            format!("{} bytes, need {} for the discriminator", data.len(), DISCRIMINATOR_LEN),
        )
    })?;
    if actual != tag {
        return Err(CoreError::DiscriminatorMismatch {
            expected: name.to_string(),
            actual,
        });
    }
    let mut body = &data[DISCRIMINATOR_LEN..];
    T::deserialize(&mut body).map_err(|e| CoreError::malformed(name, e.to_string()))
}

/// An instruction argument record.
pub trait InstructionArgs: BorshSerialize + BorshDeserialize {
    /// snake_case instruction name
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; 8];

    fn to_instruction_data(&self) -> CoreResult<Vec<u8>> {
        encode_tagged(Self::NAME, Self::DISCRIMINATOR, self)
    }

    fn from_instruction_data(data: &[u8]) -> CoreResult<Self> {
        decode_tagged(Self::NAME, Self::DISCRIMINATOR, data)
    }
}

/// An on-chain account state record.
pub trait AccountData: BorshSerialize + BorshDeserialize {
    /// PascalCase struct name
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; 8];

    fn to_account_data(&self) -> CoreResult<Vec<u8>> {
        encode_tagged(Self::NAME, Self::DISCRIMINATOR, self)
    }

    fn from_account_data(data: &[u8]) -> CoreResult<Self> {
        decode_tagged(Self::NAME, Self::DISCRIMINATOR, data)
    }
}
