//! Built instructions, ready for an external signer/submitter.

use serde::{Deserialize, Serialize};

use crate::address::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn new(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    pub fn new_readonly(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    #[serde(with = "hex_data")]
    pub data: Vec<u8>,
}

impl Instruction {
    /// Append accounts after the fixed layout (royalty/extension accounts).
    pub fn with_remaining_accounts(mut self, remaining: impl IntoIterator<Item = AccountMeta>) -> Self {
        self.accounts.extend(remaining);
        self
    }

    /// Distinct signer addresses in account order.
    pub fn signers(&self) -> Vec<Address> {
        let mut out: Vec<Address> = Vec::new();
        for meta in self.accounts.iter().filter(|m| m.is_signer) {
            if !out.contains(&meta.pubkey) {
                out.push(meta.pubkey);
            }
        }
        out
    }
}

mod hex_data {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let hex: String = data.iter().map(|b| format!("{:02x}", b)).collect();
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.len() % 2 != 0 {
            return Err(de::Error::custom(format!("hex string has odd length: {}", s.len())));
        }
        (0..s.len())
            .step_by(2)
            .map(|i| {
                s.get(i..i + 2)
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(|| de::Error::custom(format!("invalid hex at position {}", i)))
            })
            .collect()
    }
}
