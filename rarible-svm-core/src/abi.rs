//! Account layouts for instructions.
//!
//! An instruction's account list is an ordered sequence of
//! [`AccountSpec`]s. Order is the wire contract: programs index
//! accounts by position.

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// A seed component for a defaulted PDA account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SeedSource {
    /// Fixed bytes: a tag string, or an argument encoded by the caller.
    #[serde(rename = "literal")]
    Literal { bytes: Vec<u8> },
    /// The resolved address of another account in the same layout.
    #[serde(rename = "account")]
    Account { name: String },
}

impl SeedSource {
    pub fn literal(bytes: impl AsRef<[u8]>) -> Self {
        SeedSource::Literal {
            bytes: bytes.as_ref().to_vec(),
        }
    }

    pub fn account(name: impl Into<String>) -> Self {
        SeedSource::Account { name: name.into() }
    }
}

/// How to fill an account the caller did not supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AccountDefault {
    /// A fixed program or sysvar id.
    #[serde(rename = "address")]
    Address { address: Address },
    /// A program-derived address.
    #[serde(rename = "pda")]
    Pda {
        program: Address,
        seeds: Vec<SeedSource>,
    },
    /// Optional account; written as the instruction's program id.
    #[serde(rename = "omitted")]
    Omitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub signer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<AccountDefault>,
}

impl AccountSpec {
    pub fn new(name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            name: name.into(),
            address,
            writable: false,
            signer: false,
            default: None,
        }
    }

    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    pub fn signer(mut self) -> Self {
        self.signer = true;
        self
    }

    pub fn or_address(mut self, address: Address) -> Self {
        self.default = Some(AccountDefault::Address { address });
        self
    }

    pub fn or_pda(mut self, program: Address, seeds: Vec<SeedSource>) -> Self {
        self.default = Some(AccountDefault::Pda { program, seeds });
        self
    }

    pub fn optional(mut self) -> Self {
        self.default = Some(AccountDefault::Omitted);
        self
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.default, Some(AccountDefault::Omitted))
    }
}

/// Index of `name` within a layout.
pub fn position(specs: &[AccountSpec], name: &str) -> Option<usize> {
    specs.iter().position(|s| s.name == name)
}
