//! # Rarible SVM Core
//!
//! Address derivation, discriminator-prefixed borsh encoding, and
//! instruction building/parsing for Anchor-style programs.
//!
//! Everything here is a pure function of its inputs: no network I/O,
//! no shared state. Fetching account data is delegated to an
//! [`fetch::AccountFetcher`] supplied by the caller.

pub mod abi;
pub mod address;
pub mod builder;
pub mod codec;
pub mod derive;
pub mod error;
pub mod fetch;
pub mod instruction;
pub mod parser;
pub mod validation;

pub mod prelude {
    pub use crate::abi::{AccountDefault, AccountSpec, SeedSource};
    pub use crate::address::Address;
    pub use crate::builder::{build, resolve_accounts};
    pub use crate::codec::{account_discriminator, instruction_discriminator, AccountData, InstructionArgs};
    pub use crate::derive::{create_program_address, find_program_address};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::fetch::{fetch_account, AccountFetcher};
    pub use crate::instruction::{AccountMeta, Instruction};
    pub use crate::parser::{parse, parse_accounts, parse_with, ParsedInstruction};
}
