//! Rarible editions controls program: phased, priced mints with platform
//! fees on top of an editions deployment.

pub mod accounts;
pub mod instructions;
pub mod mint;

pub use accounts::{EditionsControls, MinterStats, Phase, PlatformFeeRecipient};
pub use instructions::*;
pub use mint::{
    batch_instructions, fetch_mint_with_controls_accounts, mint_with_controls_accounts, mint_with_controls_batches,
    MintTarget, MAX_MINTS_PER_TRANSACTION,
};
