//! Editions controls account state.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::AccountData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct PlatformFeeRecipient {
    pub address: Address,
    /// Percent, 0-100
    pub share: u8,
}

/// A mint phase. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct Phase {
    pub price_amount: u64,
    /// Wrapped SOL for native payment
    pub price_token: Address,
    pub start_time: i64,
    pub active: bool,
    /// Zero means unlimited
    pub max_mints_per_wallet: u64,
    /// Zero means unlimited
    pub max_mints_total: u64,
    pub end_time: i64,
    pub current_mints: u64,
    pub is_private: bool,
    pub merkle_root: Option<[u8; 32]>,
    #[serde(skip)]
    pub padding: [u8; 200],
}

impl Phase {
    /// Whether the phase accepts mints at `now`, ignoring per-wallet limits.
    pub fn is_open_at(&self, now: i64) -> bool {
        self.active
            && now >= self.start_time
            && now <= self.end_time
            && (self.max_mints_total == 0 || self.current_mints < self.max_mints_total)
    }
}

/// Sale rules layered on top of an editions deployment.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct EditionsControls {
    pub editions_deployment: Address,
    pub creator: Address,
    /// Receives mint proceeds
    pub treasury: Address,
    /// Across all phases; zero means unlimited
    pub max_mints_per_wallet: u64,
    pub cosigner_program_id: Address,
    pub platform_fee_primary_admin: Address,
    pub platform_fee_secondary_admin: Address,
    /// Lamports when `is_fee_flat`, basis points otherwise
    pub platform_fee_value: u64,
    pub is_fee_flat: bool,
    pub platform_fee_recipients: [PlatformFeeRecipient; 5],
    pub phases: Vec<Phase>,
    #[serde(skip)]
    pub padding: [u8; 200],
}

impl EditionsControls {
    pub fn phase(&self, index: u32) -> Option<&Phase> {
        self.phases.get(index as usize)
    }
}

impl AccountData for EditionsControls {
    const NAME: &'static str = "EditionsControls";
    const DISCRIMINATOR: [u8; 8] = [124, 32, 239, 85, 118, 231, 152, 156];
}

/// Mint count of one wallet, overall or within one phase.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct MinterStats {
    pub wallet: Address,
    pub mint_count: u64,
    #[serde(skip)]
    pub padding: [u8; 50],
}

impl AccountData for MinterStats {
    const NAME: &'static str = "MinterStats";
    const DISCRIMINATOR: [u8; 8] = [138, 239, 240, 226, 199, 53, 170, 179];
}
