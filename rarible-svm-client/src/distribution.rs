//! WNS royalty distribution state.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::AccountData;
use serde::Serialize;

/// Royalties a creator can claim from a distribution.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct Creator {
    pub address: Address,
    pub claim_amount: u64,
}

/// Royalties collected for one group in one payment mint.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct DistributionAccount {
    pub version: u8,
    pub group_mint: Address,
    /// Zero for SOL
    pub payment_mint: Address,
    pub claim_data: Vec<Creator>,
}

impl DistributionAccount {
    pub fn claimable(&self, creator: &Address) -> u64 {
        self.claim_data
            .iter()
            .filter(|c| c.address == *creator)
            .map(|c| c.claim_amount)
            .sum()
    }
}

impl AccountData for DistributionAccount {
    const NAME: &'static str = "DistributionAccount";
    const DISCRIMINATOR: [u8; 8] = [98, 90, 112, 65, 49, 161, 198, 154];
}
