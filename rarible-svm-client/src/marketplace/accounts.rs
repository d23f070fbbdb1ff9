//! Marketplace account state.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::AccountData;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketState {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct Market {
    pub version: u8,
    /// Collection the market trades: WNS group, Metaplex collection or hash.
    pub market_identifier: Address,
    pub initializer: Address,
    pub state: u8,
    pub fee_recipient: Address,
    pub fee_bps: u64,
    #[serde(skip)]
    pub reserve: [u8; 512],
}

impl Market {
    pub fn market_state(&self) -> Option<MarketState> {
        match self.state {
            0 => Some(MarketState::Open),
            1 => Some(MarketState::Closed),
            _ => None,
        }
    }
}

impl AccountData for Market {
    const NAME: &'static str = "Market";
    const DISCRIMINATOR: [u8; 8] = [219, 190, 213, 55, 0, 227, 198, 154];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Ready,
    Partial,
    Closed,
}

/// One bid or listing.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct Order {
    pub version: u8,
    pub nonce: Address,
    pub market: Address,
    pub owner: Address,
    pub side: u8,
    /// Always 1 for a listing
    pub size: u64,
    pub price: u64,
    pub state: u8,
    pub init_time: i64,
    pub last_edit_time: i64,
    /// Zero for a collection-wide bid
    pub nft_mint: Address,
    /// SPL payment mint; SOL orders use the wrapped SOL mint
    pub payment_mint: Address,
    pub fees_on: bool,
    #[serde(skip)]
    pub reserve_0: [u8; 256],
    #[serde(skip)]
    pub reserve_1: [u8; 128],
    #[serde(skip)]
    pub reserve_2: [u8; 64],
    #[serde(skip)]
    pub reserve_3: [u8; 30],
    #[serde(skip)]
    pub reserve_4: [u8; 30],
    #[serde(skip)]
    pub reserve_5: [u8; 3],
}

impl Order {
    pub fn order_side(&self) -> Option<OrderSide> {
        match self.side {
            0 => Some(OrderSide::Buy),
            1 => Some(OrderSide::Sell),
            _ => None,
        }
    }

    pub fn order_state(&self) -> Option<OrderState> {
        match self.state {
            0 => Some(OrderState::Ready),
            1 => Some(OrderState::Partial),
            2 => Some(OrderState::Closed),
            _ => None,
        }
    }
}

impl AccountData for Order {
    const NAME: &'static str = "Order";
    const DISCRIMINATOR: [u8; 8] = [134, 173, 223, 185, 77, 86, 28, 51];
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct MintVerification {
    pub verified: u8,
}

impl AccountData for MintVerification {
    const NAME: &'static str = "MintVerification";
    const DISCRIMINATOR: [u8; 8] = [152, 183, 224, 35, 143, 133, 78, 176];
}
