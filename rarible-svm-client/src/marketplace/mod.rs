//! Rarible marketplace program: markets, bids, listings and fills.

pub mod accounts;
pub mod fill;
pub mod instructions;

pub use accounts::{Market, MarketState, MintVerification, Order, OrderSide, OrderState};
pub use fill::{
    cancel_bid_accounts, cancel_listing_accounts, fetch_fill_order_accounts, fill_order_accounts,
    wns_remaining_accounts, FillPrograms, WnsAccountParams,
};
pub use instructions::*;
