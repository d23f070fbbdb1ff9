//! # Rarible SVM Client
//!
//! Typed bindings for the Rarible marketplace, WNS marketplace, editions
//! and editions controls programs, built on `rarible-svm-core`.
//!
//! Each instruction is an account struct implementing
//! [`program::ProgramInstruction`], paired with a borsh args record:
//!
//! ```rust,ignore
//! use rarible_svm_client::prelude::*;
//!
//! let ids = ProgramIds::default();
//! let accounts = ListAccounts {
//!     initializer: Some(seller),
//!     market: Some(market),
//!     nft_mint: Some(mint),
//!     ..Default::default()
//! };
//! let ix = accounts.instruction(&ids, &ListData { nonce, payment_mint, price: 1_000_000, size: 1 })?;
//! ```
//!
//! Accounts left `None` are derived or filled with program ids from
//! [`config::ProgramIds`].

pub mod config;
pub mod distribution;
pub mod editions;
pub mod editions_controls;
pub mod error;
pub mod marketplace;
pub mod merkle;
pub mod pda;
pub mod program;
pub mod wns_marketplace;

pub mod prelude {
    pub use crate::config::ProgramIds;
    pub use crate::error::{ClientError, ClientResult};
    pub use crate::marketplace::{
        BidAccounts, BidData, CancelBidAccounts, CancelListingAccounts, FillOrderAccounts, ListAccounts,
        ListData,
    };
    pub use crate::program::{Program, ProgramInstruction};
    pub use rarible_svm_core::prelude::*;
}
