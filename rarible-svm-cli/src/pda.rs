//! Named program-derived addresses from the command line.

use clap::Subcommand;
use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::pda;
use rarible_svm_core::address::Address;
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Subcommand)]
pub enum PdaKind {
    /// ["market", market_identifier] under the marketplace
    Market { market_identifier: Address },
    /// ["order", nonce, market, owner] under the marketplace
    Order {
        nonce: Address,
        market: Address,
        owner: Address,
    },
    /// ["verification", nft_mint, market] under the marketplace
    Verification { nft_mint: Address, market: Address },
    /// Anchor event authority of the marketplace
    EventAuthority,
    /// ["listing", seller, mint] under the WNS marketplace
    Listing { seller: Address, mint: Address },
    /// ["editions_deployment", symbol] under editions
    Deployment { symbol: String },
    /// ["hashlist", deployment] under editions
    Hashlist { deployment: Address },
    /// ["hashlist_marker", deployment, mint] under editions
    HashlistMarker { deployment: Address, mint: Address },
    /// ["editions_controls", deployment] under editions controls
    Controls { deployment: Address },
    /// ["minter_stats", deployment, minter] under editions controls
    MinterStats { deployment: Address, minter: Address },
    /// ["minter_stats_phase", deployment, minter, phase_index] under editions controls
    MinterStatsPhase {
        deployment: Address,
        minter: Address,
        phase_index: u32,
    },
    /// Associated token account
    Ata {
        owner: Address,
        mint: Address,
        /// Defaults to Token-2022
        #[arg(long)]
        token_program: Option<Address>,
    },
    /// [group_mint, payment_mint] under WNS distribution
    WnsDistribution { group_mint: Address, payment_mint: Address },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedAddress {
    pub address: Address,
    pub bump: u8,
}

pub fn derive(ids: &ProgramIds, kind: &PdaKind) -> CliResult<DerivedAddress> {
    let (address, bump) = match kind {
        PdaKind::Market { market_identifier } => pda::market(ids, market_identifier)?,
        PdaKind::Order { nonce, market, owner } => pda::order(ids, nonce, market, owner)?,
        PdaKind::Verification { nft_mint, market } => pda::verification(ids, nft_mint, market)?,
        PdaKind::EventAuthority => pda::event_authority(ids)?,
        PdaKind::Listing { seller, mint } => pda::listing(ids, seller, mint)?,
        PdaKind::Deployment { symbol } => pda::editions_deployment(ids, symbol)?,
        PdaKind::Hashlist { deployment } => pda::hashlist(ids, deployment)?,
        PdaKind::HashlistMarker { deployment, mint } => pda::hashlist_marker(ids, deployment, mint)?,
        PdaKind::Controls { deployment } => pda::editions_controls(ids, deployment)?,
        PdaKind::MinterStats { deployment, minter } => pda::minter_stats(ids, deployment, minter)?,
        PdaKind::MinterStatsPhase {
            deployment,
            minter,
            phase_index,
        } => pda::minter_stats_phase(ids, deployment, minter, *phase_index)?,
        PdaKind::Ata {
            owner,
            mint,
            token_program,
        } => {
            let token_program = token_program.unwrap_or(ids.token_2022_program);
            pda::associated_token_address(ids, owner, mint, &token_program)?
        }
        PdaKind::WnsDistribution {
            group_mint,
            payment_mint,
        } => pda::wns_distribution(ids, group_mint, payment_mint)?,
    };
    Ok(DerivedAddress { address, bump })
}
