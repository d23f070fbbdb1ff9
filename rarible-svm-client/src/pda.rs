//! Derived addresses used by the marketplace, editions and WNS programs.
//!
//! Each helper only fixes a seed composition; derivation itself is
//! [`find_program_address`].

use rarible_svm_core::address::Address;
use rarible_svm_core::derive::find_program_address;
use rarible_svm_core::error::CoreResult;

use crate::config::ProgramIds;

pub const MARKET_SEED: &[u8] = b"market";
pub const ORDER_SEED: &[u8] = b"order";
pub const VERIFICATION_SEED: &[u8] = b"verification";
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

pub const LISTING_SEED: &[u8] = b"listing";

pub const DEPLOYMENT_SEED: &[u8] = b"editions_deployment";
pub const HASHLIST_SEED: &[u8] = b"hashlist";
pub const HASHLIST_MARKER_SEED: &[u8] = b"hashlist_marker";
pub const CONTROLS_SEED: &[u8] = b"editions_controls";
pub const MINTER_STATS_SEED: &[u8] = b"minter_stats";
pub const MINTER_STATS_PHASE_SEED: &[u8] = b"minter_stats_phase";

pub const WNS_MANAGER_SEED: &[u8] = b"manager";
pub const WNS_EXTRA_METAS_SEED: &[u8] = b"extra-account-metas";
pub const WNS_APPROVE_SEED: &[u8] = b"approve-account";
pub const WNS_MEMBER_SEED: &[u8] = b"member";

pub type Derived = CoreResult<(Address, u8)>;

/// Associated token account of `owner` for `mint` under `token_program`.
pub fn associated_token_address(ids: &ProgramIds, owner: &Address, mint: &Address, token_program: &Address) -> Derived {
    find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ids.associated_token_program,
    )
}

// ─── Marketplace ─────────────────────────────────────────────────

pub fn market(ids: &ProgramIds, market_identifier: &Address) -> Derived {
    find_program_address(&[MARKET_SEED, market_identifier.as_ref()], &ids.marketplace)
}

pub fn order(ids: &ProgramIds, nonce: &Address, market: &Address, owner: &Address) -> Derived {
    find_program_address(
        &[ORDER_SEED, nonce.as_ref(), market.as_ref(), owner.as_ref()],
        &ids.marketplace,
    )
}

pub fn verification(ids: &ProgramIds, nft_mint: &Address, market: &Address) -> Derived {
    find_program_address(
        &[VERIFICATION_SEED, nft_mint.as_ref(), market.as_ref()],
        &ids.marketplace,
    )
}

pub fn event_authority(ids: &ProgramIds) -> Derived {
    find_program_address(&[EVENT_AUTHORITY_SEED], &ids.marketplace)
}

// ─── WNS marketplace ─────────────────────────────────────────────

pub fn listing(ids: &ProgramIds, seller: &Address, mint: &Address) -> Derived {
    find_program_address(
        &[LISTING_SEED, seller.as_ref(), mint.as_ref()],
        &ids.wns_marketplace,
    )
}

// ─── WNS ─────────────────────────────────────────────────────────

pub fn wns_manager(ids: &ProgramIds) -> Derived {
    find_program_address(&[WNS_MANAGER_SEED], &ids.wns)
}

pub fn wns_extra_metas(ids: &ProgramIds, mint: &Address) -> Derived {
    find_program_address(&[WNS_EXTRA_METAS_SEED, mint.as_ref()], &ids.wns)
}

pub fn wns_approve(ids: &ProgramIds, mint: &Address) -> Derived {
    find_program_address(&[WNS_APPROVE_SEED, mint.as_ref()], &ids.wns)
}

pub fn wns_group_member(ids: &ProgramIds, mint: &Address) -> Derived {
    find_program_address(&[WNS_MEMBER_SEED, mint.as_ref()], &ids.wns)
}

pub fn wns_distribution(ids: &ProgramIds, group_mint: &Address, payment_mint: &Address) -> Derived {
    find_program_address(
        &[group_mint.as_ref(), payment_mint.as_ref()],
        &ids.wns_distribution,
    )
}

// ─── Editions ────────────────────────────────────────────────────

/// Deployment account for a collection symbol. Symbols over 32 bytes
/// cannot be used as a seed.
pub fn editions_deployment(ids: &ProgramIds, symbol: &str) -> Derived {
    find_program_address(&[DEPLOYMENT_SEED, symbol.as_bytes()], &ids.editions)
}

pub fn hashlist(ids: &ProgramIds, deployment: &Address) -> Derived {
    find_program_address(&[HASHLIST_SEED, deployment.as_ref()], &ids.editions)
}

pub fn hashlist_marker(ids: &ProgramIds, deployment: &Address, mint: &Address) -> Derived {
    find_program_address(
        &[HASHLIST_MARKER_SEED, deployment.as_ref(), mint.as_ref()],
        &ids.editions,
    )
}

// ─── Editions controls ───────────────────────────────────────────

pub fn editions_controls(ids: &ProgramIds, deployment: &Address) -> Derived {
    find_program_address(&[CONTROLS_SEED, deployment.as_ref()], &ids.editions_controls)
}

pub fn minter_stats(ids: &ProgramIds, deployment: &Address, minter: &Address) -> Derived {
    find_program_address(
        &[MINTER_STATS_SEED, deployment.as_ref(), minter.as_ref()],
        &ids.editions_controls,
    )
}

pub fn minter_stats_phase(ids: &ProgramIds, deployment: &Address, minter: &Address, phase_index: u32) -> Derived {
    find_program_address(
        &[
            MINTER_STATS_PHASE_SEED,
            deployment.as_ref(),
            minter.as_ref(),
            &phase_index.to_le_bytes(),
        ],
        &ids.editions_controls,
    )
}
