//! Account sets that depend on stored order and market state.

use rarible_svm_core::address::Address;
use rarible_svm_core::fetch::{fetch_account, AccountFetcher};
use rarible_svm_core::instruction::AccountMeta;
use tracing::debug;

use super::accounts::{Market, Order, OrderSide};
use super::instructions::{CancelBidAccounts, CancelListingAccounts, FillOrderAccounts};
use crate::config::ProgramIds;
use crate::error::{ClientError, ClientResult};
use crate::pda;

/// Inputs for the WNS royalty accounts appended to list, fill and
/// cancel-listing instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WnsAccountParams {
    pub group_mint: Address,
    pub payment_mint: Address,
    pub payment_token_program: Address,
}

/// Remaining accounts the marketplace expects for a WNS NFT, in order.
pub fn wns_remaining_accounts(ids: &ProgramIds, nft_mint: &Address, params: &WnsAccountParams) -> ClientResult<Vec<AccountMeta>> {
    let (approve, _) = pda::wns_approve(ids, nft_mint)?;
    let (distribution, _) = pda::wns_distribution(ids, &params.group_mint, &params.payment_mint)?;
    let (distribution_ta, _) = pda::associated_token_address(
        ids,
        &distribution,
        &params.payment_mint,
        &params.payment_token_program,
    )?;
    let (group_member, _) = pda::wns_group_member(ids, nft_mint)?;
    let (extra_metas, _) = pda::wns_extra_metas(ids, nft_mint)?;

    Ok(vec![
        AccountMeta::new(approve, false),
        AccountMeta::new(distribution, false),
        AccountMeta::new(distribution_ta, false),
        AccountMeta::new_readonly(ids.wns_distribution, false),
        AccountMeta::new_readonly(group_member, false),
        AccountMeta::new_readonly(params.payment_mint, false),
        AccountMeta::new_readonly(extra_metas, false),
        AccountMeta::new_readonly(approve, false),
        AccountMeta::new_readonly(ids.wns, false),
    ])
}

/// Token programs and NFT program for a fill; defaults match the
/// instruction layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillPrograms {
    pub nft_token_program: Option<Address>,
    pub payment_token_program: Option<Address>,
    pub nft_program: Option<Address>,
}

/// Resolve every account of a fill from the order and its market.
///
/// Filling a bid sends the NFT from the taker to the order owner and
/// pays out of the order's escrow. Filling a listing is the reverse.
/// `nft_mint` is required when the order is a collection-wide bid.
pub fn fill_order_accounts(
    ids: &ProgramIds,
    order_address: &Address,
    order: &Order,
    market: &Market,
    taker: &Address,
    nft_mint: Option<Address>,
    programs: FillPrograms,
) -> ClientResult<FillOrderAccounts> {
    let side = order.order_side().ok_or_else(|| {
        ClientError::invalid_argument("order", format!("unknown order side {}", order.side))
    })?;
    let nft_mint = match nft_mint {
        Some(mint) => mint,
        None if !order.nft_mint.is_zero() => order.nft_mint,
        None => {
            return Err(ClientError::invalid_argument(
                "nft_mint",
                "required to fill a collection-wide bid",
            ))
        }
    };
    let nft_token_program = programs.nft_token_program.unwrap_or(ids.token_2022_program);
    let payment_token_program = programs.payment_token_program.unwrap_or(ids.token_program);

    let is_buy = side == OrderSide::Buy;
    let nft_recipient = if is_buy { order.owner } else { *taker };
    let nft_funder = if is_buy { *taker } else { order.owner };
    let payment_funder = if is_buy { *order_address } else { *taker };
    let payment_recipient = if is_buy { *taker } else { order.owner };

    let ata = |owner: &Address, mint: &Address, program: &Address| {
        pda::associated_token_address(ids, owner, mint, program).map(|(a, _)| a)
    };
    let payment_mint = order.payment_mint;

    debug!(order = %order_address, ?side, %nft_mint, "resolved fill parties");

    Ok(FillOrderAccounts {
        taker: Some(*taker),
        maker: Some(order.owner),
        market: Some(order.market),
        order: Some(*order_address),
        nft_mint: Some(nft_mint),
        seller_nft_ta: Some(ata(&nft_funder, &nft_mint, &nft_token_program)?),
        buyer_nft_ta: Some(ata(&nft_recipient, &nft_mint, &nft_token_program)?),
        fee_recipient: Some(market.fee_recipient),
        fee_recipient_ta: Some(ata(&market.fee_recipient, &payment_mint, &payment_token_program)?),
        nft_token_program: Some(nft_token_program),
        nft_program: programs.nft_program,
        seller_payment_ta: Some(ata(&payment_recipient, &payment_mint, &payment_token_program)?),
        buyer_payment_ta: Some(ata(&payment_funder, &payment_mint, &payment_token_program)?),
        payment_mint: Some(payment_mint),
        payment_token_program: Some(payment_token_program),
        ..FillOrderAccounts::default()
    })
}

/// Fetch the order and market, then resolve the fill accounts.
pub fn fetch_fill_order_accounts(
    ids: &ProgramIds,
    fetcher: &dyn AccountFetcher,
    order_address: &Address,
    taker: &Address,
    nft_mint: Option<Address>,
    programs: FillPrograms,
) -> ClientResult<FillOrderAccounts> {
    let order: Order = fetch_account(fetcher, order_address)?;
    let market: Market = fetch_account(fetcher, &order.market)?;
    fill_order_accounts(ids, order_address, &order, &market, taker, nft_mint, programs)
}

/// Accounts to cancel a bid, read from the stored order.
pub fn cancel_bid_accounts(order_address: &Address, order: &Order, payment_token_program: Option<Address>) -> CancelBidAccounts {
    CancelBidAccounts {
        initializer: Some(order.owner),
        order: Some(*order_address),
        market: Some(order.market),
        payment_mint: Some(order.payment_mint),
        payment_token_program,
        ..CancelBidAccounts::default()
    }
}

/// Accounts to cancel a listing, read from the stored order.
pub fn cancel_listing_accounts(order_address: &Address, order: &Order, programs: FillPrograms) -> CancelListingAccounts {
    CancelListingAccounts {
        initializer: Some(order.owner),
        order: Some(*order_address),
        market: Some(order.market),
        nft_mint: Some(order.nft_mint),
        nft_token_program: programs.nft_token_program,
        nft_program: programs.nft_program,
        ..CancelListingAccounts::default()
    }
}
