//! Marketplace instruction layouts, fill resolution and decoding.

use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::error::{lookup_error, ClientError, MARKETPLACE_ERRORS};
use rarible_svm_client::marketplace::*;
use rarible_svm_client::pda;
use rarible_svm_client::program::{Program, ProgramInstruction};
use rarible_svm_core::codec::AccountData;
use rarible_svm_core::error::CoreError;
use rarible_svm_core::fetch::MemoryFetcher;
use rarible_svm_core::prelude::Address;

fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

fn order(side: u8, nft_mint: Address) -> Order {
    Order {
        version: 1,
        nonce: addr(9),
        market: addr(10),
        owner: addr(11),
        side,
        size: 1,
        price: 5_000,
        state: 0,
        init_time: 1_700_000_000,
        last_edit_time: 1_700_000_000,
        nft_mint,
        payment_mint: addr(12),
        fees_on: true,
        reserve_0: [0; 256],
        reserve_1: [0; 128],
        reserve_2: [0; 64],
        reserve_3: [0; 30],
        reserve_4: [0; 30],
        reserve_5: [0; 3],
    }
}

fn market() -> Market {
    Market {
        version: 1,
        market_identifier: addr(7),
        initializer: addr(1),
        state: 0,
        fee_recipient: addr(13),
        fee_bps: 250,
        reserve: [0; 512],
    }
}

#[test]
fn test_market_pda_pinned() {
    let ids = ProgramIds::default();
    let (market, bump) = pda::market(&ids, &addr(7)).unwrap();
    assert_eq!(market.to_string(), "3g6LgUHmdpkAmHyXVdQceaf6AoRLE1yPvbAGSUXpWUM8");
    assert_eq!(bump, 253);
}

#[test]
fn test_ata_pinned() {
    let ids = ProgramIds::default();
    let (ata, bump) = pda::associated_token_address(&ids, &addr(1), &addr(2), &ids.token_2022_program).unwrap();
    assert_eq!(ata.to_string(), "DyaUQ3JTcmWApDibKtBvxLBhUPjvA4KEM99t45qz3bfh");
    assert_eq!(bump, 254);
}

#[test]
fn test_init_market_derives_market() {
    let ids = ProgramIds::default();
    let accounts = InitMarketAccounts {
        initializer: Some(addr(1)),
        market_identifier: Some(addr(7)),
        ..Default::default()
    };
    let ix = accounts
        .instruction(&ids, &InitMarketParams { fee_recipient: addr(13), fee_bps: 250 })
        .unwrap();

    assert_eq!(ix.program_id, ids.marketplace);
    assert_eq!(ix.accounts.len(), 6);
    assert_eq!(ix.accounts[2].pubkey, pda::market(&ids, &addr(7)).unwrap().0);
    assert_eq!(ix.accounts[4].pubkey, pda::event_authority(&ids).unwrap().0);
    assert_eq!(ix.accounts[5].pubkey, ids.marketplace);
    assert_eq!(ix.signers(), vec![addr(1)]);
}

#[test]
fn test_bid_defaults_match_explicit() {
    let ids = ProgramIds::default();
    let args = BidData { nonce: addr(9), price: 100, size: 2 };
    let defaulted = BidAccounts {
        initializer: Some(addr(1)),
        market: Some(addr(10)),
        payment_mint: Some(addr(12)),
        ..Default::default()
    }
    .instruction(&ids, &args)
    .unwrap();

    let order = pda::order(&ids, &addr(9), &addr(10), &addr(1)).unwrap().0;
    let ata = |owner: &Address| {
        pda::associated_token_address(&ids, owner, &addr(12), &ids.token_program)
            .unwrap()
            .0
    };
    let explicit = BidAccounts {
        initializer: Some(addr(1)),
        market: Some(addr(10)),
        order: Some(order),
        initializer_payment_ta: Some(ata(&addr(1))),
        order_payment_ta: Some(ata(&order)),
        payment_mint: Some(addr(12)),
        payment_token_program: Some(ids.token_program),
        nft_mint: Some(Address::default()),
        system_program: Some(ids.system_program),
        associated_token_program: Some(ids.associated_token_program),
        event_authority: Some(pda::event_authority(&ids).unwrap().0),
        program: Some(ids.marketplace),
    }
    .instruction(&ids, &args)
    .unwrap();

    assert_eq!(defaulted, explicit);
}

#[test]
fn test_list_parse_recovers_bindings() {
    let ids = ProgramIds::default();
    let args = ListData {
        nonce: addr(9),
        payment_mint: ids.wrapped_sol_mint,
        price: 1_000,
        size: 1,
    };
    let ix = ListAccounts {
        initializer: Some(addr(1)),
        market: Some(addr(10)),
        nft_mint: Some(addr(2)),
        ..Default::default()
    }
    .instruction(&ids, &args)
    .unwrap();

    let parsed = ListAccounts::parse(&ids, &ix).unwrap();
    assert_eq!(parsed.args, args);
    assert_eq!(parsed.account("nft_mint"), Some(addr(2)));
    // Plain token NFTs name no NFT program: the all-zero address, not the program id.
    assert_eq!(parsed.account("nft_program"), Some(Address::default()));
    assert_ne!(parsed.account("nft_program"), Some(ids.marketplace));
    assert_eq!(
        parsed.account("order"),
        Some(pda::order(&ids, &addr(9), &addr(10), &addr(1)).unwrap().0)
    );
    assert!(parsed.accounts.remaining.is_empty());
}

#[test]
fn test_parse_rejects_other_program() {
    let ids = ProgramIds::default();
    let mut ix = CancelBidAccounts {
        initializer: Some(addr(1)),
        order: Some(addr(3)),
        market: Some(addr(10)),
        payment_mint: Some(addr(12)),
        ..Default::default()
    }
    .instruction(&ids, &CancelBidArgs {})
    .unwrap();
    ix.program_id = ids.editions;

    let err = CancelBidAccounts::parse(&ids, &ix).unwrap_err();
    assert!(matches!(err, ClientError::Core(CoreError::ProgramMismatch { .. })));
}

#[test]
fn test_fill_bid_sends_nft_to_owner() {
    let ids = ProgramIds::default();
    let order_address = addr(3);
    let taker = addr(4);
    let order = order(0, Address::default());

    let accounts = fill_order_accounts(
        &ids,
        &order_address,
        &order,
        &market(),
        &taker,
        Some(addr(2)),
        FillPrograms::default(),
    )
    .unwrap();

    let ata = |owner: Address, mint: Address, program: Address| {
        pda::associated_token_address(&ids, &owner, &mint, &program).unwrap().0
    };
    assert_eq!(accounts.nft_mint, Some(addr(2)));
    assert_eq!(accounts.seller_nft_ta, Some(ata(taker, addr(2), ids.token_2022_program)));
    assert_eq!(accounts.buyer_nft_ta, Some(ata(order.owner, addr(2), ids.token_2022_program)));
    assert_eq!(accounts.buyer_payment_ta, Some(ata(order_address, addr(12), ids.token_program)));
    assert_eq!(accounts.seller_payment_ta, Some(ata(taker, addr(12), ids.token_program)));
    assert_eq!(accounts.fee_recipient, Some(addr(13)));

    let ix = accounts.instruction(&ids, &FillOrderArgs { amount: 1 }).unwrap();
    assert_eq!(ix.accounts.len(), 20);
}

#[test]
fn test_fill_listing_reverses_parties() {
    let ids = ProgramIds::default();
    let order_address = addr(3);
    let taker = addr(4);
    let mut fetcher = MemoryFetcher::new();
    fetcher.insert(order_address, order(1, addr(2)).to_account_data().unwrap());
    fetcher.insert(addr(10), market().to_account_data().unwrap());

    let accounts =
        fetch_fill_order_accounts(&ids, &fetcher, &order_address, &taker, None, FillPrograms::default()).unwrap();

    let ata = |owner: Address, mint: Address, program: Address| {
        pda::associated_token_address(&ids, &owner, &mint, &program).unwrap().0
    };
    assert_eq!(accounts.maker, Some(addr(11)));
    assert_eq!(accounts.seller_nft_ta, Some(ata(addr(11), addr(2), ids.token_2022_program)));
    assert_eq!(accounts.buyer_nft_ta, Some(ata(taker, addr(2), ids.token_2022_program)));
    assert_eq!(accounts.buyer_payment_ta, Some(ata(taker, addr(12), ids.token_program)));
    assert_eq!(accounts.seller_payment_ta, Some(ata(addr(11), addr(12), ids.token_program)));
}

#[test]
fn test_fill_collection_bid_needs_mint() {
    let ids = ProgramIds::default();
    let err = fill_order_accounts(
        &ids,
        &addr(3),
        &order(0, Address::default()),
        &market(),
        &addr(4),
        None,
        FillPrograms::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument { ref name, .. } if name == "nft_mint"));
}

#[test]
fn test_fill_missing_order_is_not_found() {
    let ids = ProgramIds::default();
    let fetcher = MemoryFetcher::new();
    let err =
        fetch_fill_order_accounts(&ids, &fetcher, &addr(3), &addr(4), None, FillPrograms::default()).unwrap_err();
    assert!(matches!(err, ClientError::Core(CoreError::AccountNotFound { .. })));
}

#[test]
fn test_wns_remaining_accounts_order() {
    let ids = ProgramIds::default();
    let params = WnsAccountParams {
        group_mint: addr(20),
        payment_mint: addr(12),
        payment_token_program: ids.token_program,
    };
    let metas = wns_remaining_accounts(&ids, &addr(2), &params).unwrap();
    let approve = pda::wns_approve(&ids, &addr(2)).unwrap().0;
    let distribution = pda::wns_distribution(&ids, &addr(20), &addr(12)).unwrap().0;

    assert_eq!(metas.len(), 9);
    assert_eq!(metas[0].pubkey, approve);
    assert!(metas[0].is_writable);
    assert_eq!(metas[1].pubkey, distribution);
    assert_eq!(metas[3].pubkey, ids.wns_distribution);
    assert_eq!(metas[5].pubkey, addr(12));
    assert_eq!(metas[7].pubkey, approve);
    assert!(!metas[7].is_writable);
    assert_eq!(metas[8].pubkey, ids.wns);
    assert!(metas.iter().all(|m| !m.is_signer));

    let ix = CancelListingAccounts {
        initializer: Some(addr(11)),
        order: Some(addr(3)),
        market: Some(addr(10)),
        nft_mint: Some(addr(2)),
        nft_program: Some(ids.wns),
        ..Default::default()
    }
    .instruction(&ids, &CancelListingArgs {})
    .unwrap()
    .with_remaining_accounts(metas.clone());
    let parsed = CancelListingAccounts::parse(&ids, &ix).unwrap();
    assert_eq!(parsed.accounts.remaining, metas);
}

#[test]
fn test_order_decodes_side_and_state() {
    let data = order(1, addr(2)).to_account_data().unwrap();
    let decoded = Order::from_account_data(&data).unwrap();
    assert_eq!(decoded.order_side(), Some(OrderSide::Sell));
    assert_eq!(decoded.order_state(), Some(OrderState::Ready));

    let err = Market::from_account_data(&data).unwrap_err();
    assert!(matches!(err, CoreError::DiscriminatorMismatch { .. }));
}

#[test]
fn test_error_lookup() {
    let found = lookup_error(&[MARKETPLACE_ERRORS], 6000);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "WrongAccount");
    assert_eq!(lookup_error(Program::Marketplace.errors(), 2006)[0].name, "ConstraintSeeds");
    assert!(lookup_error(&[MARKETPLACE_ERRORS], 7777).is_empty());
}
