//! Editions and editions controls layouts, minting and decoding.

use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::distribution::{Creator, DistributionAccount};
use rarible_svm_client::editions::{
    AddMetadataAccounts, AddMetadataArgs, AddMetadataData, EditionsDeployment, InitialiseAccounts,
    InitialiseInput, MetadataAccounts,
};
use rarible_svm_client::editions_controls::*;
use rarible_svm_client::error::{lookup_error, ClientError};
use rarible_svm_client::pda;
use rarible_svm_client::program::{Program, ProgramInstruction};
use rarible_svm_core::codec::AccountData;
use rarible_svm_core::error::CoreError;
use rarible_svm_core::fetch::MemoryFetcher;
use rarible_svm_core::prelude::Address;

fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

fn initialise_input(symbol: &str) -> InitialiseInput {
    InitialiseInput {
        symbol: symbol.into(),
        collection_name: "Hippos".into(),
        collection_uri: "ipfs://hippos".into(),
        max_number_of_tokens: 100,
        creator_cosign_program_id: None,
        item_base_uri: "ipfs://hippos/{}".into(),
        item_base_name: "Hippo #{}".into(),
    }
}

fn deployment() -> EditionsDeployment {
    EditionsDeployment {
        creator: addr(1),
        max_number_of_tokens: 100,
        number_of_tokens_issued: 3,
        cosigner_program_id: Address::default(),
        group_mint: addr(20),
        group: addr(21),
        symbol: "HIPPO".into(),
        item_base_name: "Hippo #{}".into(),
        item_base_uri: "ipfs://hippos/{}".into(),
        item_name_is_template: true,
        item_uri_is_template: true,
        padding: [0; 98],
    }
}

fn controls(deployment_address: Address) -> EditionsControls {
    let mut recipients: [PlatformFeeRecipient; 5] = Default::default();
    recipients[0] = PlatformFeeRecipient { address: addr(50), share: 100 };
    EditionsControls {
        editions_deployment: deployment_address,
        creator: addr(1),
        treasury: addr(51),
        max_mints_per_wallet: 0,
        cosigner_program_id: Address::default(),
        platform_fee_primary_admin: addr(52),
        platform_fee_secondary_admin: addr(53),
        platform_fee_value: 500_000,
        is_fee_flat: true,
        platform_fee_recipients: recipients,
        phases: vec![Phase {
            price_amount: 0,
            price_token: addr(54),
            start_time: 0,
            active: true,
            max_mints_per_wallet: 0,
            max_mints_total: 0,
            end_time: i64::MAX,
            current_mints: 0,
            is_private: false,
            merkle_root: None,
            padding: [0; 200],
        }],
        padding: [0; 200],
    }
}

#[test]
fn test_initialise_derives_deployment_from_symbol() {
    let ids = ProgramIds::default();
    let ix = InitialiseAccounts {
        payer: Some(addr(1)),
        creator: Some(addr(1)),
        group_mint: Some(addr(20)),
        group: Some(addr(21)),
        ..Default::default()
    }
    .instruction(&ids, &initialise_input("HIPPO"))
    .unwrap();

    let deployment = pda::editions_deployment(&ids, "HIPPO").unwrap().0;
    assert_eq!(ix.program_id, ids.editions);
    assert_eq!(ix.accounts[0].pubkey, deployment);
    assert_eq!(ix.accounts[1].pubkey, pda::hashlist(&ids, &deployment).unwrap().0);
    assert_eq!(ix.accounts[8].pubkey, ids.group_extension);
    assert_eq!(ix.signers(), vec![addr(1), addr(20), addr(21)]);
}

#[test]
fn test_long_symbol_cannot_seed_deployment() {
    let ids = ProgramIds::default();
    let symbol = "S".repeat(33);
    let err = InitialiseAccounts {
        payer: Some(addr(1)),
        creator: Some(addr(1)),
        group_mint: Some(addr(20)),
        group: Some(addr(21)),
        ..Default::default()
    }
    .instruction(&ids, &initialise_input(&symbol))
    .unwrap_err();
    assert!(matches!(err, ClientError::Core(CoreError::SeedsTooLong { index: 1, len: 33 })));
}

#[test]
fn test_add_metadata_round_trip() {
    let ids = ProgramIds::default();
    let args = AddMetadataData(vec![AddMetadataArgs {
        field: "platform".into(),
        value: "rarible".into(),
    }]);
    let ix = AddMetadataAccounts(MetadataAccounts {
        editions_deployment: Some(addr(5)),
        payer: Some(addr(1)),
        signer: Some(addr(1)),
        mint: Some(addr(2)),
        ..Default::default()
    })
    .instruction(&ids, &args)
    .unwrap();

    assert!(ix.accounts[3].is_signer);
    let parsed = AddMetadataAccounts::parse(&ids, &ix).unwrap();
    assert_eq!(parsed.args, args);
    assert_eq!(parsed.account("mint"), Some(addr(2)));
}

#[test]
fn test_mint_with_controls_seeds_phase_stats() {
    let ids = ProgramIds::default();
    let deployment_address = addr(5);
    let base = mint_with_controls_accounts(&ids, &deployment_address, &deployment(), &controls(deployment_address), &addr(1))
        .unwrap();
    let args = MintInput {
        phase_index: 2,
        ..Default::default()
    };
    let ix = MintWithControlsAccounts {
        mint: Some(addr(60)),
        member: Some(addr(61)),
        ..base
    }
    .instruction(&ids, &args)
    .unwrap();

    assert_eq!(ix.accounts.len(), 21);
    assert_eq!(ix.accounts[1].pubkey, pda::editions_controls(&ids, &deployment_address).unwrap().0);
    assert_eq!(
        ix.accounts[8].pubkey,
        pda::minter_stats_phase(&ids, &deployment_address, &addr(1), 2).unwrap().0
    );
    assert_eq!(
        ix.accounts[3].pubkey,
        pda::hashlist_marker(&ids, &deployment_address, &addr(60)).unwrap().0
    );
    assert_eq!(ix.accounts[13].pubkey, addr(50));
    assert_eq!(ix.accounts[15].pubkey, addr(51));

    let parsed = MintWithControlsAccounts::parse(&ids, &ix).unwrap();
    assert_eq!(parsed.args.phase_index, 2);
    assert_eq!(parsed.account("minter_stats_phase"), Some(ix.accounts[8].pubkey));
}

#[test]
fn test_mint_batches_of_three() {
    let ids = ProgramIds::default();
    let deployment_address = addr(5);
    let mut fetcher = MemoryFetcher::new();
    fetcher.insert(deployment_address, deployment().to_account_data().unwrap());
    let controls_address = pda::editions_controls(&ids, &deployment_address).unwrap().0;
    fetcher.insert(controls_address, controls(deployment_address).to_account_data().unwrap());

    let base = fetch_mint_with_controls_accounts(&ids, &fetcher, &deployment_address, &addr(1)).unwrap();
    let targets: Vec<MintTarget> = (0..7)
        .map(|i| MintTarget {
            mint: addr(100 + i),
            member: addr(200 + i),
        })
        .collect();
    let batches = mint_with_controls_batches(&ids, &base, &MintInput::default(), &targets).unwrap();

    assert_eq!(batches.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 3, 1]);
    assert_eq!(batches[2][0].accounts[9].pubkey, addr(106));
    assert_ne!(batches[0][0].accounts[3].pubkey, batches[0][1].accounts[3].pubkey);

    let err = mint_with_controls_batches(&ids, &base, &MintInput::default(), &[]).unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument { .. }));
}

#[test]
fn test_controls_decode_phases() {
    let data = controls(addr(5)).to_account_data().unwrap();
    let decoded = EditionsControls::from_account_data(&data).unwrap();
    assert_eq!(decoded.phases.len(), 1);
    assert!(decoded.phase(0).unwrap().is_open_at(1_700_000_000));
    assert!(decoded.phase(1).is_none());
}

#[test]
fn test_distribution_claimable() {
    let account = DistributionAccount {
        version: 1,
        group_mint: addr(20),
        payment_mint: Address::default(),
        claim_data: vec![
            Creator { address: addr(1), claim_amount: 70 },
            Creator { address: addr(2), claim_amount: 30 },
        ],
    };
    let decoded = DistributionAccount::from_account_data(&account.to_account_data().unwrap()).unwrap();
    assert_eq!(decoded.claimable(&addr(1)), 70);
    assert_eq!(decoded.claimable(&addr(3)), 0);
}

#[test]
fn test_editions_error_codes_name_both_enums() {
    let found = lookup_error(Program::Editions.errors(), 6007);
    let names: Vec<&str> = found.iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["IncorrectMintType", "RoyaltyBasisPointsInvalid"]);
    assert_eq!(
        found[1].message,
        "Royalty basis points must be less than or equal to 10000."
    );

    let found = lookup_error(Program::Editions.errors(), 6011);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "InvalidNumberOfRecipients");

    assert_eq!(lookup_error(Program::Editions.errors(), 6028).len(), 0);
    assert_eq!(lookup_error(Program::EditionsControls.errors(), 6028)[0].name, "ExceededWalletMaxMintsForCollection");
}
