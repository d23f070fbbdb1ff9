//! Account dumps on disk and decoding.

use std::fs;
use std::path::PathBuf;

use rarible_svm_cli::error::CliError;
use rarible_svm_cli::fetch::DirFetcher;
use rarible_svm_cli::hex::{decode_contents, hex_encode, Encoding};
use rarible_svm_cli::inspect::{decode_account, AccountKind};
use rarible_svm_client::editions::HashlistMarker;
use rarible_svm_client::marketplace::MintVerification;
use rarible_svm_core::codec::AccountData;
use rarible_svm_core::error::CoreError;
use rarible_svm_core::fetch::{fetch_account, AccountFetcher};
use rarible_svm_core::prelude::Address;
use serde_json::json;

fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rarible-svm-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_dir_fetcher_hit_and_miss() {
    let dir = fixture_dir("fetch");
    let fetcher = DirFetcher::new(&dir);
    let data = MintVerification { verified: 1 }.to_account_data().unwrap();
    fs::write(dir.join(format!("{}.bin", addr(5))), &data).unwrap();

    assert_eq!(fetcher.fetch(&addr(5)).unwrap(), data);
    let stored: MintVerification = fetch_account(&fetcher, &addr(5)).unwrap();
    assert_eq!(stored.verified, 1);

    let err = fetcher.fetch(&addr(6)).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, CoreError::AccountNotFound { address } if address == addr(6)));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_decode_detects_kind() {
    let marker = HashlistMarker {
        editions_deployment: addr(1),
        mint: addr(2),
    };
    let (kind, value) = decode_account(None, &marker.to_account_data().unwrap()).unwrap();
    assert_eq!(kind, AccountKind::HashlistMarker);
    assert_eq!(value["mint"], json!(addr(2).to_string()));
}

#[test]
fn test_decode_with_wrong_kind_fails() {
    let data = MintVerification { verified: 1 }.to_account_data().unwrap();
    let err = decode_account(Some(AccountKind::Order), &data).unwrap_err();
    assert!(matches!(
        err,
        CliError::Client(rarible_svm_client::error::ClientError::Core(CoreError::DiscriminatorMismatch { .. }))
    ));
}

#[test]
fn test_decode_unknown_tag() {
    let err = decode_account(None, &[0u8; 16]).unwrap_err();
    assert!(matches!(err, CliError::Unknown { kind: "account discriminator", .. }));
}

#[test]
fn test_hex_dump_decodes() {
    let data = MintVerification { verified: 0 }.to_account_data().unwrap();
    let text = format!("0x{}\n", hex_encode(&data));
    let bytes = decode_contents(text.as_bytes(), Encoding::Hex).unwrap();
    let (kind, value) = decode_account(None, &bytes).unwrap();
    assert_eq!(kind, AccountKind::MintVerification);
    assert_eq!(value, json!({ "verified": 0 }));
}
