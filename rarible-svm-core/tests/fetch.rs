//! Fetch collaborator error separation.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::fetch::{fetch_account, fetch_optional, MemoryFetcher};
use rarible_svm_core::prelude::*;
use rarible_svm_core::validation::validate_account_flags;

#[derive(Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
struct Counter {
    count: u64,
}

impl AccountData for Counter {
    const NAME: &'static str = "Counter";
    const DISCRIMINATOR: [u8; 8] = [9, 9, 9, 9, 9, 9, 9, 9];
}

#[test]
fn test_missing_account_is_not_found() {
    let fetcher = MemoryFetcher::new();
    let address = Address::new([1; 32]);
    let err = fetch_account::<Counter>(&fetcher, &address).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error_code(), 1009);
    assert_eq!(fetch_optional::<Counter>(&fetcher, &address).unwrap(), None);
}

#[test]
fn test_corrupt_account_is_malformed_not_missing() {
    let mut fetcher = MemoryFetcher::new();
    let address = Address::new([1; 32]);
    fetcher.insert(address, vec![9, 9, 9]);
    let err = fetch_optional::<Counter>(&fetcher, &address).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, CoreError::MalformedRecord { .. }));
}

#[test]
fn test_present_account_decodes() {
    let mut fetcher = MemoryFetcher::new();
    let address = Address::new([1; 32]);
    fetcher.insert(address, Counter { count: 12 }.to_account_data().unwrap());
    assert_eq!(fetch_account::<Counter>(&fetcher, &address).unwrap(), Counter { count: 12 });
}

#[test]
fn test_flag_mismatch_reported() {
    let specs = vec![
        AccountSpec::new("payer", None).writable().signer(),
        AccountSpec::new("mint", None),
    ];
    let accounts = vec![
        AccountMeta::new(Address::new([1; 32]), false),
        AccountMeta::new_readonly(Address::new([2; 32]), false),
    ];
    let mismatches = validate_account_flags(&accounts, &specs);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].account, "payer");
    assert!(mismatches[0].expected_signer && !mismatches[0].actual_signer);
}
