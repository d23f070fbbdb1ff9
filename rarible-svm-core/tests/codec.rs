//! Discriminator-prefixed borsh encoding.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::{account_discriminator, instruction_discriminator, AccountData, InstructionArgs};
use rarible_svm_core::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
struct Buy {
    buy_amount: u64,
}

impl InstructionArgs for Buy {
    const NAME: &'static str = "buy";
    const DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
struct Ticket {
    owner: Address,
    seat: u16,
    tag: [u8; 4],
    refund_to: Option<Address>,
}

impl AccountData for Ticket {
    const NAME: &'static str = "Ticket";
    const DISCRIMINATOR: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
}

#[test]
fn test_instruction_discriminator_matches_anchor_hash() {
    assert_eq!(instruction_discriminator("buy"), Buy::DISCRIMINATOR);
    assert_eq!(instruction_discriminator("fill_order"), [232, 122, 115, 25, 199, 143, 136, 162]);
}

#[test]
fn test_account_discriminator_uses_account_namespace() {
    assert_eq!(account_discriminator("Market"), [219, 190, 213, 55, 0, 227, 198, 154]);
    assert_ne!(account_discriminator("Market"), instruction_discriminator("Market"));
}

#[test]
fn test_buy_amount_edges_survive() {
    for buy_amount in [0, 1, u64::MAX] {
        let data = Buy { buy_amount }.to_instruction_data().unwrap();
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..8], &Buy::DISCRIMINATOR);
        assert_eq!(&data[8..], &buy_amount.to_le_bytes());
        assert_eq!(Buy::from_instruction_data(&data).unwrap(), Buy { buy_amount });
    }
}

#[test]
fn test_optional_field_layout() {
    let none = Ticket { owner: Address::new([0xff; 32]), seat: 513, tag: [0; 4], refund_to: None };
    let data = none.to_account_data().unwrap();
    // tag + owner + u16 + [u8; 4] + option flag
    assert_eq!(data.len(), 8 + 32 + 2 + 4 + 1);
    assert_eq!(&data[40..42], &[1, 2]);
    assert_eq!(*data.last().unwrap(), 0);

    let some = Ticket { refund_to: Some(Address::new([9; 32])), ..none };
    let data = some.to_account_data().unwrap();
    assert_eq!(data.len(), 8 + 32 + 2 + 4 + 1 + 32);
    assert_eq!(Ticket::from_account_data(&data).unwrap(), some);
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let mut data = Buy { buy_amount: 42 }.to_instruction_data().unwrap();
    data.extend_from_slice(&[0xaa; 10]);
    assert_eq!(Buy::from_instruction_data(&data).unwrap().buy_amount, 42);
}

#[test]
fn test_short_input_is_malformed() {
    let err = Buy::from_instruction_data(&[102, 6, 61]).unwrap_err();
    assert!(matches!(err, CoreError::MalformedRecord { .. }), "{:?}", err);

    let mut truncated = Buy { buy_amount: 7 }.to_instruction_data().unwrap();
    truncated.truncate(12);
    let err = Buy::from_instruction_data(&truncated).unwrap_err();
    assert!(matches!(err, CoreError::MalformedRecord { .. }), "{:?}", err);
}

#[test]
fn test_wrong_discriminator_rejected() {
    let data = [0u8; 16];
    let err = Buy::from_instruction_data(&data).unwrap_err();
    assert_eq!(
        err,
        CoreError::DiscriminatorMismatch { expected: "buy".to_string(), actual: [0; 8] }
    );
}
