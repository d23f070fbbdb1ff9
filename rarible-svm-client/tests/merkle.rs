//! Allow-list trees: leaf hashing, roots, proofs and CSV input.

use rarible_svm_client::error::ClientError;
use rarible_svm_client::merkle::{
    max_total_claim, read_csv, verify_proof, AllowList, AllowListEntry, AllowListTree, Hash,
};
use rarible_svm_core::prelude::Address;

const FIXTURE_CSV: &str = "address,price,max_claims
4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqF,100000,12
8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR,0,1
CktRuQ2mttgRGkXJtyksdKHjUdc2C4TgDzyB98oEzy8,5,0
";

fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

fn hex32(s: &str) -> Hash {
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
    }
    out
}

fn entries() -> Vec<AllowListEntry> {
    vec![
        AllowListEntry {
            claimant: "4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqF".parse().unwrap(),
            price: 100_000,
            max_claims: 12,
        },
        AllowListEntry {
            claimant: addr(2),
            price: 0,
            max_claims: 1,
        },
        AllowListEntry {
            claimant: addr(3),
            price: 5,
            max_claims: 0,
        },
    ]
}

#[test]
fn test_leaf_hash_is_pinned() {
    assert_eq!(
        entries()[0].leaf(),
        hex32("7acbdd59ea7838f451ea00943f4965b20151c791cf4ad5749ecd2a50d8071582")
    );
}

#[test]
fn test_root_and_proof_are_pinned() {
    let tree = AllowListTree::new(&entries()).unwrap();
    assert_eq!(tree.len(), 3);
    assert_eq!(
        tree.root(),
        hex32("0f21643d4f1f1438d0ea18c8e88f237d4f3dafd8ffc56181e5affd3e0d1fe6e7")
    );

    // The odd node is paired with itself.
    let proof = tree.proof(2).unwrap();
    assert_eq!(
        proof,
        vec![
            hex32("4de56c309db3a0b4d3e427551af75a10eda5851ab5f1fcef236a8665a9a6e246"),
            hex32("c8e1e424a1c910e59a2018178dc8a81fa4c0b1ecdcf2b748ec7e68052ab27232"),
        ]
    );
}

#[test]
fn test_every_proof_verifies() {
    let list = entries();
    let tree = AllowListTree::new(&list).unwrap();
    for (i, entry) in list.iter().enumerate() {
        let proof = tree.proof(i).unwrap();
        assert!(verify_proof(&proof, &tree.root(), &entry.node()));
    }

    // Same claimant at a different price is not on the list.
    let cheaper = AllowListEntry { price: 1, ..list[0] };
    assert!(!verify_proof(&tree.proof(0).unwrap(), &tree.root(), &cheaper.node()));
}

#[test]
fn test_single_entry_root_is_its_node() {
    let list = &entries()[..1];
    let tree = AllowListTree::new(list).unwrap();
    assert_eq!(
        tree.root(),
        hex32("827889b9e41ea9f7920afbbff3eb885362848ce3c6da9793e240adfbb965ed02")
    );
    assert!(tree.proof(0).unwrap().is_empty());
    assert!(tree.proof(1).is_err());
}

#[test]
fn test_empty_list_rejected() {
    assert!(matches!(
        AllowListTree::new(&[]),
        Err(ClientError::InvalidArgument { ref name, .. }) if name == "entries"
    ));
}

#[test]
fn test_max_total_claim() {
    assert_eq!(max_total_claim(&entries()).unwrap(), 13);

    let mut list = entries();
    list[1].max_claims = u64::MAX;
    assert!(max_total_claim(&list).is_err());
}

#[test]
fn test_csv_fixture() {
    let list = read_csv(FIXTURE_CSV.as_bytes()).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list, entries());
}

#[test]
fn test_csv_bad_address() {
    let err = read_csv("address,price,max_claims\nnot-an-address,1,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument { ref name, .. } if name == "address"));
}

#[test]
fn test_allow_list_claims() {
    let list = AllowList::new(&entries()).unwrap();
    assert_eq!(list.max_total_claim, 13);
    let claim = list.claim_for(&addr(2)).unwrap();
    assert!(verify_proof(&claim.proof, &list.merkle_root, &claim.entry.node()));
    assert!(list.claim_for(&addr(9)).is_none());

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["claims"][1]["claimant"], serde_json::json!(addr(2).to_string()));
    assert_eq!(json["claims"][1]["proof"].as_array().unwrap().len(), 2);
}
