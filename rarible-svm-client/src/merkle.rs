//! Allow-list merkle trees for editions controls phases.
//!
//! A claimant's leaf is `sha256(claimant ‖ price LE ‖ max_claims LE)`. Tree nodes
//! are domain separated: a leaf enters the tree as `sha256(0x00 ‖ leaf)` and each
//! parent is `sha256(0x01 ‖ min(a, b) ‖ max(a, b))`. A level with an odd count pairs
//! its last node with itself. The root goes into `add_phase`, the proof and the
//! claimant's price and max claims into `mint_with_controls`.

use std::io::Read;

use rarible_svm_core::address::Address;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

pub type Hash = [u8; 32];

const LEAF_PREFIX: &[u8] = &[0];
const INTERMEDIATE_PREFIX: &[u8] = &[1];

fn hashv(parts: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

fn hash_intermediate(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        hashv(&[INTERMEDIATE_PREFIX, a, b])
    } else {
        hashv(&[INTERMEDIATE_PREFIX, b, a])
    }
}

/// One allow-list row: who may claim, at what price, how many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListEntry {
    pub claimant: Address,
    pub price: u64,
    /// 0 disables the per-wallet limit
    pub max_claims: u64,
}

impl AllowListEntry {
    pub fn leaf(&self) -> Hash {
        hashv(&[
            self.claimant.as_ref(),
            &self.price.to_le_bytes(),
            &self.max_claims.to_le_bytes(),
        ])
    }

    /// The leaf as it sits in the bottom level of the tree.
    pub fn node(&self) -> Hash {
        hashv(&[LEAF_PREFIX, &self.leaf()])
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    address: String,
    price: u64,
    max_claims: u64,
}

/// Read `address,price,max_claims` rows (with a header line).
pub fn read_csv<R: Read>(reader: R) -> ClientResult<Vec<AllowListEntry>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for (line, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|e| ClientError::invalid_argument("csv", e.to_string()))?;
        let claimant = row
            .address
            .trim()
            .parse()
            .map_err(|e| ClientError::invalid_argument("address", format!("row {}: {}", line + 1, e)))?;
        entries.push(AllowListEntry {
            claimant,
            price: row.price,
            max_claims: row.max_claims,
        });
    }
    debug!(entries = entries.len(), "read allow list");
    Ok(entries)
}

/// Sum of every entry's `max_claims`; an overflow is an error.
pub fn max_total_claim(entries: &[AllowListEntry]) -> ClientResult<u64> {
    entries
        .iter()
        .try_fold(0u64, |acc, e| acc.checked_add(e.max_claims))
        .ok_or_else(|| ClientError::invalid_argument("max_claims", "total overflows u64"))
}

/// Check `proof` for a tree node against `root`.
pub fn verify_proof(proof: &[Hash], root: &Hash, node: &Hash) -> bool {
    let computed = proof.iter().fold(*node, |acc, sibling| hash_intermediate(&acc, sibling));
    computed == *root
}

#[derive(Debug, Clone)]
pub struct AllowListTree {
    /// Bottom level first; the last level holds the root alone.
    levels: Vec<Vec<Hash>>,
}

impl AllowListTree {
    pub fn new(entries: &[AllowListEntry]) -> ClientResult<Self> {
        if entries.is_empty() {
            return Err(ClientError::invalid_argument("entries", "allow list is empty"));
        }
        let mut level: Vec<Hash> = entries.iter().map(AllowListEntry::node).collect();
        let mut levels = Vec::new();
        while level.len() > 1 {
            let parents = level
                .chunks(2)
                .map(|pair| hash_intermediate(&pair[0], &pair[pair.len() - 1]))
                .collect();
            levels.push(std::mem::replace(&mut level, parents));
        }
        levels.push(level);
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Sibling hashes from the leaf at `index` up to the root.
    pub fn proof(&self, index: usize) -> ClientResult<Vec<Hash>> {
        if index >= self.len() {
            return Err(ClientError::invalid_argument(
                "index",
                format!("{} out of range for {} entries", index, self.len()),
            ));
        }
        let mut proof = Vec::with_capacity(self.levels.len() - 1);
        let mut i = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if i % 2 == 0 { level.get(i + 1).unwrap_or(&level[i]) } else { &level[i - 1] };
            proof.push(*sibling);
            i /= 2;
        }
        Ok(proof)
    }
}

/// A claimant with the proof it passes to `mint_with_controls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListClaim {
    #[serde(flatten)]
    pub entry: AllowListEntry,
    pub proof: Vec<Hash>,
}

/// A whole allow list with its root and per-claimant proofs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowList {
    pub merkle_root: Hash,
    pub max_total_claim: u64,
    pub claims: Vec<AllowListClaim>,
}

impl AllowList {
    pub fn new(entries: &[AllowListEntry]) -> ClientResult<Self> {
        let tree = AllowListTree::new(entries)?;
        let claims = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Ok(AllowListClaim {
                    entry: *entry,
                    proof: tree.proof(i)?,
                })
            })
            .collect::<ClientResult<Vec<_>>>()?;
        Ok(Self {
            merkle_root: tree.root(),
            max_total_claim: max_total_claim(entries)?,
            claims,
        })
    }

    pub fn claim_for(&self, claimant: &Address) -> Option<&AllowListClaim> {
        self.claims.iter().find(|c| c.entry.claimant == *claimant)
    }
}
