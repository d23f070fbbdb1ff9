//! Editions account state.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::AccountData;
use serde::Serialize;

/// One collection: its group mint, naming templates and supply.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct EditionsDeployment {
    pub creator: Address,
    /// Zero means unlimited
    pub max_number_of_tokens: u64,
    pub number_of_tokens_issued: u64,
    /// The system program when no co-signer is required
    pub cosigner_program_id: Address,
    pub group_mint: Address,
    pub group: Address,
    pub symbol: String,
    pub item_base_name: String,
    pub item_base_uri: String,
    pub item_name_is_template: bool,
    pub item_uri_is_template: bool,
    #[serde(skip)]
    pub padding: [u8; 98],
}

impl EditionsDeployment {
    pub fn is_minted_out(&self) -> bool {
        self.max_number_of_tokens > 0 && self.number_of_tokens_issued >= self.max_number_of_tokens
    }

    /// Name of the `index`th item: the `{}` in a template name is
    /// replaced by the index.
    pub fn item_name(&self, index: u64) -> String {
        render_template(&self.item_base_name, self.item_name_is_template, index)
    }

    pub fn item_uri(&self, index: u64) -> String {
        render_template(&self.item_base_uri, self.item_uri_is_template, index)
    }
}

fn render_template(base: &str, is_template: bool, index: u64) -> String {
    if is_template {
        base.replacen("{}", &index.to_string(), 1)
    } else {
        base.to_string()
    }
}

impl AccountData for EditionsDeployment {
    const NAME: &'static str = "EditionsDeployment";
    const DISCRIMINATOR: [u8; 8] = [101, 54, 68, 216, 168, 131, 242, 157];
}

/// Marks a mint as part of a deployment's hashlist.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct HashlistMarker {
    pub editions_deployment: Address,
    pub mint: Address,
}

impl AccountData for HashlistMarker {
    const NAME: &'static str = "HashlistMarker";
    const DISCRIMINATOR: [u8; 8] = [55, 46, 160, 53, 239, 41, 223, 50];
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct MintAndOrder {
    pub mint: Address,
    pub order: u64,
}

/// Every mint of a deployment, in issue order.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize)]
pub struct Hashlist {
    pub deployment: Address,
    pub issues: Vec<MintAndOrder>,
}

impl AccountData for Hashlist {
    const NAME: &'static str = "Hashlist";
    const DISCRIMINATOR: [u8; 8] = [187, 203, 134, 6, 43, 198, 120, 186];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(name: &str, is_template: bool) -> EditionsDeployment {
        EditionsDeployment {
            creator: Address::new([1; 32]),
            max_number_of_tokens: 2,
            number_of_tokens_issued: 0,
            cosigner_program_id: Address::default(),
            group_mint: Address::new([2; 32]),
            group: Address::new([3; 32]),
            symbol: "SYM".into(),
            item_base_name: name.into(),
            item_base_uri: "ipfs://static".into(),
            item_name_is_template: is_template,
            item_uri_is_template: false,
            padding: [0; 98],
        }
    }

    #[test]
    fn test_item_name_template() {
        let d = deployment("Hippo #{}", true);
        assert_eq!(d.item_name(7), "Hippo #7");
        assert_eq!(d.item_uri(7), "ipfs://static");
    }

    #[test]
    fn test_item_name_without_template() {
        let d = deployment("Hippo", false);
        assert_eq!(d.item_name(7), "Hippo");
    }

    #[test]
    fn test_minted_out() {
        let mut d = deployment("x", false);
        assert!(!d.is_minted_out());
        d.number_of_tokens_issued = 2;
        assert!(d.is_minted_out());
        d.max_number_of_tokens = 0;
        assert!(!d.is_minted_out());
    }
}
