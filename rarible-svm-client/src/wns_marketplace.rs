//! WNS marketplace: buying a listed WNS NFT.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::abi::{AccountSpec, SeedSource};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::InstructionArgs;
use serde::{Deserialize, Serialize};

use crate::config::ProgramIds;
use crate::pda::{LISTING_SEED, WNS_APPROVE_SEED, WNS_EXTRA_METAS_SEED, WNS_MANAGER_SEED};
use crate::program::{ata_seeds, Program, ProgramInstruction};

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct BuyArgs {
    pub buy_amount: u64,
}

impl InstructionArgs for BuyArgs {
    const NAME: &'static str = "buy";
    const DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];
}

/// Accounts for `buy`. The four payment accounts are optional and go
/// on the wire as the program id when the listing is paid in SOL.
#[derive(Debug, Clone, Default)]
pub struct BuyAccounts {
    pub payer: Option<Address>,
    pub listing: Option<Address>,
    pub payment_mint: Option<Address>,
    pub buyer: Option<Address>,
    pub distribution: Option<Address>,
    pub mint: Option<Address>,
    pub seller_token_account: Option<Address>,
    pub buyer_token_account: Option<Address>,
    pub seller: Option<Address>,
    pub manager: Option<Address>,
    pub extra_metas_account: Option<Address>,
    pub approve_account: Option<Address>,
    pub wns_program: Option<Address>,
    pub distribution_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub token_program: Option<Address>,
    pub payment_token_program: Option<Address>,
    pub system_program: Option<Address>,
    pub seller_payment_token_account: Option<Address>,
    pub buyer_payment_token_account: Option<Address>,
    pub distribution_payment_token_account: Option<Address>,
}

impl ProgramInstruction for BuyAccounts {
    type Args = BuyArgs;
    const PROGRAM: Program = Program::WnsMarketplace;

    fn specs(&self, ids: &ProgramIds, _args: &BuyArgs) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        vec![
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("listing", self.listing).writable().or_pda(
                ids.wns_marketplace,
                vec![
                    SeedSource::literal(LISTING_SEED),
                    SeedSource::account("seller"),
                    SeedSource::account("mint"),
                ],
            ),
            AccountSpec::new("payment_mint", self.payment_mint),
            AccountSpec::new("buyer", self.buyer).writable().signer(),
            AccountSpec::new("distribution", self.distribution).writable(),
            AccountSpec::new("mint", self.mint).writable(),
            AccountSpec::new("seller_token_account", self.seller_token_account)
                .writable()
                .or_pda(ata, ata_seeds("seller", "token_program", "mint")),
            AccountSpec::new("buyer_token_account", self.buyer_token_account)
                .writable()
                .or_pda(ata, ata_seeds("buyer", "token_program", "mint")),
            AccountSpec::new("seller", self.seller).writable(),
            AccountSpec::new("manager", self.manager)
                .or_pda(ids.wns, vec![SeedSource::literal(WNS_MANAGER_SEED)]),
            AccountSpec::new("extra_metas_account", self.extra_metas_account).or_pda(
                ids.wns,
                vec![SeedSource::literal(WNS_EXTRA_METAS_SEED), SeedSource::account("mint")],
            ),
            AccountSpec::new("approve_account", self.approve_account).writable().or_pda(
                ids.wns,
                vec![SeedSource::literal(WNS_APPROVE_SEED), SeedSource::account("mint")],
            ),
            AccountSpec::new("wns_program", self.wns_program).or_address(ids.wns),
            AccountSpec::new("distribution_program", self.distribution_program).or_address(ids.wns_distribution),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("payment_token_program", self.payment_token_program).optional(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("seller_payment_token_account", self.seller_payment_token_account)
                .writable()
                .optional(),
            AccountSpec::new("buyer_payment_token_account", self.buyer_payment_token_account)
                .writable()
                .optional(),
            AccountSpec::new("distribution_payment_token_account", self.distribution_payment_token_account)
                .writable()
                .optional(),
        ]
    }
}
