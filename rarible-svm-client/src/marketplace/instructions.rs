//! Marketplace instructions.
//!
//! Every instruction except `verify_mint` ends with the event-CPI pair
//! (`event_authority`, `program`).

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::abi::{AccountSpec, SeedSource};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::InstructionArgs;
use serde::{Deserialize, Serialize};

use crate::config::ProgramIds;
use crate::pda::{EVENT_AUTHORITY_SEED, MARKET_SEED, ORDER_SEED, VERIFICATION_SEED};
use crate::program::{ata_seeds, Program, ProgramInstruction};

fn event_cpi_accounts(ids: &ProgramIds, event_authority: Option<Address>, program: Option<Address>) -> [AccountSpec; 2] {
    [
        AccountSpec::new("event_authority", event_authority)
            .or_pda(ids.marketplace, vec![SeedSource::literal(EVENT_AUTHORITY_SEED)]),
        AccountSpec::new("program", program).or_address(ids.marketplace),
    ]
}

fn order_seeds(nonce: &Address, owner: &str) -> Vec<SeedSource> {
    vec![
        SeedSource::literal(ORDER_SEED),
        SeedSource::literal(nonce),
        SeedSource::account("market"),
        SeedSource::account(owner),
    ]
}

// ─── init_market ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InitMarketParams {
    pub fee_recipient: Address,
    pub fee_bps: u64,
}

impl InstructionArgs for InitMarketParams {
    const NAME: &'static str = "init_market";
    const DISCRIMINATOR: [u8; 8] = [33, 253, 15, 116, 89, 25, 127, 236];
}

#[derive(Debug, Clone, Default)]
pub struct InitMarketAccounts {
    pub initializer: Option<Address>,
    pub market_identifier: Option<Address>,
    pub market: Option<Address>,
    pub system_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for InitMarketAccounts {
    type Args = InitMarketParams;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, _args: &InitMarketParams) -> Vec<AccountSpec> {
        let mut specs = vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("market_identifier", self.market_identifier),
            AccountSpec::new("market", self.market).writable().or_pda(
                ids.marketplace,
                vec![SeedSource::literal(MARKET_SEED), SeedSource::account("market_identifier")],
            ),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}

// ─── verify_mint ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct VerifyMintArgs {}

impl InstructionArgs for VerifyMintArgs {
    const NAME: &'static str = "verify_mint";
    const DISCRIMINATOR: [u8; 8] = [57, 93, 52, 66, 75, 249, 244, 143];
}

#[derive(Debug, Clone, Default)]
pub struct VerifyMintAccounts {
    pub initializer: Option<Address>,
    pub market: Option<Address>,
    pub nft_mint: Option<Address>,
    pub verification: Option<Address>,
    pub system_program: Option<Address>,
}

impl ProgramInstruction for VerifyMintAccounts {
    type Args = VerifyMintArgs;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, _args: &VerifyMintArgs) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("nft_mint", self.nft_mint),
            AccountSpec::new("verification", self.verification).writable().or_pda(
                ids.marketplace,
                vec![
                    SeedSource::literal(VERIFICATION_SEED),
                    SeedSource::account("nft_mint"),
                    SeedSource::account("market"),
                ],
            ),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
        ]
    }
}

// ─── bid ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct BidData {
    /// Any unique key; seeds the order address.
    pub nonce: Address,
    pub price: u64,
    pub size: u64,
}

impl InstructionArgs for BidData {
    const NAME: &'static str = "bid";
    const DISCRIMINATOR: [u8; 8] = [199, 56, 85, 38, 146, 243, 37, 158];
}

#[derive(Debug, Clone, Default)]
pub struct BidAccounts {
    pub initializer: Option<Address>,
    pub market: Option<Address>,
    pub order: Option<Address>,
    pub initializer_payment_ta: Option<Address>,
    pub order_payment_ta: Option<Address>,
    pub payment_mint: Option<Address>,
    pub payment_token_program: Option<Address>,
    /// Left empty for a collection-wide bid
    pub nft_mint: Option<Address>,
    pub system_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for BidAccounts {
    type Args = BidData;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, args: &BidData) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        let mut specs = vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("order", self.order)
                .writable()
                .or_pda(ids.marketplace, order_seeds(&args.nonce, "initializer")),
            AccountSpec::new("initializer_payment_ta", self.initializer_payment_ta)
                .writable()
                .or_pda(ata, ata_seeds("initializer", "payment_token_program", "payment_mint")),
            AccountSpec::new("order_payment_ta", self.order_payment_ta)
                .writable()
                .or_pda(ata, ata_seeds("order", "payment_token_program", "payment_mint")),
            AccountSpec::new("payment_mint", self.payment_mint).writable(),
            AccountSpec::new("payment_token_program", self.payment_token_program).or_address(ids.token_program),
            AccountSpec::new("nft_mint", self.nft_mint).or_address(Address::default()),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}

// ─── list ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct ListData {
    pub nonce: Address,
    pub payment_mint: Address,
    pub price: u64,
    pub size: u64,
}

impl InstructionArgs for ListData {
    const NAME: &'static str = "list";
    const DISCRIMINATOR: [u8; 8] = [54, 174, 193, 67, 17, 41, 132, 38];
}

#[derive(Debug, Clone, Default)]
pub struct ListAccounts {
    pub initializer: Option<Address>,
    pub market: Option<Address>,
    pub order: Option<Address>,
    pub nft_mint: Option<Address>,
    pub initializer_nft_ta: Option<Address>,
    pub sysvar_instructions: Option<Address>,
    pub system_program: Option<Address>,
    pub nft_token_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub nft_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for ListAccounts {
    type Args = ListData;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, args: &ListData) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        let mut specs = vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("order", self.order)
                .writable()
                .or_pda(ids.marketplace, order_seeds(&args.nonce, "initializer")),
            AccountSpec::new("nft_mint", self.nft_mint),
            AccountSpec::new("initializer_nft_ta", self.initializer_nft_ta)
                .writable()
                .or_pda(ata, ata_seeds("initializer", "nft_token_program", "nft_mint")),
            AccountSpec::new("sysvar_instructions", self.sysvar_instructions).or_address(ids.sysvar_instructions),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("nft_token_program", self.nft_token_program).or_address(ids.token_2022_program),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
            nft_program_spec(self.nft_program),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}

/// WNS or Metaplex program for the NFT; all zeros for plain tokens.
fn nft_program_spec(nft_program: Option<Address>) -> AccountSpec {
    AccountSpec::new("nft_program", nft_program).or_address(Address::default())
}

// ─── fill_order ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FillOrderArgs {
    pub amount: u64,
}

impl InstructionArgs for FillOrderArgs {
    const NAME: &'static str = "fill_order";
    const DISCRIMINATOR: [u8; 8] = [232, 122, 115, 25, 199, 143, 136, 162];
}

/// Token accounts depend on the order's side; see
/// [`super::fill::fill_order_accounts`] to derive them from order state.
#[derive(Debug, Clone, Default)]
pub struct FillOrderAccounts {
    pub taker: Option<Address>,
    pub maker: Option<Address>,
    pub market: Option<Address>,
    pub order: Option<Address>,
    pub nft_mint: Option<Address>,
    pub seller_nft_ta: Option<Address>,
    pub buyer_nft_ta: Option<Address>,
    pub fee_recipient: Option<Address>,
    pub fee_recipient_ta: Option<Address>,
    pub system_program: Option<Address>,
    pub nft_token_program: Option<Address>,
    pub nft_program: Option<Address>,
    pub seller_payment_ta: Option<Address>,
    pub buyer_payment_ta: Option<Address>,
    pub payment_mint: Option<Address>,
    pub payment_token_program: Option<Address>,
    pub sysvar_instructions: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for FillOrderAccounts {
    type Args = FillOrderArgs;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, _args: &FillOrderArgs) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        let mut specs = vec![
            AccountSpec::new("taker", self.taker).writable().signer(),
            AccountSpec::new("maker", self.maker).writable(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("order", self.order).writable(),
            AccountSpec::new("nft_mint", self.nft_mint).writable(),
            AccountSpec::new("seller_nft_ta", self.seller_nft_ta).writable(),
            AccountSpec::new("buyer_nft_ta", self.buyer_nft_ta).writable(),
            AccountSpec::new("fee_recipient", self.fee_recipient).writable(),
            AccountSpec::new("fee_recipient_ta", self.fee_recipient_ta)
                .writable()
                .or_pda(ata, ata_seeds("fee_recipient", "payment_token_program", "payment_mint")),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("nft_token_program", self.nft_token_program).or_address(ids.token_2022_program),
            nft_program_spec(self.nft_program),
            AccountSpec::new("seller_payment_ta", self.seller_payment_ta).writable(),
            AccountSpec::new("buyer_payment_ta", self.buyer_payment_ta).writable(),
            AccountSpec::new("payment_mint", self.payment_mint).writable(),
            AccountSpec::new("payment_token_program", self.payment_token_program).or_address(ids.token_program),
            AccountSpec::new("sysvar_instructions", self.sysvar_instructions).or_address(ids.sysvar_instructions),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}

// ─── cancel_bid ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CancelBidArgs {}

impl InstructionArgs for CancelBidArgs {
    const NAME: &'static str = "cancel_bid";
    const DISCRIMINATOR: [u8; 8] = [40, 243, 190, 217, 208, 253, 86, 206];
}

#[derive(Debug, Clone, Default)]
pub struct CancelBidAccounts {
    pub initializer: Option<Address>,
    pub order: Option<Address>,
    pub market: Option<Address>,
    pub initializer_payment_ta: Option<Address>,
    pub order_payment_ta: Option<Address>,
    pub payment_mint: Option<Address>,
    pub payment_token_program: Option<Address>,
    pub system_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for CancelBidAccounts {
    type Args = CancelBidArgs;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, _args: &CancelBidArgs) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        let mut specs = vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("order", self.order).writable(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("initializer_payment_ta", self.initializer_payment_ta)
                .writable()
                .or_pda(ata, ata_seeds("initializer", "payment_token_program", "payment_mint")),
            AccountSpec::new("order_payment_ta", self.order_payment_ta)
                .writable()
                .or_pda(ata, ata_seeds("order", "payment_token_program", "payment_mint")),
            AccountSpec::new("payment_mint", self.payment_mint).writable(),
            AccountSpec::new("payment_token_program", self.payment_token_program).or_address(ids.token_program),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}

// ─── cancel_listing ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CancelListingArgs {}

impl InstructionArgs for CancelListingArgs {
    const NAME: &'static str = "cancel_listing";
    const DISCRIMINATOR: [u8; 8] = [41, 183, 50, 232, 230, 233, 157, 70];
}

#[derive(Debug, Clone, Default)]
pub struct CancelListingAccounts {
    pub initializer: Option<Address>,
    pub order: Option<Address>,
    pub market: Option<Address>,
    pub nft_mint: Option<Address>,
    pub initializer_nft_ta: Option<Address>,
    pub system_program: Option<Address>,
    pub sysvar_instructions: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub nft_token_program: Option<Address>,
    pub nft_program: Option<Address>,
    pub event_authority: Option<Address>,
    pub program: Option<Address>,
}

impl ProgramInstruction for CancelListingAccounts {
    type Args = CancelListingArgs;
    const PROGRAM: Program = Program::Marketplace;

    fn specs(&self, ids: &ProgramIds, _args: &CancelListingArgs) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        let mut specs = vec![
            AccountSpec::new("initializer", self.initializer).writable().signer(),
            AccountSpec::new("order", self.order).writable(),
            AccountSpec::new("market", self.market),
            AccountSpec::new("nft_mint", self.nft_mint).writable(),
            AccountSpec::new("initializer_nft_ta", self.initializer_nft_ta)
                .writable()
                .or_pda(ata, ata_seeds("initializer", "nft_token_program", "nft_mint")),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("sysvar_instructions", self.sysvar_instructions).or_address(ids.sysvar_instructions),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
            AccountSpec::new("nft_token_program", self.nft_token_program).or_address(ids.token_2022_program),
            nft_program_spec(self.nft_program),
        ];
        specs.extend(event_cpi_accounts(ids, self.event_authority, self.program));
        specs
    }
}
