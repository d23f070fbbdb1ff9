//! Editions instructions.
//!
//! The deployment address is seeded by the collection symbol, which only
//! `initialise` carries in its arguments; the other instructions need it
//! supplied.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::abi::{AccountSpec, SeedSource};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::InstructionArgs;
use serde::{Deserialize, Serialize};

use crate::config::ProgramIds;
use crate::pda::{DEPLOYMENT_SEED, HASHLIST_MARKER_SEED, HASHLIST_SEED};
use crate::program::{ata_seeds, Program, ProgramInstruction};

pub(crate) fn hashlist_seeds() -> Vec<SeedSource> {
    vec![
        SeedSource::literal(HASHLIST_SEED),
        SeedSource::account("editions_deployment"),
    ]
}

pub(crate) fn hashlist_marker_seeds() -> Vec<SeedSource> {
    vec![
        SeedSource::literal(HASHLIST_MARKER_SEED),
        SeedSource::account("editions_deployment"),
        SeedSource::account("mint"),
    ]
}

pub(crate) fn deployment_seeds(symbol: &str) -> Vec<SeedSource> {
    vec![SeedSource::literal(DEPLOYMENT_SEED), SeedSource::literal(symbol)]
}

/// A creator and their share of royalties, in percent.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CreatorWithShare {
    pub address: Address,
    pub share: u8,
}

/// Royalty settings. Shares must add up to 100 and basis points may not
/// exceed 10000; the program rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct UpdateRoyaltiesArgs {
    pub royalty_basis_points: u16,
    pub creators: Vec<CreatorWithShare>,
}

/// A metadata key/value pair on the mint.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct AddMetadataArgs {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct RemoveMetadataArgs {
    pub field: String,
    pub value: String,
}

// ─── initialise ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InitialiseInput {
    pub symbol: String,
    pub collection_name: String,
    pub collection_uri: String,
    pub max_number_of_tokens: u64,
    pub creator_cosign_program_id: Option<Address>,
    /// A single `{}` is replaced by the item index
    pub item_base_uri: String,
    pub item_base_name: String,
}

impl InstructionArgs for InitialiseInput {
    const NAME: &'static str = "initialise";
    const DISCRIMINATOR: [u8; 8] = [162, 198, 118, 235, 215, 247, 25, 118];
}

#[derive(Debug, Clone, Default)]
pub struct InitialiseAccounts {
    pub editions_deployment: Option<Address>,
    pub hashlist: Option<Address>,
    pub payer: Option<Address>,
    pub creator: Option<Address>,
    pub group_mint: Option<Address>,
    pub group: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
    pub group_extension_program: Option<Address>,
}

impl ProgramInstruction for InitialiseAccounts {
    type Args = InitialiseInput;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, args: &InitialiseInput) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment)
                .writable()
                .or_pda(ids.editions, deployment_seeds(&args.symbol)),
            AccountSpec::new("hashlist", self.hashlist).writable().or_pda(ids.editions, hashlist_seeds()),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("creator", self.creator).writable(),
            AccountSpec::new("group_mint", self.group_mint).writable().signer(),
            AccountSpec::new("group", self.group).writable().signer(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("group_extension_program", self.group_extension_program)
                .or_address(ids.group_extension),
        ]
    }
}

// ─── mint ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct MintArgs {}

impl InstructionArgs for MintArgs {
    const NAME: &'static str = "mint";
    const DISCRIMINATOR: [u8; 8] = [51, 57, 225, 47, 182, 146, 137, 166];
}

#[derive(Debug, Clone, Default)]
pub struct MintAccounts {
    pub editions_deployment: Option<Address>,
    pub hashlist: Option<Address>,
    pub hashlist_marker: Option<Address>,
    pub payer: Option<Address>,
    /// Must be the deployment creator when a co-signer is required
    pub signer: Option<Address>,
    pub minter: Option<Address>,
    pub mint: Option<Address>,
    pub member: Option<Address>,
    pub group: Option<Address>,
    pub group_mint: Option<Address>,
    pub token_account: Option<Address>,
    pub token_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub group_extension_program: Option<Address>,
    pub system_program: Option<Address>,
}

impl ProgramInstruction for MintAccounts {
    type Args = MintArgs;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, _args: &MintArgs) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            AccountSpec::new("hashlist", self.hashlist).writable().or_pda(ids.editions, hashlist_seeds()),
            AccountSpec::new("hashlist_marker", self.hashlist_marker)
                .writable()
                .or_pda(ids.editions, hashlist_marker_seeds()),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("signer", self.signer).writable().signer(),
            AccountSpec::new("minter", self.minter).writable(),
            AccountSpec::new("mint", self.mint).writable().signer(),
            AccountSpec::new("member", self.member).writable().signer(),
            AccountSpec::new("group", self.group).writable(),
            AccountSpec::new("group_mint", self.group_mint).writable(),
            AccountSpec::new("token_account", self.token_account)
                .writable()
                .or_pda(ata, ata_seeds("minter", "token_program", "mint")),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
            AccountSpec::new("group_extension_program", self.group_extension_program)
                .or_address(ids.group_extension),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
        ]
    }
}

// ─── royalties ───────────────────────────────────────────────────

/// `add_royalties` arguments.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddRoyaltiesData(pub UpdateRoyaltiesArgs);

impl InstructionArgs for AddRoyaltiesData {
    const NAME: &'static str = "add_royalties";
    const DISCRIMINATOR: [u8; 8] = [195, 251, 126, 230, 187, 134, 168, 210];
}

#[derive(Debug, Clone, Default)]
pub struct AddRoyaltiesAccounts {
    pub editions_deployment: Option<Address>,
    pub payer: Option<Address>,
    pub signer: Option<Address>,
    pub mint: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
}

impl ProgramInstruction for AddRoyaltiesAccounts {
    type Args = AddRoyaltiesData;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, _args: &AddRoyaltiesData) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("signer", self.signer).writable().signer(),
            AccountSpec::new("mint", self.mint).writable().signer(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
        ]
    }
}

/// `modify_royalties` arguments. Creators missing from the new list
/// are removed from the mint's metadata.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifyRoyaltiesData(pub UpdateRoyaltiesArgs);

impl InstructionArgs for ModifyRoyaltiesData {
    const NAME: &'static str = "modify_royalties";
    const DISCRIMINATOR: [u8; 8] = [199, 95, 20, 107, 136, 161, 93, 137];
}

#[derive(Debug, Clone, Default)]
pub struct ModifyRoyaltiesAccounts {
    pub payer: Option<Address>,
    pub editions_deployment: Option<Address>,
    pub signer: Option<Address>,
    pub mint: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
}

impl ProgramInstruction for ModifyRoyaltiesAccounts {
    type Args = ModifyRoyaltiesData;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, _args: &ModifyRoyaltiesData) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            AccountSpec::new("signer", self.signer).writable().signer(),
            AccountSpec::new("mint", self.mint).writable(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
        ]
    }
}

// ─── metadata ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddMetadataData(pub Vec<AddMetadataArgs>);

impl InstructionArgs for AddMetadataData {
    const NAME: &'static str = "add_metadata";
    const DISCRIMINATOR: [u8; 8] = [231, 195, 40, 240, 67, 231, 53, 136];
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoveMetadataData(pub Vec<RemoveMetadataArgs>);

impl InstructionArgs for RemoveMetadataData {
    const NAME: &'static str = "remove_metadata";
    const DISCRIMINATOR: [u8; 8] = [81, 68, 231, 49, 91, 8, 111, 160];
}

#[derive(Debug, Clone, Default)]
pub struct MetadataAccounts {
    pub editions_deployment: Option<Address>,
    pub payer: Option<Address>,
    pub signer: Option<Address>,
    pub mint: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
}

impl MetadataAccounts {
    fn specs_with_mint(&self, ids: &ProgramIds, mint: AccountSpec) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("signer", self.signer).writable().signer(),
            mint,
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddMetadataAccounts(pub MetadataAccounts);

impl ProgramInstruction for AddMetadataAccounts {
    type Args = AddMetadataData;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, _args: &AddMetadataData) -> Vec<AccountSpec> {
        let mint = AccountSpec::new("mint", self.0.mint).writable().signer();
        self.0.specs_with_mint(ids, mint)
    }
}

/// Removing metadata leaves the mint read-only.
#[derive(Debug, Clone, Default)]
pub struct RemoveMetadataAccounts(pub MetadataAccounts);

impl ProgramInstruction for RemoveMetadataAccounts {
    type Args = RemoveMetadataData;
    const PROGRAM: Program = Program::Editions;

    fn specs(&self, ids: &ProgramIds, _args: &RemoveMetadataData) -> Vec<AccountSpec> {
        self.0.specs_with_mint(ids, AccountSpec::new("mint", self.0.mint))
    }
}
