//! Editions controls instructions.
//!
//! Every instruction addresses the controls account of a deployment;
//! it is derived from `editions_deployment` when not supplied.

use borsh::{BorshDeserialize, BorshSerialize};
use rarible_svm_core::abi::{AccountSpec, SeedSource};
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::InstructionArgs;
use serde::{Deserialize, Serialize};

use super::accounts::PlatformFeeRecipient;
use crate::config::ProgramIds;
use crate::editions::instructions::{deployment_seeds, hashlist_marker_seeds, hashlist_seeds};
use crate::editions::{AddMetadataArgs, UpdateRoyaltiesArgs};
use crate::pda::{CONTROLS_SEED, MINTER_STATS_PHASE_SEED, MINTER_STATS_SEED};
use crate::program::{ata_seeds, Program, ProgramInstruction};

fn controls_spec(ids: &ProgramIds, address: Option<Address>) -> AccountSpec {
    AccountSpec::new("editions_controls", address).writable().or_pda(
        ids.editions_controls,
        vec![
            SeedSource::literal(CONTROLS_SEED),
            SeedSource::account("editions_deployment"),
        ],
    )
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct UpdatePlatformFeeArgs {
    pub platform_fee_value: u64,
    pub recipients: Vec<PlatformFeeRecipient>,
    pub is_fee_flat: bool,
}

// ─── initialise_editions_controls ────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InitialiseControlInput {
    pub max_mints_per_wallet: u64,
    pub treasury: Address,
    pub max_number_of_tokens: u64,
    pub symbol: String,
    pub collection_name: String,
    pub collection_uri: String,
    pub cosigner_program_id: Option<Address>,
    pub royalties: UpdateRoyaltiesArgs,
    pub extra_meta: Vec<AddMetadataArgs>,
    pub item_base_uri: String,
    pub item_base_name: String,
    pub platform_fee: UpdatePlatformFeeArgs,
}

impl InstructionArgs for InitialiseControlInput {
    const NAME: &'static str = "initialise_editions_controls";
    const DISCRIMINATOR: [u8; 8] = [69, 176, 133, 29, 20, 49, 120, 202];
}

#[derive(Debug, Clone, Default)]
pub struct InitialiseEditionsControlsAccounts {
    pub editions_controls: Option<Address>,
    pub editions_deployment: Option<Address>,
    pub hashlist: Option<Address>,
    pub payer: Option<Address>,
    pub creator: Option<Address>,
    pub group_mint: Option<Address>,
    pub group: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
    pub group_extension_program: Option<Address>,
    pub rarible_editions_program: Option<Address>,
}

impl ProgramInstruction for InitialiseEditionsControlsAccounts {
    type Args = InitialiseControlInput;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, args: &InitialiseControlInput) -> Vec<AccountSpec> {
        vec![
            controls_spec(ids, self.editions_controls),
            AccountSpec::new("editions_deployment", self.editions_deployment)
                .writable()
                .or_pda(ids.editions, deployment_seeds(&args.symbol)),
            AccountSpec::new("hashlist", self.hashlist).writable().or_pda(ids.editions, hashlist_seeds()),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("creator", self.creator),
            AccountSpec::new("group_mint", self.group_mint).writable().signer(),
            AccountSpec::new("group", self.group).writable().signer(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("group_extension_program", self.group_extension_program)
                .or_address(ids.group_extension),
            AccountSpec::new("rarible_editions_program", self.rarible_editions_program).or_address(ids.editions),
        ]
    }
}

// ─── add_phase ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InitialisePhaseInput {
    pub price_amount: u64,
    pub price_token: Address,
    pub start_time: i64,
    pub max_mints_per_wallet: u64,
    pub max_mints_total: u64,
    pub end_time: i64,
    pub is_private: bool,
    /// Required when `is_private`
    pub merkle_root: Option<[u8; 32]>,
}

impl InstructionArgs for InitialisePhaseInput {
    const NAME: &'static str = "add_phase";
    const DISCRIMINATOR: [u8; 8] = [245, 220, 147, 40, 30, 207, 36, 127];
}

#[derive(Debug, Clone, Default)]
pub struct AddPhaseAccounts {
    /// Not derivable here: the layout carries no deployment account
    pub editions_controls: Option<Address>,
    pub payer: Option<Address>,
    pub creator: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
    pub rarible_editions_program: Option<Address>,
}

impl ProgramInstruction for AddPhaseAccounts {
    type Args = InitialisePhaseInput;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, _args: &InitialisePhaseInput) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_controls", self.editions_controls).writable(),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("creator", self.creator).writable().signer(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("rarible_editions_program", self.rarible_editions_program).or_address(ids.editions),
        ]
    }
}

// ─── mint_with_controls ──────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct MintInput {
    pub phase_index: u32,
    /// Allow-list proof for private phases
    pub merkle_proof: Option<Vec<[u8; 32]>>,
    pub allow_list_price: Option<u64>,
    pub allow_list_max_claims: Option<u64>,
}

impl InstructionArgs for MintInput {
    const NAME: &'static str = "mint_with_controls";
    const DISCRIMINATOR: [u8; 8] = [167, 57, 252, 220, 69, 92, 231, 61];
}

#[derive(Debug, Clone, Default)]
pub struct MintWithControlsAccounts {
    pub editions_deployment: Option<Address>,
    pub editions_controls: Option<Address>,
    pub hashlist: Option<Address>,
    pub hashlist_marker: Option<Address>,
    pub payer: Option<Address>,
    pub signer: Option<Address>,
    pub minter: Option<Address>,
    pub minter_stats: Option<Address>,
    /// Seeded by the phase index argument
    pub minter_stats_phase: Option<Address>,
    pub mint: Option<Address>,
    pub member: Option<Address>,
    pub group: Option<Address>,
    pub group_mint: Option<Address>,
    pub platform_fee_recipient_1: Option<Address>,
    pub token_account: Option<Address>,
    pub treasury: Option<Address>,
    pub token_program: Option<Address>,
    pub associated_token_program: Option<Address>,
    pub group_extension_program: Option<Address>,
    pub system_program: Option<Address>,
    pub rarible_editions_program: Option<Address>,
}

impl ProgramInstruction for MintWithControlsAccounts {
    type Args = MintInput;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, args: &MintInput) -> Vec<AccountSpec> {
        let ata = ids.associated_token_program;
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            controls_spec(ids, self.editions_controls),
            AccountSpec::new("hashlist", self.hashlist).writable().or_pda(ids.editions, hashlist_seeds()),
            AccountSpec::new("hashlist_marker", self.hashlist_marker)
                .writable()
                .or_pda(ids.editions, hashlist_marker_seeds()),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("signer", self.signer).signer(),
            AccountSpec::new("minter", self.minter).writable(),
            AccountSpec::new("minter_stats", self.minter_stats).writable().or_pda(
                ids.editions_controls,
                vec![
                    SeedSource::literal(MINTER_STATS_SEED),
                    SeedSource::account("editions_deployment"),
                    SeedSource::account("minter"),
                ],
            ),
            AccountSpec::new("minter_stats_phase", self.minter_stats_phase).writable().or_pda(
                ids.editions_controls,
                vec![
                    SeedSource::literal(MINTER_STATS_PHASE_SEED),
                    SeedSource::account("editions_deployment"),
                    SeedSource::account("minter"),
                    SeedSource::literal(args.phase_index.to_le_bytes()),
                ],
            ),
            AccountSpec::new("mint", self.mint).writable().signer(),
            AccountSpec::new("member", self.member).writable().signer(),
            AccountSpec::new("group", self.group).writable(),
            AccountSpec::new("group_mint", self.group_mint).writable(),
            AccountSpec::new("platform_fee_recipient_1", self.platform_fee_recipient_1).writable(),
            AccountSpec::new("token_account", self.token_account)
                .writable()
                .or_pda(ata, ata_seeds("minter", "token_program", "mint")),
            AccountSpec::new("treasury", self.treasury).writable(),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("associated_token_program", self.associated_token_program).or_address(ata),
            AccountSpec::new("group_extension_program", self.group_extension_program)
                .or_address(ids.group_extension),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("rarible_editions_program", self.rarible_editions_program).or_address(ids.editions),
        ]
    }
}

// ─── modify_royalties ────────────────────────────────────────────

/// `modify_royalties` arguments, forwarded to the editions program.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifyRoyaltiesInput(pub UpdateRoyaltiesArgs);

impl InstructionArgs for ModifyRoyaltiesInput {
    const NAME: &'static str = "modify_royalties";
    const DISCRIMINATOR: [u8; 8] = [199, 95, 20, 107, 136, 161, 93, 137];
}

#[derive(Debug, Clone, Default)]
pub struct ModifyRoyaltiesAccounts {
    pub editions_deployment: Option<Address>,
    pub editions_controls: Option<Address>,
    pub payer: Option<Address>,
    pub creator: Option<Address>,
    pub mint: Option<Address>,
    pub system_program: Option<Address>,
    pub token_program: Option<Address>,
    pub rarible_editions_program: Option<Address>,
}

impl ProgramInstruction for ModifyRoyaltiesAccounts {
    type Args = ModifyRoyaltiesInput;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, _args: &ModifyRoyaltiesInput) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            controls_spec(ids, self.editions_controls),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("creator", self.creator).writable().signer(),
            AccountSpec::new("mint", self.mint).writable(),
            AccountSpec::new("system_program", self.system_program).or_address(ids.system_program),
            AccountSpec::new("token_program", self.token_program).or_address(ids.token_2022_program),
            AccountSpec::new("rarible_editions_program", self.rarible_editions_program).or_address(ids.editions),
        ]
    }
}

// ─── modify_platform_fee ─────────────────────────────────────────

impl InstructionArgs for UpdatePlatformFeeArgs {
    const NAME: &'static str = "modify_platform_fee";
    const DISCRIMINATOR: [u8; 8] = [186, 73, 229, 152, 183, 174, 250, 197];
}

/// Signed by either platform fee admin.
#[derive(Debug, Clone, Default)]
pub struct ModifyPlatformFeeAccounts {
    pub editions_deployment: Option<Address>,
    pub editions_controls: Option<Address>,
    pub payer: Option<Address>,
    pub creator: Option<Address>,
}

impl ProgramInstruction for ModifyPlatformFeeAccounts {
    type Args = UpdatePlatformFeeArgs;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, _args: &UpdatePlatformFeeArgs) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            controls_spec(ids, self.editions_controls),
            AccountSpec::new("payer", self.payer).writable().signer(),
            AccountSpec::new("creator", self.creator).writable().signer(),
        ]
    }
}

// ─── modify_platform_secondary_admin ─────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct UpdatePlatformFeeSecondaryAdminInput {
    pub new_admin: Address,
}

impl InstructionArgs for UpdatePlatformFeeSecondaryAdminInput {
    const NAME: &'static str = "modify_platform_secondary_admin";
    const DISCRIMINATOR: [u8; 8] = [128, 153, 231, 143, 156, 220, 161, 147];
}

#[derive(Debug, Clone, Default)]
pub struct ModifyPlatformSecondaryAdminAccounts {
    pub editions_deployment: Option<Address>,
    pub editions_controls: Option<Address>,
    pub creator: Option<Address>,
}

impl ProgramInstruction for ModifyPlatformSecondaryAdminAccounts {
    type Args = UpdatePlatformFeeSecondaryAdminInput;
    const PROGRAM: Program = Program::EditionsControls;

    fn specs(&self, ids: &ProgramIds, _args: &UpdatePlatformFeeSecondaryAdminInput) -> Vec<AccountSpec> {
        vec![
            AccountSpec::new("editions_deployment", self.editions_deployment).writable(),
            controls_spec(ids, self.editions_controls),
            AccountSpec::new("creator", self.creator).writable().signer(),
        ]
    }
}
