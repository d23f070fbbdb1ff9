//! Account decoding and instruction parsing for inspection.

use clap::ValueEnum;
use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::distribution::DistributionAccount;
use rarible_svm_client::editions::{
    self, AddMetadataAccounts, AddRoyaltiesAccounts, EditionsDeployment, Hashlist, HashlistMarker,
    InitialiseAccounts, MintAccounts, RemoveMetadataAccounts,
};
use rarible_svm_client::editions_controls::{
    self, AddPhaseAccounts, EditionsControls, InitialiseEditionsControlsAccounts, MinterStats,
    MintWithControlsAccounts, ModifyPlatformFeeAccounts, ModifyPlatformSecondaryAdminAccounts,
};
use rarible_svm_client::marketplace::{
    BidAccounts, CancelBidAccounts, CancelListingAccounts, FillOrderAccounts, InitMarketAccounts, ListAccounts,
    Market, MintVerification, Order, VerifyMintAccounts,
};
use rarible_svm_client::program::{Program, ProgramInstruction};
use rarible_svm_client::wns_marketplace::BuyAccounts;
use rarible_svm_core::codec::{peek_discriminator, AccountData};
use rarible_svm_core::instruction::{AccountMeta, Instruction};
use rarible_svm_core::parser::BoundAccount;
use rarible_svm_core::validation::{validate_account_flags, FlagMismatch};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{CliError, CliResult};
use crate::hex::hex_encode;
use crate::registry::InstructionKind;

/// Account records the CLI can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountKind {
    Market,
    Order,
    MintVerification,
    EditionsDeployment,
    Hashlist,
    HashlistMarker,
    EditionsControls,
    MinterStats,
    Distribution,
}

impl AccountKind {
    pub const ALL: [AccountKind; 9] = [
        AccountKind::Market,
        AccountKind::Order,
        AccountKind::MintVerification,
        AccountKind::EditionsDeployment,
        AccountKind::Hashlist,
        AccountKind::HashlistMarker,
        AccountKind::EditionsControls,
        AccountKind::MinterStats,
        AccountKind::Distribution,
    ];

    pub fn discriminator(&self) -> [u8; 8] {
        match self {
            AccountKind::Market => Market::DISCRIMINATOR,
            AccountKind::Order => Order::DISCRIMINATOR,
            AccountKind::MintVerification => MintVerification::DISCRIMINATOR,
            AccountKind::EditionsDeployment => EditionsDeployment::DISCRIMINATOR,
            AccountKind::Hashlist => Hashlist::DISCRIMINATOR,
            AccountKind::HashlistMarker => HashlistMarker::DISCRIMINATOR,
            AccountKind::EditionsControls => EditionsControls::DISCRIMINATOR,
            AccountKind::MinterStats => MinterStats::DISCRIMINATOR,
            AccountKind::Distribution => DistributionAccount::DISCRIMINATOR,
        }
    }

    /// Identify a record by its leading tag.
    pub fn detect(data: &[u8]) -> Option<AccountKind> {
        let tag = peek_discriminator(data)?;
        Self::ALL.into_iter().find(|k| k.discriminator() == tag)
    }
}

fn to_json<T: AccountData + Serialize>(data: &[u8]) -> CliResult<Value> {
    let record = T::from_account_data(data)?;
    Ok(serde_json::to_value(record)?)
}

/// Decode an account dump, detecting the kind from its tag when not given.
pub fn decode_account(kind: Option<AccountKind>, data: &[u8]) -> CliResult<(AccountKind, Value)> {
    let kind = match kind {
        Some(kind) => kind,
        None => AccountKind::detect(data).ok_or_else(|| {
            let tag = peek_discriminator(data).map(|t| hex_encode(&t)).unwrap_or_default();
            CliError::unknown("account discriminator", tag)
        })?,
    };
    let value = match kind {
        AccountKind::Market => to_json::<Market>(data)?,
        AccountKind::Order => to_json::<Order>(data)?,
        AccountKind::MintVerification => to_json::<MintVerification>(data)?,
        AccountKind::EditionsDeployment => to_json::<EditionsDeployment>(data)?,
        AccountKind::Hashlist => to_json::<Hashlist>(data)?,
        AccountKind::HashlistMarker => to_json::<HashlistMarker>(data)?,
        AccountKind::EditionsControls => to_json::<EditionsControls>(data)?,
        AccountKind::MinterStats => to_json::<MinterStats>(data)?,
        AccountKind::Distribution => to_json::<DistributionAccount>(data)?,
    };
    Ok((kind, value))
}

/// Named view of a built instruction.
#[derive(Debug, Clone, Serialize)]
pub struct InstructionReport {
    pub program: String,
    pub instruction: String,
    pub accounts: Vec<BoundAccount>,
    pub remaining: Vec<AccountMeta>,
    pub args: Value,
    /// Flag differences against the layout, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flag_mismatches: Vec<FlagMismatch>,
}

fn report<P>(ids: &ProgramIds, kind: InstructionKind, ix: &Instruction) -> CliResult<InstructionReport>
where
    P: ProgramInstruction,
    P::Args: Serialize,
{
    let parsed = P::parse(ids, ix)?;
    let specs = P::default().specs(ids, &parsed.args);
    let flag_mismatches = validate_account_flags(&ix.accounts, &specs);
    for m in &flag_mismatches {
        warn!(account = %m.account, "account flags differ from layout");
    }
    Ok(InstructionReport {
        program: kind.program().to_string(),
        instruction: kind.name().to_string(),
        accounts: parsed.accounts.accounts,
        remaining: parsed.accounts.remaining,
        args: serde_json::to_value(&parsed.args)?,
        flag_mismatches,
    })
}

/// Identify the program and instruction, then bind accounts and decode args.
pub fn parse_instruction(ids: &ProgramIds, ix: &Instruction) -> CliResult<InstructionReport> {
    use InstructionKind::*;

    let program = Program::from_id(ids, &ix.program_id)
        .ok_or_else(|| CliError::unknown("program", ix.program_id.to_string()))?;
    let tag = peek_discriminator(&ix.data)
        .ok_or_else(|| CliError::InvalidInput("Instruction data shorter than a discriminator".into()))?;
    let kind = InstructionKind::from_discriminator(program, tag)
        .ok_or_else(|| CliError::unknown("instruction discriminator", hex_encode(&tag)))?;

    match kind {
        InitMarket => report::<InitMarketAccounts>(ids, kind, ix),
        VerifyMint => report::<VerifyMintAccounts>(ids, kind, ix),
        Bid => report::<BidAccounts>(ids, kind, ix),
        List => report::<ListAccounts>(ids, kind, ix),
        FillOrder => report::<FillOrderAccounts>(ids, kind, ix),
        CancelBid => report::<CancelBidAccounts>(ids, kind, ix),
        CancelListing => report::<CancelListingAccounts>(ids, kind, ix),
        Buy => report::<BuyAccounts>(ids, kind, ix),
        Initialise => report::<InitialiseAccounts>(ids, kind, ix),
        Mint => report::<MintAccounts>(ids, kind, ix),
        AddRoyalties => report::<AddRoyaltiesAccounts>(ids, kind, ix),
        ModifyRoyalties => report::<editions::ModifyRoyaltiesAccounts>(ids, kind, ix),
        AddMetadata => report::<AddMetadataAccounts>(ids, kind, ix),
        RemoveMetadata => report::<RemoveMetadataAccounts>(ids, kind, ix),
        InitialiseEditionsControls => report::<InitialiseEditionsControlsAccounts>(ids, kind, ix),
        AddPhase => report::<AddPhaseAccounts>(ids, kind, ix),
        MintWithControls => report::<MintWithControlsAccounts>(ids, kind, ix),
        ControlsModifyRoyalties => report::<editions_controls::ModifyRoyaltiesAccounts>(ids, kind, ix),
        ModifyPlatformFee => report::<ModifyPlatformFeeAccounts>(ids, kind, ix),
        ModifyPlatformSecondaryAdmin => report::<ModifyPlatformSecondaryAdminAccounts>(ids, kind, ix),
    }
}
