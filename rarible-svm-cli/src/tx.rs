//! Instruction building from JSON arguments and named account overrides.

use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::editions::{
    self, AddMetadataAccounts, AddRoyaltiesAccounts, InitialiseAccounts, MintAccounts, RemoveMetadataAccounts,
};
use rarible_svm_client::editions_controls::{
    self, batch_instructions, fetch_mint_with_controls_accounts, AddPhaseAccounts,
    InitialiseEditionsControlsAccounts, MintInput, MintTarget, MintWithControlsAccounts, ModifyPlatformFeeAccounts,
    ModifyPlatformSecondaryAdminAccounts,
};
use rarible_svm_client::marketplace::{
    fetch_fill_order_accounts, wns_remaining_accounts, BidAccounts, CancelBidAccounts, CancelListingAccounts,
    FillOrderAccounts, FillPrograms, InitMarketAccounts, ListAccounts, VerifyMintAccounts, WnsAccountParams,
};
use rarible_svm_client::program::{Program, ProgramInstruction};
use rarible_svm_client::wns_marketplace::BuyAccounts;
use rarible_svm_core::abi::{position, AccountSpec};
use rarible_svm_core::address::Address;
use rarible_svm_core::builder::build;
use rarible_svm_core::fetch::AccountFetcher;
use rarible_svm_core::instruction::Instruction;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::registry::InstructionKind;

/// Everything `build` needs besides the program ids.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub kind: InstructionKind,
    /// Instruction arguments in their serde JSON form.
    pub args: Value,
    /// `name=ADDRESS` pairs applied onto the layout by account name.
    pub accounts: Vec<(String, Address)>,
    pub wns: Option<WnsAccountParams>,
    pub mints: Vec<MintTarget>,
}

impl BuildRequest {
    pub fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            args: Value::Object(Default::default()),
            accounts: Vec::new(),
            wns: None,
            mints: Vec::new(),
        }
    }

    fn account(&self, name: &str) -> Option<Address> {
        self.accounts.iter().rev().find(|(n, _)| n == name).map(|(_, a)| *a)
    }
}

/// A built instruction with the distinct addresses that must sign it.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltInstruction {
    #[serde(flatten)]
    pub instruction: Instruction,
    pub signers: Vec<Address>,
}

impl From<Instruction> for BuiltInstruction {
    fn from(instruction: Instruction) -> Self {
        let signers = instruction.signers();
        Self { instruction, signers }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BuildOutput {
    Single(BuiltInstruction),
    /// One inner list per transaction.
    Batches(Vec<Vec<BuiltInstruction>>),
}

impl BuildOutput {
    pub fn instructions(&self) -> Vec<&Instruction> {
        match self {
            BuildOutput::Single(built) => vec![&built.instruction],
            BuildOutput::Batches(batches) => batches.iter().flatten().map(|b| &b.instruction).collect(),
        }
    }
}

/// Parse `name=ADDRESS`.
pub fn parse_account_override(s: &str) -> Result<(String, Address), String> {
    let (name, address) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=ADDRESS, got '{}'", s))?;
    let address = address.parse::<Address>().map_err(|e| format!("{}: {}", name, e))?;
    Ok((name.replace('-', "_"), address))
}

/// Parse `MINT:MEMBER`.
pub fn parse_mint_target(s: &str) -> Result<MintTarget, String> {
    let (mint, member) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MINT:MEMBER, got '{}'", s))?;
    Ok(MintTarget {
        mint: mint.parse().map_err(|e| format!("mint: {}", e))?,
        member: member.parse().map_err(|e| format!("member: {}", e))?,
    })
}

/// Set named addresses on a layout. Names not in the layout are rejected.
pub fn apply_overrides(specs: &mut [AccountSpec], accounts: &[(String, Address)]) -> CliResult<()> {
    for (name, address) in accounts {
        let spec = specs
            .iter_mut()
            .find(|s| &s.name == name)
            .ok_or_else(|| CliError::unknown("account", name.clone()))?;
        spec.address = Some(*address);
    }
    Ok(())
}

fn set_address(specs: &mut [AccountSpec], name: &str, address: Option<Address>) {
    if let Some(spec) = specs.iter_mut().find(|s| s.name == name) {
        spec.address = address;
    }
}

fn decode_args<A: DeserializeOwned>(req: &BuildRequest) -> CliResult<A> {
    Ok(serde_json::from_value(req.args.clone())?)
}

/// Build one instruction from `base`, with overrides on top of its fields.
pub fn build_with<P>(ids: &ProgramIds, base: P, req: &BuildRequest) -> CliResult<Instruction>
where
    P: ProgramInstruction,
    P::Args: DeserializeOwned,
{
    let args: P::Args = decode_args(req)?;
    let mut specs = base.specs(ids, &args);
    apply_overrides(&mut specs, &req.accounts)?;
    let ix = build(P::PROGRAM.id(ids), &specs, &args)?;
    match &req.wns {
        Some(params) => append_wns(ids, ix, &specs, params),
        None => Ok(ix),
    }
}

fn append_wns(ids: &ProgramIds, ix: Instruction, specs: &[AccountSpec], params: &WnsAccountParams) -> CliResult<Instruction> {
    let nft_mint = position(specs, "nft_mint")
        .and_then(|i| ix.accounts.get(i))
        .map(|meta| meta.pubkey)
        .ok_or_else(|| CliError::InvalidInput("WNS accounts need an nft_mint account".into()))?;
    let remaining = wns_remaining_accounts(ids, &nft_mint, params)?;
    debug!(%nft_mint, count = remaining.len(), "appending WNS accounts");
    Ok(ix.with_remaining_accounts(remaining))
}

/// Build the requested instruction, or batches of them for multi-mint.
///
/// With a fetcher, fills and mints start from stored order or deployment
/// state; explicit overrides still win.
pub fn build_instruction(
    ids: &ProgramIds,
    fetcher: Option<&dyn AccountFetcher>,
    req: &BuildRequest,
) -> CliResult<BuildOutput> {
    use InstructionKind::*;

    if req.wns.is_some() && !matches!(req.kind, List | FillOrder | CancelListing) {
        return Err(CliError::InvalidInput(format!(
            "WNS accounts do not apply to {}",
            req.kind.name()
        )));
    }
    if !req.mints.is_empty() && req.kind != MintWithControls {
        return Err(CliError::InvalidInput(format!("--mint does not apply to {}", req.kind.name())));
    }

    let ix = match req.kind {
        InitMarket => build_with(ids, InitMarketAccounts::default(), req)?,
        VerifyMint => build_with(ids, VerifyMintAccounts::default(), req)?,
        Bid => build_with(ids, BidAccounts::default(), req)?,
        List => build_with(ids, ListAccounts::default(), req)?,
        FillOrder => build_fill_order(ids, fetcher, req)?,
        CancelBid => build_with(ids, CancelBidAccounts::default(), req)?,
        CancelListing => build_with(ids, CancelListingAccounts::default(), req)?,
        Buy => build_with(ids, BuyAccounts::default(), req)?,
        Initialise => build_with(ids, InitialiseAccounts::default(), req)?,
        Mint => build_with(ids, MintAccounts::default(), req)?,
        AddRoyalties => build_with(ids, AddRoyaltiesAccounts::default(), req)?,
        ModifyRoyalties => build_with(ids, editions::ModifyRoyaltiesAccounts::default(), req)?,
        AddMetadata => build_with(ids, AddMetadataAccounts::default(), req)?,
        RemoveMetadata => build_with(ids, RemoveMetadataAccounts::default(), req)?,
        InitialiseEditionsControls => build_with(ids, InitialiseEditionsControlsAccounts::default(), req)?,
        AddPhase => build_with(ids, AddPhaseAccounts::default(), req)?,
        MintWithControls => return build_mints(ids, fetcher, req),
        ControlsModifyRoyalties => build_with(ids, editions_controls::ModifyRoyaltiesAccounts::default(), req)?,
        ModifyPlatformFee => build_with(ids, ModifyPlatformFeeAccounts::default(), req)?,
        ModifyPlatformSecondaryAdmin => build_with(ids, ModifyPlatformSecondaryAdminAccounts::default(), req)?,
    };
    info!(program = %req.kind.program(), instruction = req.kind.name(), accounts = ix.accounts.len(), "built");
    Ok(BuildOutput::Single(ix.into()))
}

fn build_fill_order(ids: &ProgramIds, fetcher: Option<&dyn AccountFetcher>, req: &BuildRequest) -> CliResult<Instruction> {
    let base = match (fetcher, req.account("order"), req.account("taker")) {
        (Some(fetcher), Some(order), Some(taker)) => {
            let programs = FillPrograms {
                nft_token_program: req.account("nft_token_program"),
                payment_token_program: req.account("payment_token_program"),
                nft_program: req.account("nft_program"),
            };
            fetch_fill_order_accounts(ids, fetcher, &order, &taker, req.account("nft_mint"), programs)?
        }
        _ => FillOrderAccounts::default(),
    };
    build_with(ids, base, req)
}

fn build_mints(ids: &ProgramIds, fetcher: Option<&dyn AccountFetcher>, req: &BuildRequest) -> CliResult<BuildOutput> {
    let base = match (fetcher, req.account("editions_deployment"), req.account("minter")) {
        (Some(fetcher), Some(deployment), Some(minter)) => {
            fetch_mint_with_controls_accounts(ids, fetcher, &deployment, &minter)?
        }
        _ => MintWithControlsAccounts::default(),
    };
    if req.mints.is_empty() {
        return Ok(BuildOutput::Single(build_with(ids, base, req)?.into()));
    }

    let args: MintInput = decode_args(req)?;
    let mut specs = base.specs(ids, &args);
    apply_overrides(&mut specs, &req.accounts)?;
    let program_id = Program::EditionsControls.id(ids);

    let batches = batch_instructions(&req.mints, |target| {
        let mut specs = specs.clone();
        set_address(&mut specs, "mint", Some(target.mint));
        set_address(&mut specs, "member", Some(target.member));
        set_address(&mut specs, "hashlist_marker", None);
        set_address(&mut specs, "token_account", None);
        Ok(build(program_id, &specs, &args)?)
    })?;
    info!(mints = req.mints.len(), transactions = batches.len(), "built mint batches");

    Ok(BuildOutput::Batches(
        batches
            .into_iter()
            .map(|batch| batch.into_iter().map(BuiltInstruction::from).collect())
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_override() {
        let (name, address) = parse_account_override("nft-mint=11111111111111111111111111111111").unwrap();
        assert_eq!(name, "nft_mint");
        assert!(address.is_zero());
        assert!(parse_account_override("nft_mint").is_err());
        assert!(parse_account_override("nft_mint=notbase58!").is_err());
    }

    #[test]
    fn test_parse_mint_target() {
        let target = parse_mint_target("11111111111111111111111111111111:11111111111111111111111111111111").unwrap();
        assert_eq!(target.mint, target.member);
        assert!(parse_mint_target("11111111111111111111111111111111").is_err());
    }

    #[test]
    fn test_unknown_override_rejected() {
        let mut specs = vec![AccountSpec::new("payer", None)];
        let err = apply_overrides(&mut specs, &[("treasury".into(), Address::default())]).unwrap_err();
        assert!(matches!(err, CliError::Unknown { kind: "account", .. }));
    }
}
