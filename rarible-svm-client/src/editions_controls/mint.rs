//! Minting through controls: accounts from stored state, and batching.

use rarible_svm_core::address::Address;
use rarible_svm_core::fetch::{fetch_account, AccountFetcher};
use rarible_svm_core::instruction::Instruction;
use tracing::debug;

use super::accounts::EditionsControls;
use super::instructions::{MintInput, MintWithControlsAccounts};
use crate::config::ProgramIds;
use crate::editions::EditionsDeployment;
use crate::error::{ClientError, ClientResult};
use crate::pda;
use crate::program::ProgramInstruction;

/// Mints that fit in one transaction alongside a compute budget request.
pub const MAX_MINTS_PER_TRANSACTION: usize = 3;

/// Fresh mint and group member accounts for one item. Both sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintTarget {
    pub mint: Address,
    pub member: Address,
}

/// Accounts shared by every mint of `minter` from one deployment.
///
/// The group, treasury and first platform fee recipient come from the
/// stored deployment and controls; the minter pays and signs.
pub fn mint_with_controls_accounts(
    ids: &ProgramIds,
    deployment_address: &Address,
    deployment: &EditionsDeployment,
    controls: &EditionsControls,
    minter: &Address,
) -> ClientResult<MintWithControlsAccounts> {
    let (controls_address, _) = pda::editions_controls(ids, deployment_address)?;
    let (hashlist, _) = pda::hashlist(ids, deployment_address)?;
    let (minter_stats, _) = pda::minter_stats(ids, deployment_address, minter)?;

    Ok(MintWithControlsAccounts {
        editions_deployment: Some(*deployment_address),
        editions_controls: Some(controls_address),
        hashlist: Some(hashlist),
        payer: Some(*minter),
        signer: Some(*minter),
        minter: Some(*minter),
        minter_stats: Some(minter_stats),
        group: Some(deployment.group),
        group_mint: Some(deployment.group_mint),
        platform_fee_recipient_1: Some(controls.platform_fee_recipients[0].address),
        treasury: Some(controls.treasury),
        ..MintWithControlsAccounts::default()
    })
}

/// Fetch the deployment and its controls, then resolve the shared accounts.
pub fn fetch_mint_with_controls_accounts(
    ids: &ProgramIds,
    fetcher: &dyn AccountFetcher,
    deployment_address: &Address,
    minter: &Address,
) -> ClientResult<MintWithControlsAccounts> {
    let deployment: EditionsDeployment = fetch_account(fetcher, deployment_address)?;
    let (controls_address, _) = pda::editions_controls(ids, deployment_address)?;
    let controls: EditionsControls = fetch_account(fetcher, &controls_address)?;
    mint_with_controls_accounts(ids, deployment_address, &deployment, &controls, minter)
}

/// Build one instruction per target and group them into transactions of
/// at most [`MAX_MINTS_PER_TRANSACTION`].
pub fn batch_instructions<T, F>(targets: &[T], mut build_one: F) -> ClientResult<Vec<Vec<Instruction>>>
where
    F: FnMut(&T) -> ClientResult<Instruction>,
{
    if targets.is_empty() {
        return Err(ClientError::invalid_argument("targets", "at least one mint is required"));
    }
    let batches = targets
        .chunks(MAX_MINTS_PER_TRANSACTION)
        .map(|chunk| chunk.iter().map(&mut build_one).collect::<ClientResult<Vec<_>>>())
        .collect::<ClientResult<Vec<_>>>()?;
    debug!(mints = targets.len(), transactions = batches.len(), "batched mints");
    Ok(batches)
}

/// Mint instructions for each target in transaction-sized batches.
///
/// Per-mint accounts (mint, member, hashlist marker, token account) are
/// taken from each target; everything else from `base`.
pub fn mint_with_controls_batches(
    ids: &ProgramIds,
    base: &MintWithControlsAccounts,
    args: &MintInput,
    targets: &[MintTarget],
) -> ClientResult<Vec<Vec<Instruction>>> {
    batch_instructions(targets, |target| {
        MintWithControlsAccounts {
            mint: Some(target.mint),
            member: Some(target.member),
            hashlist_marker: None,
            token_account: None,
            ..base.clone()
        }
        .instruction(ids, args)
    })
}
