//! Inverse of the builder: bind accounts by position and decode args.

use serde::Serialize;

use crate::abi::AccountSpec;
use crate::address::Address;
use crate::codec::InstructionArgs;
use crate::error::CoreResult;
use crate::instruction::{AccountMeta, Instruction};
use crate::validation::validate_account_count;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundAccount {
    pub name: String,
    /// `None` when an optional slot carried the program-id sentinel.
    pub address: Option<Address>,
    pub is_signer: bool,
    pub is_writable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountBindings {
    pub accounts: Vec<BoundAccount>,
    pub remaining: Vec<AccountMeta>,
}

impl AccountBindings {
    pub fn get(&self, name: &str) -> Option<Address> {
        self.accounts
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction<A> {
    pub program_id: Address,
    pub accounts: AccountBindings,
    pub args: A,
}

impl<A> ParsedInstruction<A> {
    pub fn account(&self, name: &str) -> Option<Address> {
        self.accounts.get(name)
    }
}

/// Bind the instruction's accounts to the layout's names.
///
/// Fails before binding anything if there are fewer entries than specs.
pub fn parse_accounts(ix: &Instruction, specs: &[AccountSpec]) -> CoreResult<AccountBindings> {
    validate_account_count(ix.accounts.len(), specs.len())?;

    let accounts = specs
        .iter()
        .zip(&ix.accounts)
        .map(|(spec, meta)| BoundAccount {
            name: spec.name.clone(),
            address: if spec.is_optional() && meta.pubkey == ix.program_id {
                None
            } else {
                Some(meta.pubkey)
            },
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect();

    Ok(AccountBindings {
        accounts,
        remaining: ix.accounts[specs.len()..].to_vec(),
    })
}

pub fn parse<A: InstructionArgs>(ix: &Instruction, specs: &[AccountSpec]) -> CoreResult<ParsedInstruction<A>> {
    parse_with(ix, |_| specs.to_vec())
}

/// Like [`parse`], for layouts that depend on the decoded arguments.
pub fn parse_with<A, F>(ix: &Instruction, layout: F) -> CoreResult<ParsedInstruction<A>>
where
    A: InstructionArgs,
    F: FnOnce(&A) -> Vec<AccountSpec>,
{
    let args = A::from_instruction_data(&ix.data)?;
    let specs = layout(&args);
    let accounts = parse_accounts(ix, &specs)?;
    Ok(ParsedInstruction {
        program_id: ix.program_id,
        accounts,
        args,
    })
}
