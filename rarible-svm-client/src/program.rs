//! Shared plumbing for per-program instruction bindings.

use std::fmt;
use std::str::FromStr;

use rarible_svm_core::abi::{AccountSpec, SeedSource};
use rarible_svm_core::address::Address;
use rarible_svm_core::builder::build;
use rarible_svm_core::codec::InstructionArgs;
use rarible_svm_core::error::CoreError;
use rarible_svm_core::instruction::Instruction;
use rarible_svm_core::parser::{parse_with, ParsedInstruction};

use crate::config::ProgramIds;
use crate::error::{
    ClientResult, ProgramErrorCode, EDITIONS_CONTROLS_ERRORS, EDITIONS_ERRORS, EDITIONS_METADATA_ERRORS,
    MARKETPLACE_ERRORS, WNS_MARKETPLACE_ERRORS,
};

/// The programs this crate speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Marketplace,
    WnsMarketplace,
    Editions,
    EditionsControls,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Marketplace,
        Program::WnsMarketplace,
        Program::Editions,
        Program::EditionsControls,
    ];

    pub fn id(&self, ids: &ProgramIds) -> Address {
        match self {
            Program::Marketplace => ids.marketplace,
            Program::WnsMarketplace => ids.wns_marketplace,
            Program::Editions => ids.editions,
            Program::EditionsControls => ids.editions_controls,
        }
    }

    pub fn errors(&self) -> &'static [&'static [ProgramErrorCode]] {
        match self {
            Program::Marketplace => &[MARKETPLACE_ERRORS],
            Program::WnsMarketplace => &[WNS_MARKETPLACE_ERRORS],
            Program::Editions => &[EDITIONS_ERRORS, EDITIONS_METADATA_ERRORS],
            Program::EditionsControls => &[EDITIONS_CONTROLS_ERRORS],
        }
    }

    /// Which known program an address belongs to under `ids`.
    pub fn from_id(ids: &ProgramIds, address: &Address) -> Option<Program> {
        Self::ALL.into_iter().find(|p| p.id(ids) == *address)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Program::Marketplace => "marketplace",
            Program::WnsMarketplace => "wns-marketplace",
            Program::Editions => "editions",
            Program::EditionsControls => "editions-controls",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("Unknown program '{}'", s))
    }
}

/// An instruction's account struct, tied to its argument record.
///
/// Account fields are `Option<Address>`; anything left `None` is filled
/// from the layout's default, if it has one.
pub trait ProgramInstruction: Default {
    type Args: InstructionArgs;

    const PROGRAM: Program;

    /// Ordered account layout with defaults for the given args.
    fn specs(&self, ids: &ProgramIds, args: &Self::Args) -> Vec<AccountSpec>;

    fn instruction(&self, ids: &ProgramIds, args: &Self::Args) -> ClientResult<Instruction> {
        let specs = self.specs(ids, args);
        Ok(build(Self::PROGRAM.id(ids), &specs, args)?)
    }

    fn parse(ids: &ProgramIds, ix: &Instruction) -> ClientResult<ParsedInstruction<Self::Args>> {
        let expected = Self::PROGRAM.id(ids);
        if ix.program_id != expected {
            return Err(CoreError::ProgramMismatch {
                expected,
                actual: ix.program_id,
            }
            .into());
        }
        Ok(parse_with(ix, |args| Self::default().specs(ids, args))?)
    }
}

/// Seeds of an associated token account, by account name.
pub(crate) fn ata_seeds(owner: &str, token_program: &str, mint: &str) -> Vec<SeedSource> {
    vec![
        SeedSource::account(owner),
        SeedSource::account(token_program),
        SeedSource::account(mint),
    ]
}
