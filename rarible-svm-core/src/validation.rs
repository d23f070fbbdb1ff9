//! Account list checks shared by the parser and the CLI.

use serde::Serialize;

use crate::abi::AccountSpec;
use crate::error::CoreError;
use crate::instruction::AccountMeta;

/// Validate that at least the layout's accounts were provided.
pub fn validate_account_count(actual: usize, expected: usize) -> Result<(), CoreError> {
    if actual < expected {
        return Err(CoreError::InsufficientAccounts { expected, actual });
    }
    Ok(())
}

/// A signer/writable flag that differs from the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagMismatch {
    pub account: String,
    pub expected_signer: bool,
    pub expected_writable: bool,
    pub actual_signer: bool,
    pub actual_writable: bool,
}

/// Compare flags positionally; extra accounts are ignored.
pub fn validate_account_flags(accounts: &[AccountMeta], specs: &[AccountSpec]) -> Vec<FlagMismatch> {
    specs
        .iter()
        .zip(accounts)
        .filter(|(spec, meta)| spec.signer != meta.is_signer || spec.writable != meta.is_writable)
        .map(|(spec, meta)| FlagMismatch {
            account: spec.name.clone(),
            expected_signer: spec.signer,
            expected_writable: spec.writable,
            actual_signer: meta.is_signer,
            actual_writable: meta.is_writable,
        })
        .collect()
}
