//! Structured error types for address derivation, encoding and
//! instruction assembly.

use thiserror::Error;

use crate::address::Address;

/// Result type alias used across the core crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the codec, deriver, builder, parser and fetch
/// collaborator.
///
/// Every variant is returned to the immediate caller; nothing in the
/// core retries or swallows a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input too short or otherwise structurally invalid
    #[error("Malformed {expected} record: {message}")]
    MalformedRecord {
        expected: String,
        message: String,
    },

    /// The 8-byte tag does not belong to the record being decoded
    #[error("Discriminator mismatch for {expected}: got {actual:?}")]
    DiscriminatorMismatch {
        expected: String,
        actual: [u8; 8],
    },

    /// A single seed exceeds the derivation input limit
    #[error("Seed {index} is {len} bytes, max {max}", max = crate::address::MAX_SEED_LEN)]
    SeedsTooLong {
        index: usize,
        len: usize,
    },

    /// Too many seeds once the bump is appended
    #[error("{count} seeds supplied, max {max}", max = crate::address::MAX_SEEDS - 1)]
    TooManySeeds {
        count: usize,
    },

    /// Every bump from 255 down to 0 produced an on-curve point
    #[error("No valid program address found for the given seeds")]
    NoValidAddressFound,

    /// The builder could not resolve a defaulted account
    #[error("Account '{account}' could not be resolved: waiting on '{waiting_on}'")]
    UnresolvedDependency {
        account: String,
        waiting_on: String,
    },

    /// A required account has no default and was not supplied
    #[error("Account '{account}' is required and has no default")]
    MissingAccount {
        account: String,
    },

    /// Fewer account entries than the layout requires
    #[error("Expected at least {expected} accounts, got {actual}")]
    InsufficientAccounts {
        expected: usize,
        actual: usize,
    },

    /// Instruction addressed to a different program than the layout
    #[error("Instruction targets {actual}, expected {expected}")]
    ProgramMismatch {
        expected: Address,
        actual: Address,
    },

    /// The fetch collaborator has no data for this address
    #[error("Account {address} not found")]
    AccountNotFound {
        address: Address,
    },

    /// The fetch collaborator failed for a reason other than absence
    #[error("Failed to fetch {address}: {message}")]
    Fetch {
        address: Address,
        message: String,
    },
}

impl CoreError {
    pub fn malformed(expected: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::MalformedRecord {
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// True when the failure means "nothing there yet" rather than bad data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::AccountNotFound { .. })
    }

    /// Get a numeric error code for client-side handling.
    pub fn error_code(&self) -> u32 {
        match self {
            CoreError::MalformedRecord { .. } => 1000,
            CoreError::DiscriminatorMismatch { .. } => 1001,
            CoreError::SeedsTooLong { .. } => 1002,
            CoreError::TooManySeeds { .. } => 1003,
            CoreError::NoValidAddressFound => 1004,
            CoreError::UnresolvedDependency { .. } => 1005,
            CoreError::MissingAccount { .. } => 1006,
            CoreError::InsufficientAccounts { .. } => 1007,
            CoreError::ProgramMismatch { .. } => 1008,
            CoreError::AccountNotFound { .. } => 1009,
            CoreError::Fetch { .. } => 1010,
        }
    }
}
