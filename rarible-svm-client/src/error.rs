//! Client errors and on-chain program error tables.

use rarible_svm_core::error::CoreError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Program id configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A builder input is out of range for the program
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        name: String,
        message: String,
    },
}

impl ClientError {
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// A custom error a program can return in a failed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramErrorCode {
    pub code: u32,
    pub name: &'static str,
    pub message: &'static str,
}

const fn code(code: u32, name: &'static str, message: &'static str) -> ProgramErrorCode {
    ProgramErrorCode { code, name, message }
}

/// Errors raised by the program framework itself, shared by every program.
pub const FRAMEWORK_ERRORS: &[ProgramErrorCode] = &[
    code(100, "InstructionMissing", "8 byte instruction identifier not provided"),
    code(101, "InstructionFallbackNotFound", "Fallback functions are not supported"),
    code(102, "InstructionDidNotDeserialize", "The program could not deserialize the given instruction"),
    code(2000, "ConstraintMut", "A mut constraint was violated"),
    code(2001, "ConstraintHasOne", "A has one constraint was violated"),
    code(2002, "ConstraintSigner", "A signer constraint was violated"),
    code(2006, "ConstraintSeeds", "A seeds constraint was violated"),
    code(3001, "AccountDiscriminatorNotFound", "No 8 byte discriminator was found on the account"),
    code(3002, "AccountDiscriminatorMismatch", "8 byte discriminator did not match what was expected"),
    code(3003, "AccountDidNotDeserialize", "Failed to deserialize the account"),
    code(3007, "AccountOwnedByWrongProgram", "The given account is owned by a different program than expected"),
    code(3012, "AccountNotInitialized", "The program expected this account to be already initialized"),
];

pub const MARKETPLACE_ERRORS: &[ProgramErrorCode] = &[
    code(6000, "WrongAccount", "Account passed in incorrectly"),
    code(6001, "InsufficientOrderSize", "Order too small"),
    code(6002, "AmountOverflow", "Amount overflow"),
    code(6003, "AmountUnderflow", "Amount underflow"),
    code(6004, "UnsupportedNft", "Unsupported NFT Type"),
    code(6005, "InvalidNft", "Invalid NFT for Market"),
];

pub const WNS_MARKETPLACE_ERRORS: &[ProgramErrorCode] = &[
    code(6000, "ListingAmountMismatch", "Buy amount mismatch with listing amount"),
    code(6001, "PaymentTokenAccountNotExistant", "SPL Payment token account required"),
    code(6002, "InvalidPaymentTokenAccount", "Invalid SPL Payment token account"),
    code(6003, "ArithmeticError", "Arithmetic error"),
];

pub const EDITIONS_ERRORS: &[ProgramErrorCode] = &[
    code(6000, "TickerTooLong", "Ticker too long"),
    code(6001, "MintTemplateTooLong", "Mint template too long"),
    code(6002, "DeploymentTemplateTooLong", "Deployment template too long"),
    code(6003, "RootTypeTooLong", "Root type too long"),
    code(6004, "MintedOut", "Minted out"),
    code(6005, "LegacyMigrationsAreMintedOut", "Legacy migrations are minted out"),
    code(6006, "MissingGlobalTreeDelegate", "Global tree delegate is missing"),
    code(6007, "IncorrectMintType", "Incorrect mint type"),
    code(6008, "InvalidMetadata", "Invalid Metadata"),
    code(6009, "CreatorFeeTooHigh", "Creator fee too high"),
];

/// Royalty and metadata failures of the editions program. Numbered from 6000 like
/// [`EDITIONS_ERRORS`], so a code can name one error from each table.
pub const EDITIONS_METADATA_ERRORS: &[ProgramErrorCode] = &[
    code(6000, "SizeExceedsMaxSize", "Collection size exceeds max size."),
    code(6001, "MaxSizeBelowCurrentSize", "Max size cannot be reduced below current size."),
    code(6002, "CreatorShareInvalid", "Creators shares must add up to 100."),
    code(6003, "MissingApproveAccount", "Missing approve account."),
    code(6004, "ExpiredApproveAccount", "Approve account has expired."),
    code(6005, "InvalidField", "Invalid field. You cannot use a public key as a field."),
    code(6006, "CreatorAddressInvalid", "The Address you provided is invalid. Please provide a valid address."),
    code(6007, "RoyaltyBasisPointsInvalid", "Royalty basis points must be less than or equal to 10000."),
    code(6008, "PlatformFeeBasisPointsInvalid", "Platform fee basis points must be less than or equal to 10000."),
    code(6009, "RecipientShareInvalid", "Recipient shares must add up to 100."),
    code(6010, "ReservedField", "The provided field is invalid or reserved."),
    code(6011, "InvalidNumberOfRecipients", "Invalid number of platform fee recipients. Exactly 5 recipients are required."),
];

pub const EDITIONS_CONTROLS_ERRORS: &[ProgramErrorCode] = &[
    code(6000, "TickerTooLong", "Ticker too long"),
    code(6001, "MintTemplateTooLong", "Mint template too long"),
    code(6002, "DeploymentTemplateTooLong", "Deployment template too long"),
    code(6003, "RootTypeTooLong", "Root type too long"),
    code(6004, "MintedOut", "Minted out"),
    code(6005, "LegacyMigrationsAreMintedOut", "Legacy migrations are minted out"),
    code(6006, "MissingGlobalTreeDelegate", "Global tree delegate is missing"),
    code(6007, "IncorrectMintType", "Incorrect mint type"),
    code(6008, "InvalidMetadata", "Invalid Metadata"),
    code(6009, "CreatorFeeTooHigh", "Creator fee too high"),
    code(6010, "FeeCalculationError", "Platform fee calculation failed."),
    code(6011, "FeeExceedsPrice", "Total fee exceeds the price amount."),
    code(6012, "InvalidFeeShares", "Total fee shares must equal 100."),
    code(6013, "TooManyRecipients", "Too many platform fee recipients. Maximum allowed is 5."),
    code(6014, "RecipientMismatch", "Recipient account does not match the expected address."),
    code(6015, "NoPhasesAdded", "No phases have been added. Cannot mint."),
    code(6016, "InvalidPhaseIndex", "Invalid phase index."),
    code(6017, "PrivatePhaseNoProof", "Private phase but no merkle proof provided"),
    code(6018, "MerkleRootNotSet", "Merkle root not set for allow list mint"),
    code(6019, "MerkleProofRequired", "Merkle proof required for allow list mint"),
    code(6020, "AllowListPriceAndMaxClaimsRequired", "Allow list price and max claims are required for allow list mint"),
    code(6021, "InvalidMerkleProof", "Invalid merkle proof"),
    code(6022, "ExceededAllowListMaxClaims", "This wallet has exceeded allow list max_claims in the current phase"),
    code(6023, "PhaseNotActive", "Phase not active"),
    code(6024, "PhaseNotStarted", "Phase not yet started"),
    code(6025, "PhaseAlreadyFinished", "Phase already finished"),
    code(6026, "ExceededMaxMintsForPhase", "Exceeded max mints for this phase"),
    code(6027, "ExceededWalletMaxMintsForPhase", "Exceeded wallet max mints for this phase"),
    code(6028, "ExceededWalletMaxMintsForCollection", "Exceeded wallet max mints for the collection"),
];

/// Every entry matching `code` across a program's tables, in table order.
///
/// Framework errors are consulted only when no program table has the code.
pub fn lookup_error(tables: &[&[ProgramErrorCode]], code: u32) -> Vec<ProgramErrorCode> {
    let found: Vec<ProgramErrorCode> = tables
        .iter()
        .flat_map(|table| table.iter())
        .filter(|e| e.code == code)
        .copied()
        .collect();
    if !found.is_empty() {
        return found;
    }
    FRAMEWORK_ERRORS.iter().filter(|e| e.code == code).copied().collect()
}
