//! Command-line front end for the Rarible SVM instruction builders.
//!
//! Builds instructions as JSON for an external signer, derives program
//! addresses, decodes account dumps and names the accounts of built
//! instructions. Nothing here signs or submits.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod hex;
pub mod inspect;
pub mod pda;
pub mod registry;
pub mod telemetry;
pub mod tx;
