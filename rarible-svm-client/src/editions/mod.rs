//! Rarible editions program: open-edition collections on Token-2022.

pub mod accounts;
pub mod instructions;

pub use accounts::{EditionsDeployment, Hashlist, HashlistMarker, MintAndOrder};
pub use instructions::*;
