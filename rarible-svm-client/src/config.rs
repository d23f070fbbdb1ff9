//! Program ids and well-known addresses.
//!
//! Every builder takes a [`ProgramIds`] instead of reading globals, so
//! the same code targets mainnet, devnet or a local validator. Fields
//! missing from a JSON override keep their mainnet value.

use std::path::Path;

use rarible_svm_core::address::Address;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub const SYSTEM_PROGRAM: Address = Address::new([0; 32]);

/// TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA
pub const TOKEN_PROGRAM: Address = Address::new([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133, 237,
    95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb
pub const TOKEN_2022_PROGRAM: Address = Address::new([
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218, 182, 26, 252, 77,
    131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
]);

/// ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL
pub const ASSOCIATED_TOKEN_PROGRAM: Address = Address::new([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);

/// Sysvar1nstructions1111111111111111111111111
pub const SYSVAR_INSTRUCTIONS: Address = Address::new([
    6, 167, 213, 23, 24, 123, 209, 102, 53, 218, 212, 4, 85, 253, 194, 192, 193, 36, 198, 143, 33,
    86, 117, 165, 219, 186, 203, 95, 8, 0, 0, 0,
]);

/// metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s
pub const METADATA_PROGRAM: Address = Address::new([
    11, 112, 101, 177, 227, 209, 124, 69, 56, 157, 82, 127, 107, 4, 195, 205, 88, 184, 108, 115,
    26, 160, 253, 181, 73, 182, 209, 188, 3, 248, 41, 70,
]);

/// 61AUdCJkaaw2b3Byhp9gLyK6rvt8DTsUoGTKwnvEZMaf
pub const MARKETPLACE_PROGRAM: Address = Address::new([
    74, 85, 38, 69, 27, 250, 203, 67, 222, 17, 21, 122, 57, 143, 5, 169, 254, 24, 167, 13, 84, 246,
    69, 33, 207, 175, 210, 57, 138, 60, 217, 160,
]);

/// 8xBBKGGihbs318FzGLR2pS7YdMnuL3uuF7T92YtF3wu7
pub const WNS_MARKETPLACE_PROGRAM: Address = Address::new([
    118, 36, 66, 215, 235, 120, 49, 75, 177, 116, 109, 28, 238, 168, 106, 125, 180, 100, 184, 36,
    203, 139, 233, 183, 170, 186, 167, 202, 163, 18, 107, 182,
]);

/// wns1gDLt8fgLcGhWi5MqAqgXpwEP1JftKE9eZnXS1HM
pub const WNS_PROGRAM: Address = Address::new([
    14, 9, 56, 103, 39, 71, 245, 151, 225, 11, 12, 66, 119, 20, 22, 254, 125, 49, 58, 181, 187,
    140, 169, 88, 174, 154, 34, 151, 209, 118, 77, 28,
]);

/// diste3nXmK7ddDTs1zb6uday6j4etCa9RChD8fJ1xay
pub const WNS_DISTRIBUTION_PROGRAM: Address = Address::new([
    9, 104, 66, 148, 82, 221, 22, 144, 27, 115, 58, 193, 53, 173, 221, 183, 255, 121, 233, 152,
    109, 170, 158, 38, 122, 4, 71, 236, 34, 107, 141, 254,
]);

/// DsaxZA54w7N9z8jxobtzy3rhQQmXjngjvJNvX1HubtkJ
pub const EDITIONS_PROGRAM: Address = Address::new([
    191, 65, 174, 8, 111, 215, 144, 202, 58, 216, 141, 1, 1, 144, 86, 21, 248, 174, 203, 99, 194,
    253, 97, 112, 44, 143, 238, 89, 134, 13, 32, 139,
]);

/// bozxrH9R1qvQh7P1gid3X8DRXK1UmVckit6XxGAUN72
pub const EDITIONS_CONTROLS_PROGRAM: Address = Address::new([
    8, 234, 227, 205, 140, 202, 52, 29, 127, 129, 61, 202, 32, 64, 142, 0, 98, 224, 31, 73, 83,
    170, 112, 220, 14, 145, 4, 181, 96, 143, 131, 57,
]);

/// 5hx15GaPPqsYA61v6QpcGPpo125v7rfvEfZQ4dJErG5V
pub const GROUP_EXTENSION_PROGRAM: Address = Address::new([
    69, 236, 43, 146, 81, 210, 142, 125, 210, 169, 90, 195, 109, 70, 50, 118, 60, 227, 8, 5, 9, 14,
    102, 39, 93, 186, 153, 17, 139, 142, 200, 184,
]);

/// So11111111111111111111111111111111111111112
pub const WRAPPED_SOL_MINT: Address = Address::new([
    6, 155, 136, 87, 254, 171, 129, 132, 251, 104, 127, 99, 70, 24, 192, 53, 218, 196, 57, 220, 26,
    235, 59, 85, 152, 160, 240, 0, 0, 0, 0, 1,
]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramIds {
    pub system_program: Address,
    pub token_program: Address,
    pub token_2022_program: Address,
    pub associated_token_program: Address,
    pub sysvar_instructions: Address,
    pub metadata_program: Address,
    pub marketplace: Address,
    pub wns_marketplace: Address,
    pub wns: Address,
    pub wns_distribution: Address,
    pub editions: Address,
    pub editions_controls: Address,
    pub group_extension: Address,
    pub wrapped_sol_mint: Address,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            system_program: SYSTEM_PROGRAM,
            token_program: TOKEN_PROGRAM,
            token_2022_program: TOKEN_2022_PROGRAM,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
            sysvar_instructions: SYSVAR_INSTRUCTIONS,
            metadata_program: METADATA_PROGRAM,
            marketplace: MARKETPLACE_PROGRAM,
            wns_marketplace: WNS_MARKETPLACE_PROGRAM,
            wns: WNS_PROGRAM,
            wns_distribution: WNS_DISTRIBUTION_PROGRAM,
            editions: EDITIONS_PROGRAM,
            editions_controls: EDITIONS_CONTROLS_PROGRAM,
            group_extension: GROUP_EXTENSION_PROGRAM,
            wrapped_sol_mint: WRAPPED_SOL_MINT,
        }
    }
}

impl ProgramIds {
    pub fn from_json_str(json: &str) -> ClientResult<Self> {
        serde_json::from_str(json).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> ClientResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b58(a: Address) -> String {
        a.to_string()
    }

    #[test]
    fn constants_match_registry() {
        assert_eq!(b58(SYSTEM_PROGRAM), "11111111111111111111111111111111");
        assert_eq!(b58(TOKEN_PROGRAM), "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
        assert_eq!(b58(TOKEN_2022_PROGRAM), "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
        assert_eq!(b58(ASSOCIATED_TOKEN_PROGRAM), "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
        assert_eq!(b58(SYSVAR_INSTRUCTIONS), "Sysvar1nstructions1111111111111111111111111");
        assert_eq!(b58(METADATA_PROGRAM), "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
        assert_eq!(b58(MARKETPLACE_PROGRAM), "61AUdCJkaaw2b3Byhp9gLyK6rvt8DTsUoGTKwnvEZMaf");
        assert_eq!(b58(WNS_MARKETPLACE_PROGRAM), "8xBBKGGihbs318FzGLR2pS7YdMnuL3uuF7T92YtF3wu7");
        assert_eq!(b58(WNS_PROGRAM), "wns1gDLt8fgLcGhWi5MqAqgXpwEP1JftKE9eZnXS1HM");
        assert_eq!(b58(WNS_DISTRIBUTION_PROGRAM), "diste3nXmK7ddDTs1zb6uday6j4etCa9RChD8fJ1xay");
        assert_eq!(b58(EDITIONS_PROGRAM), "DsaxZA54w7N9z8jxobtzy3rhQQmXjngjvJNvX1HubtkJ");
        assert_eq!(b58(EDITIONS_CONTROLS_PROGRAM), "bozxrH9R1qvQh7P1gid3X8DRXK1UmVckit6XxGAUN72");
        assert_eq!(b58(GROUP_EXTENSION_PROGRAM), "5hx15GaPPqsYA61v6QpcGPpo125v7rfvEfZQ4dJErG5V");
        assert_eq!(b58(WRAPPED_SOL_MINT), "So11111111111111111111111111111111111111112");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let ids = ProgramIds::from_json_str(
            r#"{"marketplace":"B6ckscvApoZpBZ7cKGYa4VK4vTc1x9XjPk6osKfK7rSZ"}"#,
        )
        .unwrap();
        assert_eq!(b58(ids.marketplace), "B6ckscvApoZpBZ7cKGYa4VK4vTc1x9XjPk6osKfK7rSZ");
        assert_eq!(ids.token_program, TOKEN_PROGRAM);
    }

    #[test]
    fn bad_address_is_config_error() {
        let err = ProgramIds::from_json_str(r#"{"wns":"not-an-address"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
