//! Every instruction the CLI can build or parse, by program and name.

use rarible_svm_client::editions::{
    self, AddMetadataAccounts, AddRoyaltiesAccounts, InitialiseAccounts, MintAccounts, RemoveMetadataAccounts,
};
use rarible_svm_client::editions_controls::{
    self, AddPhaseAccounts, InitialiseEditionsControlsAccounts, ModifyPlatformFeeAccounts,
    ModifyPlatformSecondaryAdminAccounts, MintWithControlsAccounts,
};
use rarible_svm_client::marketplace::{
    BidAccounts, CancelBidAccounts, CancelListingAccounts, FillOrderAccounts, InitMarketAccounts, ListAccounts,
    VerifyMintAccounts,
};
use rarible_svm_client::program::{Program, ProgramInstruction};
use rarible_svm_client::wns_marketplace::BuyAccounts;
use rarible_svm_core::codec::InstructionArgs;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    InitMarket,
    VerifyMint,
    Bid,
    List,
    FillOrder,
    CancelBid,
    CancelListing,
    Buy,
    Initialise,
    Mint,
    AddRoyalties,
    ModifyRoyalties,
    AddMetadata,
    RemoveMetadata,
    InitialiseEditionsControls,
    AddPhase,
    MintWithControls,
    ControlsModifyRoyalties,
    ModifyPlatformFee,
    ModifyPlatformSecondaryAdmin,
}

fn tag<P: ProgramInstruction>() -> [u8; 8] {
    <P::Args as InstructionArgs>::DISCRIMINATOR
}

impl InstructionKind {
    pub const ALL: [InstructionKind; 20] = [
        InstructionKind::InitMarket,
        InstructionKind::VerifyMint,
        InstructionKind::Bid,
        InstructionKind::List,
        InstructionKind::FillOrder,
        InstructionKind::CancelBid,
        InstructionKind::CancelListing,
        InstructionKind::Buy,
        InstructionKind::Initialise,
        InstructionKind::Mint,
        InstructionKind::AddRoyalties,
        InstructionKind::ModifyRoyalties,
        InstructionKind::AddMetadata,
        InstructionKind::RemoveMetadata,
        InstructionKind::InitialiseEditionsControls,
        InstructionKind::AddPhase,
        InstructionKind::MintWithControls,
        InstructionKind::ControlsModifyRoyalties,
        InstructionKind::ModifyPlatformFee,
        InstructionKind::ModifyPlatformSecondaryAdmin,
    ];

    pub fn program(&self) -> Program {
        use InstructionKind::*;
        match self {
            InitMarket | VerifyMint | Bid | List | FillOrder | CancelBid | CancelListing => Program::Marketplace,
            Buy => Program::WnsMarketplace,
            Initialise | Mint | AddRoyalties | ModifyRoyalties | AddMetadata | RemoveMetadata => Program::Editions,
            InitialiseEditionsControls
            | AddPhase
            | MintWithControls
            | ControlsModifyRoyalties
            | ModifyPlatformFee
            | ModifyPlatformSecondaryAdmin => Program::EditionsControls,
        }
    }

    /// Kebab-case name, unique within the program.
    pub fn name(&self) -> &'static str {
        use InstructionKind::*;
        match self {
            InitMarket => "init-market",
            VerifyMint => "verify-mint",
            Bid => "bid",
            List => "list",
            FillOrder => "fill-order",
            CancelBid => "cancel-bid",
            CancelListing => "cancel-listing",
            Buy => "buy",
            Initialise => "initialise",
            Mint => "mint",
            AddRoyalties => "add-royalties",
            ModifyRoyalties | ControlsModifyRoyalties => "modify-royalties",
            AddMetadata => "add-metadata",
            RemoveMetadata => "remove-metadata",
            InitialiseEditionsControls => "initialise-editions-controls",
            AddPhase => "add-phase",
            MintWithControls => "mint-with-controls",
            ModifyPlatformFee => "modify-platform-fee",
            ModifyPlatformSecondaryAdmin => "modify-platform-secondary-admin",
        }
    }

    pub fn discriminator(&self) -> [u8; 8] {
        use InstructionKind::*;
        match self {
            InitMarket => tag::<InitMarketAccounts>(),
            VerifyMint => tag::<VerifyMintAccounts>(),
            Bid => tag::<BidAccounts>(),
            List => tag::<ListAccounts>(),
            FillOrder => tag::<FillOrderAccounts>(),
            CancelBid => tag::<CancelBidAccounts>(),
            CancelListing => tag::<CancelListingAccounts>(),
            Buy => tag::<BuyAccounts>(),
            Initialise => tag::<InitialiseAccounts>(),
            Mint => tag::<MintAccounts>(),
            AddRoyalties => tag::<AddRoyaltiesAccounts>(),
            ModifyRoyalties => tag::<editions::ModifyRoyaltiesAccounts>(),
            AddMetadata => tag::<AddMetadataAccounts>(),
            RemoveMetadata => tag::<RemoveMetadataAccounts>(),
            InitialiseEditionsControls => tag::<InitialiseEditionsControlsAccounts>(),
            AddPhase => tag::<AddPhaseAccounts>(),
            MintWithControls => tag::<MintWithControlsAccounts>(),
            ControlsModifyRoyalties => tag::<editions_controls::ModifyRoyaltiesAccounts>(),
            ModifyPlatformFee => tag::<ModifyPlatformFeeAccounts>(),
            ModifyPlatformSecondaryAdmin => tag::<ModifyPlatformSecondaryAdminAccounts>(),
        }
    }

    pub fn find(program: Program, name: &str) -> CliResult<InstructionKind> {
        Self::ALL
            .into_iter()
            .find(|k| k.program() == program && k.name() == name)
            .ok_or_else(|| CliError::unknown("instruction", format!("{} {}", program, name)))
    }

    pub fn from_discriminator(program: Program, discriminator: [u8; 8]) -> Option<InstructionKind> {
        Self::ALL
            .into_iter()
            .find(|k| k.program() == program && k.discriminator() == discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique_per_program() {
        for a in InstructionKind::ALL {
            for b in InstructionKind::ALL {
                if a != b && a.program() == b.program() {
                    assert_ne!(a.name(), b.name());
                    assert_ne!(a.discriminator(), b.discriminator());
                }
            }
        }
    }

    #[test]
    fn test_modify_royalties_scoped_by_program() {
        let editions = InstructionKind::find(Program::Editions, "modify-royalties").unwrap();
        let controls = InstructionKind::find(Program::EditionsControls, "modify-royalties").unwrap();
        assert_eq!(editions, InstructionKind::ModifyRoyalties);
        assert_eq!(controls, InstructionKind::ControlsModifyRoyalties);
        assert!(InstructionKind::find(Program::Marketplace, "modify-royalties").is_err());
    }
}
