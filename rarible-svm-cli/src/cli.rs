//! Command-line surface. Results go to stdout as JSON, logs to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rarible_svm_client::config::ProgramIds;
use rarible_svm_client::editions_controls::MintTarget;
use rarible_svm_client::error::lookup_error;
use rarible_svm_client::marketplace::WnsAccountParams;
use rarible_svm_client::merkle::{read_csv, AllowList};
use rarible_svm_client::program::Program;
use rarible_svm_core::address::Address;
use rarible_svm_core::codec::{account_discriminator, instruction_discriminator};
use rarible_svm_core::fetch::AccountFetcher;
use rarible_svm_core::instruction::Instruction;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::fetch::DirFetcher;
use crate::hex::{decode_contents, hex_encode, Encoding};
use crate::inspect::{decode_account, parse_instruction, AccountKind};
use crate::pda::{derive, PdaKind};
use crate::registry::InstructionKind;
use crate::tx::{build_instruction, parse_account_override, parse_mint_target, BuildRequest};

#[derive(Parser, Debug)]
#[command(name = "rarible-svm", author, version, about, long_about = None)]
pub struct Cli {
    /// Program id overrides (JSON); unset fields keep mainnet values
    #[arg(long, global = true, env = "RARIBLE_SVM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of `<address>.bin` account dumps
    #[arg(long, global = true, env = "RARIBLE_SVM_ACCOUNTS_DIR")]
    pub accounts_dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive a program address and its bump
    Pda {
        #[command(subcommand)]
        kind: PdaKind,
    },
    /// Build an instruction as JSON
    Build(BuildArgs),
    /// Decode an account dump
    Decode(DecodeArgs),
    /// Name the accounts and decode the args of an instruction JSON file
    Parse { file: PathBuf },
    /// Anchor discriminator of an instruction (or account) name
    Discriminator {
        name: String,
        #[arg(long)]
        account: bool,
    },
    /// Describe a custom program error code; colliding codes list every candidate
    Error { program: Program, code: u32 },
    /// Merkle root and per-claimant proofs for a phase allow list
    Merkle(MerkleArgs),
    /// List buildable instructions
    Instructions,
    /// Print the effective program ids
    Config,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    pub program: Program,

    /// Kebab-case instruction name, e.g. `fill-order`
    pub instruction: String,

    /// Instruction arguments as JSON
    #[arg(long, conflicts_with = "args_file")]
    pub args: Option<String>,

    #[arg(long)]
    pub args_file: Option<PathBuf>,

    /// Account by layout name, `name=ADDRESS`; repeatable
    #[arg(long = "account", value_parser = parse_account_override)]
    pub accounts: Vec<(String, Address)>,

    /// `MINT:MEMBER` for mint-with-controls; repeatable, batched three per transaction
    #[arg(long = "mint", value_parser = parse_mint_target)]
    pub mints: Vec<MintTarget>,

    /// Append WNS royalty accounts for this group mint
    #[arg(long)]
    pub wns_group_mint: Option<Address>,

    /// Defaults to wrapped SOL
    #[arg(long, requires = "wns_group_mint")]
    pub wns_payment_mint: Option<Address>,

    /// Defaults to the Token program
    #[arg(long, requires = "wns_group_mint")]
    pub wns_payment_token_program: Option<Address>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Record type; detected from the discriminator when omitted
    #[arg(long, value_enum)]
    pub kind: Option<AccountKind>,

    /// Dump file, or an address looked up in --accounts-dir
    pub source: String,

    /// File encoding: raw, hex or base58
    #[arg(long, default_value = "raw")]
    pub encoding: Encoding,
}

#[derive(Args, Debug)]
pub struct MerkleArgs {
    /// CSV with an `address,price,max_claims` header
    pub csv: PathBuf,

    /// Print only this claimant's entry and proof
    #[arg(long)]
    pub claimant: Option<Address>,

    /// Also write the full allow list JSON here
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl MerkleArgs {
    fn run(&self) -> CliResult<Value> {
        let file = fs::File::open(&self.csv).map_err(|e| CliError::io(&self.csv, e))?;
        let list = AllowList::new(&read_csv(file)?)?;
        debug!(claims = list.claims.len(), "built allow list");
        if let Some(path) = &self.out {
            fs::write(path, serde_json::to_string_pretty(&list)?).map_err(|e| CliError::io(path, e))?;
        }
        match &self.claimant {
            Some(claimant) => {
                let claim = list
                    .claim_for(claimant)
                    .ok_or_else(|| CliError::unknown("claimant", claimant.to_string()))?;
                Ok(json!({ "merkle_root": list.merkle_root, "claim": claim }))
            }
            None => Ok(serde_json::to_value(&list)?),
        }
    }
}

pub fn load_ids(config: Option<&Path>) -> CliResult<ProgramIds> {
    match config {
        Some(path) => {
            debug!(path = %path.display(), "loading program ids");
            Ok(ProgramIds::from_json_file(path)?)
        }
        None => Ok(ProgramIds::default()),
    }
}

fn read_file(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|e| CliError::io(path, e))
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl BuildArgs {
    fn request(&self, ids: &ProgramIds) -> CliResult<BuildRequest> {
        let kind = InstructionKind::find(self.program, &self.instruction)?;
        let args = match (&self.args, &self.args_file) {
            (Some(json), _) => serde_json::from_str(json)?,
            (None, Some(path)) => serde_json::from_slice(&read_file(path)?)?,
            (None, None) => Value::Object(Default::default()),
        };
        let wns = self.wns_group_mint.map(|group_mint| WnsAccountParams {
            group_mint,
            payment_mint: self.wns_payment_mint.unwrap_or(ids.wrapped_sol_mint),
            payment_token_program: self.wns_payment_token_program.unwrap_or(ids.token_program),
        });
        Ok(BuildRequest {
            kind,
            args,
            accounts: self.accounts.clone(),
            wns,
            mints: self.mints.clone(),
        })
    }
}

impl DecodeArgs {
    fn data(&self, fetcher: Option<&DirFetcher>) -> CliResult<Vec<u8>> {
        let path = Path::new(&self.source);
        if path.exists() {
            return decode_contents(&read_file(path)?, self.encoding);
        }
        let address: Address = self
            .source
            .parse()
            .map_err(|e| CliError::InvalidInput(format!("'{}' is neither a file nor an address: {}", self.source, e)))?;
        let fetcher = fetcher
            .ok_or_else(|| CliError::InvalidInput("Decoding by address needs --accounts-dir".into()))?;
        Ok(fetcher.fetch(&address)?)
    }
}

pub fn run(cli: Cli) -> CliResult<()> {
    let ids = load_ids(cli.config.as_deref())?;
    let fetcher = cli.accounts_dir.as_ref().map(DirFetcher::new);

    match &cli.command {
        Command::Pda { kind } => print_json(&derive(&ids, kind)?),
        Command::Build(args) => {
            let req = args.request(&ids)?;
            let output = build_instruction(&ids, fetcher.as_ref().map(|f| f as &dyn AccountFetcher), &req)?;
            print_json(&output)
        }
        Command::Decode(args) => {
            let data = args.data(fetcher.as_ref())?;
            let (kind, value) = decode_account(args.kind, &data)?;
            debug!(?kind, len = data.len(), "decoded account");
            print_json(&value)
        }
        Command::Parse { file } => {
            let ix: Instruction = serde_json::from_slice(&read_file(file)?)?;
            print_json(&parse_instruction(&ids, &ix)?)
        }
        Command::Discriminator { name, account } => {
            let tag = if *account {
                account_discriminator(name)
            } else {
                instruction_discriminator(name)
            };
            print_json(&json!({ "name": name, "hex": hex_encode(&tag), "bytes": tag }))
        }
        Command::Error { program, code } => {
            let found = lookup_error(program.errors(), *code);
            if found.is_empty() {
                return Err(CliError::unknown("error code", format!("{} {}", program, code)));
            }
            let entries: Vec<Value> = found
                .iter()
                .map(|e| json!({ "code": e.code, "name": e.name, "message": e.message }))
                .collect();
            print_json(&entries)
        }
        Command::Merkle(args) => print_json(&args.run()?),
        Command::Instructions => {
            let list: Vec<Value> = InstructionKind::ALL
                .iter()
                .map(|k| {
                    json!({
                        "program": k.program().name(),
                        "instruction": k.name(),
                        "discriminator": hex_encode(&k.discriminator()),
                    })
                })
                .collect();
            print_json(&list)
        }
        Command::Config => {
            println!("{}", ids.to_json_pretty()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "rarible-svm",
            "build",
            "marketplace",
            "verify-mint",
            "--account",
            "nft_mint=11111111111111111111111111111111",
            "--account",
            "signer=11111111111111111111111111111111",
        ])
        .unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.program, Program::Marketplace);
                assert_eq!(args.accounts.len(), 2);
                assert_eq!(args.accounts[0].0, "nft_mint");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_merkle_for_one_claimant() {
        let dir = std::env::temp_dir().join(format!("rarible-svm-merkle-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let csv = dir.join("phase.csv");
        let claimant = Address::new([2; 32]);
        fs::write(
            &csv,
            format!("address,price,max_claims\n{},0,1\n{},5,3\n", claimant, Address::new([3; 32])),
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "rarible-svm".to_string(),
            "merkle".to_string(),
            csv.display().to_string(),
            "--claimant".to_string(),
            claimant.to_string(),
        ])
        .unwrap();
        let Command::Merkle(args) = cli.command else {
            panic!("expected merkle");
        };
        let value = args.run().unwrap();
        assert_eq!(value["claim"]["claimant"], json!(claimant.to_string()));
        assert_eq!(value["claim"]["max_claims"], json!(1));
        assert_eq!(value["claim"]["proof"].as_array().unwrap().len(), 1);
        assert_eq!(value["merkle_root"].as_array().unwrap().len(), 32);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_wns_payment_mint_requires_group_mint() {
        let parsed = Cli::try_parse_from([
            "rarible-svm",
            "build",
            "marketplace",
            "list",
            "--wns-payment-mint",
            "11111111111111111111111111111111",
        ]);
        assert!(parsed.is_err());
    }
}
