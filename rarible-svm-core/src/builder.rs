//! Instruction assembly with default-account resolution.

use tracing::debug;

use crate::abi::{position, AccountDefault, AccountSpec, SeedSource};
use crate::address::Address;
use crate::codec::InstructionArgs;
use crate::derive::find_program_address;
use crate::error::{CoreError, CoreResult};
use crate::instruction::{AccountMeta, Instruction};

enum Slot {
    Pending,
    Resolved(Address),
    /// Optional account left out; the program id goes on the wire.
    Omitted,
}

/// Resolve every account in `specs` to a concrete address.
///
/// Supplied addresses win. Otherwise constants and omitted optionals
/// resolve immediately, and PDAs resolve once every account they seed
/// from has resolved. Passes repeat until nothing changes.
pub fn resolve_accounts(program_id: &Address, specs: &[AccountSpec]) -> CoreResult<Vec<AccountMeta>> {
    let mut slots = Vec::with_capacity(specs.len());
    for spec in specs {
        let slot = match (&spec.address, &spec.default) {
            (Some(address), _) => Slot::Resolved(*address),
            (None, Some(AccountDefault::Address { address })) => {
                debug!(account = %spec.name, %address, "defaulted to constant");
                Slot::Resolved(*address)
            }
            (None, Some(AccountDefault::Omitted)) => Slot::Omitted,
            (None, Some(AccountDefault::Pda { .. })) => Slot::Pending,
            (None, None) => {
                return Err(CoreError::MissingAccount {
                    account: spec.name.clone(),
                })
            }
        };
        slots.push(slot);
    }

    loop {
        let mut progressed = false;
        let mut blocked: Option<(usize, String)> = None;

        for (i, spec) in specs.iter().enumerate() {
            if !matches!(slots[i], Slot::Pending) {
                continue;
            }
            let Some(AccountDefault::Pda { program, seeds }) = &spec.default else {
                continue;
            };
            match collect_seeds(seeds, specs, &slots) {
                Ok(bytes) => {
                    let refs: Vec<&[u8]> = bytes.iter().map(Vec::as_slice).collect();
                    let (address, bump) = find_program_address(&refs, program)?;
                    debug!(account = %spec.name, %address, bump, "derived account");
                    slots[i] = Slot::Resolved(address);
                    progressed = true;
                }
                Err(waiting_on) => {
                    blocked.get_or_insert((i, waiting_on));
                }
            }
        }

        match blocked {
            None => break,
            Some((i, waiting_on)) if !progressed => {
                return Err(CoreError::UnresolvedDependency {
                    account: specs[i].name.clone(),
                    waiting_on,
                });
            }
            Some(_) => {}
        }
    }

    let mut metas = Vec::with_capacity(specs.len());
    for (spec, slot) in specs.iter().zip(slots) {
        let pubkey = match slot {
            Slot::Resolved(address) => address,
            Slot::Omitted => *program_id,
            Slot::Pending => {
                return Err(CoreError::UnresolvedDependency {
                    account: spec.name.clone(),
                    waiting_on: spec.name.clone(),
                })
            }
        };
        metas.push(AccountMeta {
            pubkey,
            is_signer: spec.signer,
            is_writable: spec.writable,
        });
    }
    Ok(metas)
}

/// Seed bytes for a PDA, or the name of the first account still missing.
fn collect_seeds(seeds: &[SeedSource], specs: &[AccountSpec], slots: &[Slot]) -> Result<Vec<Vec<u8>>, String> {
    seeds
        .iter()
        .map(|seed| match seed {
            SeedSource::Literal { bytes } => Ok(bytes.clone()),
            SeedSource::Account { name } => match position(specs, name).map(|j| &slots[j]) {
                Some(Slot::Resolved(address)) => Ok(address.to_bytes().to_vec()),
                _ => Err(name.clone()),
            },
        })
        .collect()
}

/// Build an instruction from a layout and an argument record.
pub fn build<A: InstructionArgs>(program_id: Address, specs: &[AccountSpec], args: &A) -> CoreResult<Instruction> {
    let accounts = resolve_accounts(&program_id, specs)?;
    let data = args.to_instruction_data()?;
    debug!(instruction = A::NAME, accounts = accounts.len(), data_len = data.len(), "built instruction");
    Ok(Instruction {
        program_id,
        accounts,
        data,
    })
}
