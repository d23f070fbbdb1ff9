//! Program-derived addresses.
//!
//! A derived address is `sha256(seeds ‖ bump ‖ program_id ‖ "ProgramDerivedAddress")`
//! for the highest bump whose hash is not a valid ed25519 point.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

use crate::address::{Address, MAX_SEEDS, MAX_SEED_LEN};
use crate::error::{CoreError, CoreResult};

const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Whether the bytes decompress to a point on the ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

fn check_seeds(seeds: &[&[u8]], max_count: usize) -> CoreResult<()> {
    if seeds.len() > max_count {
        return Err(CoreError::TooManySeeds { count: seeds.len() });
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(CoreError::SeedsTooLong {
                index,
                len: seed.len(),
            });
        }
    }
    Ok(())
}

fn hash_seeds(seeds: &[&[u8]], bump: Option<u8>, program_id: &Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    if let Some(bump) = bump {
        hasher.update([bump]);
    }
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);
    hasher.finalize().into()
}

/// Hash seeds that already include their bump.
///
/// Fails with `NoValidAddressFound` when the result lands on the curve.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Address) -> CoreResult<Address> {
    check_seeds(seeds, MAX_SEEDS)?;
    let hash = hash_seeds(seeds, None, program_id);
    if is_on_curve(&hash) {
        return Err(CoreError::NoValidAddressFound);
    }
    Ok(Address::new(hash))
}

/// Search bumps from 255 down to 0 and return the first off-curve address.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Address) -> CoreResult<(Address, u8)> {
    check_seeds(seeds, MAX_SEEDS - 1)?;
    for bump in (0..=u8::MAX).rev() {
        let hash = hash_seeds(seeds, Some(bump), program_id);
        if !is_on_curve(&hash) {
            return Ok((Address::new(hash), bump));
        }
    }
    Err(CoreError::NoValidAddressFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ed25519_basepoint_is_on_curve() {
        let mut base = [0x66u8; 32];
        base[0] = 0x58;
        assert!(is_on_curve(&base));
    }

    #[test]
    fn bump_is_part_of_hash_input() {
        let program = Address::new([9; 32]);
        let (addr, bump) = find_program_address(&[b"tag"], &program).unwrap();
        let again = create_program_address(&[b"tag", &[bump]], &program).unwrap();
        assert_eq!(addr, again);
    }
}
