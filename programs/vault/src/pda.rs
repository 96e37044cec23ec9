//! Custody Address Derivation
//!
//! Every vault lives at a program-derived address (PDA) computed from a
//! fixed seed label and the owner's wallet key. A PDA is deliberately
//! OFF the ed25519 curve, so no private key for it can exist; the only
//! way to sign as the vault is for this program to present the seeds
//! that produced the address.
//!
//! # Derivation Inputs
//!
//! | Input | Value |
//! |-------|-------|
//! | seed label | `b"vault"` (compile-time constant) |
//! | owner | the controlling wallet's pubkey |
//! | program | this program's id |
//!
//! The runtime search tries bump candidates from 255 downward until the
//! resulting address falls off the curve. The first hit is the CANONICAL
//! bump; handlers accept no other.

use crate::error::VaultError;
use solana_program::{entrypoint::ProgramResult, pubkey::Pubkey};

// =============================================================================
// SEED CONSTANT
// =============================================================================

/// Fixed seed label for every vault derivation.
pub const VAULT_SEED: &[u8] = b"vault";

// =============================================================================
// DERIVATION
// =============================================================================

/// Compute the canonical custody address and bump for an owner.
///
/// Pure function of its inputs: the same (owner, program_id) pair always
/// yields the same (address, bump). Clients run the identical search
/// off-chain to know where a vault will live before it exists.
///
/// # Arguments
/// * `owner` - The controlling wallet
/// * `program_id` - This program's id
///
/// # Returns
/// * `(address, bump)` - The custody address and its canonical bump
///
/// # Panics
/// Aborts inside the SDK in the (practically unreachable) case that no
/// bump in 0..=255 produces an off-curve address.
pub fn find_vault_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], program_id)
}

/// Verify a caller-supplied vault address and bump against the derivation.
///
/// Re-runs the canonical search and requires BOTH the address and the bump
/// to match. Accepting any merely-valid bump would let two distinct
/// addresses claim to be the same owner's vault.
///
/// # Errors
///
/// Returns `InvalidDerivation` if either value differs from the canonical
/// result.
pub fn assert_vault_derivation(
    program_id: &Pubkey,
    owner: &Pubkey,
    vault_key: &Pubkey,
    bump: u8,
) -> ProgramResult {
    let (expected_key, expected_bump) = find_vault_address(owner, program_id);

    if vault_key != &expected_key || bump != expected_bump {
        return Err(VaultError::InvalidDerivation.into());
    }

    Ok(())
}

// =============================================================================
// SIGNER CAPABILITY
// =============================================================================

/// Per-call signing capability for the vault's derived address.
///
/// The program cannot hold a private key for the vault; instead it proves
/// control by presenting the derivation seeds to `invoke_signed`. This
/// type packages those seeds for exactly one call. It is constructed from
/// the record's stored fields inside the handler that needs it and dropped
/// when the call returns - never stored, never reused.
///
/// # Example
///
/// ```ignore
/// let authority = VaultAuthority::new(&vault.owner, vault.bump);
/// invoke_signed(&ix, &accounts, &[&authority.seeds()])?;
/// ```
pub struct VaultAuthority<'a> {
    owner: &'a Pubkey,
    bump: [u8; 1],
}

impl<'a> VaultAuthority<'a> {
    /// Build the capability from the record's owner and stored bump.
    pub fn new(owner: &'a Pubkey, bump: u8) -> Self {
        Self {
            owner,
            bump: [bump],
        }
    }

    /// The seed slices in derivation order, as `invoke_signed` expects.
    pub fn seeds(&self) -> [&[u8]; 3] {
        [VAULT_SEED, self.owner.as_ref(), &self.bump]
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Derivation is a pure function: repeated calls agree.
    #[test]
    fn test_derivation_deterministic() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let first = find_vault_address(&owner, &program_id);
        let second = find_vault_address(&owner, &program_id);

        assert_eq!(first, second);
    }

    /// Different owners derive different custody addresses.
    #[test]
    fn test_derivation_distinct_per_owner() {
        let program_id = Pubkey::new_unique();

        let (addr_a, _) = find_vault_address(&Pubkey::new_unique(), &program_id);
        let (addr_b, _) = find_vault_address(&Pubkey::new_unique(), &program_id);

        assert_ne!(addr_a, addr_b);
    }

    /// The canonical pair passes verification.
    #[test]
    fn test_assert_derivation_accepts_canonical() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let (vault_key, bump) = find_vault_address(&owner, &program_id);

        assert!(assert_vault_derivation(&program_id, &owner, &vault_key, bump).is_ok());
    }

    /// A substituted address fails verification.
    #[test]
    fn test_assert_derivation_rejects_wrong_address() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let (_, bump) = find_vault_address(&owner, &program_id);

        let wrong_key = Pubkey::new_unique();

        assert!(assert_vault_derivation(&program_id, &owner, &wrong_key, bump).is_err());
    }

    /// A non-canonical bump fails verification even with the right address.
    #[test]
    fn test_assert_derivation_rejects_wrong_bump() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let (vault_key, bump) = find_vault_address(&owner, &program_id);

        let result =
            assert_vault_derivation(&program_id, &owner, &vault_key, bump.wrapping_sub(1));

        assert!(result.is_err());
    }

    /// The capability's seeds reproduce the derived address.
    #[test]
    fn test_authority_seeds_reproduce_address() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let (vault_key, bump) = find_vault_address(&owner, &program_id);

        let authority = VaultAuthority::new(&owner, bump);
        let rebuilt =
            Pubkey::create_program_address(&authority.seeds(), &program_id).unwrap();

        assert_eq!(rebuilt, vault_key);
    }
}
