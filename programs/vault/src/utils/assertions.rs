//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//! These functions make security checks consistent and readable.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(vault_info, program_id)?;
//!     assert_signer(owner_info)?;
//!     assert_writable(vault_info)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::VaultError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Why This Matters
///
/// An attacker could create an account with record-shaped data owned by
/// their own program. Without this check, we might accept it as a real
/// vault record.
///
/// # Arguments
///
/// * `account` - The account to check
/// * `owner` - Expected owner (usually our program_id)
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(VaultError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Why This Matters
///
/// If we don't check that the owner signed, anyone could pretend to be
/// the owner and drain the vault.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// # Why This Matters
///
/// If an account isn't marked writable in the transaction,
/// the runtime will reject any modifications to it.
/// This check gives a clearer error earlier.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Why This Matters
///
/// If the account is the wrong size, unpacking will fail or
/// read garbage data. This gives a clearer error message.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(VaultError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns a clear error on overflow.
///
/// # Why This Matters
///
/// Without checked arithmetic, overflow wraps around:
/// - u64::MAX + 1 = 0
/// - The tracked balance would silently lose custody of real tokens
///
/// # Returns
///
/// * `Ok(a + b)` - If no overflow
/// * `Err(Overflow)` - If overflow would occur
pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or_else(|| VaultError::Overflow.into())
}

/// Checked subtraction that returns a clear error on underflow.
///
/// # Why This Matters
///
/// Without checked arithmetic, underflow wraps around:
/// - 0 - 1 = u64::MAX
/// - A withdrawal could leave the balance claiming more than custody holds
///
/// # Returns
///
/// * `Ok(a - b)` - If no underflow
/// * `Err(InsufficientVaultFunds)` - If underflow would occur
pub fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or_else(|| VaultError::InsufficientVaultFunds.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
