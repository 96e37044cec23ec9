//! Custom Error Types
//!
//! This module defines all errors that the vault program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-4 | Account validation errors |
//! | 5 | Authority errors |
//! | 6-10 | Operation errors |
//! | 11 | Instruction parsing |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::VaultError;
//!
//! fn some_check() -> ProgramResult {
//!     if !valid {
//!         return Err(VaultError::OwnerMismatch.into());
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the Vault program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VaultError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-4)
    // =========================================================================

    /// Error 0: Account is not owned by the expected program.
    ///
    /// Vault records must be owned by this program and token accounts by
    /// the SPL Token program. This prevents attackers from passing
    /// look-alike accounts with fabricated data.
    #[error("Account not owned by expected program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    ///
    /// The vault record must be exactly 42 bytes.
    /// Wrong size indicates corruption or attack.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Supplied vault address or bump does not match the derivation.
    ///
    /// The handler re-derives the canonical custody address from
    /// (seed, owner, program id) and requires both the address and the
    /// bump to match what the caller supplied.
    ///
    /// # Example
    /// An attacker initializes a vault at an address derived with a
    /// non-canonical bump, then presents it as the victim's vault.
    /// The canonical re-derivation rejects it here.
    #[error("Vault address does not match derivation")]
    InvalidDerivation,

    /// Error 3: Vault record is already initialized.
    ///
    /// Initialize is strictly exactly-once per owner.
    /// Callers that want "create if missing" semantics must catch this
    /// code themselves.
    #[error("Vault already initialized")]
    AlreadyInitialized,

    /// Error 4: Vault record is not initialized.
    ///
    /// Deposit and Withdraw require a record created by Initialize.
    /// A freshly allocated (all-zero) record reads as uninitialized.
    #[error("Vault not initialized")]
    UninitializedVault,

    // =========================================================================
    // AUTHORITY ERRORS (5)
    // =========================================================================

    /// Error 5: Signer is not the recorded vault owner.
    ///
    /// Only the owner set at Initialize may move custodied funds.
    #[error("Signer is not the vault owner")]
    OwnerMismatch,

    // =========================================================================
    // OPERATION ERRORS (6-10)
    // =========================================================================

    /// Error 6: Withdraw amount exceeds the tracked vault balance.
    ///
    /// Checked before the token transfer is attempted, so a failed
    /// withdrawal never reaches the token program.
    #[error("Insufficient vault balance")]
    InsufficientVaultFunds,

    /// Error 7: Arithmetic overflow on the tracked balance.
    ///
    /// Deposits that would push the counter past u64::MAX are rejected.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 8: Amount must be nonzero.
    ///
    /// Zero-amount deposits and withdrawals are rejected outright
    /// rather than passed to the token program as no-ops.
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    /// Error 9: Token account owner does not match the expected party.
    ///
    /// The user token account must belong to the signer, and the
    /// custody token account must belong to the derived vault address.
    #[error("Token account does not belong to expected owner")]
    InvalidTokenAccountOwner,

    /// Error 10: The supplied token program is not the SPL Token program.
    ///
    /// Transfers are only ever invoked against the canonical token
    /// program.
    #[error("Invalid token program")]
    InvalidTokenProgram,

    // =========================================================================
    // INSTRUCTION PARSING (11)
    // =========================================================================

    /// Error 11: Invalid instruction data.
    ///
    /// Could not parse the instruction data.
    /// Wrong format, missing bytes, invalid tag.
    #[error("Invalid instruction")]
    InvalidInstruction,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert VaultError to ProgramError.
///
/// This implementation allows using the `?` operator with our errors.
///
/// # Error Codes
///
/// The error code is simply the enum variant's position (0-indexed).
/// InvalidAccountOwner = 0, InvalidAccountDataLength = 1, etc.
impl From<VaultError> for ProgramError {
    fn from(e: VaultError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY CUSTOM ERRORS?
==================

Solana provides generic ProgramError variants like InvalidArgument and
InsufficientFunds, but these are vague. Custom errors give each failure
mode of THIS program a stable numeric code:

1. On-chain: Err(VaultError::OwnerMismatch.into()) -> Custom(5)
2. In logs: "Program failed with error: Custom(5)"
3. Client side: match on code 5 -> show "not the vault owner"

ADAPTER ERRORS
==============

One class of failure deliberately has NO variant here: failures inside
the SPL Token program during a transfer CPI (for example, the user token
account holding fewer tokens than the deposit amount). Those surface as
the token program's own error through the ? operator. Wrapping them would
lose the original code; clients that care can match on the failing inner
instruction instead.

ERROR CODE STABILITY
====================

CRITICAL: Never reorder variants after deployment!

Safe changes:
- Add new variants at the end
- Change error messages (string only)

Unsafe changes:
- Reorder, remove, or insert variants in the middle
*/
