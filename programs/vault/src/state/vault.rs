//! Vault Record State
//!
//! One Vault record exists per owner. It is stored at the program-derived
//! custody address and tracks the tokens the program holds on that owner's
//! behalf.
//!
//! # Relationship to the Custody Token Account
//!
//! The record does not hold tokens itself. The actual units sit in an SPL
//! token account owned by the derived vault address. The record's `balance`
//! field mirrors that account's amount; after every successful instruction
//! the two must agree.
//!
//! # Size: 42 bytes

use crate::error::VaultError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// VAULT STATE ENUM
// =============================================================================

/// The lifecycle state of a vault record.
///
/// A freshly allocated account is all zeros, which reads as Uninitialized.
/// Initialize moves the record to Initialized; there is no further
/// transition (the record is never closed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultState {
    /// Record storage exists but Initialize has not run.
    #[default]
    Uninitialized,

    /// Record is live; Deposit and Withdraw may operate on it.
    Initialized,
}

impl VaultState {
    /// Convert a u8 byte to VaultState.
    ///
    /// # Values
    ///
    /// - 0 = Uninitialized
    /// - 1 = Initialized
    /// - Other = Error
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(VaultState::Uninitialized),
            1 => Ok(VaultState::Initialized),
            _ => Err(VaultError::InvalidInstruction.into()),
        }
    }

    /// Convert VaultState to a u8 byte.
    pub fn to_u8(self) -> u8 {
        match self {
            VaultState::Uninitialized => 0,
            VaultState::Initialized => 1,
        }
    }
}

// =============================================================================
// VAULT RECORD STRUCTURE
// =============================================================================

/// Per-owner custody record.
///
/// # Memory Layout (42 bytes total)
///
/// ```text
/// ┌────────┬──────┬─────────┬────────────────────┐
/// │ Offset │ Size │ Field   │ Type               │
/// ├────────┼──────┼─────────┼────────────────────┤
/// │ 0      │ 1    │ state   │ VaultState (u8)    │
/// │ 1      │ 32   │ owner   │ Pubkey             │
/// │ 33     │ 1    │ bump    │ u8                 │
/// │ 34     │ 8    │ balance │ u64                │
/// ├────────┼──────┼─────────┼────────────────────┤
/// │ Total  │ 42   │         │                    │
/// └────────┴──────┴─────────┴────────────────────┘
/// ```
///
/// The leading state byte doubles as the record discriminator: the program
/// never stores any other record type, and an all-zero account is
/// unambiguously an uninitialized vault.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vault {
    /// Lifecycle state of this record.
    pub state: VaultState,

    /// The wallet that controls this vault.
    ///
    /// Set once by Initialize from the initializing signer and never
    /// mutated. Every Deposit and Withdraw requires this key's signature.
    pub owner: Pubkey,

    /// Bump seed that completes the custody address derivation.
    ///
    /// Together with the fixed seed and `owner`, this byte deterministically
    /// reproduces the vault's address. Withdraw uses it to rebuild the
    /// signer seeds for the transfer out of custody, so it is stored rather
    /// than re-searched on every call.
    pub bump: u8,

    /// Tracked custody balance, in base token units.
    ///
    /// Invariant: equals the custody token account's amount after every
    /// successful instruction.
    ///
    /// - Increases on: Deposit
    /// - Decreases on: Withdraw
    pub balance: u64,
}

// =============================================================================
// ASSOCIATED CONSTANTS AND METHODS
// =============================================================================

impl Vault {
    /// Size of Vault when serialized.
    ///
    /// Calculation:
    /// - state: 1 byte
    /// - owner: 32 bytes
    /// - bump: 1 byte
    /// - balance: 8 bytes
    /// - Total: 1 + 32 + 1 + 8 = 42 bytes
    pub const LEN: usize = 42;

    /// Check if the record is initialized.
    ///
    /// Uninitialized records must not be deposited to or withdrawn from.
    pub fn is_initialized(&self) -> bool {
        self.state != VaultState::Uninitialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Vault {
    const LEN: usize = 42;

    /// Deserialize a Vault from bytes.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Vault::LEN];

        // Split into fields
        // Sizes: 1 + 32 + 1 + 8 = 42
        #[allow(clippy::ptr_offset_with_cast)]
        let (state, owner, bump, balance) = array_refs![input, 1, 32, 1, 8];

        Ok(Vault {
            state: VaultState::from_u8(state[0])?,
            owner: Pubkey::new_from_array(*owner),
            bump: bump[0],
            balance: u64::from_le_bytes(*balance),
        })
    }

    /// Serialize a Vault to bytes.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Vault::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (state_dst, owner_dst, bump_dst, balance_dst) =
            mut_array_refs![output, 1, 32, 1, 8];

        state_dst[0] = self.state.to_u8();
        owner_dst.copy_from_slice(self.owner.as_ref());
        bump_dst[0] = self.bump;
        *balance_dst = self.balance.to_le_bytes();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
