//! Account State Structures
//!
//! This module defines the data structures stored in Solana accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Vault | 42 bytes | Per-owner custody record |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! # The Pack Trait
//!
//! All state types implement the `Pack` trait for serialization:
//!
//! ```ignore
//! let vault = Vault::unpack(&account.data.borrow())?;   // Read
//! vault.pack(&mut account.data.borrow_mut())?;          // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod vault;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use vault::{Vault, VaultState};

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// All state structures must implement this trait.
/// It provides a consistent interface for serialization.
///
/// # Why Not Borsh?
///
/// We use manual serialization because:
/// 1. The record layout is part of the program's public interface
/// 2. Fixed sizes are enforced at compile time
/// 3. No serialization overhead
/// 4. Full control over the format
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    ///
    /// This is used to:
    /// - Validate account data length
    /// - Allocate accounts with correct size
    /// - Calculate rent exemption
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Arguments
    /// * `input` - Byte slice containing serialized data
    ///
    /// # Returns
    /// * `Ok(Self)` - Successfully deserialized
    /// * `Err(...)` - Data is invalid
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    ///
    /// # Arguments
    /// * `output` - Mutable byte slice to write into
    ///
    /// # Returns
    /// * `Ok(())` - Successfully serialized
    /// * `Err(...)` - Output is wrong size
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    /// Use this instead of `unpack` when you have untrusted input.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    /// Use this instead of `pack` for safety.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}
