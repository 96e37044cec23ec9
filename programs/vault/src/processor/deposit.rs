//! Deposit Instruction Processor
//!
//! Moves tokens from the owner's token account into vault custody and
//! increments the tracked balance.

use crate::error::VaultError;
use crate::state::{Pack, Vault};
use crate::token;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process Deposit instruction
///
/// Accounts expected:
/// 0. `[writable]` Vault record account
/// 1. `[signer]` Recorded vault owner
/// 2. `[writable]` Owner's token account (source)
/// 3. `[writable]` Vault custody token account (destination)
/// 4. `[]` SPL Token program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Vault record
    let vault_info = next_account_info(account_info_iter)?;

    // Account 1: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Account 2: User token account
    let user_token_info = next_account_info(account_info_iter)?;

    // Account 3: Custody token account
    let custody_token_info = next_account_info(account_info_iter)?;

    // Account 4: Token program
    let token_program_info = next_account_info(account_info_iter)?;

    // Validate the record account
    assert_owned_by(vault_info, program_id)?;
    assert_writable(vault_info)?;
    assert_data_length(vault_info, Vault::LEN)?;

    // Load state
    let mut vault = Vault::unpack_from_slice(&vault_info.data.borrow())?;
    if !vault.is_initialized() {
        return Err(VaultError::UninitializedVault.into());
    }

    // Zero-amount deposits are rejected rather than forwarded as no-ops
    if amount == 0 {
        return Err(VaultError::ZeroAmount.into());
    }

    // Only the recorded owner may deposit
    assert_signer(owner_info)?;
    if vault.owner != *owner_info.key {
        return Err(VaultError::OwnerMismatch.into());
    }

    // Validate the token side
    token::assert_token_program(token_program_info)?;
    assert_writable(user_token_info)?;
    assert_writable(custody_token_info)?;

    // Source must belong to the signer, destination to the vault address
    let user_token = token::expect_token_account(user_token_info)?;
    if user_token.owner != *owner_info.key {
        return Err(VaultError::InvalidTokenAccountOwner.into());
    }

    let custody_token = token::expect_token_account(custody_token_info)?;
    if custody_token.owner != *vault_info.key {
        return Err(VaultError::InvalidTokenAccountOwner.into());
    }

    // Move the tokens first. If the token program rejects the transfer
    // (e.g. the user holds less than `amount`), the record is untouched.
    token::transfer_with_owner(
        token_program_info,
        user_token_info,
        custody_token_info,
        owner_info,
        amount,
    )?;

    // Track the new custody balance
    vault.balance = checked_add(vault.balance, amount)?;

    vault.pack_into_slice(&mut vault_info.data.borrow_mut())?;

    Ok(())
}
