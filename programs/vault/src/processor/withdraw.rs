//! Withdraw Instruction Processor
//!
//! Moves tokens out of vault custody back to the owner's token account,
//! signed by the program with the vault's derivation seeds.

use crate::error::VaultError;
use crate::pda::VaultAuthority;
use crate::state::{Pack, Vault};
use crate::token;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process Withdraw instruction
///
/// Accounts expected:
/// 0. `[writable]` Vault record account
/// 1. `[signer]` Recorded vault owner
/// 2. `[writable]` Owner's token account (destination)
/// 3. `[writable]` Vault custody token account (source)
/// 4. `[]` Vault signer (the derived authority)
/// 5. `[]` SPL Token program
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

    // Account 4: Vault signer (derived authority)
    let vault_signer_info = next_account_info(account_info_iter)?;

    // Account 5: Token program
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

    if amount == 0 {
        return Err(VaultError::ZeroAmount.into());
    }

    // Only the recorded owner may withdraw
    assert_signer(owner_info)?;
    if vault.owner != *owner_info.key {
        return Err(VaultError::OwnerMismatch.into());
    }

    // Balance check comes BEFORE the token transfer so an over-withdrawal
    // fails here and never reaches the token program.
    if vault.balance < amount {
        return Err(VaultError::InsufficientVaultFunds.into());
    }

    // Validate the token side
    token::assert_token_program(token_program_info)?;
    assert_writable(user_token_info)?;
    assert_writable(custody_token_info)?;

    // The vault signer must be the address the stored (owner, bump) pair
    // derives to; anything else cannot authorize the custody debit.
    let authority = VaultAuthority::new(&vault.owner, vault.bump);
    let expected_signer = Pubkey::create_program_address(&authority.seeds(), program_id)
        .map_err(|_| VaultError::InvalidDerivation)?;
    if vault_signer_info.key != &expected_signer {
        return Err(VaultError::InvalidDerivation.into());
    }

    // Destination must belong to the signer, source to the vault address
    let user_token = token::expect_token_account(user_token_info)?;
    if user_token.owner != *owner_info.key {
        return Err(VaultError::InvalidTokenAccountOwner.into());
    }

    let custody_token = token::expect_token_account(custody_token_info)?;
    if custody_token.owner != expected_signer {
        return Err(VaultError::InvalidTokenAccountOwner.into());
    }

    // Move the tokens out of custody under the derived authority
    token::transfer_with_vault_authority(
        token_program_info,
        custody_token_info,
        user_token_info,
        vault_signer_info,
        &authority,
        amount,
    )?;

    // Cannot underflow: checked against `amount` above
    vault.balance = checked_sub(vault.balance, amount)?;

    vault.pack_into_slice(&mut vault_info.data.borrow_mut())?;

    Ok(())
}
