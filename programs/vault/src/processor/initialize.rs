//! Initialize Instruction Processor
//!
//! Creates the caller's vault record at its derived custody address.

use crate::error::VaultError;
use crate::pda::{assert_vault_derivation, VaultAuthority};
use crate::state::{Pack, Vault, VaultState};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};

/// Process Initialize instruction
///
/// Accounts expected:
/// 0. `[writable]` Vault record account (at the derived custody address)
/// 1. `[writable, signer]` Owner wallet, pays for the allocation
/// 2. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], bump: u8) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Vault record
    let vault_info = next_account_info(account_info_iter)?;

    // Account 1: Owner (becomes the recorded owner)
    let owner_info = next_account_info(account_info_iter)?;

    // Account 2: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // The initializer must sign; their key becomes the vault owner
    assert_signer(owner_info)?;
    assert_writable(vault_info)?;

    if !system_program::check_id(system_program_info.key) {
        return Err(ProgramError::IncorrectProgramId);
    }

    // The supplied address and bump must be the canonical derivation for
    // this owner. Rejects both substituted addresses and valid-but-non-
    // canonical bumps.
    assert_vault_derivation(program_id, owner_info.key, vault_info.key, bump)?;

    // A record that is already program-owned was created by a previous
    // Initialize. Exactly-once semantics, no overwrite.
    if vault_info.owner == program_id {
        return Err(VaultError::AlreadyInitialized.into());
    }

    // Allocate the record. The derived address has no private key, so the
    // vault "signs" for its own creation with the derivation seeds.
    let rent = Rent::get()?;
    let authority = VaultAuthority::new(owner_info.key, bump);

    invoke_signed(
        &system_instruction::create_account(
            owner_info.key,
            vault_info.key,
            rent.minimum_balance(Vault::LEN),
            Vault::LEN as u64,
            program_id,
        ),
        &[
            owner_info.clone(),
            vault_info.clone(),
            system_program_info.clone(),
        ],
        &[&authority.seeds()],
    )?;

    // Fresh allocation is all zeros, which unpacks as Uninitialized
    let mut vault = Vault::unpack_from_slice(&vault_info.data.borrow())?;
    if vault.is_initialized() {
        return Err(VaultError::AlreadyInitialized.into());
    }

    // Write the record
    vault.state = VaultState::Initialized;
    vault.owner = *owner_info.key;
    vault.bump = bump;
    vault.balance = 0;

    vault.pack_into_slice(&mut vault_info.data.borrow_mut())?;

    Ok(())
}
