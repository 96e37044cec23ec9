//! Token Transfer Adapter
//!
//! The vault never moves token units itself - the SPL Token program owns
//! that ledger. This module is the narrow interface the handlers call to
//! move balances between a user token account and the custody token
//! account, in two authority modes:
//!
//! | Function | Authority | Used by |
//! |----------|-----------|---------|
//! | `transfer_with_owner` | the owner's own signature | Deposit |
//! | `transfer_with_vault_authority` | the vault's derived seeds | Withdraw |
//!
//! Any failure inside the token program aborts the whole instruction via
//! `?`; the caller must not have mutated the vault record before invoking
//! these.

use crate::error::VaultError;
use crate::pda::VaultAuthority;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    program_pack::Pack,
};
use spl_token::state::Account as TokenAccount;

// =============================================================================
// PROGRAM AND ACCOUNT GUARDS
// =============================================================================

/// Assert that the supplied account is the SPL Token program.
///
/// The caller chooses which accounts accompany the instruction; without
/// this check a transaction could route the "transfer" through an
/// attacker-controlled program that fakes success.
///
/// # Errors
///
/// Returns `InvalidTokenProgram` on any other key.
pub fn assert_token_program(account: &AccountInfo) -> ProgramResult {
    if !spl_token::check_id(account.key) {
        Err(VaultError::InvalidTokenProgram.into())
    } else {
        Ok(())
    }
}

/// Deserialize an SPL token account, verifying program ownership first.
///
/// # Errors
///
/// * `InvalidAccountOwner` - account is not owned by the SPL Token program
/// * token program's own error - data does not parse as an initialized
///   token account
pub fn expect_token_account(account: &AccountInfo) -> Result<TokenAccount, ProgramError> {
    if account.owner != &spl_token::id() {
        return Err(VaultError::InvalidAccountOwner.into());
    }
    TokenAccount::unpack(&account.data.borrow())
}

// =============================================================================
// TRANSFERS
// =============================================================================

/// Move `amount` tokens under the authority's own signature.
///
/// Used by Deposit: the owner signed the transaction, so the token
/// program accepts the debit from the owner's account directly.
///
/// # Arguments
///
/// * `token_program_info` - The SPL Token program
/// * `source_info` - Token account to debit
/// * `destination_info` - Token account to credit
/// * `authority_info` - Owner of the source account (transaction signer)
/// * `amount` - Base units to move
pub fn transfer_with_owner<'a>(
    token_program_info: &AccountInfo<'a>,
    source_info: &AccountInfo<'a>,
    destination_info: &AccountInfo<'a>,
    authority_info: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    let ix = spl_token::instruction::transfer(
        token_program_info.key,
        source_info.key,
        destination_info.key,
        authority_info.key,
        &[],
        amount,
    )?;

    invoke(
        &ix,
        &[
            source_info.clone(),
            destination_info.clone(),
            authority_info.clone(),
            token_program_info.clone(),
        ],
    )
}

/// Move `amount` tokens signed by the vault's derived authority.
///
/// Used by Withdraw: no private key exists for the custody address, so
/// the program presents the derivation seeds through `invoke_signed`.
/// The runtime recomputes the address from the seeds and, on match,
/// treats the vault signer account as having signed the inner transfer.
///
/// # Arguments
///
/// * `token_program_info` - The SPL Token program
/// * `source_info` - Custody token account to debit
/// * `destination_info` - Token account to credit
/// * `vault_signer_info` - The derived vault address acting as signer
/// * `authority` - Per-call seed capability matching `vault_signer_info`
/// * `amount` - Base units to move
pub fn transfer_with_vault_authority<'a>(
    token_program_info: &AccountInfo<'a>,
    source_info: &AccountInfo<'a>,
    destination_info: &AccountInfo<'a>,
    vault_signer_info: &AccountInfo<'a>,
    authority: &VaultAuthority,
    amount: u64,
) -> ProgramResult {
    let ix = spl_token::instruction::transfer(
        token_program_info.key,
        source_info.key,
        destination_info.key,
        vault_signer_info.key,
        &[],
        amount,
    )?;

    invoke_signed(
        &ix,
        &[
            source_info.clone(),
            destination_info.clone(),
            vault_signer_info.clone(),
            token_program_info.clone(),
        ],
        &[&authority.seeds()],
    )
}
