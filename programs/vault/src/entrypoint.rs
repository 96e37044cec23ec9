//! Program Entrypoint
//!
//! This module defines the entrypoint for the Solana program.
//! The entrypoint is where the Solana runtime calls into our program
//! when a transaction includes an instruction for us.
//!
//! Think of it like the `main()` function, but for on-chain programs.

// Only compile this module if the "no-entrypoint" feature is NOT enabled
// This allows other programs to use our crate without entrypoint conflicts
#![cfg(not(feature = "no-entrypoint"))]

use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo,
    entrypoint,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

// This macro generates the actual entrypoint that Solana looks for
// It handles:
// - Setting up the heap allocator
// - Deserializing accounts from raw memory
// - Calling our function with proper types
// - Converting our Result to what Solana expects
entrypoint!(process_instruction);

/// The main entrypoint for the vault program.
///
/// This function is called by the Solana runtime for every instruction
/// sent to our program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program (our deployed address)
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
///
/// # Returns
///
/// * `Ok(())` - Instruction executed successfully
/// * `Err(ProgramError)` - Something went wrong; the runtime rolls back
///   every account mutation in the transaction
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Delegate to our processor
    // This separation makes the code more organized and testable
    Processor::process(program_id, accounts, instruction_data)
}
