//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod deposit;
pub mod initialize;
pub mod withdraw;

use crate::instruction::VaultInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a Vault program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = VaultInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            VaultInstruction::Initialize { bump } => {
                msg!("Instruction: Initialize");
                initialize::process(program_id, accounts, bump)
            }

            VaultInstruction::Deposit { amount } => {
                msg!("Instruction: Deposit");
                deposit::process(program_id, accounts, amount)
            }

            VaultInstruction::Withdraw { amount } => {
                msg!("Instruction: Withdraw");
                withdraw::process(program_id, accounts, amount)
            }
        }
    }
}
