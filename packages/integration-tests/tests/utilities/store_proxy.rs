//! Native program forwarding its instruction to pricecaster through a CPI.
//!
//! Accounts: the pricecaster program, then the accounts of the forwarded instruction.
#![allow(dead_code)]

use anchor_lang::prelude::{AccountInfo, Pubkey};
use solana_program::{
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    program::invoke,
    program_error::ProgramError,
};

pub const ID: Pubkey = Pubkey::new_from_array([0x5c; 32]);

pub fn process(_program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let (_, forwarded) = accounts
        .split_first()
        .ok_or(ProgramError::NotEnoughAccountKeys)?;

    let ix = Instruction {
        program_id: pricecaster::id(),
        accounts: forwarded
            .iter()
            .map(|account| AccountMeta {
                pubkey: *account.key,
                is_signer: account.is_signer,
                is_writable: account.is_writable,
            })
            .collect(),
        data: data.to_vec(),
    };

    invoke(&ix, accounts)
}

/// Wrap a pricecaster instruction into a call to the proxy
pub fn wrap(ix: Instruction) -> Instruction {
    let mut accounts = vec![AccountMeta::new_readonly(ix.program_id, false)];
    accounts.extend(ix.accounts);
    Instruction {
        program_id: ID,
        accounts,
        data: ix.data,
    }
}
