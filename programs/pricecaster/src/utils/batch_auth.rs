//! Authorization of the store instruction.
//!
//! Prices are only accepted from the owner, inside a transaction that also calls the trusted
//! relay program, and which contains nothing else than relay calls, calls to this program
//! and fee operations.

use anchor_lang::prelude::*;
use solana_program::{
    instruction::{get_stack_height, Instruction, TRANSACTION_LEVEL_STACK_HEIGHT},
    pubkey, system_program,
    sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
};

use crate::{warn, PricecasterError, PricecasterResult};

pub const COMPUTE_BUDGET_ID: Pubkey = pubkey!("ComputeBudget111111111111111111111111111111");

// `SystemInstruction::Transfer` is a 4 bytes little endian tag followed by the lamports
const SYSTEM_TRANSFER_TAG: [u8; 4] = [2, 0, 0, 0];
const SYSTEM_TRANSFER_DATA_LEN: usize = 12;

/// Proof that the store instruction passed [`authorize_store`].
#[derive(Debug)]
pub struct StoreAuthorization {
    _private: (),
}

impl StoreAuthorization {
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self { _private: () }
    }
}

/// Check the caller and the other instructions of the transaction.
///
/// `instructions` are all the instructions of the transaction, `current_index` being the store
/// instruction itself.
pub fn authorize_store(
    caller: &Pubkey,
    owner: &Pubkey,
    trusted_relay: &Pubkey,
    current_index: usize,
    instructions: &[Instruction],
) -> PricecasterResult<StoreAuthorization> {
    if caller != owner {
        warn!("Store called by {}, owner is {}", caller, owner);
        return Err(PricecasterError::CallerNotOwner);
    }

    let mut relay_seen = false;
    for (index, ix) in instructions.iter().enumerate() {
        if index == current_index {
            continue;
        }
        if ix.program_id == *trusted_relay {
            relay_seen = true;
        } else if ix.program_id == crate::ID
            || ix.program_id == COMPUTE_BUDGET_ID
            || is_owner_fee_transfer(ix, owner)
        {
            continue;
        } else {
            warn!(
                "Unexpected instruction {} to program {} next to store",
                index, ix.program_id
            );
            return Err(PricecasterError::UnexpectedSiblingInstruction);
        }
    }

    if !relay_seen {
        warn!("No instruction to the trusted relay {}", trusted_relay);
        return Err(PricecasterError::MissingRelayInstruction);
    }

    Ok(StoreAuthorization { _private: () })
}

fn is_owner_fee_transfer(ix: &Instruction, owner: &Pubkey) -> bool {
    ix.program_id == system_program::ID
        && ix.data.len() == SYSTEM_TRANSFER_DATA_LEN
        && ix.data[..4] == SYSTEM_TRANSFER_TAG
        && ix
            .accounts
            .first()
            .map_or(false, |from| from.pubkey == *owner && from.is_signer)
}

/// Load the instructions of the current transaction, failing if the current instruction is
/// executed through a CPI.
pub fn load_transaction_instructions(
    instruction_sysvar_account_info: &AccountInfo,
) -> Result<(usize, Vec<Instruction>)> {
    let current_index: usize = load_current_index_checked(instruction_sysvar_account_info)?.into();

    let current_ix = load_instruction_at_checked(current_index, instruction_sysvar_account_info)?;

    // the current ix must be executed by our program id. otherwise, it's a CPI.
    if crate::ID != current_ix.program_id {
        return err!(PricecasterError::StoreInCPI);
    }

    // The current stack height must be the initial one. Otherwise, it's a CPI.
    if get_stack_height() > TRANSACTION_LEVEL_STACK_HEIGHT {
        return err!(PricecasterError::StoreInCPI);
    }

    let mut instructions = Vec::new();
    let mut index = 0;
    // The sysvar does not expose the instruction count, read until out of bounds
    while let Ok(ix) = load_instruction_at_checked(index, instruction_sysvar_account_info) {
        instructions.push(ix);
        index += 1;
    }

    Ok((current_index, instructions))
}
