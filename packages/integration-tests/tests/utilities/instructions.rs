#![allow(clippy::too_many_arguments)]
#![allow(dead_code)]

use std::rc::Rc;

use anchor_client::{
    solana_sdk::{
        compute_budget, instruction::Instruction, signature::Keypair, system_instruction,
        system_program, sysvar,
    },
    Program,
};
use anchor_lang::prelude::{AccountMeta, Pubkey};
use pricecaster::{
    accounts::{AllocateSlot, Bootstrap, ResetStore, SetFlags, StorePrices, UpdateConfiguration},
    utils::pdas::config_pubkey,
    AssetSlot, PriceStore,
};

use crate::utilities::helper::FEED_NAME;

pub const PRICE_STORE_ACCOUNT_SIZE: usize = 8 + std::mem::size_of::<PriceStore>();

pub fn configuration_pubkey() -> Pubkey {
    config_pubkey(FEED_NAME).0
}

/// Create the store account and bootstrap the feed on it
pub fn compose_bootstrap_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    price_store: &Pubkey,
    price_store_lamports: u64,
    trusted_relay: &Pubkey,
) -> Vec<Instruction> {
    program
        .request()
        .instruction(system_instruction::create_account(
            owner,
            price_store,
            price_store_lamports,
            PRICE_STORE_ACCOUNT_SIZE as u64,
            &pricecaster::id(),
        ))
        .accounts(Bootstrap {
            owner: *owner,
            system_program: system_program::ID,
            configuration: configuration_pubkey(),
            price_store: *price_store,
        })
        .args(pricecaster::instruction::Bootstrap {
            feed_name: FEED_NAME.to_string(),
            trusted_relay: *trusted_relay,
        })
        .instructions()
        .unwrap()
}

/// Store instruction alone, `mints` are passed as remaining accounts
pub fn compose_store_prices_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    price_store: &Pubkey,
    assignments: Vec<AssetSlot>,
    payload: Vec<u8>,
    mints: &[Pubkey],
) -> Vec<Instruction> {
    let remaining_accounts: Vec<AccountMeta> = mints
        .iter()
        .map(|mint| AccountMeta::new_readonly(*mint, false))
        .collect();

    program
        .request()
        .accounts(StorePrices {
            owner: *owner,
            configuration: configuration_pubkey(),
            price_store: *price_store,
            instruction_sysvar_account_info: sysvar::instructions::ID,
        })
        .accounts(remaining_accounts)
        .args(pricecaster::instruction::StorePrices {
            feed_name: FEED_NAME.to_string(),
            assignments,
            payload,
        })
        .instructions()
        .unwrap()
}

pub fn compose_allocate_slot_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    price_store: &Pubkey,
    asset_id: u64,
) -> Vec<Instruction> {
    program
        .request()
        .accounts(AllocateSlot {
            owner: *owner,
            configuration: configuration_pubkey(),
            price_store: *price_store,
        })
        .args(pricecaster::instruction::AllocateSlot {
            feed_name: FEED_NAME.to_string(),
            asset_id,
        })
        .instructions()
        .unwrap()
}

pub fn compose_reset_store_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    price_store: &Pubkey,
) -> Vec<Instruction> {
    program
        .request()
        .accounts(ResetStore {
            owner: *owner,
            configuration: configuration_pubkey(),
            price_store: *price_store,
        })
        .args(pricecaster::instruction::ResetStore {
            feed_name: FEED_NAME.to_string(),
        })
        .instructions()
        .unwrap()
}

pub fn compose_set_flags_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    price_store: &Pubkey,
    flags: u8,
) -> Vec<Instruction> {
    program
        .request()
        .accounts(SetFlags {
            owner: *owner,
            configuration: configuration_pubkey(),
            price_store: *price_store,
        })
        .args(pricecaster::instruction::SetFlags {
            feed_name: FEED_NAME.to_string(),
            flags,
        })
        .instructions()
        .unwrap()
}

pub fn compose_update_configuration_ixs(
    program: &Program<Rc<Keypair>>,
    owner: &Pubkey,
    mode: u64,
    value: u64,
) -> Vec<Instruction> {
    program
        .request()
        .accounts(UpdateConfiguration {
            owner: *owner,
            configuration: configuration_pubkey(),
        })
        .args(pricecaster::instruction::UpdateConfiguration {
            feed_name: FEED_NAME.to_string(),
            mode,
            value,
        })
        .instructions()
        .unwrap()
}

pub fn compute_unit_limit() -> Instruction {
    compute_budget::ComputeBudgetInstruction::set_compute_unit_limit(1_400_000)
}

/// Verification instruction sent to the relay in the same transaction as the store.
/// With the memo program as relay, `signer` must sign the transaction.
pub fn relay_verify(relay: &Pubkey, signer: &Pubkey) -> Instruction {
    Instruction {
        program_id: *relay,
        accounts: vec![AccountMeta::new_readonly(*signer, true)],
        data: b"pricecaster: attestations verified".to_vec(),
    }
}

pub fn fee_transfer(owner: &Pubkey, lamports: u64) -> Instruction {
    system_instruction::transfer(owner, &Pubkey::new_unique(), lamports)
}
