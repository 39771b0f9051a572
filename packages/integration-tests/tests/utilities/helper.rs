#![allow(dead_code)]
use std::cell::RefCell;

use anchor_lang::prelude::Pubkey;
use anchor_spl::token::spl_token::{self, state::Mint};
use solana_program::{program_option::COption, program_pack::Pack, pubkey};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};

use {
    // anchor client must be imported with "async" feature
    anchor_client::{
        solana_sdk::{
            account::Account, commitment_config::CommitmentConfig, instruction::Instruction,
            instruction::InstructionError, signature::Keypair, signature::Signer,
            system_instruction, transaction::Transaction, transaction::TransactionError,
        },
        Client, Cluster, Program,
    },
    std::rc::Rc,
};

use crate::utilities::store_proxy;

pub const FEED_NAME: &str = "pricecaster-test";

// SPL Memo programs are loaded by `ProgramTest`, v3 requires every listed account to sign
pub const MEMO_PROGRAM_ID: Pubkey = pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");
pub const MEMO_V1_PROGRAM_ID: Pubkey = pubkey!("Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo");

pub fn get_program(pid: Pubkey) -> Program<Rc<Keypair>> {
    let client = Client::new_with_options(
        Cluster::Debug,
        Rc::new(Keypair::new()),
        CommitmentConfig::processed(),
    );
    client.program(pid).unwrap()
}

/// SPL mint address of an asset, the first 8 bytes are the little endian asset id
pub fn mint_address(asset_id: u64) -> Pubkey {
    let mut bytes = Pubkey::new_unique().to_bytes();
    bytes[..8].copy_from_slice(&asset_id.to_le_bytes());
    Pubkey::new_from_array(bytes)
}

pub fn mint_data(decimals: u8) -> Vec<u8> {
    let mint = Mint {
        mint_authority: COption::None,
        supply: 1_000_000_000,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0; Mint::LEN];
    Mint::pack(mint, &mut data).unwrap();
    data
}

/// Program test running the compiled program, with the given mints and the CPI proxy
pub async fn get_context(mints: &[(Pubkey, u8)]) -> Rc<RefCell<ProgramTestContext>> {
    let mut pt = ProgramTest::new("pricecaster", pricecaster::id(), None);

    // The proxy only exists as a native processor
    pt.prefer_bpf(false);
    pt.add_program(
        "store_proxy",
        store_proxy::ID,
        processor!(store_proxy::process),
    );

    for (address, decimals) in mints {
        pt.add_account(
            *address,
            Account {
                lamports: 1_461_600,
                data: mint_data(*decimals),
                owner: spl_token::ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    let context = pt.start_with_context().await;

    Rc::new(RefCell::new(context))
}

pub async fn create_user(context: &mut ProgramTestContext) -> Keypair {
    let keypair = Keypair::new();

    transfer(context, &keypair.pubkey(), 100_000_000_000).await;

    keypair
}

pub async fn transfer(context: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let transaction = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            recipient,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.banks_client.get_latest_blockhash().await.unwrap(),
    );

    context
        .banks_client
        .process_transaction_with_preflight(transaction)
        .await
        .unwrap();
}

/// Send `instructions` in one transaction paid by `payer`.
///
/// Every transaction gets a fresh blockhash so that sending the same instructions twice is not
/// deduplicated.
pub async fn process_instructions(
    context: &mut ProgramTestContext,
    payer: &Keypair,
    extra_signers: &[&Keypair],
    instructions: &[Instruction],
) -> Result<(), BanksClientError> {
    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);

    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        blockhash,
    );

    context.banks_client.process_transaction(transaction).await
}

pub async fn get_account(context: &mut ProgramTestContext, address: Pubkey) -> Option<Account> {
    context.banks_client.get_account(address).await.unwrap()
}

/// Custom error code returned by a failed transaction
pub fn custom_error_code(result: Result<(), BanksClientError>) -> Option<u32> {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))) => Some(code),
        _ => None,
    }
}
