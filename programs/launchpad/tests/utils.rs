// Test utilities for the launchpad program

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorSerialize};
use launchpad::{DaoStatus, LaunchpadError, ProposalKind, Role, TradeDirection, UpdateType, UserType};
use litesvm::{
    types::{FailedTransactionMetadata, TransactionMetadata},
    LiteSVM,
};
use sha2::{Digest, Sha256};
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(launchpad::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const PROPOSAL_REGISTRY_SEED: &[u8] = b"proposals";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const CREATORS_SEED: &[u8] = b"creators";
pub const BLACKLIST_SEED: &[u8] = b"blacklist";
pub const DAO_LIST_SEED: &[u8] = b"dao_list";
pub const MINT_SEED: &[u8] = b"mint";
pub const FUND_DATA_SEED: &[u8] = b"fund_data";
pub const COMMITMENT_SEED: &[u8] = b"commitment";
pub const USERS_SEED: &[u8] = b"users";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const SOL_SEED: &[u8] = b"sol";
pub const TRADE_SEED: &[u8] = b"trade";
pub const RESERVE_SEED: &[u8] = b"reserve";

// 1% in the program's fixed-point scale (1e8 = 100%)
pub const ONE_PERCENT: u32 = 1_000_000;

pub const DECIMALS: u8 = 6;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result[..8]);
    discriminator
}

// Program-side key type used inside instruction payloads
pub fn program_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

// Setup LiteSVM with the launchpad program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/launchpad.so");
    let _ = svm.add_program(PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Sign and send a single instruction
// The blockhash is expired first so identical instructions can be resent
pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
) -> Result<TransactionMetadata, FailedTransactionMetadata> {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

// Assert a transaction failed with the given program error
pub fn assert_program_error(
    result: Result<TransactionMetadata, FailedTransactionMetadata>,
    expected: LaunchpadError,
) {
    let code = expected as u32 + anchor_lang::error::ERROR_CODE_OFFSET;
    match result {
        Ok(_) => panic!("Expected {:?} but the transaction succeeded", code),
        Err(failure) => {
            let rendered = format!("{:?}", failure.err);
            assert!(
                rendered.contains(&format!("Custom({})", code)),
                "Expected custom error {} but got {}",
                code,
                rendered
            );
        }
    }
}

// Move the clock forward
pub fn advance_time(svm: &mut LiteSVM, seconds: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp += seconds;
    svm.set_sysvar::<Clock>(&clock);
}

// Decode an Anchor account
pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm
        .get_account(address)
        .expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should decode")
}

// PDA derivation

pub fn find_pda(seeds: &[&[u8]]) -> Pubkey {
    Pubkey::find_program_address(seeds, &PROGRAM_ID).0
}

pub fn global_config_pda() -> Pubkey {
    find_pda(&[GLOBAL_CONFIG_SEED])
}

pub fn proposal_registry_pda() -> Pubkey {
    find_pda(&[PROPOSAL_REGISTRY_SEED])
}

pub fn proposal_pda(id: u32) -> Pubkey {
    find_pda(&[PROPOSAL_SEED, &id.to_le_bytes()])
}

pub fn creators_pda() -> Pubkey {
    find_pda(&[CREATORS_SEED])
}

pub fn blacklist_pda() -> Pubkey {
    find_pda(&[BLACKLIST_SEED])
}

pub fn dao_list_pda() -> Pubkey {
    find_pda(&[DAO_LIST_SEED])
}

pub fn mint_pda(name: &str) -> Pubkey {
    find_pda(&[MINT_SEED, name.as_bytes()])
}

pub fn fund_data_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[FUND_DATA_SEED, mint.as_ref()])
}

pub fn commitments_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[COMMITMENT_SEED, mint.as_ref()])
}

pub fn users_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[USERS_SEED, mint.as_ref()])
}

pub fn escrow_sol_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[ESCROW_SEED, SOL_SEED, mint.as_ref()])
}

pub fn escrow_token_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[ESCROW_SEED, MINT_SEED, mint.as_ref()])
}

pub fn trade_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[TRADE_SEED, mint.as_ref()])
}

pub fn sol_reserve_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[RESERVE_SEED, SOL_SEED, mint.as_ref()])
}

pub fn token_reserve_pda(mint: &Pubkey) -> Pubkey {
    find_pda(&[RESERVE_SEED, MINT_SEED, mint.as_ref()])
}

fn instruction(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

fn encode<T: AnchorSerialize>(data: &mut Vec<u8>, value: &T) {
    value.serialize(data).expect("Argument should encode");
}

// REGISTRIES

pub fn build_initialize_ix(owner: &Pubkey, fees_collection_account: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(fees_collection_account.as_ref());

    instruction(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(creators_pda(), false),
            AccountMeta::new(blacklist_pda(), false),
            AccountMeta::new(dao_list_pda(), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_add_sub_admin_ix(owner: &Pubkey, address: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("add_sub_admin").to_vec();
    data.extend_from_slice(address.as_ref());

    instruction(
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(global_config_pda(), false),
        ],
        data,
    )
}

pub fn build_add_creator_ix(sub_admin: &Pubkey, creator: &Pubkey, fee_percent: u32) -> Instruction {
    let mut data = anchor_discriminator("add_creator").to_vec();
    data.extend_from_slice(creator.as_ref());
    data.extend_from_slice(&fee_percent.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*sub_admin, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(creators_pda(), false),
        ],
        data,
    )
}

pub fn build_manage_users_ix(
    creator: &Pubkey,
    mint: &Pubkey,
    user_type: UserType,
    update_type: UpdateType,
    users: &[(Pubkey, u64)],
) -> Instruction {
    let mut data = anchor_discriminator("manage_users").to_vec();
    encode(&mut data, &user_type);
    encode(&mut data, &update_type);
    data.extend_from_slice(&(users.len() as u32).to_le_bytes());
    for (address, max_allowable_amount) in users {
        data.extend_from_slice(address.as_ref());
        data.extend_from_slice(&max_allowable_amount.to_le_bytes());
    }

    instruction(
        vec![
            AccountMeta::new_readonly(*creator, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(users_pda(mint), false),
            AccountMeta::new_readonly(blacklist_pda(), false),
        ],
        data,
    )
}

pub fn build_has_role_ix(address: &Pubkey, role: Role) -> Instruction {
    let mut data = anchor_discriminator("has_role").to_vec();
    data.extend_from_slice(address.as_ref());
    encode(&mut data, &role);

    instruction(
        vec![
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new_readonly(creators_pda(), false),
        ],
        data,
    )
}

// FUNDRAISE LIFECYCLE

pub fn build_create_dao_ix(
    creator: &Pubkey,
    name: &str,
    fundraising_goal: u64,
    sale_amount: u64,
    first_claim: u32,
    daily_claim: u32,
) -> Instruction {
    let mint = mint_pda(name);

    let mut data = anchor_discriminator("create_dao").to_vec();
    data.extend_from_slice(&borsh1::to_vec(name).expect("name should encode"));
    data.push(DECIMALS);
    data.extend_from_slice(&fundraising_goal.to_le_bytes());
    data.extend_from_slice(&sale_amount.to_le_bytes());
    data.extend_from_slice(&first_claim.to_le_bytes());
    data.extend_from_slice(&daily_claim.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(creators_pda(), false),
            AccountMeta::new(dao_list_pda(), false),
            AccountMeta::new(mint, false),
            AccountMeta::new(fund_data_pda(&mint), false),
            AccountMeta::new(commitments_pda(&mint), false),
            AccountMeta::new(users_pda(&mint), false),
            AccountMeta::new(escrow_sol_pda(&mint), false),
            AccountMeta::new(escrow_token_pda(&mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

// start_dao, start_party_round, end_dao
pub fn build_manage_dao_ix(method: &str, authority: &Pubkey, mint: &Pubkey) -> Instruction {
    instruction(
        manage_dao_accounts(authority, mint),
        anchor_discriminator(method).to_vec(),
    )
}

pub fn build_update_status_ix(authority: &Pubkey, mint: &Pubkey, status: DaoStatus) -> Instruction {
    let mut data = anchor_discriminator("update_status").to_vec();
    encode(&mut data, &status);
    instruction(manage_dao_accounts(authority, mint), data)
}

fn manage_dao_accounts(authority: &Pubkey, mint: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(global_config_pda(), false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(fund_data_pda(mint), false),
        AccountMeta::new_readonly(commitments_pda(mint), false),
    ]
}

pub fn build_commit_ix(
    user: &Pubkey,
    mint: &Pubkey,
    fee_account: &Pubkey,
    sol_amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("commit").to_vec();
    data.extend_from_slice(&sol_amount.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new_readonly(blacklist_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(fund_data_pda(mint), false),
            AccountMeta::new(commitments_pda(mint), false),
            AccountMeta::new_readonly(users_pda(mint), false),
            AccountMeta::new(escrow_sol_pda(mint), false),
            AccountMeta::new(*fee_account, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_claim_ix(user: &Pubkey, mint: &Pubkey, fee_account: &Pubkey) -> Instruction {
    instruction(
        vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(commitments_pda(mint), false),
            AccountMeta::new(escrow_sol_pda(mint), false),
            AccountMeta::new(escrow_token_pda(mint), false),
            AccountMeta::new(get_associated_token_address(user, mint), false),
            AccountMeta::new(*fee_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        anchor_discriminator("claim").to_vec(),
    )
}

// PROPOSALS

// `mint` is the payload mint for token-scoped kinds
pub fn build_create_proposal_ix(
    proposer: &Pubkey,
    id: u32,
    kind: &ProposalKind,
    mint: Option<&Pubkey>,
) -> Instruction {
    let mut data = anchor_discriminator("create_proposal").to_vec();
    encode(&mut data, kind);

    // Anchor reads the program id as "no account" for optional accounts
    let fund_data_store = mint.map(fund_data_pda).unwrap_or(PROGRAM_ID);

    instruction(
        vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(creators_pda(), false),
            AccountMeta::new_readonly(blacklist_pda(), false),
            AccountMeta::new_readonly(fund_data_store, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_approve_proposal_ix(approver: &Pubkey, id: u32) -> Instruction {
    let mut data = anchor_discriminator("approve_proposal").to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*approver, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
        ],
        data,
    )
}

pub fn build_reject_proposal_ix(rejecter: &Pubkey, id: u32) -> Instruction {
    let mut data = anchor_discriminator("reject_proposal").to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*rejecter, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
        ],
        data,
    )
}

// Rent is refunded to `created_by`, the proposer
pub fn build_close_proposal_ix(owner: &Pubkey, id: u32, created_by: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("close_proposal").to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new(*created_by, false),
        ],
        data,
    )
}

// execute_update_owner, execute_add_admin, execute_remove_admin,
// execute_add_deployer, execute_remove_deployer
pub fn build_execute_role_update_ix(
    method: &str,
    executor: &Pubkey,
    id: u32,
    address: &Pubkey,
) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&id.to_le_bytes());
    data.extend_from_slice(address.as_ref());

    instruction(
        vec![
            AccountMeta::new_readonly(*executor, true),
            AccountMeta::new(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
        ],
        data,
    )
}

// execute_transfer_sol_to_deployer, execute_transfer_sol_to_creator
pub fn build_execute_transfer_sol_ix(
    method: &str,
    executor: &Pubkey,
    id: u32,
    mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&id.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*executor, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(fund_data_pda(mint), false),
            AccountMeta::new(escrow_sol_pda(mint), false),
            AccountMeta::new(*recipient, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

// execute_block_user, execute_unblock_user
pub fn build_execute_user_block_ix(method: &str, owner: &Pubkey, id: u32) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new(blacklist_pda(), false),
        ],
        data,
    )
}

pub fn build_execute_block_dao_ix(owner: &Pubkey, id: u32, mint: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("execute_block_dao").to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(fund_data_pda(mint), false),
        ],
        data,
    )
}

// execute_block_creator (with the payload mint), execute_unblock_creator (None)
pub fn build_execute_creator_block_ix(
    method: &str,
    owner: &Pubkey,
    id: u32,
    mint: Option<&Pubkey>,
) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&id.to_le_bytes());

    let fund_data_store = mint
        .map(|mint| AccountMeta::new(fund_data_pda(mint), false))
        .unwrap_or(AccountMeta::new_readonly(PROGRAM_ID, false));

    instruction(
        vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new(creators_pda(), false),
            fund_data_store,
        ],
        data,
    )
}

// `listed` adds the trade account so the reserve fee follows
pub fn build_execute_update_fees_ix(
    admin: &Pubkey,
    id: u32,
    mint: &Pubkey,
    fee_percent: u32,
    listed: bool,
) -> Instruction {
    let mut data = anchor_discriminator("execute_update_fees").to_vec();
    data.extend_from_slice(&id.to_le_bytes());
    data.extend_from_slice(&fee_percent.to_le_bytes());

    let trade = if listed {
        AccountMeta::new(trade_pda(mint), false)
    } else {
        AccountMeta::new_readonly(PROGRAM_ID, false)
    };

    instruction(
        vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(fund_data_pda(mint), false),
            AccountMeta::new(creators_pda(), false),
            trade,
        ],
        data,
    )
}

pub fn build_burn_ix(holder: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("burn").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new_readonly(*holder, true),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(get_associated_token_address(holder, mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    )
}

// TRADING

pub fn build_remove_liquidity_ix(
    owner: &Pubkey,
    id: u32,
    mint: &Pubkey,
    recipient: &Pubkey,
    percent: u32,
) -> Instruction {
    let mut data = anchor_discriminator("remove_liquidity").to_vec();
    data.extend_from_slice(&id.to_le_bytes());
    data.extend_from_slice(&percent.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(trade_pda(mint), false),
            AccountMeta::new(sol_reserve_pda(mint), false),
            AccountMeta::new(token_reserve_pda(mint), false),
            AccountMeta::new(*recipient, false),
            AccountMeta::new(get_associated_token_address(recipient, mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_add_liquidity_ix(owner: &Pubkey, id: u32, mint: &Pubkey, fee_percent: u32) -> Instruction {
    let mut data = anchor_discriminator("add_liquidity").to_vec();
    data.extend_from_slice(&id.to_le_bytes());
    data.extend_from_slice(&fee_percent.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new(proposal_registry_pda(), false),
            AccountMeta::new(proposal_pda(id), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(fund_data_pda(mint), false),
            AccountMeta::new(escrow_sol_pda(mint), false),
            AccountMeta::new(escrow_token_pda(mint), false),
            AccountMeta::new(trade_pda(mint), false),
            AccountMeta::new(sol_reserve_pda(mint), false),
            AccountMeta::new(token_reserve_pda(mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_get_estimated_amount_ix(
    mint: &Pubkey,
    amount_in: u64,
    direction: TradeDirection,
) -> Instruction {
    let mut data = anchor_discriminator("get_estimated_amount").to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());
    encode(&mut data, &direction);

    instruction(
        vec![
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(trade_pda(mint), false),
        ],
        data,
    )
}

pub fn build_buy_ix(
    buyer: &Pubkey,
    mint: &Pubkey,
    fee_account: &Pubkey,
    sol_in: u64,
    min_tokens_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("buy").to_vec();
    data.extend_from_slice(&sol_in.to_le_bytes());
    data.extend_from_slice(&min_tokens_out.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*buyer, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new_readonly(blacklist_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(trade_pda(mint), false),
            AccountMeta::new(sol_reserve_pda(mint), false),
            AccountMeta::new(token_reserve_pda(mint), false),
            AccountMeta::new(get_associated_token_address(buyer, mint), false),
            AccountMeta::new(*fee_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_sell_ix(
    seller: &Pubkey,
    mint: &Pubkey,
    fee_account: &Pubkey,
    tokens_in: u64,
    min_sol_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("sell").to_vec();
    data.extend_from_slice(&tokens_in.to_le_bytes());
    data.extend_from_slice(&min_sol_out.to_le_bytes());

    instruction(
        vec![
            AccountMeta::new(*seller, true),
            AccountMeta::new_readonly(global_config_pda(), false),
            AccountMeta::new_readonly(blacklist_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(fund_data_pda(mint), false),
            AccountMeta::new(trade_pda(mint), false),
            AccountMeta::new(sol_reserve_pda(mint), false),
            AccountMeta::new(token_reserve_pda(mint), false),
            AccountMeta::new(get_associated_token_address(seller, mint), false),
            AccountMeta::new(*fee_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

// Common fixture: initialized launchpad with a registered creator

pub struct Launchpad {
    pub svm: LiteSVM,
    pub owner: Keypair,
    pub fee_account: Keypair,
    pub creator: Keypair,
}

pub fn setup_launchpad(creator_fee: u32) -> Launchpad {
    let mut svm = setup_svm();
    let owner = create_funded_account(&mut svm, 100 * LAMPORTS_PER_SOL);
    let fee_account = create_funded_account(&mut svm, LAMPORTS_PER_SOL);
    let creator = create_funded_account(&mut svm, 100 * LAMPORTS_PER_SOL);

    send(
        &mut svm,
        build_initialize_ix(&owner.pubkey(), &fee_account.pubkey()),
        &owner,
    )
    .expect("initialize should succeed");

    send(
        &mut svm,
        build_add_creator_ix(&owner.pubkey(), &creator.pubkey(), creator_fee),
        &owner,
    )
    .expect("add_creator should succeed");

    Launchpad {
        svm,
        owner,
        fee_account,
        creator,
    }
}
