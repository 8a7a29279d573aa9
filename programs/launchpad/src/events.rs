use anchor_lang::prelude::*;

use crate::state::{DaoStatus, ProposalKind, UpdateType, UserType};

#[event]
pub struct Initialized {
    pub owner: Pubkey,
    pub fees_collection_account: Pubkey,
}

#[event]
pub struct SubAdminUpdated {
    pub address: Pubkey,
    pub update_type: UpdateType,
}

#[event]
pub struct FeeAccountUpdated {
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct CreatorAdded {
    pub creator: Pubkey,
    pub fee_percent: u32,
    pub creators_count: u32,
}

#[event]
pub struct UsersManaged {
    pub mint: Pubkey,
    pub user_type: UserType,
    pub update_type: UpdateType,
    pub count: u32,
}

#[event]
pub struct DaoCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub fundraising_goal: u64,
    pub tokens_per_sol: u64,
    pub supply: u64,
}

#[event]
pub struct StatusUpdated {
    pub mint: Pubkey,
    pub from: DaoStatus,
    pub to: DaoStatus,
}

#[event]
pub struct Committed {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee: u64,
}

#[event]
pub struct Claimed {
    pub mint: Pubkey,
    pub user: Pubkey,
    // true for a SOL refund, false for a vested token claim
    pub refund: bool,
    pub amount: u64,
    pub fee: u64,
}

#[event]
pub struct Burned {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ProposalCreated {
    pub id: u32,
    pub kind: ProposalKind,
    pub created_by: Pubkey,
    pub approver_threshold: u8,
}

#[event]
pub struct ProposalApproved {
    pub id: u32,
    pub approver: Pubkey,
    pub approvals: u8,
    pub approved: bool,
}

#[event]
pub struct ProposalRejected {
    pub id: u32,
    pub rejected_by: Pubkey,
}

#[event]
pub struct ProposalExecuted {
    pub id: u32,
    pub kind: ProposalKind,
    pub executor: Pubkey,
}

#[event]
pub struct ProposalClosed {
    pub id: u32,
}

#[event]
pub struct SolTransferred {
    pub mint: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LiquidityAdded {
    pub mint: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee_percent: u32,
}

#[event]
pub struct LiquidityRemoved {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
}

#[event]
pub struct Bought {
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub sol_in: u64,
    pub fee: u64,
    pub tokens_out: u64,
}

#[event]
pub struct Sold {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub tokens_in: u64,
    pub fee: u64,
    pub sol_out: u64,
}

#[event]
pub struct FeesUpdated {
    pub mint: Pubkey,
    pub from: u32,
    pub to: u32,
}

#[event]
pub struct CreatorBlockUpdated {
    pub creator: Pubkey,
    pub blocked: bool,
}

#[event]
pub struct UserBlockUpdated {
    pub user: Pubkey,
    pub blocked: bool,
}
