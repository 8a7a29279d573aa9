use anchor_lang::prelude::*;
pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use curve::TradeDirection;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("GkU57pdU1P5HZZZk2DsMQiaaZAWU9QNjAGWLmEEe4YC1");

#[program]
pub mod launchpad {
    use super::*;

    // REGISTRIES

    // One-time bootstrap of the role registry, proposal registry,
    // creator registry and blacklist. Signer becomes owner and admin
    pub fn initialize(ctx: Context<Initialize>, fees_collection_account: Pubkey) -> Result<()> {
        ctx.accounts.initialize(fees_collection_account, &ctx.bumps)
    }

    // Owner only, no proposal needed
    pub fn add_sub_admin(ctx: Context<ManageSubAdmin>, address: Pubkey) -> Result<()> {
        ctx.accounts.add_sub_admin(address)
    }

    pub fn remove_sub_admin(ctx: Context<ManageSubAdmin>, address: Pubkey) -> Result<()> {
        ctx.accounts.remove_sub_admin(address)
    }

    // Sub-admin changes where every fee is paid
    pub fn update_fee_account(
        ctx: Context<UpdateFeeAccount>,
        fees_collection_account: Pubkey,
    ) -> Result<()> {
        ctx.accounts.update_fee_account(fees_collection_account)
    }

    // Sub-admin registers a token creator with the fee charged on its tokens
    pub fn add_creator(ctx: Context<AddCreator>, address: Pubkey, fee_percent: u32) -> Result<()> {
        ctx.accounts.add_creator(address, fee_percent)
    }

    // Token creator edits the VIP and party allow-lists
    pub fn manage_users(
        ctx: Context<ManageUsers>,
        user_type: UserType,
        update_type: UpdateType,
        users: Vec<UserDetails>,
    ) -> Result<()> {
        ctx.accounts.manage_users(user_type, update_type, users)
    }

    pub fn has_role(ctx: Context<HasRole>, address: Pubkey, role: Role) -> Result<bool> {
        ctx.accounts.has_role(address, role)
    }

    pub fn is_user_blocked(ctx: Context<IsUserBlocked>, address: Pubkey) -> Result<bool> {
        ctx.accounts.is_user_blocked(address)
    }

    // FUNDRAISE LIFECYCLE

    // Registered creator opens a fundraise for a new fixed-supply token
    // Supply = sale amount + 10% reserve seed, minted once into escrow
    pub fn create_dao(
        ctx: Context<CreateDao>,
        name: String,
        _decimals: u8,
        fundraising_goal: u64,
        sale_amount: u64,
        vesting_percent: VestingPercent,
    ) -> Result<()> {
        ctx.accounts.create_dao(
            name,
            fundraising_goal,
            sale_amount,
            vesting_percent,
            &ctx.bumps,
        )
    }

    // Created -> FundraisingVip
    pub fn start_dao(ctx: Context<ManageDao>) -> Result<()> {
        ctx.accounts.start_dao()
    }

    // FundraisingVip -> FundraisingParty
    pub fn start_party_round(ctx: Context<ManageDao>) -> Result<()> {
        ctx.accounts.start_party_round()
    }

    // FundraisingVip | FundraisingParty -> FundraisingSuccess | FundraisingFail
    pub fn end_dao(ctx: Context<ManageDao>) -> Result<()> {
        ctx.accounts.end_dao()
    }

    // Trade -> Expired | Closed
    pub fn update_status(ctx: Context<ManageDao>, status: DaoStatus) -> Result<()> {
        ctx.accounts.update_status(status)
    }

    // Commit SOL during an open round; fee paid on top
    pub fn commit(ctx: Context<Commit>, sol_amount: u64) -> Result<()> {
        ctx.accounts.commit(sol_amount)
    }

    // Refund on failure, vested tokens on success
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        ctx.accounts.claim(&ctx.bumps)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        ctx.accounts.burn(amount)
    }

    // PROPOSALS

    // Quorum, approver class and executor come from the kind's policy
    // Identical payloads cannot be open twice
    pub fn create_proposal(ctx: Context<CreateProposal>, kind: ProposalKind) -> Result<()> {
        ctx.accounts.create_proposal(kind, &ctx.bumps)
    }

    // Each member of the approver class can approve once
    pub fn approve_proposal(ctx: Context<ApproveProposal>, _id: u32) -> Result<()> {
        ctx.accounts.approve_proposal()
    }

    pub fn reject_proposal(ctx: Context<RejectProposal>, _id: u32) -> Result<()> {
        ctx.accounts.reject_proposal()
    }

    // Owner closes a proposal that is no longer collecting votes
    // Rent goes back to the proposer
    pub fn close_proposal(ctx: Context<CloseProposal>, _id: u32) -> Result<()> {
        ctx.accounts.close_proposal()
    }

    // EXECUTIONS
    // Every execute call must repeat the approved payload

    pub fn execute_update_owner(
        ctx: Context<ExecuteRoleUpdate>,
        _id: u32,
        new_owner: Pubkey,
    ) -> Result<()> {
        ctx.accounts.execute_update_owner(new_owner)
    }

    pub fn execute_add_admin(ctx: Context<ExecuteRoleUpdate>, _id: u32, address: Pubkey) -> Result<()> {
        ctx.accounts.execute_add_admin(address)
    }

    pub fn execute_remove_admin(
        ctx: Context<ExecuteRoleUpdate>,
        _id: u32,
        address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.execute_remove_admin(address)
    }

    pub fn execute_add_deployer(
        ctx: Context<ExecuteRoleUpdate>,
        _id: u32,
        address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.execute_add_deployer(address)
    }

    pub fn execute_remove_deployer(
        ctx: Context<ExecuteRoleUpdate>,
        _id: u32,
        address: Pubkey,
    ) -> Result<()> {
        ctx.accounts.execute_remove_deployer(address)
    }

    // Token creator pays a deployer out of escrow (51% share)
    pub fn execute_transfer_sol_to_deployer(
        ctx: Context<ExecuteTransferSol>,
        _id: u32,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .execute_transfer_sol_to_deployer(amount, &ctx.bumps)
    }

    // Admin pays the token creator out of escrow (49% share)
    pub fn execute_transfer_sol_to_creator(
        ctx: Context<ExecuteTransferSol>,
        _id: u32,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .execute_transfer_sol_to_creator(amount, &ctx.bumps)
    }

    // Executes PublishToMarket: seeds the reserve and opens trading
    pub fn add_liquidity(ctx: Context<AddLiquidity>, _id: u32, fee_percent: u32) -> Result<()> {
        ctx.accounts.add_liquidity(fee_percent, &ctx.bumps)
    }

    // Executes RemoveLiquidity
    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, _id: u32, percent: u32) -> Result<()> {
        ctx.accounts.remove_liquidity(percent)
    }

    pub fn execute_block_dao(ctx: Context<ExecuteBlockDao>, _id: u32) -> Result<()> {
        ctx.accounts.execute_block_dao()
    }

    // Also fails the creator's DAO if it has not started trading
    pub fn execute_block_creator(ctx: Context<ExecuteCreatorBlock>, _id: u32) -> Result<()> {
        ctx.accounts.execute_block_creator()
    }

    pub fn execute_unblock_creator(ctx: Context<ExecuteCreatorBlock>, _id: u32) -> Result<()> {
        ctx.accounts.execute_unblock_creator()
    }

    pub fn execute_block_user(ctx: Context<ExecuteUserBlock>, _id: u32) -> Result<()> {
        ctx.accounts.execute_block_user()
    }

    pub fn execute_unblock_user(ctx: Context<ExecuteUserBlock>, _id: u32) -> Result<()> {
        ctx.accounts.execute_unblock_user()
    }

    pub fn execute_update_fees(
        ctx: Context<ExecuteUpdateFees>,
        _id: u32,
        fee_percent: u32,
    ) -> Result<()> {
        ctx.accounts.execute_update_fees(fee_percent)
    }

    // TRADING

    // Same math as buy/sell, no state change
    pub fn get_estimated_amount(
        ctx: Context<GetEstimatedAmount>,
        amount_in: u64,
        direction: TradeDirection,
    ) -> Result<u64> {
        ctx.accounts.get_estimated_amount(amount_in, direction)
    }

    pub fn buy(ctx: Context<Buy>, sol_in: u64, min_tokens_out: u64) -> Result<()> {
        ctx.accounts.buy(sol_in, min_tokens_out)
    }

    pub fn sell(ctx: Context<Sell>, tokens_in: u64, min_sol_out: u64) -> Result<()> {
        ctx.accounts.sell(tokens_in, min_sol_out)
    }
}
