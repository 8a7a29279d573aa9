use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Add Liquidity Instruction
//
// Executes an approved PublishToMarket proposal: seeds the constant-product
// reserve from escrow and opens trading.
// - tokens: the liquidity allocation minted at creation
// - SOL: its value at the sale rate, bounded by what escrow still holds
// The owner funds the rent of the SOL reserve PDA.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL_REGISTRY],
        bump = proposal_registry.bump,
    )]
    pub proposal_registry: Box<Account<'info, ProposalRegistry>>,

    #[account(
        mut,
        seeds = [PROPOSAL, &id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [ESCROW, SOL, mint.key().as_ref()],
        bump,
    )]
    pub escrow_sol: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [ESCROW, MINT, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = fund_data_store,
    )]
    pub escrow_token: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Trade::INIT_SPACE,
        seeds = [TRADE, mint.key().as_ref()],
        bump,
    )]
    pub trade: Box<Account<'info, Trade>>,

    #[account(
        mut,
        seeds = [RESERVE, SOL, mint.key().as_ref()],
        bump,
    )]
    pub sol_reserve: SystemAccount<'info>,

    #[account(
        init,
        payer = owner,
        seeds = [RESERVE, MINT, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = trade,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(&mut self, fee_percent: u32, bumps: &AddLiquidityBumps) -> Result<()> {
        // SECURITY CHECKS

        // 1. Approved PublishToMarket for this mint and fee, executed by the owner
        let mint_key = self.mint.key();
        self.proposal.ensure_executable(
            &ProposalKind::PublishToMarket {
                mint: mint_key,
                fee_percent,
            },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        // 2. Fundraise succeeded and the token is not listed yet
        require!(
            self.fund_data_store.status == DaoStatus::FundraisingSuccess
                && !self.fund_data_store.listed,
            LaunchpadError::InvalidDaoStatus
        );

        // 3. Amounts bounded by escrow, rent excluded
        let rent_minimum = Rent::get()?.minimum_balance(0);
        let escrow_available = self.escrow_sol.lamports().saturating_sub(rent_minimum);
        let (tokens, sols) = self.fund_data_store.liquidity_pair(escrow_available)?;
        require!(
            self.escrow_token.amount >= tokens,
            LaunchpadError::InsufficientLiquidity
        );

        let system_program = self.system_program.to_account_info();

        // Reserve PDA rent comes from the owner so the pool holds exactly `sols`
        let missing_rent = rent_minimum.saturating_sub(self.sol_reserve.lamports());
        transfer_sol(
            missing_rent,
            &system_program,
            &self.owner.to_account_info(),
            &self.sol_reserve.to_account_info(),
        )?;

        let escrow_seeds: &[&[u8]] = &[ESCROW, SOL, mint_key.as_ref(), &[bumps.escrow_sol]];
        transfer_sol_from_pda(
            sols,
            &system_program,
            &self.escrow_sol.to_account_info(),
            &self.sol_reserve.to_account_info(),
            escrow_seeds,
        )?;

        let authority_seeds: &[&[u8]] = &[
            FUND_DATA,
            mint_key.as_ref(),
            &[self.fund_data_store.bump],
        ];
        transfer_tokens_signed(
            tokens,
            &self.token_program.to_account_info(),
            &self.escrow_token.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.fund_data_store.to_account_info(),
            authority_seeds,
        )?;

        self.trade.seed(
            mint_key,
            sols,
            tokens,
            fee_percent,
            (bumps.trade, bumps.sol_reserve),
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.fund_data_store.listed = true;
        self.fund_data_store.transition(DaoStatus::Trade, now)?;

        msg!("Liquidity added: {} lamports, {} tokens", sols, tokens);
        emit!(LiquidityAdded {
            mint: mint_key,
            sol_amount: sols,
            token_amount: tokens,
            fee_percent,
        });
        emit!(StatusUpdated {
            mint: mint_key,
            from: DaoStatus::FundraisingSuccess,
            to: DaoStatus::Trade,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }
}
