use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Remove Liquidity Instruction
//
// Executes an approved RemoveLiquidity proposal: withdraws a percentage of
// both reserves to the recipient named in the proposal.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct RemoveLiquidity<'info> {
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
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [TRADE, mint.key().as_ref()],
        bump = trade.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub trade: Box<Account<'info, Trade>>,

    #[account(
        mut,
        seeds = [RESERVE, SOL, mint.key().as_ref()],
        bump = trade.sol_reserve_bump,
    )]
    pub sol_reserve: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [RESERVE, MINT, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = trade,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    /// CHECK: must equal the recipient named in the proposal
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(&mut self, percent: u32) -> Result<()> {
        // SECURITY CHECKS

        // 1. Approved RemoveLiquidity for this mint, percent and recipient
        let mint_key = self.mint.key();
        self.proposal.ensure_executable(
            &ProposalKind::RemoveLiquidity {
                mint: mint_key,
                percent,
                recipient: self.recipient.key(),
            },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        // 2. Token is listed
        require!(
            self.fund_data_store.listed,
            LaunchpadError::InvalidDaoStatus
        );

        let (sol_out, token_out) = self.trade.withdraw_percent(percent)?;

        let reserve_seeds: &[&[u8]] = &[
            RESERVE,
            SOL,
            mint_key.as_ref(),
            &[self.trade.sol_reserve_bump],
        ];
        transfer_sol_from_pda(
            sol_out,
            &self.system_program.to_account_info(),
            &self.sol_reserve.to_account_info(),
            &self.recipient.to_account_info(),
            reserve_seeds,
        )?;

        if token_out > 0 {
            let trade_seeds: &[&[u8]] = &[TRADE, mint_key.as_ref(), &[self.trade.bump]];
            transfer_tokens_signed(
                token_out,
                &self.token_program.to_account_info(),
                &self.token_reserve.to_account_info(),
                &self.recipient_token_account.to_account_info(),
                &self.trade.to_account_info(),
                trade_seeds,
            )?;
        }

        msg!("Liquidity removed: {} lamports, {} tokens", sol_out, token_out);
        emit!(LiquidityRemoved {
            mint: mint_key,
            recipient: self.recipient.key(),
            sol_amount: sol_out,
            token_amount: token_out,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }
}
