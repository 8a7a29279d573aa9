use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Claim Instruction
//
// Settles a commitment once the fundraise is decided:
// - failed (or closed before listing): full SOL refund, entry removed
// - succeeded: tokens released on the vesting schedule, entry removed when done
// The claim fee is charged on the SOL value paid out and is paid by the claimant.

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [COMMITMENT, mint.key().as_ref()],
        bump = commitments.bump,
    )]
    pub commitments: Box<Account<'info, Commitments>>,

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
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: compared against the configured fee collection account
    #[account(mut)]
    pub fee_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Claim<'info> {
    pub fn claim(&mut self, bumps: &ClaimBumps) -> Result<()> {
        // SECURITY CHECKS

        // 1. Fee destination
        require!(
            self.global_config.is_fee_account(&self.fee_account.key()),
            LaunchpadError::UnknownFeeAccount
        );

        // 2. Caller has an open commitment
        let user = self.user.key();
        require!(
            self.commitments.find(&user).is_some(),
            LaunchpadError::NotFound
        );

        // 3. Outcome decides the branch
        if self.fund_data_store.refunds_open() {
            self.refund(&user, bumps.escrow_sol)
        } else if self.fund_data_store.vesting_open() {
            self.claim_tokens(&user)
        } else {
            err!(LaunchpadError::PermissionDenied)
        }
    }

    fn refund(&mut self, user: &Pubkey, escrow_bump: u8) -> Result<()> {
        let amount = self.commitments.refund(user)?;

        let mint_key = self.mint.key();
        let escrow_seeds: &[&[u8]] = &[ESCROW, SOL, mint_key.as_ref(), &[escrow_bump]];
        transfer_sol_from_pda(
            amount,
            &self.system_program.to_account_info(),
            &self.escrow_sol.to_account_info(),
            &self.user.to_account_info(),
            escrow_seeds,
        )?;

        let fee = self.charge_fee(amount)?;

        msg!("Refunded {} lamports", amount);
        emit!(Claimed {
            mint: mint_key,
            user: *user,
            refund: true,
            amount,
            fee,
        });
        Ok(())
    }

    fn claim_tokens(&mut self, user: &Pubkey) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let vesting = self.fund_data_store.vesting_percent;
        let claim = self.commitments.claim_tokens(user, &vesting, now)?;

        let mint_key = self.mint.key();
        let authority_seeds: &[&[u8]] = &[
            FUND_DATA,
            mint_key.as_ref(),
            &[self.fund_data_store.bump],
        ];
        transfer_tokens_signed(
            claim.amount,
            &self.token_program.to_account_info(),
            &self.escrow_token.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.fund_data_store.to_account_info(),
            authority_seeds,
        )?;

        let fee = self.charge_fee(self.fund_data_store.sol_equivalent(claim.amount)?)?;

        msg!(
            "Claimed {} tokens{}",
            claim.amount,
            if claim.completed { ", fully vested" } else { "" }
        );
        emit!(Claimed {
            mint: mint_key,
            user: *user,
            refund: false,
            amount: claim.amount,
            fee,
        });
        Ok(())
    }

    fn charge_fee(&self, sol_value: u64) -> Result<u64> {
        let fee = calc_amount(sol_value, self.fund_data_store.fee_percent as u64)?;
        transfer_sol(
            fee,
            &self.system_program.to_account_info(),
            &self.user.to_account_info(),
            &self.fee_account.to_account_info(),
        )?;
        Ok(fee)
    }
}
