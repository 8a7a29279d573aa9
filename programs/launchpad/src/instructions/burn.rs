use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    pub holder: Signer<'info>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    // Restricts burning to launchpad tokens
    #[account(
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = holder,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> BurnTokens<'info> {
    pub fn burn(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LaunchpadError::AmountCantBeZero);

        burn_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.holder_token_account.to_account_info(),
            &self.holder.to_account_info(),
        )?;

        msg!("Burned {} tokens", amount);
        emit!(Burned {
            mint: self.mint.key(),
            owner: self.holder.key(),
            amount,
        });
        Ok(())
    }
}
