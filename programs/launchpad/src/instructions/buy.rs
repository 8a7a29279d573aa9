use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Buy Instruction
//
// Swaps SOL for tokens against the reserve. The fee is taken from the SOL
// input before pricing and goes to the fee account; the rest joins the reserve.

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

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

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: compared against the configured fee collection account
    #[account(mut)]
    pub fee_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    pub fn buy(&mut self, sol_in: u64, min_tokens_out: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Trading open
        require!(
            self.fund_data_store.status == DaoStatus::Trade,
            LaunchpadError::InvalidDaoStatus
        );

        // 2. Buyer not blacklisted
        require!(
            !self.blacklist.is_blocked(&self.buyer.key()),
            LaunchpadError::BlockedAccount
        );

        // 3. Fee destination
        require!(
            self.global_config.is_fee_account(&self.fee_account.key()),
            LaunchpadError::UnknownFeeAccount
        );

        // 4. Quote and slippage
        let quote = self.trade.quote_buy(sol_in)?;
        require!(
            quote.tokens_out >= min_tokens_out,
            LaunchpadError::SlippageExceeded
        );

        let system_program = self.system_program.to_account_info();
        let buyer = self.buyer.to_account_info();
        transfer_sol(
            quote.fee,
            &system_program,
            &buyer,
            &self.fee_account.to_account_info(),
        )?;
        transfer_sol(
            quote.net_sol_in,
            &system_program,
            &buyer,
            &self.sol_reserve.to_account_info(),
        )?;

        let mint_key = self.mint.key();
        let trade_seeds: &[&[u8]] = &[TRADE, mint_key.as_ref(), &[self.trade.bump]];
        transfer_tokens_signed(
            quote.tokens_out,
            &self.token_program.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.buyer_token_account.to_account_info(),
            &self.trade.to_account_info(),
            trade_seeds,
        )?;

        self.trade.apply_buy(&quote)?;

        msg!(
            "Bought {} tokens for {} lamports (fee {})",
            quote.tokens_out,
            sol_in,
            quote.fee
        );
        emit!(Bought {
            mint: mint_key,
            buyer: self.buyer.key(),
            sol_in,
            fee: quote.fee,
            tokens_out: quote.tokens_out,
        });

        Ok(())
    }
}
