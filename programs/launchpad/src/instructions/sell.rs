use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Sell Instruction
//
// Swaps tokens for SOL against the reserve. The fee is taken from the gross
// SOL output; both the seller's share and the fee leave the SOL reserve.

#[derive(Accounts)]
pub struct Sell<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

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
        mut,
        token::mint = mint,
        token::authority = seller,
    )]
    pub seller_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: compared against the configured fee collection account
    #[account(mut)]
    pub fee_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Sell<'info> {
    pub fn sell(&mut self, tokens_in: u64, min_sol_out: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Trading open
        require!(
            self.fund_data_store.status == DaoStatus::Trade,
            LaunchpadError::InvalidDaoStatus
        );

        // 2. Seller not blacklisted
        require!(
            !self.blacklist.is_blocked(&self.seller.key()),
            LaunchpadError::BlockedAccount
        );

        // 3. Fee destination
        require!(
            self.global_config.is_fee_account(&self.fee_account.key()),
            LaunchpadError::UnknownFeeAccount
        );

        // 4. Quote and slippage
        let quote = self.trade.quote_sell(tokens_in)?;
        require!(
            quote.sol_out >= min_sol_out,
            LaunchpadError::SlippageExceeded
        );

        transfer_tokens(
            tokens_in,
            &self.token_program.to_account_info(),
            &self.seller_token_account.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.seller.to_account_info(),
        )?;

        let mint_key = self.mint.key();
        let reserve_seeds: &[&[u8]] = &[
            RESERVE,
            SOL,
            mint_key.as_ref(),
            &[self.trade.sol_reserve_bump],
        ];
        let system_program = self.system_program.to_account_info();
        let sol_reserve = self.sol_reserve.to_account_info();
        transfer_sol_from_pda(
            quote.sol_out,
            &system_program,
            &sol_reserve,
            &self.seller.to_account_info(),
            reserve_seeds,
        )?;
        transfer_sol_from_pda(
            quote.fee,
            &system_program,
            &sol_reserve,
            &self.fee_account.to_account_info(),
            reserve_seeds,
        )?;

        self.trade.apply_sell(tokens_in, &quote)?;

        msg!(
            "Sold {} tokens for {} lamports (fee {})",
            tokens_in,
            quote.sol_out,
            quote.fee
        );
        emit!(Sold {
            mint: mint_key,
            seller: self.seller.key(),
            tokens_in,
            fee: quote.fee,
            sol_out: quote.sol_out,
        });

        Ok(())
    }
}
