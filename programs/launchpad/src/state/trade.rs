use anchor_lang::prelude::*;

use crate::{constants::*, curve::*, errors::*, helpers::*};

// Constant-product reserve of one listed token
// Seeds: ["trade", mint]
// Authority of the token reserve account
#[account]
#[derive(InitSpace)]
pub struct Trade {
    pub mint: Pubkey,

    // Lamports in the SOL reserve PDA, rent excluded
    pub sol_reserve: u64,

    pub token_reserve: u64,

    // Frozen from the publishing proposal; changed only by an UpdateFees proposal
    pub fee_percent: u32,

    pub bump: u8,

    pub sol_reserve_bump: u8,
}

impl Trade {
    pub fn seed(
        &mut self,
        mint: Pubkey,
        sol_reserve: u64,
        token_reserve: u64,
        fee_percent: u32,
        bumps: (u8, u8),
    ) -> Result<()> {
        require!(
            sol_reserve > 0 && token_reserve > 0,
            LaunchpadError::InsufficientLiquidity
        );
        require!(
            fee_percent as u64 <= FEE_SCALE,
            LaunchpadError::InvalidFeePercent
        );
        self.mint = mint;
        self.sol_reserve = sol_reserve;
        self.token_reserve = token_reserve;
        self.fee_percent = fee_percent;
        (self.bump, self.sol_reserve_bump) = bumps;
        Ok(())
    }

    pub fn estimate(&self, amount_in: u64, direction: TradeDirection) -> Result<u64> {
        estimate(
            self.sol_reserve,
            self.token_reserve,
            self.fee_percent,
            amount_in,
            direction,
        )
    }

    pub fn quote_buy(&self, sol_in: u64) -> Result<BuyQuote> {
        quote_buy(self.sol_reserve, self.token_reserve, self.fee_percent, sol_in)
    }

    pub fn quote_sell(&self, tokens_in: u64) -> Result<SellQuote> {
        quote_sell(self.sol_reserve, self.token_reserve, self.fee_percent, tokens_in)
    }

    pub fn apply_buy(&mut self, quote: &BuyQuote) -> Result<()> {
        self.sol_reserve = self
            .sol_reserve
            .checked_add(quote.net_sol_in)
            .ok_or(LaunchpadError::Overflow)?;
        self.token_reserve = self
            .token_reserve
            .checked_sub(quote.tokens_out)
            .ok_or(LaunchpadError::Underflow)?;
        Ok(())
    }

    pub fn apply_sell(&mut self, tokens_in: u64, quote: &SellQuote) -> Result<()> {
        self.sol_reserve = self
            .sol_reserve
            .checked_sub(quote.gross_sol_out)
            .ok_or(LaunchpadError::Underflow)?;
        self.token_reserve = self
            .token_reserve
            .checked_add(tokens_in)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }

    // Withdraws `percent` of both reserves; returns (sol, tokens) removed
    pub fn withdraw_percent(&mut self, percent: u32) -> Result<(u64, u64)> {
        require!(
            percent > 0 && percent as u64 <= FEE_SCALE,
            LaunchpadError::InvalidPercent
        );
        let sol_out = calc_amount(self.sol_reserve, percent as u64)?;
        let token_out = calc_amount(self.token_reserve, percent as u64)?;

        self.sol_reserve = self
            .sol_reserve
            .checked_sub(sol_out)
            .ok_or(LaunchpadError::Underflow)?;
        self.token_reserve = self
            .token_reserve
            .checked_sub(token_out)
            .ok_or(LaunchpadError::Underflow)?;
        Ok((sol_out, token_out))
    }
}
