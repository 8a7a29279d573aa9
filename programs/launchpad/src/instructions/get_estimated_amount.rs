use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, curve::TradeDirection, errors::*, state::*};

// Quote without side effects; buy and sell run the same curve math

#[derive(Accounts)]
pub struct GetEstimatedAmount<'info> {
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [TRADE, mint.key().as_ref()],
        bump = trade.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub trade: Box<Account<'info, Trade>>,
}

impl<'info> GetEstimatedAmount<'info> {
    pub fn get_estimated_amount(&self, amount_in: u64, direction: TradeDirection) -> Result<u64> {
        self.trade.estimate(amount_in, direction)
    }
}
