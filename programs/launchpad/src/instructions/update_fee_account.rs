use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateFeeAccount<'info> {
    pub sub_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

impl<'info> UpdateFeeAccount<'info> {
    pub fn update_fee_account(&mut self, fees_collection_account: Pubkey) -> Result<()> {
        require!(
            self.global_config.is_sub_admin(&self.sub_admin.key()),
            LaunchpadError::Unauthorized
        );

        let from = self.global_config.fees_collection_account;
        self.global_config.fees_collection_account = fees_collection_account;

        msg!("Fee account updated: {} -> {}", from, fees_collection_account);
        emit!(FeeAccountUpdated {
            from,
            to: fees_collection_account,
        });
        Ok(())
    }
}
