use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct AddCreator<'info> {
    pub sub_admin: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,
}

impl<'info> AddCreator<'info> {
    pub fn add_creator(&mut self, address: Pubkey, fee_percent: u32) -> Result<()> {
        // SECURITY CHECKS

        // 1. Sub-admins (admins included) register creators
        require!(
            self.global_config.is_sub_admin(&self.sub_admin.key()),
            LaunchpadError::Unauthorized
        );

        // 2. Admins cannot double as creators
        require!(
            !self.global_config.is_admin(&address),
            LaunchpadError::PresentInAdminList
        );

        self.creators.add(address, fee_percent)?;

        msg!("Creator added: {} (fee {})", address, fee_percent);
        emit!(CreatorAdded {
            creator: address,
            fee_percent,
            creators_count: self.creators.creators.len() as u32,
        });
        Ok(())
    }
}
