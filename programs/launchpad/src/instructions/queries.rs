use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

// Read-only role and blacklist lookups, answered through return data

#[derive(Accounts)]
pub struct HasRole<'info> {
    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,
}

impl<'info> HasRole<'info> {
    pub fn has_role(&self, address: Pubkey, role: Role) -> Result<bool> {
        let found = match role {
            Role::Creator => self.creators.is_creator(&address),
            _ => self.global_config.has_role(&address, role),
        };
        Ok(found)
    }
}

#[derive(Accounts)]
pub struct IsUserBlocked<'info> {
    #[account(
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,
}

impl<'info> IsUserBlocked<'info> {
    pub fn is_user_blocked(&self, address: Pubkey) -> Result<bool> {
        Ok(self.blacklist.is_blocked(&address))
    }
}
