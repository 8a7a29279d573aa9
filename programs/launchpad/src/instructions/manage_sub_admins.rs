use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Sub-admins are the only role the owner manages without a proposal

#[derive(Accounts)]
pub struct ManageSubAdmin<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

impl<'info> ManageSubAdmin<'info> {
    fn check_owner(&self) -> Result<()> {
        require!(
            self.global_config.is_owner(&self.owner.key()),
            LaunchpadError::Unauthorized
        );
        Ok(())
    }

    pub fn add_sub_admin(&mut self, address: Pubkey) -> Result<()> {
        self.check_owner()?;
        self.global_config.add_sub_admin(address)?;

        msg!("Sub-admin added: {}", address);
        emit!(SubAdminUpdated {
            address,
            update_type: UpdateType::Add,
        });
        Ok(())
    }

    pub fn remove_sub_admin(&mut self, address: Pubkey) -> Result<()> {
        self.check_owner()?;
        self.global_config.remove_sub_admin(&address)?;

        msg!("Sub-admin removed: {}", address);
        emit!(SubAdminUpdated {
            address,
            update_type: UpdateType::Remove,
        });
        Ok(())
    }
}
