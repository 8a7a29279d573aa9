use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, state::*};

// Manage Users Instruction
//
// The token creator edits the VIP and party allow-lists while the
// fundraise is still open.

#[derive(Accounts)]
pub struct ManageUsers<'info> {
    pub creator: Signer<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [USERS, mint.key().as_ref()],
        bump = users.bump,
    )]
    pub users: Box<Account<'info, Users>>,

    #[account(
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,
}

impl<'info> ManageUsers<'info> {
    pub fn manage_users(
        &mut self,
        user_type: UserType,
        update_type: UpdateType,
        users: Vec<UserDetails>,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Only the token creator
        require_keys_eq!(
            self.fund_data_store.created_by,
            self.creator.key(),
            LaunchpadError::Unauthorized
        );

        // 2. Lists are frozen once the fundraise is over
        require!(
            matches!(
                self.fund_data_store.status,
                DaoStatus::Created | DaoStatus::FundraisingVip | DaoStatus::FundraisingParty
            ),
            LaunchpadError::InvalidDaoStatus
        );

        match update_type {
            UpdateType::Add => self.users.add(user_type, &users, &self.blacklist)?,
            UpdateType::Remove => self.users.remove(user_type, &users),
        }

        msg!("{:?} {:?}: {} users", update_type, user_type, users.len());
        emit!(UsersManaged {
            mint: self.mint.key(),
            user_type,
            update_type,
            count: users.len() as u32,
        });
        Ok(())
    }
}
