use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Addresses barred from committing, trading and being listed
// Seeds: ["blacklist"]
#[account]
#[derive(InitSpace)]
pub struct Blacklist {
    #[max_len(MAX_BLACKLIST)]
    pub users: Vec<Pubkey>,

    pub bump: u8,
}

impl Blacklist {
    pub fn is_blocked(&self, address: &Pubkey) -> bool {
        self.users.contains(address)
    }

    pub fn block(&mut self, address: Pubkey) -> Result<()> {
        require!(!self.is_blocked(&address), LaunchpadError::DuplicateUser);
        require!(
            self.users.len() < MAX_BLACKLIST,
            LaunchpadError::CapacityExceeded
        );
        self.users.push(address);
        Ok(())
    }

    pub fn unblock(&mut self, address: &Pubkey) -> Result<()> {
        let index = self
            .users
            .iter()
            .position(|user| user == address)
            .ok_or(LaunchpadError::NotFound)?;
        self.users.remove(index);
        Ok(())
    }
}
