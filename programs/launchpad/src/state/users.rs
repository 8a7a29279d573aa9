use anchor_lang::prelude::*;

use super::blacklist::Blacklist;
use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum UserType {
    Vip,
    Party,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum UpdateType {
    Add,
    Remove,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct UserDetails {
    pub address: Pubkey,

    // Lamports this user may commit in total
    pub max_allowable_amount: u64,
}

// Round allow-lists of one token
// Seeds: ["users", mint]
#[account]
#[derive(InitSpace)]
pub struct Users {
    pub mint: Pubkey,

    #[max_len(MAX_VIP_USERS)]
    pub vip: Vec<UserDetails>,

    #[max_len(MAX_PARTY_USERS)]
    pub party: Vec<UserDetails>,

    pub bump: u8,
}

impl Users {
    pub fn bootstrap(&mut self, mint: Pubkey, bump: u8) {
        self.mint = mint;
        self.vip = Vec::new();
        self.party = Vec::new();
        self.bump = bump;
    }

    fn is_listed(&self, address: &Pubkey) -> bool {
        self.vip
            .iter()
            .chain(self.party.iter())
            .any(|user| user.address == *address)
    }

    // An address may appear only once across both lists
    pub fn add(
        &mut self,
        user_type: UserType,
        users: &[UserDetails],
        blacklist: &Blacklist,
    ) -> Result<()> {
        for user in users {
            require!(!self.is_listed(&user.address), LaunchpadError::DuplicateUser);
            require!(
                user.max_allowable_amount > 0,
                LaunchpadError::AmountCantBeZero
            );
            require!(
                !blacklist.is_blocked(&user.address),
                LaunchpadError::BlockedAccount
            );

            let (list, capacity) = match user_type {
                UserType::Vip => (&mut self.vip, MAX_VIP_USERS),
                UserType::Party => (&mut self.party, MAX_PARTY_USERS),
            };
            require!(list.len() < capacity, LaunchpadError::CapacityExceeded);
            list.push(*user);
        }
        Ok(())
    }

    // Removes from the list named by `user_type` only
    pub fn remove(&mut self, user_type: UserType, users: &[UserDetails]) {
        let list = match user_type {
            UserType::Vip => &mut self.vip,
            UserType::Party => &mut self.party,
        };
        list.retain(|listed| !users.iter().any(|user| user.address == listed.address));
    }

    // Allowance of `address` in the current round, None when not eligible
    // VIPs may commit in both rounds, party users only in the party round
    pub fn allowance(&self, address: &Pubkey, party_round: bool) -> Option<u64> {
        let vip = self
            .vip
            .iter()
            .find(|user| user.address == *address)
            .map(|user| user.max_allowable_amount);

        if vip.is_some() || !party_round {
            return vip;
        }

        self.party
            .iter()
            .find(|user| user.address == *address)
            .map(|user| user.max_allowable_amount)
    }
}
