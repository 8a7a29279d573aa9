use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct CreatorEntry {
    pub address: Pubkey,

    pub is_blocked: bool,

    // Fee applied to the creator's tokens (FEE_SCALE based)
    pub fee_percent: u32,
}

// Registered token creators
// Seeds: ["creators"]
#[account]
#[derive(InitSpace)]
pub struct Creators {
    #[max_len(MAX_CREATORS)]
    pub creators: Vec<CreatorEntry>,

    pub bump: u8,
}

impl Creators {
    pub fn get(&self, address: &Pubkey) -> Option<&CreatorEntry> {
        self.creators.iter().find(|creator| creator.address == *address)
    }

    fn get_mut(&mut self, address: &Pubkey) -> Result<&mut CreatorEntry> {
        self.creators
            .iter_mut()
            .find(|creator| creator.address == *address)
            .ok_or(LaunchpadError::AddressNotFound.into())
    }

    pub fn is_creator(&self, address: &Pubkey) -> bool {
        self.get(address).is_some()
    }

    // Registered and not blocked
    pub fn is_active(&self, address: &Pubkey) -> bool {
        self.get(address).is_some_and(|creator| !creator.is_blocked)
    }

    // Registered, unblocked creator; returns the creator's fee
    pub fn ensure_active(&self, address: &Pubkey) -> Result<u32> {
        let creator = self.get(address).ok_or(LaunchpadError::Unauthorized)?;
        require!(!creator.is_blocked, LaunchpadError::BlockedAccount);
        Ok(creator.fee_percent)
    }

    pub fn add(&mut self, address: Pubkey, fee_percent: u32) -> Result<()> {
        require!(!self.is_creator(&address), LaunchpadError::PresentInCreatorList);
        require!(
            fee_percent as u64 <= FEE_SCALE,
            LaunchpadError::InvalidFeePercent
        );
        require!(
            self.creators.len() < MAX_CREATORS,
            LaunchpadError::CapacityExceeded
        );
        self.creators.push(CreatorEntry {
            address,
            is_blocked: false,
            fee_percent,
        });
        Ok(())
    }

    pub fn block(&mut self, address: &Pubkey) -> Result<()> {
        let creator = self.get_mut(address)?;
        require!(!creator.is_blocked, LaunchpadError::BlockedAccount);
        creator.is_blocked = true;
        Ok(())
    }

    pub fn unblock(&mut self, address: &Pubkey) -> Result<()> {
        let creator = self.get_mut(address)?;
        require!(creator.is_blocked, LaunchpadError::NotBlocked);
        creator.is_blocked = false;
        Ok(())
    }

    pub fn set_fee(&mut self, address: &Pubkey, fee_percent: u32) -> Result<()> {
        require!(
            fee_percent as u64 <= FEE_SCALE,
            LaunchpadError::InvalidFeePercent
        );
        self.get_mut(address)?.fee_percent = fee_percent;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn registry() -> Creators {
        Creators {
            creators: Vec::new(),
            bump: 0,
        }
    }

    #[test]
    fn add_and_activate() {
        let mut creators = registry();
        creators.add(key(1), 2_000_000).unwrap();
        assert_eq!(creators.ensure_active(&key(1)).unwrap(), 2_000_000);
        assert_eq!(
            creators.add(key(1), 0).unwrap_err(),
            LaunchpadError::PresentInCreatorList.into()
        );
        assert_eq!(
            creators.ensure_active(&key(2)).unwrap_err(),
            LaunchpadError::Unauthorized.into()
        );
        assert_eq!(
            creators.add(key(3), FEE_SCALE as u32 + 1).unwrap_err(),
            LaunchpadError::InvalidFeePercent.into()
        );
    }

    #[test]
    fn blocking_toggles_activity() {
        let mut creators = registry();
        creators.add(key(1), 0).unwrap();

        creators.block(&key(1)).unwrap();
        assert!(!creators.is_active(&key(1)));
        assert!(creators.is_creator(&key(1)));
        assert_eq!(
            creators.ensure_active(&key(1)).unwrap_err(),
            LaunchpadError::BlockedAccount.into()
        );
        assert_eq!(
            creators.block(&key(1)).unwrap_err(),
            LaunchpadError::BlockedAccount.into()
        );

        creators.unblock(&key(1)).unwrap();
        assert!(creators.is_active(&key(1)));
        assert_eq!(
            creators.unblock(&key(1)).unwrap_err(),
            LaunchpadError::NotBlocked.into()
        );
        assert_eq!(
            creators.unblock(&key(9)).unwrap_err(),
            LaunchpadError::AddressNotFound.into()
        );
    }

    #[test]
    fn fee_update_is_bounded() {
        let mut creators = registry();
        creators.add(key(1), 1_000_000).unwrap();

        creators.set_fee(&key(1), 3_000_000).unwrap();
        assert_eq!(creators.get(&key(1)).unwrap().fee_percent, 3_000_000);

        assert_eq!(
            creators.set_fee(&key(1), FEE_SCALE as u32 + 1).unwrap_err(),
            LaunchpadError::InvalidFeePercent.into()
        );
        assert_eq!(
            creators.set_fee(&key(2), 0).unwrap_err(),
            LaunchpadError::AddressNotFound.into()
        );
    }
}
