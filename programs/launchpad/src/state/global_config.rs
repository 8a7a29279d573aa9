use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Roles a key can be queried for through `has_role`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Owner,
    Admin,
    // Admins count as sub-admins
    SubAdmin,
    Deployer,
    Creator,
}

// Global role registry and fee configuration
// Created once by `initialize`; role sets change only through executed proposals,
// except sub-admins which the owner manages directly
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    // Top authority, always also present in `admins`
    pub owner: Pubkey,

    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    #[max_len(MAX_SUB_ADMINS)]
    pub sub_admins: Vec<Pubkey>,

    #[max_len(MAX_DEPLOYERS)]
    pub deployers: Vec<Pubkey>,

    // Every commit, claim and trade fee lands here
    pub fees_collection_account: Pubkey,

    pub bump: u8,
}

impl GlobalConfig {
    pub fn bootstrap(&mut self, owner: Pubkey, fees_collection_account: Pubkey, bump: u8) {
        self.owner = owner;
        self.admins = vec![owner];
        self.sub_admins = Vec::new();
        self.deployers = Vec::new();
        self.fees_collection_account = fees_collection_account;
        self.bump = bump;
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    pub fn is_sub_admin(&self, key: &Pubkey) -> bool {
        self.is_admin(key) || self.sub_admins.contains(key)
    }

    pub fn is_deployer(&self, key: &Pubkey) -> bool {
        self.deployers.contains(key)
    }

    // Creator membership lives in the Creators registry, so it is never answered here
    pub fn has_role(&self, key: &Pubkey, role: Role) -> bool {
        match role {
            Role::Owner => self.is_owner(key),
            Role::Admin => self.is_admin(key),
            Role::SubAdmin => self.is_sub_admin(key),
            Role::Deployer => self.is_deployer(key),
            Role::Creator => false,
        }
    }

    pub fn is_fee_account(&self, key: &Pubkey) -> bool {
        self.fees_collection_account == *key
    }

    // Owner must already be an admin so the owner is always inside the admin quorum
    pub fn set_owner(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(self.is_admin(&new_owner), LaunchpadError::AddressNotFound);
        self.owner = new_owner;
        Ok(())
    }

    pub fn add_admin(&mut self, key: Pubkey) -> Result<()> {
        require!(!self.is_admin(&key), LaunchpadError::PresentInAdminList);
        require!(self.admins.len() < MAX_ADMINS, LaunchpadError::CapacityExceeded);
        self.admins.push(key);
        Ok(())
    }

    pub fn remove_admin(&mut self, key: &Pubkey) -> Result<()> {
        require!(!self.is_owner(key), LaunchpadError::OwnerProtected);
        let index = self
            .admins
            .iter()
            .position(|admin| admin == key)
            .ok_or(LaunchpadError::AddressNotFound)?;
        self.admins.remove(index);
        Ok(())
    }

    pub fn add_sub_admin(&mut self, key: Pubkey) -> Result<()> {
        require!(!self.sub_admins.contains(&key), LaunchpadError::DuplicateUser);
        require!(
            self.sub_admins.len() < MAX_SUB_ADMINS,
            LaunchpadError::CapacityExceeded
        );
        self.sub_admins.push(key);
        Ok(())
    }

    pub fn remove_sub_admin(&mut self, key: &Pubkey) -> Result<()> {
        let index = self
            .sub_admins
            .iter()
            .position(|sub_admin| sub_admin == key)
            .ok_or(LaunchpadError::AddressNotFound)?;
        self.sub_admins.remove(index);
        Ok(())
    }

    pub fn add_deployer(&mut self, key: Pubkey) -> Result<()> {
        require!(!self.is_deployer(&key), LaunchpadError::PresentInDeployerList);
        require!(
            self.deployers.len() < MAX_DEPLOYERS,
            LaunchpadError::CapacityExceeded
        );
        self.deployers.push(key);
        Ok(())
    }

    pub fn remove_deployer(&mut self, key: &Pubkey) -> Result<()> {
        let index = self
            .deployers
            .iter()
            .position(|deployer| deployer == key)
            .ok_or(LaunchpadError::AddressNotFound)?;
        self.deployers.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn config() -> GlobalConfig {
        let mut config = GlobalConfig {
            owner: Pubkey::default(),
            admins: Vec::new(),
            sub_admins: Vec::new(),
            deployers: Vec::new(),
            fees_collection_account: Pubkey::default(),
            bump: 0,
        };
        config.bootstrap(key(1), key(99), 255);
        config
    }

    #[test]
    fn bootstrap_makes_owner_the_first_admin() {
        let config = config();
        assert!(config.is_owner(&key(1)));
        assert!(config.is_admin(&key(1)));
        assert!(config.is_sub_admin(&key(1)));
        assert!(config.is_fee_account(&key(99)));
        assert!(!config.is_deployer(&key(1)));
    }

    #[test]
    fn role_sets_reject_duplicates() {
        let mut config = config();
        config.add_admin(key(2)).unwrap();
        assert_eq!(
            config.add_admin(key(2)).unwrap_err(),
            LaunchpadError::PresentInAdminList.into()
        );

        config.add_deployer(key(3)).unwrap();
        assert_eq!(
            config.add_deployer(key(3)).unwrap_err(),
            LaunchpadError::PresentInDeployerList.into()
        );

        config.add_sub_admin(key(4)).unwrap();
        assert_eq!(
            config.add_sub_admin(key(4)).unwrap_err(),
            LaunchpadError::DuplicateUser.into()
        );
        assert!(config.has_role(&key(4), Role::SubAdmin));
        assert!(!config.has_role(&key(4), Role::Admin));
    }

    #[test]
    fn owner_cannot_be_removed_from_admins() {
        let mut config = config();
        assert_eq!(
            config.remove_admin(&key(1)).unwrap_err(),
            LaunchpadError::OwnerProtected.into()
        );
        assert_eq!(
            config.remove_admin(&key(7)).unwrap_err(),
            LaunchpadError::AddressNotFound.into()
        );
    }

    #[test]
    fn new_owner_must_already_be_admin() {
        let mut config = config();
        assert_eq!(
            config.set_owner(key(5)).unwrap_err(),
            LaunchpadError::AddressNotFound.into()
        );

        config.add_admin(key(5)).unwrap();
        config.set_owner(key(5)).unwrap();
        assert!(config.is_owner(&key(5)));
        assert!(!config.is_owner(&key(1)));
        // previous owner keeps its admin seat
        assert!(config.is_admin(&key(1)));
    }

    #[test]
    fn admin_set_is_bounded() {
        let mut config = config();
        for n in 2..=MAX_ADMINS as u8 {
            config.add_admin(key(n)).unwrap();
        }
        assert_eq!(
            config.add_admin(key(200)).unwrap_err(),
            LaunchpadError::CapacityExceeded.into()
        );
    }
}
