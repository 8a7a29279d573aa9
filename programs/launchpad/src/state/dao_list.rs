use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Every token launched through the program, in creation order
// Seeds: ["dao_list"]
#[account]
#[derive(InitSpace)]
pub struct DaoList {
    #[max_len(MAX_DAOS)]
    pub mints: Vec<Pubkey>,

    pub bump: u8,
}

impl DaoList {
    pub fn contains(&self, mint: &Pubkey) -> bool {
        self.mints.contains(mint)
    }

    pub fn add(&mut self, mint: Pubkey) -> Result<()> {
        require!(!self.contains(&mint), LaunchpadError::DuplicateDao);
        require!(self.mints.len() < MAX_DAOS, LaunchpadError::CapacityExceeded);
        self.mints.push(mint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mints_are_listed_once_in_order() {
        let mut list = DaoList {
            mints: Vec::new(),
            bump: 0,
        };
        let first = Pubkey::new_from_array([1; 32]);
        let second = Pubkey::new_from_array([2; 32]);

        list.add(first).unwrap();
        list.add(second).unwrap();
        assert_eq!(list.mints, vec![first, second]);
        assert_eq!(
            list.add(first).unwrap_err(),
            LaunchpadError::DuplicateDao.into()
        );
    }

    #[test]
    fn list_is_bounded() {
        let mut list = DaoList {
            mints: (0..MAX_DAOS).map(|_| Pubkey::new_unique()).collect(),
            bump: 0,
        };
        assert_eq!(
            list.add(Pubkey::new_unique()).unwrap_err(),
            LaunchpadError::CapacityExceeded.into()
        );
    }
}
