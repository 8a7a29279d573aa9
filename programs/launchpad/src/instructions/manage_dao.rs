use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, state::*};

// Lifecycle transitions driven by the token creator or a sub-admin:
// start_dao, start_party_round, end_dao and update_status.
// Governance-driven transitions live in the execute instructions.

#[derive(Accounts)]
pub struct ManageDao<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        seeds = [COMMITMENT, mint.key().as_ref()],
        bump = commitments.bump,
    )]
    pub commitments: Box<Account<'info, Commitments>>,
}

impl<'info> ManageDao<'info> {
    fn check_authority(&self) -> Result<()> {
        let authority = self.authority.key();
        require!(
            self.fund_data_store.created_by == authority
                || self.global_config.is_sub_admin(&authority),
            LaunchpadError::Unauthorized
        );
        Ok(())
    }

    fn move_to(&mut self, next: DaoStatus) -> Result<()> {
        let from = self.fund_data_store.status;
        let now = Clock::get()?.unix_timestamp;
        self.fund_data_store.transition(next, now)?;

        msg!("DAO {} status: {:?} -> {:?}", self.mint.key(), from, next);
        emit!(StatusUpdated {
            mint: self.mint.key(),
            from,
            to: next,
        });
        Ok(())
    }

    pub fn start_dao(&mut self) -> Result<()> {
        self.check_authority()?;
        self.move_to(DaoStatus::FundraisingVip)
    }

    pub fn start_party_round(&mut self) -> Result<()> {
        self.check_authority()?;
        self.move_to(DaoStatus::FundraisingParty)
    }

    // Success only when the goal was met exactly; anything short fails
    pub fn end_dao(&mut self) -> Result<()> {
        self.check_authority()?;
        require!(
            self.fund_data_store.status.is_fundraising(),
            LaunchpadError::InvalidDaoStatus
        );

        let next = if self.commitments.total_committed_sol >= self.fund_data_store.fundraising_goal {
            DaoStatus::FundraisingSuccess
        } else {
            DaoStatus::FundraisingFail
        };
        self.move_to(next)
    }

    // Ends the trading phase of a listed token
    pub fn update_status(&mut self, status: DaoStatus) -> Result<()> {
        self.check_authority()?;
        require!(
            self.fund_data_store.status == DaoStatus::Trade
                && matches!(status, DaoStatus::Expired | DaoStatus::Closed),
            LaunchpadError::InvalidDaoStatus
        );
        self.move_to(status)
    }
}
