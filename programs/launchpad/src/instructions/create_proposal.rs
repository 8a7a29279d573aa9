use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Create Proposal Instruction
//
// Opens a governed action. The proposer role, approver class, quorum and
// executor class all come from the kind's policy. The payload is validated
// against current state up front so unexecutable proposals never reach a vote.
//
// Token-scoped kinds need the FundDataStore of the payload mint.

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL_REGISTRY],
        bump = proposal_registry.bump,
    )]
    pub proposal_registry: Box<Account<'info, ProposalRegistry>>,

    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [PROPOSAL, &proposal_registry.next_id.to_le_bytes()],
        bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    #[account(
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,

    #[account(
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

    #[account(
        seeds = [FUND_DATA, fund_data_store.mint.as_ref()],
        bump = fund_data_store.bump,
    )]
    pub fund_data_store: Option<Box<Account<'info, FundDataStore>>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(
        &mut self,
        kind: ProposalKind,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        let proposer = self.proposer.key();
        let policy = kind.policy();

        // SECURITY CHECKS
        {
            let store = self.store_for(&kind)?;
            let token_creator = store.map(|store| store.created_by);

            // 1. Proposer role
            require!(
                policy
                    .proposer
                    .permits(&self.global_config, &proposer, token_creator.as_ref()),
                LaunchpadError::Unauthorized
            );
            if policy.proposer == ProposerRole::TokenCreator {
                self.creators.ensure_active(&proposer)?;
            }

            // 2. Payload is executable against current state
            self.validate(&kind, store)?;
        }

        // 3. No identical proposal may be open
        let digest = kind.digest()?;
        let id = self.proposal_registry.register(digest)?;

        let now = Clock::get()?.unix_timestamp;
        self.proposal.open(
            id,
            kind,
            proposer,
            &self.global_config,
            digest,
            now,
            bumps.proposal,
        )?;

        msg!(
            "Proposal {} created: {} (needs {})",
            id,
            kind.label(),
            self.proposal.approver_threshold
        );
        emit!(ProposalCreated {
            id,
            kind,
            created_by: proposer,
            approver_threshold: self.proposal.approver_threshold,
        });

        Ok(())
    }

    fn store_for(&self, kind: &ProposalKind) -> Result<Option<&FundDataStore>> {
        let Some(mint) = kind.mint() else {
            return Ok(None);
        };

        let store = self
            .fund_data_store
            .as_deref()
            .ok_or(LaunchpadError::NotFound)?;
        require_keys_eq!(store.mint, mint, LaunchpadError::AccountMisMatch);
        Ok(Some(&**store))
    }

    fn validate(&self, kind: &ProposalKind, store: Option<&FundDataStore>) -> Result<()> {
        use ProposalKind::*;

        let config = &self.global_config;
        let store = || store.ok_or(LaunchpadError::NotFound);

        match *kind {
            UpdateOwner { new_owner } => {
                require!(config.is_admin(&new_owner), LaunchpadError::AddressNotFound);
                require!(
                    !config.is_owner(&new_owner),
                    LaunchpadError::InvalidParameter
                );
            }
            AddAdmin { address } => {
                require!(
                    !config.is_admin(&address),
                    LaunchpadError::PresentInAdminList
                );
            }
            RemoveAdmin { address } => {
                require!(config.is_admin(&address), LaunchpadError::AddressNotFound);
                require!(!config.is_owner(&address), LaunchpadError::OwnerProtected);
            }
            AddDeployer { address } => {
                require!(
                    !config.is_deployer(&address),
                    LaunchpadError::PresentInDeployerList
                );
            }
            RemoveDeployer { address } => {
                require!(
                    config.is_deployer(&address),
                    LaunchpadError::AddressNotFound
                );
            }
            TransferSolToDeployer {
                deployer, amount, ..
            } => {
                let store = store()?;
                require!(store.status.is_raised(), LaunchpadError::InvalidDaoStatus);
                require!(
                    config.is_deployer(&deployer),
                    LaunchpadError::AddressNotFound
                );
                store.check_deployer_withdrawal(amount)?;
            }
            TransferSolToCreator {
                creator, amount, ..
            } => {
                let store = store()?;
                require!(store.status.is_raised(), LaunchpadError::InvalidDaoStatus);
                require_keys_eq!(
                    creator,
                    store.created_by,
                    LaunchpadError::AccountMisMatch
                );
                store.check_creator_withdrawal(amount)?;
            }
            PublishToMarket { fee_percent, .. } => {
                let store = store()?;
                require!(
                    store.status == DaoStatus::FundraisingSuccess && !store.listed,
                    LaunchpadError::InvalidDaoStatus
                );
                require!(
                    fee_percent as u64 <= FEE_SCALE,
                    LaunchpadError::InvalidFeePercent
                );
            }
            RemoveLiquidity { percent, .. } => {
                require!(store()?.listed, LaunchpadError::InvalidDaoStatus);
                require!(
                    percent > 0 && percent as u64 <= FEE_SCALE,
                    LaunchpadError::InvalidPercent
                );
            }
            BlockDao { .. } => {
                require!(store()?.is_blockable(), LaunchpadError::InvalidDaoStatus);
            }
            BlockCreator { creator, .. } => {
                let entry = self
                    .creators
                    .get(&creator)
                    .ok_or(LaunchpadError::AddressNotFound)?;
                require!(!entry.is_blocked, LaunchpadError::BlockedAccount);
                require_keys_eq!(
                    store()?.created_by,
                    creator,
                    LaunchpadError::AccountMisMatch
                );
            }
            UnblockCreator { creator } => {
                let entry = self
                    .creators
                    .get(&creator)
                    .ok_or(LaunchpadError::AddressNotFound)?;
                require!(entry.is_blocked, LaunchpadError::NotBlocked);
            }
            BlockUser { user } => {
                require!(
                    !self.blacklist.is_blocked(&user),
                    LaunchpadError::DuplicateUser
                );
            }
            UnblockUser { user } => {
                require!(self.blacklist.is_blocked(&user), LaunchpadError::NotFound);
            }
            UpdateFees { fee_percent, .. } => {
                require!(
                    fee_percent as u64 <= FEE_SCALE,
                    LaunchpadError::InvalidFeePercent
                );
            }
        }
        Ok(())
    }
}
