use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Execute Creator Block / Unblock
//
// Blocking a creator also fails the creator's DAO named in the proposal
// if it has not started trading and nothing has been paid out of escrow,
// which opens refunds to its committers.
// The FundDataStore is only needed when blocking.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteCreatorBlock<'info> {
    pub owner: Signer<'info>,

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
        mut,
        seeds = [PROPOSAL, &id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    #[account(
        mut,
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,

    #[account(
        mut,
        seeds = [FUND_DATA, fund_data_store.mint.as_ref()],
        bump = fund_data_store.bump,
    )]
    pub fund_data_store: Option<Box<Account<'info, FundDataStore>>>,
}

impl<'info> ExecuteCreatorBlock<'info> {
    pub fn execute_block_creator(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Kind
        let ProposalKind::BlockCreator { creator, mint } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };

        // 2. Approved, not executed, owner executing
        self.proposal.ensure_executable(
            &ProposalKind::BlockCreator { creator, mint },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        // 3. Store of the payload mint, created by the payload creator
        let store = self
            .fund_data_store
            .as_deref_mut()
            .ok_or(LaunchpadError::NotFound)?;
        require_keys_eq!(store.mint, mint, LaunchpadError::AccountMisMatch);
        require_keys_eq!(store.created_by, creator, LaunchpadError::AccountMisMatch);

        self.creators.block(&creator)?;

        let from = store.status;
        if store.is_blockable() {
            let now = Clock::get()?.unix_timestamp;
            store.transition(DaoStatus::FundraisingFail, now)?;

            msg!("DAO {} failed by creator block", mint);
            emit!(StatusUpdated {
                mint,
                from,
                to: DaoStatus::FundraisingFail,
            });
        }

        msg!("Creator blocked: {}", creator);
        emit!(CreatorBlockUpdated {
            creator,
            blocked: true,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }

    pub fn execute_unblock_creator(&mut self) -> Result<()> {
        let ProposalKind::UnblockCreator { creator } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };
        self.proposal.ensure_executable(
            &ProposalKind::UnblockCreator { creator },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        self.creators.unblock(&creator)?;

        msg!("Creator unblocked: {}", creator);
        emit!(CreatorBlockUpdated {
            creator,
            blocked: false,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }
}
