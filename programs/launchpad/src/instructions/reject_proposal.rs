use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// A single rejection from the approver class ends a pending proposal
// and frees its payload for a fresh proposal.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct RejectProposal<'info> {
    pub rejecter: Signer<'info>,

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
}

impl<'info> RejectProposal<'info> {
    pub fn reject_proposal(&mut self) -> Result<()> {
        let rejecter = self.rejecter.key();
        require!(
            self.proposal.can_vote(&self.global_config, &rejecter),
            LaunchpadError::Unauthorized
        );

        let now = Clock::get()?.unix_timestamp;
        self.proposal.reject(now)?;
        self.proposal_registry.release(&self.proposal.digest);

        msg!("Proposal {} rejected by {}", self.proposal.id, rejecter);
        emit!(ProposalRejected {
            id: self.proposal.id,
            rejected_by: rejecter,
        });

        Ok(())
    }
}
