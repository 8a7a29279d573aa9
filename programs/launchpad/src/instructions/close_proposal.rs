use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Close Proposal Instruction
//
// Owner closes a proposal that is no longer collecting votes: rejected,
// executed, or approved but never executed. An approved proposal that is
// closed can no longer be executed and its payload may be proposed again.
// Rent goes back to the proposer who paid it. The id is never reused.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct CloseProposal<'info> {
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
        has_one = created_by @ LaunchpadError::AccountMisMatch,
        close = created_by,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    #[account(mut)]
    pub created_by: SystemAccount<'info>,
}

impl<'info> CloseProposal<'info> {
    pub fn close_proposal(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Owner only
        require!(
            self.global_config.is_owner(&self.owner.key()),
            LaunchpadError::Unauthorized
        );

        // 2. Pending proposals are ended through reject
        require!(
            self.proposal.is_closable(),
            LaunchpadError::ProposalStillOpen
        );

        // Frees the payload of an approved proposal that was never executed
        self.proposal_registry.release(&self.proposal.digest);

        msg!(
            "Proposal {} closed, rent returned to {}",
            self.proposal.id,
            self.created_by.key()
        );
        emit!(ProposalClosed {
            id: self.proposal.id,
        });
        Ok(())
    }
}
