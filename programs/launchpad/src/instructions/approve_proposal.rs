use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ApproveProposal<'info> {
    pub approver: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL, &id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,
}

impl<'info> ApproveProposal<'info> {
    pub fn approve_proposal(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Approver belongs to the proposal's approver class
        let approver = self.approver.key();
        require!(
            self.proposal.can_vote(&self.global_config, &approver),
            LaunchpadError::Unauthorized
        );

        // 2. Pending and not yet approved by this key
        let now = Clock::get()?.unix_timestamp;
        let approved = self.proposal.approve(approver, now)?;

        let approvals = self.proposal.approvers.len() as u8;
        msg!(
            "Proposal {} approved ({}/{})",
            self.proposal.id,
            approvals,
            self.proposal.approver_threshold
        );
        emit!(ProposalApproved {
            id: self.proposal.id,
            approver,
            approvals,
            approved,
        });

        Ok(())
    }
}
