use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteUserBlock<'info> {
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
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,
}

impl<'info> ExecuteUserBlock<'info> {
    pub fn execute_block_user(&mut self) -> Result<()> {
        let ProposalKind::BlockUser { user } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };
        self.proposal.ensure_executable(
            &ProposalKind::BlockUser { user },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        self.blacklist.block(user)?;
        self.finish(user, true)
    }

    pub fn execute_unblock_user(&mut self) -> Result<()> {
        let ProposalKind::UnblockUser { user } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };
        self.proposal.ensure_executable(
            &ProposalKind::UnblockUser { user },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        self.blacklist.unblock(&user)?;
        self.finish(user, false)
    }

    fn finish(&mut self, user: Pubkey, blocked: bool) -> Result<()> {
        msg!("User {} blocked: {}", user, blocked);
        emit!(UserBlockUpdated { user, blocked });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }
}
