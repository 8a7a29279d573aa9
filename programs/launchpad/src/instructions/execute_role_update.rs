use anchor_lang::prelude::*;

use crate::{constants::*, helpers::*, state::*};

// Executes approved role-set proposals: owner change, admin and deployer
// membership. Each entry point passes the payload it expects; any difference
// from the stored payload aborts the execution.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteRoleUpdate<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
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

impl<'info> ExecuteRoleUpdate<'info> {
    fn check(&self, expected: &ProposalKind) -> Result<()> {
        self.proposal.ensure_executable(
            expected,
            &self.global_config,
            &self.executor.key(),
            None,
        )
    }

    fn finish(&mut self, address: Pubkey) -> Result<()> {
        msg!("{}: {}", self.proposal.kind.label(), address);
        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.executor.key(),
        )
    }

    pub fn execute_update_owner(&mut self, new_owner: Pubkey) -> Result<()> {
        self.check(&ProposalKind::UpdateOwner { new_owner })?;
        self.global_config.set_owner(new_owner)?;
        self.finish(new_owner)
    }

    pub fn execute_add_admin(&mut self, address: Pubkey) -> Result<()> {
        self.check(&ProposalKind::AddAdmin { address })?;
        self.global_config.add_admin(address)?;
        self.finish(address)
    }

    pub fn execute_remove_admin(&mut self, address: Pubkey) -> Result<()> {
        self.check(&ProposalKind::RemoveAdmin { address })?;
        self.global_config.remove_admin(&address)?;
        self.finish(address)
    }

    pub fn execute_add_deployer(&mut self, address: Pubkey) -> Result<()> {
        self.check(&ProposalKind::AddDeployer { address })?;
        self.global_config.add_deployer(address)?;
        self.finish(address)
    }

    pub fn execute_remove_deployer(&mut self, address: Pubkey) -> Result<()> {
        self.check(&ProposalKind::RemoveDeployer { address })?;
        self.global_config.remove_deployer(&address)?;
        self.finish(address)
    }
}
