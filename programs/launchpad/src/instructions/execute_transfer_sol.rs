use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Execute Transfer SOL Instruction
//
// Pays part of the raised SOL out of escrow:
// - to a deployer (51% share), executed by the token creator
// - to the token creator (49% share), executed by an admin
// Caps are re-checked at execution because earlier withdrawals may have
// consumed part of the share since the proposal was created.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteTransferSol<'info> {
    pub executor: Signer<'info>,

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

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [ESCROW, SOL, mint.key().as_ref()],
        bump,
    )]
    pub escrow_sol: SystemAccount<'info>,

    /// CHECK: must equal the recipient named in the proposal
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ExecuteTransferSol<'info> {
    pub fn execute_transfer_sol_to_deployer(
        &mut self,
        amount: u64,
        bumps: &ExecuteTransferSolBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Kind
        let ProposalKind::TransferSolToDeployer { deployer, .. } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };

        // 2. Recipient is the deployer named in the payload
        require_keys_eq!(
            self.recipient.key(),
            deployer,
            LaunchpadError::UnknownReceiver
        );

        // 3. Payload, approval and executor (token creator)
        let expected = ProposalKind::TransferSolToDeployer {
            mint: self.mint.key(),
            deployer,
            amount,
        };
        self.proposal.ensure_executable(
            &expected,
            &self.global_config,
            &self.executor.key(),
            Some(&self.fund_data_store.created_by),
        )?;

        // 4. Deployer still holds the role
        require!(
            self.global_config.is_deployer(&deployer),
            LaunchpadError::AddressNotFound
        );

        // 5. Raised funds and remaining deployer share
        require!(
            self.fund_data_store.status.is_raised(),
            LaunchpadError::InvalidDaoStatus
        );
        let now = Clock::get()?.unix_timestamp;
        self.fund_data_store
            .record_deployer_withdrawal(deployer, amount, now)?;

        self.pay_out(amount, bumps.escrow_sol)
    }

    pub fn execute_transfer_sol_to_creator(
        &mut self,
        amount: u64,
        bumps: &ExecuteTransferSolBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Kind
        let ProposalKind::TransferSolToCreator { creator, .. } = self.proposal.kind else {
            return err!(LaunchpadError::InvalidProposalType);
        };

        // 2. Recipient is the creator named in the payload
        require_keys_eq!(
            self.recipient.key(),
            creator,
            LaunchpadError::UnknownReceiver
        );

        // 3. Payload, approval and executor (admin)
        let expected = ProposalKind::TransferSolToCreator {
            mint: self.mint.key(),
            creator,
            amount,
        };
        self.proposal.ensure_executable(
            &expected,
            &self.global_config,
            &self.executor.key(),
            Some(&self.fund_data_store.created_by),
        )?;

        // 4. Raised funds and remaining creator share
        require!(
            self.fund_data_store.status.is_raised(),
            LaunchpadError::InvalidDaoStatus
        );
        let now = Clock::get()?.unix_timestamp;
        self.fund_data_store.record_creator_withdrawal(amount, now)?;

        self.pay_out(amount, bumps.escrow_sol)
    }

    fn pay_out(&mut self, amount: u64, escrow_bump: u8) -> Result<()> {
        let mint_key = self.mint.key();
        let escrow_seeds: &[&[u8]] = &[ESCROW, SOL, mint_key.as_ref(), &[escrow_bump]];

        transfer_sol_from_pda(
            amount,
            &self.system_program.to_account_info(),
            &self.escrow_sol.to_account_info(),
            &self.recipient.to_account_info(),
            escrow_seeds,
        )?;

        msg!("Transferred {} lamports to {}", amount, self.recipient.key());
        emit!(SolTransferred {
            mint: mint_key,
            to: self.recipient.key(),
            amount,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.executor.key(),
        )
    }
}
