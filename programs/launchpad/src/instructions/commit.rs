use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Commit Instruction
//
// Moves SOL into the escrow during a fundraising round and records the
// tokens owed at the fixed sale rate. The fee is charged on top of the
// commitment and paid by the committer.

#[derive(Accounts)]
pub struct Commit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [BLACKLIST],
        bump = blacklist.bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

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
        seeds = [COMMITMENT, mint.key().as_ref()],
        bump = commitments.bump,
    )]
    pub commitments: Box<Account<'info, Commitments>>,

    #[account(
        seeds = [USERS, mint.key().as_ref()],
        bump = users.bump,
    )]
    pub users: Box<Account<'info, Users>>,

    #[account(
        mut,
        seeds = [ESCROW, SOL, mint.key().as_ref()],
        bump,
    )]
    pub escrow_sol: SystemAccount<'info>,

    /// CHECK: compared against the configured fee collection account
    #[account(mut)]
    pub fee_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Commit<'info> {
    pub fn commit(&mut self, sol_amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Amount
        require!(sol_amount > 0, LaunchpadError::AmountCantBeZero);
        require!(
            sol_amount >= MIN_COMMITMENT_LAMPORTS,
            LaunchpadError::MinimumAmountNotMet
        );

        // 2. Fee destination
        require!(
            self.global_config.is_fee_account(&self.fee_account.key()),
            LaunchpadError::UnknownFeeAccount
        );

        // 3. Round open
        let status = self.fund_data_store.status;
        require!(status.is_fundraising(), LaunchpadError::InvalidDaoStatus);

        // 4. Blacklist
        let user = self.user.key();
        require!(
            !self.blacklist.is_blocked(&user),
            LaunchpadError::BlockedAccount
        );

        // 5. Eligibility for the current round
        let max_allowable_amount = self
            .users
            .allowance(&user, status == DaoStatus::FundraisingParty)
            .ok_or(LaunchpadError::InEligible)?;

        // 6. Per-user cap and goal cap
        let now = Clock::get()?.unix_timestamp;
        let entry = self.commitments.commit(
            user,
            sol_amount,
            self.fund_data_store.tokens_per_sol,
            max_allowable_amount,
            self.fund_data_store.fundraising_goal,
            now,
        )?;

        let fee = calc_amount(sol_amount, self.fund_data_store.fee_percent as u64)?;
        let system_program = self.system_program.to_account_info();
        let user_info = self.user.to_account_info();

        transfer_sol(
            sol_amount,
            &system_program,
            &user_info,
            &self.escrow_sol.to_account_info(),
        )?;
        transfer_sol(fee, &system_program, &user_info, &self.fee_account.to_account_info())?;

        let token_amount = sol_amount
            .checked_mul(self.fund_data_store.tokens_per_sol)
            .ok_or(LaunchpadError::Overflow)?;

        msg!(
            "Committed {} lamports ({} total) for {} tokens",
            sol_amount,
            entry.sol_amount,
            token_amount
        );
        emit!(Committed {
            mint: self.mint.key(),
            user,
            sol_amount,
            token_amount,
            fee,
        });

        // Goal reached closes the round
        if self.commitments.total_committed_sol == self.fund_data_store.fundraising_goal {
            self.fund_data_store
                .transition(DaoStatus::FundraisingSuccess, now)?;

            msg!("Fundraising goal reached");
            emit!(StatusUpdated {
                mint: self.mint.key(),
                from: status,
                to: DaoStatus::FundraisingSuccess,
            });
        }

        Ok(())
    }
}
