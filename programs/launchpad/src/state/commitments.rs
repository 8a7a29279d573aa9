use anchor_lang::prelude::*;

use super::fund_data_store::VestingPercent;
use crate::{constants::*, errors::*, helpers::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct CommitmentDetails {
    pub address: Pubkey,

    // Lamports committed, merged across repeat commits
    pub sol_amount: u64,

    // Tokens owed at the sale rate
    pub token_amount: u64,

    // Vesting clock starts on the first token claim
    pub first_claimed_at: Option<i64>,

    pub last_claimed_at: Option<i64>,

    // Never exceeds token_amount
    pub amount_claimed: u64,

    pub created_at: i64,
}

impl CommitmentDetails {
    // Tokens unlocked at `now` for a vesting clock started at `first_claimed_at`
    pub fn vested(&self, vesting: &VestingPercent, first_claimed_at: i64, now: i64) -> Result<u64> {
        let days = calc_days(first_claimed_at, now);
        let unlocked_percent = (vesting.daily_claim as u64)
            .checked_mul(days)
            .and_then(|daily| daily.checked_add(vesting.first_claim as u64))
            .unwrap_or(u64::MAX)
            .min(FEE_SCALE);

        Ok(calc_amount(self.token_amount, unlocked_percent)?.min(self.token_amount))
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.amount_claimed >= self.token_amount
    }
}

// Outcome of a vested token claim
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TokenClaim {
    pub amount: u64,
    // Entry was removed because everything has been claimed
    pub completed: bool,
}

// Commitment ledger of one token
// Seeds: ["commitment", mint]
#[account]
#[derive(InitSpace)]
pub struct Commitments {
    pub mint: Pubkey,

    // One entry per address
    #[max_len(MAX_COMMITERS)]
    pub commiters: Vec<CommitmentDetails>,

    pub total_committed_sol: u64,

    pub bump: u8,
}

impl Commitments {
    pub fn bootstrap(&mut self, mint: Pubkey, bump: u8) {
        self.mint = mint;
        self.commiters = Vec::new();
        self.total_committed_sol = 0;
        self.bump = bump;
    }

    pub fn find(&self, address: &Pubkey) -> Option<&CommitmentDetails> {
        self.commiters.iter().find(|commiter| commiter.address == *address)
    }

    pub fn committed_by(&self, address: &Pubkey) -> u64 {
        self.find(address).map(|c| c.sol_amount).unwrap_or_default()
    }

    // Records a commitment, merging into the caller's entry when one exists
    // Returns the entry after the merge
    pub fn commit(
        &mut self,
        address: Pubkey,
        sol_amount: u64,
        tokens_per_sol: u64,
        max_allowable_amount: u64,
        fundraising_goal: u64,
        now: i64,
    ) -> Result<CommitmentDetails> {
        require!(sol_amount > 0, LaunchpadError::AmountCantBeZero);

        let prior = self.committed_by(&address);
        let committed = prior
            .checked_add(sol_amount)
            .ok_or(LaunchpadError::Overflow)?;
        require!(
            committed <= max_allowable_amount,
            LaunchpadError::CommitAmountExceeded
        );

        let total = self
            .total_committed_sol
            .checked_add(sol_amount)
            .ok_or(LaunchpadError::Overflow)?;
        require!(total <= fundraising_goal, LaunchpadError::CommitAmountExceeded);

        let token_amount = sol_amount
            .checked_mul(tokens_per_sol)
            .ok_or(LaunchpadError::Overflow)?;

        let entry = match self
            .commiters
            .iter_mut()
            .find(|commiter| commiter.address == address)
        {
            Some(entry) => {
                entry.sol_amount = committed;
                entry.token_amount = entry
                    .token_amount
                    .checked_add(token_amount)
                    .ok_or(LaunchpadError::Overflow)?;
                *entry
            }
            None => {
                require!(
                    self.commiters.len() < MAX_COMMITERS,
                    LaunchpadError::CapacityExceeded
                );
                let entry = CommitmentDetails {
                    address,
                    sol_amount,
                    token_amount,
                    first_claimed_at: None,
                    last_claimed_at: None,
                    amount_claimed: 0,
                    created_at: now,
                };
                self.commiters.push(entry);
                entry
            }
        };

        self.total_committed_sol = total;
        Ok(entry)
    }

    // Full refund of the caller's SOL; the entry is removed
    pub fn refund(&mut self, address: &Pubkey) -> Result<u64> {
        let index = self
            .commiters
            .iter()
            .position(|commiter| commiter.address == *address)
            .ok_or(LaunchpadError::NotFound)?;

        let entry = self.commiters.remove(index);
        self.total_committed_sol = self
            .total_committed_sol
            .checked_sub(entry.sol_amount)
            .ok_or(LaunchpadError::Underflow)?;

        Ok(entry.sol_amount)
    }

    // Releases whatever has vested since the first claim
    // Fully claimed entries are removed
    pub fn claim_tokens(
        &mut self,
        address: &Pubkey,
        vesting: &VestingPercent,
        now: i64,
    ) -> Result<TokenClaim> {
        let index = self
            .commiters
            .iter()
            .position(|commiter| commiter.address == *address)
            .ok_or(LaunchpadError::NotFound)?;

        let entry = &mut self.commiters[index];
        let first_claimed_at = entry.first_claimed_at.unwrap_or(now);
        let entitlement = entry.vested(vesting, first_claimed_at, now)?;
        let amount = entitlement.saturating_sub(entry.amount_claimed);
        require!(amount > 0, LaunchpadError::AlreadyClaimed);

        entry.amount_claimed = entry
            .amount_claimed
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        entry.first_claimed_at = Some(first_claimed_at);
        entry.last_claimed_at = Some(now);

        let completed = entry.is_fully_claimed();
        if completed {
            self.commiters.remove(index);
        }

        Ok(TokenClaim { amount, completed })
    }
}
