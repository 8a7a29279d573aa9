use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum DaoStatus {
    Created,
    FundraisingVip,
    FundraisingParty,
    FundraisingSuccess,
    FundraisingFail,
    Trade,
    Expired,
    Closed,
}

impl DaoStatus {
    // Lifecycle graph; every status change goes through this table
    pub fn can_transition_to(&self, next: DaoStatus) -> bool {
        use DaoStatus::*;

        matches!(
            (self, next),
            (Created, FundraisingVip)
                | (FundraisingVip, FundraisingParty)
                | (FundraisingVip | FundraisingParty, FundraisingSuccess)
                | (FundraisingVip | FundraisingParty, FundraisingFail)
                | (Created | FundraisingSuccess, FundraisingFail)
                | (FundraisingSuccess, Trade)
                | (Trade, Expired)
                | (Trade, Closed)
                | (
                    Created | FundraisingVip | FundraisingParty | FundraisingSuccess,
                    Closed
                )
        )
    }

    pub fn is_fundraising(&self) -> bool {
        matches!(self, DaoStatus::FundraisingVip | DaoStatus::FundraisingParty)
    }

    // States a governed block may close
    pub fn is_blockable(&self) -> bool {
        matches!(
            self,
            DaoStatus::Created
                | DaoStatus::FundraisingVip
                | DaoStatus::FundraisingParty
                | DaoStatus::FundraisingSuccess
        )
    }

    // States in which the raised SOL belongs to the DAO
    pub fn is_raised(&self) -> bool {
        matches!(
            self,
            DaoStatus::FundraisingSuccess | DaoStatus::Trade | DaoStatus::Expired
        )
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct VestingPercent {
    // Unlocked on the first claim (FEE_SCALE based)
    pub first_claim: u32,

    // Unlocked per whole day after the first claim (FEE_SCALE based)
    pub daily_claim: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct CreatorShare {
    pub total_withdrawable: u64,
    pub withdrawn: u64,
    pub last_withdrawn_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct DeployerEntry {
    pub address: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub struct DeployerShare {
    pub total_withdrawable: u64,

    #[max_len(MAX_DEPLOYERS)]
    pub entries: Vec<DeployerEntry>,
}

impl DeployerShare {
    pub fn withdrawn(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |total, entry| {
            total
                .checked_add(entry.amount)
                .ok_or(LaunchpadError::Overflow.into())
        })
    }
}

// Per-token fundraise record
// Seeds: ["fund_data", mint]
// Also the mint authority (until revoked) and the escrow token authority
#[account]
#[derive(InitSpace)]
pub struct FundDataStore {
    pub mint: Pubkey,

    pub created_at: i64,

    pub created_by: Pubkey,

    // Stamped on entering FundraisingVip
    pub start_date: i64,

    // Stamped on entering any closing state
    pub end_date: i64,

    // Lamports to raise
    pub fundraising_goal: u64,

    pub status: DaoStatus,

    // Token base units per committed lamport
    pub tokens_per_sol: u64,

    // Tokens reserved for committers
    pub sale_amount: u64,

    // Tokens reserved to seed the reserve
    pub liquidity_tokens: u64,

    pub fee_percent: u32,

    pub vesting_percent: VestingPercent,

    pub creator_share: CreatorShare,

    pub deployer_share: DeployerShare,

    // Set once the reserve has been seeded
    pub listed: bool,

    pub bump: u8,
}

impl FundDataStore {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        mint: Pubkey,
        created_by: Pubkey,
        fundraising_goal: u64,
        sale_amount: u64,
        vesting_percent: VestingPercent,
        fee_percent: u32,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(
            fundraising_goal > 0 && sale_amount > 0,
            LaunchpadError::AmountCantBeZero
        );
        require!(sale_amount >= fundraising_goal, LaunchpadError::InvalidParameter);
        require!(
            vesting_percent.first_claim as u64 <= FEE_SCALE
                && vesting_percent.daily_claim as u64 <= FEE_SCALE,
            LaunchpadError::InvalidPercent
        );
        require!(fee_percent as u64 <= FEE_SCALE, LaunchpadError::InvalidFeePercent);

        let withdrawable = calc_amount(fundraising_goal, WITHDRAWABLE_PERCENT)?;

        self.mint = mint;
        self.created_at = now;
        self.created_by = created_by;
        self.start_date = 0;
        self.end_date = 0;
        self.fundraising_goal = fundraising_goal;
        self.status = DaoStatus::Created;
        self.tokens_per_sol = calc_tokens_per_sol(sale_amount, fundraising_goal)?;
        self.sale_amount = sale_amount;
        self.liquidity_tokens = calc_amount(sale_amount, LIQUIDITY_PERCENT)?;
        self.fee_percent = fee_percent;
        self.vesting_percent = vesting_percent;
        self.creator_share = CreatorShare {
            total_withdrawable: calc_amount(withdrawable, CREATOR_SHARE_PERCENT)?,
            withdrawn: 0,
            last_withdrawn_at: 0,
        };
        self.deployer_share = DeployerShare {
            total_withdrawable: calc_amount(withdrawable, DEPLOYER_SHARE_PERCENT)?,
            entries: Vec::new(),
        };
        self.listed = false;
        self.bump = bump;
        Ok(())
    }

    // Total minted at creation: sale allocation plus reserve seed
    pub fn total_supply(&self) -> Result<u64> {
        self.sale_amount
            .checked_add(self.liquidity_tokens)
            .ok_or(LaunchpadError::Overflow.into())
    }

    // Creator or deployer SOL has already left escrow
    pub fn has_paid_out(&self) -> bool {
        self.creator_share.withdrawn > 0 || !self.deployer_share.entries.is_empty()
    }

    // A governed block may fail or close the DAO only while every committer
    // can still be refunded in full
    pub fn is_blockable(&self) -> bool {
        self.status.is_blockable()
            && !(self.status == DaoStatus::FundraisingSuccess && self.has_paid_out())
    }

    // Moves along the lifecycle graph and stamps the matching date
    // Dates only ever move forward
    pub fn transition(&mut self, next: DaoStatus, now: i64) -> Result<()> {
        require!(
            self.status.can_transition_to(next),
            LaunchpadError::InvalidDaoStatus
        );
        // Refund states require the raised SOL to still be in escrow
        if matches!(next, DaoStatus::FundraisingFail | DaoStatus::Closed) && !self.listed {
            require!(self.is_blockable(), LaunchpadError::InvalidDaoStatus);
        }
        self.status = next;

        match next {
            DaoStatus::FundraisingVip => self.start_date = self.start_date.max(now),
            DaoStatus::FundraisingSuccess
            | DaoStatus::FundraisingFail
            | DaoStatus::Trade
            | DaoStatus::Expired
            | DaoStatus::Closed => self.end_date = self.end_date.max(now),
            _ => {}
        }
        Ok(())
    }

    // Committers get their SOL back
    pub fn refunds_open(&self) -> bool {
        match self.status {
            DaoStatus::FundraisingFail => true,
            DaoStatus::Closed => !self.listed,
            _ => false,
        }
    }

    // Committers receive vested tokens
    pub fn vesting_open(&self) -> bool {
        match self.status {
            DaoStatus::FundraisingSuccess | DaoStatus::Trade | DaoStatus::Expired => true,
            DaoStatus::Closed => self.listed,
            _ => false,
        }
    }

    // SOL equivalent of a token amount at the sale rate
    pub fn sol_equivalent(&self, token_amount: u64) -> Result<u64> {
        require!(self.tokens_per_sol > 0, LaunchpadError::DivisionByZero);
        Ok(token_amount / self.tokens_per_sol)
    }

    pub fn creator_remaining(&self) -> Result<u64> {
        self.creator_share
            .total_withdrawable
            .checked_sub(self.creator_share.withdrawn)
            .ok_or(LaunchpadError::Underflow.into())
    }

    pub fn deployer_remaining(&self) -> Result<u64> {
        self.deployer_share
            .total_withdrawable
            .checked_sub(self.deployer_share.withdrawn()?)
            .ok_or(LaunchpadError::Underflow.into())
    }

    pub fn check_creator_withdrawal(&self, amount: u64) -> Result<()> {
        require!(amount > 0, LaunchpadError::AmountCantBeZero);
        require!(
            amount <= self.creator_remaining()?,
            LaunchpadError::ExceedsWithdrawLimit
        );
        Ok(())
    }

    pub fn check_deployer_withdrawal(&self, amount: u64) -> Result<()> {
        require!(amount > 0, LaunchpadError::AmountCantBeZero);
        require!(
            amount <= self.deployer_remaining()?,
            LaunchpadError::ExceedsWithdrawLimit
        );
        Ok(())
    }

    pub fn record_creator_withdrawal(&mut self, amount: u64, now: i64) -> Result<()> {
        self.check_creator_withdrawal(amount)?;
        self.creator_share.withdrawn = self
            .creator_share
            .withdrawn
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        self.creator_share.last_withdrawn_at = now;
        Ok(())
    }

    pub fn record_deployer_withdrawal(
        &mut self,
        deployer: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.check_deployer_withdrawal(amount)?;

        let entries = &mut self.deployer_share.entries;
        if let Some(entry) = entries.iter_mut().find(|entry| entry.address == deployer) {
            entry.amount = entry.amount.checked_add(amount).ok_or(LaunchpadError::Overflow)?;
            entry.claimed_at = now;
        } else {
            require!(entries.len() < MAX_DEPLOYERS, LaunchpadError::CapacityExceeded);
            entries.push(DeployerEntry {
                address: deployer,
                amount,
                claimed_at: now,
            });
        }
        Ok(())
    }

    // Token and SOL amounts that seed the reserve, bounded by what escrow holds
    pub fn liquidity_pair(&self, escrow_available: u64) -> Result<(u64, u64)> {
        let tokens = self.liquidity_tokens;
        let sols = self.sol_equivalent(tokens)?.min(escrow_available);
        require!(tokens > 0 && sols > 0, LaunchpadError::InsufficientLiquidity);
        Ok((tokens, sols))
    }
}
