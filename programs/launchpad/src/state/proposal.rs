use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use super::global_config::GlobalConfig;
use crate::{constants::*, errors::*};

// Which role set approves a proposal
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ApproverClass {
    Admin,
    Deployer,
}

impl ApproverClass {
    pub fn members<'a>(&self, config: &'a GlobalConfig) -> &'a [Pubkey] {
        match self {
            ApproverClass::Admin => &config.admins,
            ApproverClass::Deployer => &config.deployers,
        }
    }
}

// Who may run the execute instruction once a proposal is approved
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ExecutorClass {
    Admin,
    Owner,
    // Creator of the token named in the payload
    Creator,
}

impl ExecutorClass {
    pub fn permits(
        &self,
        config: &GlobalConfig,
        executor: &Pubkey,
        token_creator: Option<&Pubkey>,
    ) -> bool {
        match self {
            ExecutorClass::Admin => config.is_admin(executor),
            ExecutorClass::Owner => config.is_owner(executor),
            ExecutorClass::Creator => token_creator == Some(executor),
        }
    }
}

// Who may open a proposal of a given kind
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposerRole {
    Admin,
    SubAdmin,
    TokenCreator,
}

impl ProposerRole {
    pub fn permits(
        &self,
        config: &GlobalConfig,
        proposer: &Pubkey,
        token_creator: Option<&Pubkey>,
    ) -> bool {
        match self {
            ProposerRole::Admin => config.is_admin(proposer),
            ProposerRole::SubAdmin => config.is_sub_admin(proposer),
            ProposerRole::TokenCreator => token_creator == Some(proposer),
        }
    }
}

// How many approvals a proposal needs, resolved against the approver class
// size when the proposal is created
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Quorum {
    Fixed(u8),
    Majority,
    Unanimous,
}

impl Quorum {
    pub fn threshold(&self, class_size: usize) -> Result<u8> {
        require!(class_size > 0, LaunchpadError::EmptyApproverClass);
        let size = u8::try_from(class_size).map_err(|_| LaunchpadError::Overflow)?;

        let threshold = match self {
            Quorum::Fixed(count) => (*count).clamp(1, size),
            Quorum::Majority => size / 2 + 1,
            Quorum::Unanimous => size,
        };
        Ok(threshold)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProposalPolicy {
    pub proposer: ProposerRole,
    pub approver_class: ApproverClass,
    pub executor_class: ExecutorClass,
    pub quorum: Quorum,
}

// Governed actions and the arguments frozen at creation time
// Execute instructions must be called with exactly these values
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ProposalKind {
    UpdateOwner { new_owner: Pubkey },
    AddAdmin { address: Pubkey },
    RemoveAdmin { address: Pubkey },
    AddDeployer { address: Pubkey },
    RemoveDeployer { address: Pubkey },
    TransferSolToDeployer { mint: Pubkey, deployer: Pubkey, amount: u64 },
    TransferSolToCreator { mint: Pubkey, creator: Pubkey, amount: u64 },
    // Executed by `add_liquidity`
    PublishToMarket { mint: Pubkey, fee_percent: u32 },
    // Executed by `remove_liquidity`
    RemoveLiquidity { mint: Pubkey, percent: u32, recipient: Pubkey },
    BlockDao { mint: Pubkey },
    BlockCreator { creator: Pubkey, mint: Pubkey },
    UnblockCreator { creator: Pubkey },
    BlockUser { user: Pubkey },
    UnblockUser { user: Pubkey },
    UpdateFees { mint: Pubkey, fee_percent: u32 },
}

impl ProposalKind {
    // Per-kind quorum and role table
    pub fn policy(&self) -> ProposalPolicy {
        use ProposalKind::*;

        let governed = |executor_class| ProposalPolicy {
            proposer: ProposerRole::SubAdmin,
            approver_class: ApproverClass::Admin,
            executor_class,
            quorum: Quorum::Majority,
        };

        match self {
            UpdateOwner { .. } => ProposalPolicy {
                proposer: ProposerRole::Admin,
                approver_class: ApproverClass::Admin,
                executor_class: ExecutorClass::Owner,
                quorum: Quorum::Unanimous,
            },
            TransferSolToDeployer { .. } => ProposalPolicy {
                proposer: ProposerRole::TokenCreator,
                approver_class: ApproverClass::Deployer,
                executor_class: ExecutorClass::Creator,
                quorum: Quorum::Fixed(1),
            },
            TransferSolToCreator { .. } => ProposalPolicy {
                proposer: ProposerRole::TokenCreator,
                approver_class: ApproverClass::Admin,
                executor_class: ExecutorClass::Admin,
                quorum: Quorum::Majority,
            },
            UpdateFees { .. } => governed(ExecutorClass::Admin),
            AddAdmin { .. }
            | RemoveAdmin { .. }
            | AddDeployer { .. }
            | RemoveDeployer { .. }
            | PublishToMarket { .. }
            | RemoveLiquidity { .. }
            | BlockDao { .. }
            | BlockCreator { .. }
            | UnblockCreator { .. }
            | BlockUser { .. }
            | UnblockUser { .. } => governed(ExecutorClass::Owner),
        }
    }

    // Token the proposal acts on, if any
    pub fn mint(&self) -> Option<Pubkey> {
        use ProposalKind::*;

        match self {
            TransferSolToDeployer { mint, .. }
            | TransferSolToCreator { mint, .. }
            | PublishToMarket { mint, .. }
            | RemoveLiquidity { mint, .. }
            | BlockDao { mint }
            | BlockCreator { mint, .. }
            | UpdateFees { mint, .. } => Some(*mint),
            _ => None,
        }
    }

    // Only the named deployer may sign off a transfer to themselves
    pub fn designated_approver(&self) -> Option<Pubkey> {
        match self {
            ProposalKind::TransferSolToDeployer { deployer, .. } => Some(*deployer),
            _ => None,
        }
    }

    // Identity of the proposal payload, used to detect duplicates
    pub fn digest(&self) -> Result<[u8; 32]> {
        let mut payload = Vec::with_capacity(Self::INIT_SPACE);
        self.serialize(&mut payload)
            .map_err(|_| LaunchpadError::Serialization)?;
        Ok(hashv(&[PROPOSAL, &payload]).to_bytes())
    }

    pub fn ensure_matches(&self, expected: &ProposalKind) -> Result<()> {
        require!(
            std::mem::discriminant(self) == std::mem::discriminant(expected),
            LaunchpadError::InvalidProposalType
        );
        require!(self == expected, LaunchpadError::AccountMisMatch);
        Ok(())
    }

    pub fn label(&self) -> &'static str {
        use ProposalKind::*;

        match self {
            UpdateOwner { .. } => "UpdateOwner",
            AddAdmin { .. } => "AddAdmin",
            RemoveAdmin { .. } => "RemoveAdmin",
            AddDeployer { .. } => "AddDeployer",
            RemoveDeployer { .. } => "RemoveDeployer",
            TransferSolToDeployer { .. } => "TransferSolToDeployer",
            TransferSolToCreator { .. } => "TransferSolToCreator",
            PublishToMarket { .. } => "PublishToMarket",
            RemoveLiquidity { .. } => "RemoveLiquidity",
            BlockDao { .. } => "BlockDao",
            BlockCreator { .. } => "BlockCreator",
            UnblockCreator { .. } => "UnblockCreator",
            BlockUser { .. } => "BlockUser",
            UnblockUser { .. } => "UnblockUser",
            UpdateFees { .. } => "UpdateFees",
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ProposalStatus {
    Pending,
    Approved { timestamp: i64 },
    Rejected { timestamp: i64 },
}

// A single governed action
// Seeds: ["proposal", id]
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // Sequential id handed out by the ProposalRegistry
    pub id: u32,

    pub kind: ProposalKind,

    pub created_by: Pubkey,

    pub created_at: i64,

    pub approver_class: ApproverClass,

    pub executor_class: ExecutorClass,

    // Frozen at creation even if the approver class later grows or shrinks
    pub approver_threshold: u8,

    // Approvals are historical facts and are never removed
    #[max_len(MAX_APPROVERS)]
    pub approvers: Vec<Pubkey>,

    pub status: ProposalStatus,

    // Set exactly once, only from Approved
    pub executed_at: Option<i64>,

    pub digest: [u8; 32],

    pub bump: u8,
}

impl Proposal {
    pub fn open(
        &mut self,
        id: u32,
        kind: ProposalKind,
        created_by: Pubkey,
        config: &GlobalConfig,
        digest: [u8; 32],
        now: i64,
        bump: u8,
    ) -> Result<()> {
        let policy = kind.policy();
        let class_size = policy.approver_class.members(config).len();

        self.id = id;
        self.kind = kind;
        self.created_by = created_by;
        self.created_at = now;
        self.approver_class = policy.approver_class;
        self.executor_class = policy.executor_class;
        self.approver_threshold = policy.quorum.threshold(class_size)?;
        self.approvers = Vec::new();
        self.status = ProposalStatus::Pending;
        self.executed_at = None;
        self.digest = digest;
        self.bump = bump;
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == ProposalStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.status, ProposalStatus::Approved { .. })
    }

    pub fn is_executed(&self) -> bool {
        self.executed_at.is_some()
    }

    // Rejected and executed proposals take no further action
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, ProposalStatus::Rejected { .. }) || self.is_executed()
    }

    // Owner may close anything that is no longer collecting votes,
    // including an approved proposal whose execution can no longer succeed
    pub fn is_closable(&self) -> bool {
        self.is_terminal() || self.is_approved()
    }

    pub fn has_approved(&self, key: &Pubkey) -> bool {
        self.approvers.contains(key)
    }

    // Role gate shared by approve and reject
    pub fn can_vote(&self, config: &GlobalConfig, voter: &Pubkey) -> bool {
        if !self.approver_class.members(config).contains(voter) {
            return false;
        }
        match self.kind.designated_approver() {
            Some(designated) => designated == *voter,
            None => true,
        }
    }

    fn ensure_pending(&self) -> Result<()> {
        match self.status {
            ProposalStatus::Pending => Ok(()),
            ProposalStatus::Approved { .. } => err!(LaunchpadError::AlreadyApproved),
            ProposalStatus::Rejected { .. } => err!(LaunchpadError::AlreadyRejected),
        }
    }

    // Records an approval; returns true when this approval reached the threshold
    pub fn approve(&mut self, approver: Pubkey, now: i64) -> Result<bool> {
        require!(!self.has_approved(&approver), LaunchpadError::AlreadyApproved);
        self.ensure_pending()?;
        require!(
            self.approvers.len() < MAX_APPROVERS,
            LaunchpadError::CapacityExceeded
        );

        self.approvers.push(approver);

        if self.approvers.len() >= self.approver_threshold as usize {
            self.status = ProposalStatus::Approved { timestamp: now };
            return Ok(true);
        }
        Ok(false)
    }

    pub fn reject(&mut self, now: i64) -> Result<()> {
        self.ensure_pending()?;
        self.status = ProposalStatus::Rejected { timestamp: now };
        Ok(())
    }

    // Common precondition block of every execute instruction
    pub fn ensure_executable(
        &self,
        expected: &ProposalKind,
        config: &GlobalConfig,
        executor: &Pubkey,
        token_creator: Option<&Pubkey>,
    ) -> Result<()> {
        self.kind.ensure_matches(expected)?;
        require!(!self.is_executed(), LaunchpadError::AlreadyExecuted);
        require!(self.is_approved(), LaunchpadError::NotApproved);
        require!(
            self.executor_class.permits(config, executor, token_creator),
            LaunchpadError::Unauthorized
        );
        Ok(())
    }

    pub fn mark_executed(&mut self, now: i64) -> Result<()> {
        require!(!self.is_executed(), LaunchpadError::AlreadyExecuted);
        require!(self.is_approved(), LaunchpadError::NotApproved);
        self.executed_at = Some(now);
        Ok(())
    }
}

// Hands out proposal ids and remembers which payloads are still open
// Seeds: ["proposals"]
#[account]
#[derive(InitSpace)]
pub struct ProposalRegistry {
    // Next id to assign, starts at 1 and is never reused
    pub next_id: u32,

    // Digests of proposals that are pending or approved but not yet executed
    #[max_len(MAX_OPEN_PROPOSALS)]
    pub open: Vec<[u8; 32]>,

    pub bump: u8,
}

impl ProposalRegistry {
    pub fn bootstrap(&mut self, bump: u8) {
        self.next_id = 1;
        self.open = Vec::new();
        self.bump = bump;
    }

    // Reserves the next id and marks the payload as open
    pub fn register(&mut self, digest: [u8; 32]) -> Result<u32> {
        require!(
            !self.open.contains(&digest),
            LaunchpadError::DuplicateProposal
        );
        require!(
            self.open.len() < MAX_OPEN_PROPOSALS,
            LaunchpadError::CapacityExceeded
        );

        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(LaunchpadError::Overflow)?;
        self.open.push(digest);
        Ok(id)
    }

    pub fn release(&mut self, digest: &[u8; 32]) {
        self.open.retain(|open| open != digest);
    }
}
