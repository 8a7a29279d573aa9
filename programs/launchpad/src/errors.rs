use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // Authorization errors
    #[msg("Signer does not hold the role required for this action")]
    Unauthorized,

    #[msg("Action is not permitted in the current state")]
    PermissionDenied,

    #[msg("The owner cannot be removed from the admin set")]
    OwnerProtected,

    // Lifecycle / proposal state errors
    #[msg("Operation is not valid for the current DAO status")]
    InvalidDaoStatus,

    #[msg("Proposal has already been executed")]
    AlreadyExecuted,

    #[msg("Already approved")]
    AlreadyApproved,

    #[msg("Proposal has already been rejected")]
    AlreadyRejected,

    #[msg("Proposal has not been approved")]
    NotApproved,

    #[msg("Proposal is still open and cannot be closed")]
    ProposalStillOpen,

    #[msg("Nothing left to claim right now")]
    AlreadyClaimed,

    #[msg("Address is not blocked")]
    NotBlocked,

    // Validation errors
    #[msg("Amount can't be zero")]
    AmountCantBeZero,

    #[msg("Amount is below the minimum commitment")]
    MinimumAmountNotMet,

    #[msg("Commitment exceeds the allowed amount")]
    CommitAmountExceeded,

    #[msg("Amount exceeds the withdraw limit")]
    ExceedsWithdrawLimit,

    #[msg("Fee percent exceeds 100%")]
    InvalidFeePercent,

    #[msg("Percent must be greater than zero and at most 100%")]
    InvalidPercent,

    #[msg("Token name must be between 1 and 32 bytes")]
    InvalidName,

    #[msg("Invalid parameter provided")]
    InvalidParameter,

    #[msg("Output is below the requested minimum")]
    SlippageExceeded,

    #[msg("Trade would produce zero output")]
    ZeroOutput,

    #[msg("Reserve has insufficient liquidity")]
    InsufficientLiquidity,

    #[msg("Account is not eligible for this round")]
    InEligible,

    #[msg("Account is blocked")]
    BlockedAccount,

    #[msg("No members in the approver class")]
    EmptyApproverClass,

    // Consistency errors
    #[msg("Arguments do not match the approved proposal")]
    AccountMisMatch,

    #[msg("Invalid proposal type for this instruction")]
    InvalidProposalType,

    // Lookup errors
    #[msg("Record not found")]
    NotFound,

    #[msg("Address not found")]
    AddressNotFound,

    // Duplicate errors
    #[msg("User is already listed")]
    DuplicateUser,

    #[msg("An equivalent proposal is already open")]
    DuplicateProposal,

    #[msg("Token is already listed")]
    DuplicateDao,

    #[msg("Address is present in the admin list")]
    PresentInAdminList,

    #[msg("Address is present in the deployer list")]
    PresentInDeployerList,

    #[msg("Address is present in the creator list")]
    PresentInCreatorList,

    // Configuration errors
    #[msg("Fee account does not match the configured fee collector")]
    UnknownFeeAccount,

    #[msg("Receiver does not match the proposal")]
    UnknownReceiver,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,

    #[msg("Division by zero")]
    DivisionByZero,

    // Storage errors
    #[msg("List capacity exceeded")]
    CapacityExceeded,

    #[msg("Failed to serialize proposal payload")]
    Serialization,
}
