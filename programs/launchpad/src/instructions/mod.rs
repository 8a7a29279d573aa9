// Instructions module
// - initialize
// - add_sub_admin / remove_sub_admin (owner only)
// - update_fee_account, add_creator (sub-admin)
// - manage_users (token creator)
// - has_role, is_user_blocked (read only)
// - create_dao, start_dao, start_party_round, end_dao, update_status
// - commit, claim, burn
// - create_proposal, approve_proposal, reject_proposal, close_proposal
// - execute_* (via proposal), add_liquidity, remove_liquidity (via proposal)
// - get_estimated_amount, buy, sell

pub mod add_creator;
pub mod add_liquidity;
pub mod approve_proposal;
pub mod burn;
pub mod buy;
pub mod claim;
pub mod close_proposal;
pub mod commit;
pub mod create_dao;
pub mod create_proposal;
pub mod execute_block_dao;
pub mod execute_creator_block;
pub mod execute_role_update;
pub mod execute_transfer_sol;
pub mod execute_update_fees;
pub mod execute_user_block;
pub mod get_estimated_amount;
pub mod initialize;
pub mod manage_dao;
pub mod manage_sub_admins;
pub mod manage_users;
pub mod queries;
pub mod reject_proposal;
pub mod remove_liquidity;
pub mod sell;
pub mod update_fee_account;

pub use add_creator::*;
pub use add_liquidity::*;
pub use approve_proposal::*;
pub use burn::*;
pub use buy::*;
pub use claim::*;
pub use close_proposal::*;
pub use commit::*;
pub use create_dao::*;
pub use create_proposal::*;
pub use execute_block_dao::*;
pub use execute_creator_block::*;
pub use execute_role_update::*;
pub use execute_transfer_sol::*;
pub use execute_update_fees::*;
pub use execute_user_block::*;
pub use get_estimated_amount::*;
pub use initialize::*;
pub use manage_dao::*;
pub use manage_sub_admins::*;
pub use manage_users::*;
pub use queries::*;
pub use reject_proposal::*;
pub use remove_liquidity::*;
pub use sell::*;
pub use update_fee_account::*;
