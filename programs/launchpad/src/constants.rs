use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["global_config"]
#[constant]
pub const GLOBAL_CONFIG: &[u8] = b"global_config";

// Seeds for PDA derivation: ["proposals"]
#[constant]
pub const PROPOSAL_REGISTRY: &[u8] = b"proposals";

// Seeds for PDA derivation: ["proposal", proposal_id]
#[constant]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["creators"]
#[constant]
pub const CREATORS: &[u8] = b"creators";

// Seeds for PDA derivation: ["blacklist"]
#[constant]
pub const BLACKLIST: &[u8] = b"blacklist";

// Seeds for PDA derivation: ["dao_list"]
#[constant]
pub const DAO_LIST: &[u8] = b"dao_list";

// Seeds for PDA derivation: ["mint", name]
#[constant]
pub const MINT: &[u8] = b"mint";

// Seeds for PDA derivation: ["fund_data", mint]
#[constant]
pub const FUND_DATA: &[u8] = b"fund_data";

// Seeds for PDA derivation: ["commitment", mint]
#[constant]
pub const COMMITMENT: &[u8] = b"commitment";

// Seeds for PDA derivation: ["users", mint]
#[constant]
pub const USERS: &[u8] = b"users";

// Escrow seeds: ["escrow", "sol", mint] holds lamports, ["escrow", "mint", mint] holds tokens
#[constant]
pub const ESCROW: &[u8] = b"escrow";

#[constant]
pub const SOL: &[u8] = b"sol";

// Seeds for PDA derivation: ["trade", mint]
#[constant]
pub const TRADE: &[u8] = b"trade";

// Reserve seeds: ["reserve", "sol", mint] and ["reserve", "mint", mint]
#[constant]
pub const RESERVE: &[u8] = b"reserve";

// Fixed-point scale for every percentage in the program
// 100% = 100_000_000, 1% = 1_000_000
#[constant]
pub const FEE_SCALE: u64 = 100_000_000;

// Smallest accepted commitment (0.1 SOL)
#[constant]
pub const MIN_COMMITMENT_LAMPORTS: u64 = 100_000_000;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// Share of the raised SOL that creators and deployers may withdraw (90%)
pub const WITHDRAWABLE_PERCENT: u64 = 90_000_000;

// Split of the withdrawable SOL: creators 49%, deployers 51%
pub const CREATOR_SHARE_PERCENT: u64 = 49_000_000;
pub const DEPLOYER_SHARE_PERCENT: u64 = 51_000_000;

// Tokens minted on top of the sale amount to seed the reserve (10% of the sale)
pub const LIQUIDITY_PERCENT: u64 = 10_000_000;

// Maximum token name length used in the mint seed
pub const MAX_NAME_LEN: usize = 32;

// Capacity limits for bounded lists
pub const MAX_ADMINS: usize = 10;
pub const MAX_SUB_ADMINS: usize = 10;
pub const MAX_DEPLOYERS: usize = 10;
pub const MAX_APPROVERS: usize = 10;
pub const MAX_OPEN_PROPOSALS: usize = 64;
pub const MAX_CREATORS: usize = 50;
pub const MAX_BLACKLIST: usize = 200;
pub const MAX_VIP_USERS: usize = 100;
pub const MAX_PARTY_USERS: usize = 100;
pub const MAX_COMMITERS: usize = 100;
pub const MAX_DAOS: usize = 200;
