pub mod blacklist;
pub mod commitments;
pub mod creators;
pub mod dao_list;
pub mod fund_data_store;
pub mod global_config;
pub mod proposal;
pub mod trade;
pub mod users;

pub use blacklist::*;
pub use commitments::*;
pub use creators::*;
pub use dao_list::*;
pub use fund_data_store::*;
pub use global_config::*;
pub use proposal::*;
pub use trade::*;
pub use users::*;
