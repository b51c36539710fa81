// access registry
pub mod grant_access;
pub mod initialize;
pub mod revoke_access;
pub mod set_administrator;
pub mod set_bridge;
pub mod set_governance;
pub mod set_reward_address;

// pause switch
pub mod pause;
pub mod unpause;

// market registry and risk parameters
pub mod activate_market;
pub mod deactivate_market;
pub mod get_market_active;
pub mod set_maximum_leverage;
pub mod set_reward_basis_points;

// accounting
pub mod balance_of;
pub mod burn;
pub mod mint;
pub mod set_total_in_positions;
pub mod transfer;

// positions
pub mod get_position;
pub mod set_position;

// bridge anchor
pub mod set_side_chain_merkle_root;

pub use activate_market::*;
pub use balance_of::*;
pub use burn::*;
pub use deactivate_market::*;
pub use get_market_active::*;
pub use get_position::*;
pub use grant_access::*;
pub use initialize::*;
pub use mint::*;
pub use pause::*;
pub use revoke_access::*;
pub use set_administrator::*;
pub use set_bridge::*;
pub use set_governance::*;
pub use set_maximum_leverage::*;
pub use set_position::*;
pub use set_reward_address::*;
pub use set_reward_basis_points::*;
pub use set_side_chain_merkle_root::*;
pub use set_total_in_positions::*;
pub use transfer::*;
pub use unpause::*;
