pub mod enter;
pub mod initialize_config;
pub mod pick_winner;
pub mod queries;
pub mod set_min_stake;

pub use enter::*;
pub use initialize_config::*;
pub use pick_winner::*;
pub use queries::*;
pub use set_min_stake::*;
