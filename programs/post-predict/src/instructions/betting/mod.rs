pub mod place_bet;
pub mod withdraw_bet;

pub use place_bet::*;
pub use withdraw_bet::*;
