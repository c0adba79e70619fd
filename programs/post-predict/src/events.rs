use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub fee_bps: u16,
    pub treasury: Pubkey,
    pub max_options: u8,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub enabled: bool,
    pub fee_bps: u16,
    pub treasury: Pubkey,
    pub max_options: u8,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub post_id: u64,
    pub options: Vec<String>,
    pub deadline: Option<i64>,
}

#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub option_id: u8,
    pub amount: u64,
}

/// `original_amount` and `withdrawal_amount` currently always match; both
/// are published so indexers keep working if exit pricing changes.
#[event]
pub struct BetWithdrawn {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub option_id: u8,
    pub original_amount: u64,
    pub withdrawal_amount: u64,
}

#[event]
pub struct Resolved {
    pub market_id: u64,
    pub winning_option_id: u8,
    pub total_staked: u64,
    pub winning_total: u64,
    pub resolved_by: Pubkey,
}

#[event]
pub struct Payout {
    pub market_id: u64,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PostOwnerUpdated {
    pub market_id: u64,
    pub post_id: u64,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
