pub const SEED_MARKET_CONFIG: &[u8] = b"market_config";
pub const SEED_MARKET: &[u8] = b"market";

pub const BPS_DENOMINATOR: u64 = 10_000;
/// Highest platform cut accepted by `set_fee` (25%).
pub const MAX_FEE_BPS: u16 = 2_500;

/// Hard ceiling for `MarketConfig::max_options`; bounds the market account size.
pub const MAX_OPTIONS_CAP: u8 = 16;
pub const MAX_LABEL_LEN: usize = 64;
/// Active bet rows a single market account can hold.
pub const MAX_BETS: usize = 64;
/// Distinct bettors per market. `resolve` takes one payout account per
/// winner on top of its 6 named accounts and the program id, so this keeps a
/// fully-subscribed market inside a single legacy transaction (1232 bytes)
/// even with a separate fee payer.
pub const MAX_BETTORS: usize = 20;
