use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Prediction markets are disabled")]
    ConfigDisabled,
    /// Raised by account loading rather than by a handler: a missing market
    /// PDA fails Anchor's owner/discriminator checks before any code runs.
    #[msg("Market not found")]
    MarketNotFound,
    #[msg("Market does not belong to this post")]
    PostMismatch,
    #[msg("Market already resolved")]
    AlreadyResolved,
    #[msg("Betting period has ended")]
    BettingClosed,
    #[msg("Option does not exist on this market")]
    InvalidOption,
    #[msg("Market needs at least one option")]
    OptionsEmpty,
    #[msg("Too many options for the configured maximum")]
    OptionsTooMany,
    #[msg("Fee exceeds maximum (25%)")]
    InvalidFee,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Bet amount must be greater than 0")]
    ZeroAmount,
    #[msg("Option label too long (max 64 bytes)")]
    LabelTooLong,
    #[msg("Market bet ledger is full")]
    LedgerFull,
    #[msg("Token account mint does not match the collateral mint")]
    InvalidMint,
    #[msg("Max options must be between 1 and 16")]
    InvalidMaxOptions,
    #[msg("Payout account does not match the expected winner")]
    PayoutAccountMismatch,
    #[msg("Market has reached its limit of distinct bettors")]
    TooManyBettors,
    #[msg("The same token account was passed for two different roles")]
    DuplicateAccount,
}
