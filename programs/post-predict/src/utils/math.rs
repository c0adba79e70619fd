use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::MarketError;

/// `a * b / c` through a u128 intermediate, failing instead of wrapping when
/// the quotient does not fit back into a u64.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(MarketError::ArithmeticOverflow)?;
    let quotient = product
        .checked_div(c as u128)
        .ok_or(MarketError::ArithmeticOverflow)?;
    u64::try_from(quotient).map_err(|_| error!(MarketError::ArithmeticOverflow))
}

/// Platform cut of `total`, rounded down.
pub fn calculate_fee(total: u64, fee_bps: u16) -> Result<u64> {
    mul_div(total, fee_bps as u64, BPS_DENOMINATOR)
}

/// Winner's share of `distributable`, proportional to their stake on the
/// winning option. Nobody staked on the winner means nothing is paid.
pub fn pro_rata_payout(stake: u64, distributable: u64, winning_total: u64) -> Result<u64> {
    if winning_total == 0 {
        return Ok(0);
    }
    mul_div(stake, distributable, winning_total)
}

/// Value returned to a bettor exiting an open market.
///
/// With `S` the market total and `b` the bet, the remaining pool is
/// `S' = S - b` and the payout is `b * S' / S'` (or `b` when `S' == 0`).
/// This always evaluates to `b`; it is kept in this form so the event schema
/// and call sites stay stable if the pricing rule is ever revisited.
pub fn withdrawal_value(bet_amount: u64, total_staked: u64) -> Result<u64> {
    let remaining = total_staked
        .checked_sub(bet_amount)
        .ok_or(MarketError::ArithmeticOverflow)?;
    if remaining == 0 {
        return Ok(bet_amount);
    }
    mul_div(bet_amount, remaining, remaining)
}
