use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_MARKET_CONFIG};
use crate::state::{MarketConfig, Market};
use crate::events::BetWithdrawn;
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(post_id: u64)]
pub struct WithdrawBet<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET, post_id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.post_id == post_id @ MarketError::PostMismatch,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        seeds = [SEED_MARKET_CONFIG],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        mut,
        constraint = bettor_token.mint == market_config.collateral_mint @ MarketError::InvalidMint,
        constraint = bettor_token.owner == bettor.key() @ MarketError::Unauthorized,
    )]
    pub bettor_token: Account<'info, TokenAccount>,

    /// Funds the refund. Usually held by the post owner, who co-signs.
    #[account(
        mut,
        constraint = repayment_source.mint == market_config.collateral_mint @ MarketError::InvalidMint,
        constraint = repayment_source.owner == repayment_authority.key() @ MarketError::Unauthorized,
        constraint = repayment_source.key() != bettor_token.key() @ MarketError::DuplicateAccount,
    )]
    pub repayment_source: Account<'info, TokenAccount>,

    pub repayment_authority: Signer<'info>,

    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_withdraw_bet(ctx: Context<WithdrawBet>, _post_id: u64) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    let withdrawal = market.withdraw_bet(
        &ctx.accounts.bettor.key(),
        ctx.accounts.repayment_source.amount,
        clock.unix_timestamp,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.repayment_source.to_account_info(),
                to: ctx.accounts.bettor_token.to_account_info(),
                authority: ctx.accounts.repayment_authority.to_account_info(),
            },
        ),
        withdrawal.withdrawal_amount,
    )?;

    emit!(BetWithdrawn {
        market_id: market.market_id,
        bettor: withdrawal.bettor,
        option_id: withdrawal.option_id,
        original_amount: withdrawal.original_amount,
        withdrawal_amount: withdrawal.withdrawal_amount,
    });

    Ok(())
}
