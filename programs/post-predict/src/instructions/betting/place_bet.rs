use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_MARKET_CONFIG};
use crate::state::{MarketConfig, Market};
use crate::events::BetPlaced;
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(post_id: u64)]
pub struct PlaceBet<'info> {
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

    /// Stakes are paid straight to the post owner; nothing is escrowed. A post
    /// owner betting on their own market must fund the bet from another
    /// account.
    #[account(
        mut,
        constraint = post_owner_token.mint == market_config.collateral_mint @ MarketError::InvalidMint,
        constraint = post_owner_token.owner == market.post_owner @ MarketError::PostMismatch,
        constraint = post_owner_token.key() != bettor_token.key() @ MarketError::DuplicateAccount,
    )]
    pub post_owner_token: Account<'info, TokenAccount>,

    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_place_bet(
    ctx: Context<PlaceBet>,
    _post_id: u64,
    option_id: u8,
    amount: u64,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    let bet = market.place_bet(
        &ctx.accounts.market_config,
        ctx.accounts.bettor.key(),
        option_id,
        amount,
        ctx.accounts.bettor_token.amount,
        clock.unix_timestamp,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bettor_token.to_account_info(),
                to: ctx.accounts.post_owner_token.to_account_info(),
                authority: ctx.accounts.bettor.to_account_info(),
            },
        ),
        bet.amount,
    )?;

    emit!(BetPlaced {
        market_id: market.market_id,
        bettor: bet.bettor,
        option_id: bet.option_id,
        amount: bet.amount,
    });

    Ok(())
}
