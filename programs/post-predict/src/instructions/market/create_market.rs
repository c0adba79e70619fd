use anchor_lang::prelude::*;
use crate::constants::{SEED_MARKET, SEED_MARKET_CONFIG};
use crate::state::{MarketConfig, Market};
use crate::events::MarketCreated;
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(post_id: u64)] // one market per post, derived from the post id
pub struct CreateMarket<'info> {
    #[account(
        init,
        seeds = [SEED_MARKET, post_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Market::LEN
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [SEED_MARKET_CONFIG],
        bump = market_config.bump,
        constraint = market_config.is_admin(&admin.key()) @ MarketError::Unauthorized,
    )]
    pub market_config: Account<'info, MarketConfig>,

    /// Author of the post; receives the stakes placed on it.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Co-signs to vouch that `creator` owns `post_id`.
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_create_market(
    ctx: Context<CreateMarket>,
    post_id: u64,
    options: Vec<String>,
    deadline: Option<i64>,
) -> Result<()> {
    let config = &mut ctx.accounts.market_config;
    let clock = Clock::get()?;

    // Validate against the current config before consuming an id.
    let mut market = Market::new(
        config,
        config.total_markets,
        post_id,
        ctx.accounts.creator.key(),
        options,
        deadline,
        clock.unix_timestamp,
        ctx.bumps.market,
    )?;
    market.market_id = config.next_market_id()?;

    emit!(MarketCreated {
        market_id: market.market_id,
        post_id,
        options: market.labels(),
        deadline,
    });

    ctx.accounts.market.set_inner(market);

    Ok(())
}
