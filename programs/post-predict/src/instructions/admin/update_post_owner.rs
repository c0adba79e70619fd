use anchor_lang::prelude::*;
use crate::constants::{SEED_MARKET, SEED_MARKET_CONFIG};
use crate::state::{MarketConfig, Market};
use crate::events::PostOwnerUpdated;
use crate::errors::MarketError;

/// Re-points stake deliveries after the post changed hands elsewhere.
#[derive(Accounts)]
#[instruction(post_id: u64)]
pub struct UpdatePostOwner<'info> {
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
        constraint = market_config.is_admin(&admin.key()) @ MarketError::Unauthorized
    )]
    pub market_config: Account<'info, MarketConfig>,

    pub admin: Signer<'info>,
}

pub fn process_update_post_owner(
    ctx: Context<UpdatePostOwner>,
    post_id: u64,
    new_owner: Pubkey,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    require!(!market.resolved, MarketError::AlreadyResolved);

    let previous_owner = market.post_owner;
    market.post_owner = new_owner;

    emit!(PostOwnerUpdated {
        market_id: market.market_id,
        post_id,
        previous_owner,
        new_owner,
    });

    Ok(())
}
