use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::{MAX_FEE_BPS, MAX_OPTIONS_CAP, SEED_MARKET_CONFIG};
use crate::state::MarketConfig;
use crate::events::ConfigInitialized;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        seeds = [SEED_MARKET_CONFIG],
        bump,
        payer = admin,
        space = MarketConfig::LEN
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    #[account(
        constraint = treasury.mint == collateral_mint.key() @ MarketError::InvalidMint,
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_config(
    ctx: Context<InitConfig>,
    fee_bps: u16,
    max_options: u8,
) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BPS, MarketError::InvalidFee);
    require!(
        max_options >= 1 && max_options <= MAX_OPTIONS_CAP,
        MarketError::InvalidMaxOptions
    );

    let config = &mut ctx.accounts.market_config;
    config.admin = ctx.accounts.admin.key();
    config.enabled = true;
    config.fee_bps = fee_bps;
    config.treasury = ctx.accounts.treasury.key();
    config.max_options = max_options;
    config.collateral_mint = ctx.accounts.collateral_mint.key();
    config.total_markets = 0;
    config.bump = ctx.bumps.market_config;

    emit!(ConfigInitialized {
        admin: config.admin,
        fee_bps: config.fee_bps,
        treasury: config.treasury,
        max_options: config.max_options,
    });

    Ok(())
}
