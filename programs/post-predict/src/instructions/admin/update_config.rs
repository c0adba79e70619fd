use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::SEED_MARKET_CONFIG;
use crate::state::MarketConfig;
use crate::events::ConfigUpdated;
use crate::errors::MarketError;

#[derive(Accounts)]
pub struct ConfigAdmin<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET_CONFIG],
        bump = market_config.bump,
        constraint = market_config.is_admin(&admin.key()) @ MarketError::Unauthorized
    )]
    pub market_config: Account<'info, MarketConfig>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetFee<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET_CONFIG],
        bump = market_config.bump,
        constraint = market_config.is_admin(&admin.key()) @ MarketError::Unauthorized
    )]
    pub market_config: Account<'info, MarketConfig>,
    pub admin: Signer<'info>,
    #[account(
        constraint = treasury.mint == market_config.collateral_mint @ MarketError::InvalidMint,
    )]
    pub treasury: Account<'info, TokenAccount>,
}

pub fn set_enabled(ctx: Context<ConfigAdmin>, enabled: bool) -> Result<()> {
    let config = &mut ctx.accounts.market_config;
    config.set_enabled(enabled);
    msg!("Prediction markets {}", if enabled { "enabled" } else { "disabled" });
    emit_config(config);
    Ok(())
}

pub fn set_fee(ctx: Context<SetFee>, fee_bps: u16) -> Result<()> {
    let treasury = ctx.accounts.treasury.key();
    let config = &mut ctx.accounts.market_config;
    config.set_fee(fee_bps, treasury)?;
    msg!("Fee set to {} bps, treasury {}", fee_bps, treasury);
    emit_config(config);
    Ok(())
}

pub fn set_max_options(ctx: Context<ConfigAdmin>, max_options: u8) -> Result<()> {
    let config = &mut ctx.accounts.market_config;
    config.set_max_options(max_options)?;
    emit_config(config);
    Ok(())
}

pub fn transfer_admin(ctx: Context<ConfigAdmin>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.market_config;
    config.admin = new_admin;
    msg!("Admin transferred from {} to {}", ctx.accounts.admin.key(), new_admin);
    emit_config(config);
    Ok(())
}

fn emit_config(config: &MarketConfig) {
    emit!(ConfigUpdated {
        admin: config.admin,
        enabled: config.enabled,
        fee_bps: config.fee_bps,
        treasury: config.treasury,
        max_options: config.max_options,
    });
}
