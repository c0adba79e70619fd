use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("63DTgshwscCa5deRbA9ZFfb2orxtwiWh9MFQDXmSrYkS");

#[program]
pub mod post_predict {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, fee_bps: u16, max_options: u8) -> Result<()> {
        instructions::admin::init_config::process_init_config(ctx, fee_bps, max_options)
    }

    pub fn set_enabled(ctx: Context<ConfigAdmin>, enabled: bool) -> Result<()> {
        instructions::admin::update_config::set_enabled(ctx, enabled)
    }

    pub fn set_fee(ctx: Context<SetFee>, fee_bps: u16) -> Result<()> {
        instructions::admin::update_config::set_fee(ctx, fee_bps)
    }

    pub fn set_max_options(ctx: Context<ConfigAdmin>, max_options: u8) -> Result<()> {
        instructions::admin::update_config::set_max_options(ctx, max_options)
    }

    pub fn transfer_admin(ctx: Context<ConfigAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::update_config::transfer_admin(ctx, new_admin)
    }

    pub fn update_post_owner(ctx: Context<UpdatePostOwner>, post_id: u64, new_owner: Pubkey) -> Result<()> {
        instructions::admin::update_post_owner::process_update_post_owner(ctx, post_id, new_owner)
    }

    pub fn create_market(
        ctx: Context<CreateMarket>,
        post_id: u64,
        options: Vec<String>,
        deadline: Option<i64>,
    ) -> Result<()> {
        instructions::market::create_market::process_create_market(ctx, post_id, options, deadline)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, post_id: u64, option_id: u8, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, post_id, option_id, amount)
    }

    pub fn withdraw_bet(ctx: Context<WithdrawBet>, post_id: u64) -> Result<()> {
        instructions::betting::withdraw_bet::process_withdraw_bet(ctx, post_id)
    }

    pub fn resolve<'info>(
        ctx: Context<'_, '_, '_, 'info, ResolveMarket<'info>>,
        post_id: u64,
        winning_option_id: u8,
    ) -> Result<()> {
        instructions::resolution::resolve_market::process_resolve_market(ctx, post_id, winning_option_id)
    }
}
