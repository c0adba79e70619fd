use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_MARKET_CONFIG};
use crate::state::{MarketConfig, Market, WinnerPayout};
use crate::events::{Payout, Resolved};
use crate::errors::MarketError;

#[derive(Accounts)]
#[instruction(post_id: u64)]
pub struct ResolveMarket<'info> {
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

    /// Funds fee and payouts; must cover the whole pool.
    #[account(
        mut,
        constraint = payout_source.mint == market_config.collateral_mint @ MarketError::InvalidMint,
        constraint = payout_source.owner == resolver.key() @ MarketError::Unauthorized,
    )]
    pub payout_source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury.key() == market_config.treasury @ MarketError::PayoutAccountMismatch,
        constraint = treasury.key() != payout_source.key() @ MarketError::DuplicateAccount,
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub resolver: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // remaining_accounts: one writable token account per winner with a
    // nonzero payout, in settlement order, none of them `payout_source` or
    // `treasury`. At most MAX_BETTORS of them, which fits a legacy
    // transaction. Each payout is a token CPI; past a dozen winners the
    // client should request extra compute units (ComputeBudget) alongside
    // the instruction.
}

pub fn process_resolve_market<'info>(
    ctx: Context<'_, '_, '_, 'info, ResolveMarket<'info>>,
    _post_id: u64,
    winning_option_id: u8,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let config = &ctx.accounts.market_config;
    let clock = Clock::get()?;
    let resolver = ctx.accounts.resolver.key();

    // Authorization, single-shot guard and funding check all happen here,
    // before any token moves.
    let settlement = market.resolve(
        config,
        &resolver,
        winning_option_id,
        ctx.accounts.payout_source.amount,
        clock.unix_timestamp,
    )?;

    let winners: Vec<&WinnerPayout> = settlement.nonzero_payouts().collect();
    require!(
        ctx.remaining_accounts.len() == winners.len(),
        MarketError::PayoutAccountMismatch
    );
    let payout_source = ctx.accounts.payout_source.key();
    let treasury = ctx.accounts.treasury.key();
    for (info, payout) in ctx.remaining_accounts.iter().zip(winners.iter()) {
        require!(
            info.key() != payout_source && info.key() != treasury,
            MarketError::DuplicateAccount
        );
        require!(info.is_writable, MarketError::PayoutAccountMismatch);
        require_keys_eq!(*info.owner, token::ID, MarketError::PayoutAccountMismatch);
        let winner_token = TokenAccount::try_deserialize(&mut &info.data.borrow()[..])?;
        require_keys_eq!(winner_token.owner, payout.winner, MarketError::PayoutAccountMismatch);
        require_keys_eq!(winner_token.mint, config.collateral_mint, MarketError::InvalidMint);
    }

    if settlement.fee > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payout_source.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.resolver.to_account_info(),
                },
            ),
            settlement.fee,
        )?;
    }

    emit!(Resolved {
        market_id: market.market_id,
        winning_option_id,
        total_staked: settlement.total_staked,
        winning_total: settlement.winning_total,
        resolved_by: resolver,
    });

    for (info, payout) in ctx.remaining_accounts.iter().zip(winners.iter()) {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payout_source.to_account_info(),
                    to: info.clone(),
                    authority: ctx.accounts.resolver.to_account_info(),
                },
            ),
            payout.amount,
        )?;

        emit!(Payout {
            market_id: market.market_id,
            winner: payout.winner,
            amount: payout.amount,
        });
    }

    msg!(
        "Market {} resolved: option {}, fee {}, {} winner(s) paid",
        market.market_id,
        winning_option_id,
        settlement.fee,
        winners.len()
    );

    Ok(())
}
