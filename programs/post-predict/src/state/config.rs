use anchor_lang::prelude::*;

use crate::constants::{MAX_FEE_BPS, MAX_OPTIONS_CAP};
use crate::errors::MarketError;

#[account]
#[derive(Debug, PartialEq)]
pub struct MarketConfig {
    pub admin: Pubkey,           // 32
    pub enabled: bool,           // 1
    pub fee_bps: u16,            // 2
    pub treasury: Pubkey,        // 32 (collateral token account)
    pub max_options: u8,         // 1
    pub collateral_mint: Pubkey, // 32
    pub total_markets: u64,      // 8
    pub bump: u8,                // 1
}

impl MarketConfig {
    pub const LEN: usize = 8 + 32 + 1 + 2 + 32 + 1 + 32 + 8 + 1;

    pub fn is_admin(&self, signer: &Pubkey) -> bool {
        self.admin == *signer
    }

    pub fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require!(self.is_admin(signer), MarketError::Unauthorized);
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_fee(&mut self, fee_bps: u16, treasury: Pubkey) -> Result<()> {
        require!(fee_bps <= MAX_FEE_BPS, MarketError::InvalidFee);
        self.fee_bps = fee_bps;
        self.treasury = treasury;
        Ok(())
    }

    pub fn set_max_options(&mut self, max_options: u8) -> Result<()> {
        require!(
            max_options >= 1 && max_options <= MAX_OPTIONS_CAP,
            MarketError::InvalidMaxOptions
        );
        self.max_options = max_options;
        Ok(())
    }

    /// Hands out the next market id.
    pub fn next_market_id(&mut self) -> Result<u64> {
        let id = self.total_markets;
        self.total_markets = self
            .total_markets
            .checked_add(1)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(id)
    }
}
