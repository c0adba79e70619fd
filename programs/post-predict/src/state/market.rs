use anchor_lang::prelude::*;

use crate::constants::{MAX_BETS, MAX_BETTORS, MAX_LABEL_LEN, MAX_OPTIONS_CAP};
use crate::errors::MarketError;
use crate::state::MarketConfig;
use crate::utils::math::{calculate_fee, pro_rata_payout, withdrawal_value};

/// Prediction market attached to a single post.
///
/// Stakes are not held by the program: each bet is paid straight to the post
/// owner, and withdrawals and settlement are funded from token accounts the
/// caller supplies. The market only keeps the ledger.
///
/// Until resolution the totals satisfy
/// `total_staked == Σ options[i].total_staked == Σ bets[j].amount`.
#[account]
#[derive(Debug, PartialEq)]
pub struct Market {
    pub market_id: u64,
    pub post_id: u64,
    /// Receives every stake placed on this market.
    pub post_owner: Pubkey,
    pub options: Vec<MarketOption>,     // max MAX_OPTIONS_CAP
    /// Active bets. Withdrawals swap the last row into the freed slot, so
    /// row order carries no meaning once anything has been withdrawn.
    pub bets: Vec<Bet>,                 // max MAX_BETS
    pub resolved: bool,
    pub winning_option: Option<u8>,
    pub betting_deadline: Option<i64>,
    pub total_staked: u64,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct MarketOption {
    pub id: u8,
    pub label: String, // max MAX_LABEL_LEN bytes
    pub total_staked: u64,
}

impl MarketOption {
    pub const LEN: usize = 1 + (4 + MAX_LABEL_LEN) + 8;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct Bet {
    pub bettor: Pubkey,
    pub option_id: u8,
    pub amount: u64,
    pub timestamp: i64,
}

impl Bet {
    pub const LEN: usize = 32 + 1 + 8 + 8;
}

/// Result of a successful `withdraw_bet`.
#[derive(Clone, Debug, PartialEq)]
pub struct Withdrawal {
    pub bettor: Pubkey,
    pub option_id: u8,
    pub original_amount: u64,
    pub withdrawal_amount: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WinnerPayout {
    pub winner: Pubkey,
    /// Sum of the winner's bets on the winning option.
    pub stake: u64,
    pub amount: u64,
}

/// Fee and payouts fixed at resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub winning_option: u8,
    pub total_staked: u64,
    pub fee: u64,
    pub distributable: u64,
    pub winning_total: u64,
    /// One row per distinct winner, in order of their first winning bet.
    pub payouts: Vec<WinnerPayout>,
}

impl Settlement {
    pub fn nonzero_payouts(&self) -> impl Iterator<Item = &WinnerPayout> {
        self.payouts.iter().filter(|p| p.amount > 0)
    }

    pub fn total_paid(&self) -> Result<u64> {
        self.payouts.iter().try_fold(0u64, |acc, p| {
            acc.checked_add(p.amount)
                .ok_or_else(|| error!(MarketError::ArithmeticOverflow))
        })
    }
}

impl Market {
    // 8 (discriminator)
    // 8 (market_id) + 8 (post_id) + 32 (post_owner)
    // 4 + MAX_OPTIONS_CAP * MarketOption::LEN (options)
    // 4 + MAX_BETS * Bet::LEN (bets)
    // 1 (resolved) + 1+1 (winning_option) + 1+8 (betting_deadline)
    // 8 (total_staked) + 8 (created_at) + 1+8 (resolved_at)
    // 1 (bump)
    pub const LEN: usize = 8
        + 8
        + 8
        + 32
        + (4 + MAX_OPTIONS_CAP as usize * MarketOption::LEN)
        + (4 + MAX_BETS * Bet::LEN)
        + 1
        + 2
        + 9
        + 8
        + 8
        + 9
        + 1;

    /// Builds a fresh market with option ids `0..labels.len()`.
    pub fn new(
        config: &MarketConfig,
        market_id: u64,
        post_id: u64,
        post_owner: Pubkey,
        labels: Vec<String>,
        betting_deadline: Option<i64>,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(config.enabled, MarketError::ConfigDisabled);
        require!(!labels.is_empty(), MarketError::OptionsEmpty);
        require!(
            labels.len() <= config.max_options.min(MAX_OPTIONS_CAP) as usize,
            MarketError::OptionsTooMany
        );

        let mut options = Vec::with_capacity(labels.len());
        for (id, label) in labels.into_iter().enumerate() {
            require!(label.len() <= MAX_LABEL_LEN, MarketError::LabelTooLong);
            options.push(MarketOption {
                id: id as u8,
                label,
                total_staked: 0,
            });
        }

        Ok(Self {
            market_id,
            post_id,
            post_owner,
            options,
            bets: Vec::new(),
            resolved: false,
            winning_option: None,
            betting_deadline,
            total_staked: 0,
            created_at: now,
            resolved_at: None,
            bump,
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|o| o.label.clone()).collect()
    }

    pub fn is_open(&self, now: i64) -> bool {
        !self.resolved && self.betting_deadline.map_or(true, |deadline| now < deadline)
    }

    fn ensure_open(&self, now: i64) -> Result<()> {
        require!(!self.resolved, MarketError::AlreadyResolved);
        if let Some(deadline) = self.betting_deadline {
            require!(now < deadline, MarketError::BettingClosed);
        }
        Ok(())
    }

    pub fn option(&self, option_id: u8) -> Result<&MarketOption> {
        self.options
            .get(option_id as usize)
            .ok_or_else(|| error!(MarketError::InvalidOption))
    }

    /// Index of the first ledger row owned by `bettor`.
    pub fn find_bet(&self, bettor: &Pubkey) -> Option<usize> {
        self.bets.iter().position(|bet| bet.bettor == *bettor)
    }

    /// Number of different bettors with at least one active row.
    pub fn distinct_bettors(&self) -> usize {
        self.bets
            .iter()
            .enumerate()
            .filter(|(i, bet)| self.find_bet(&bet.bettor) == Some(*i))
            .count()
    }

    /// Everything `bettor` currently has staked, across all rows and options.
    pub fn stake_of(&self, bettor: &Pubkey) -> Result<u64> {
        self.bets
            .iter()
            .filter(|bet| bet.bettor == *bettor)
            .try_fold(0u64, |acc, bet| {
                acc.checked_add(bet.amount)
                    .ok_or_else(|| error!(MarketError::ArithmeticOverflow))
            })
    }

    /// Records a new stake. `available` is the balance of the bettor's
    /// funding account; moving the tokens is left to the caller.
    pub fn place_bet(
        &mut self,
        config: &MarketConfig,
        bettor: Pubkey,
        option_id: u8,
        amount: u64,
        available: u64,
        now: i64,
    ) -> Result<Bet> {
        require!(config.enabled, MarketError::ConfigDisabled);
        self.ensure_open(now)?;
        let option_total = self.option(option_id)?.total_staked;
        require!(amount > 0, MarketError::ZeroAmount);
        require!(available >= amount, MarketError::InsufficientFunds);
        require!(self.bets.len() < MAX_BETS, MarketError::LedgerFull);
        if self.find_bet(&bettor).is_none() {
            require!(
                self.distinct_bettors() < MAX_BETTORS,
                MarketError::TooManyBettors
            );
        }

        let new_option_total = option_total
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let new_total = self
            .total_staked
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;

        let bet = Bet {
            bettor,
            option_id,
            amount,
            timestamp: now,
        };
        self.options[option_id as usize].total_staked = new_option_total;
        self.total_staked = new_total;
        self.bets.push(bet.clone());

        Ok(bet)
    }

    /// Removes the caller's first bet and prices the exit.
    ///
    /// Only the first row found for `bettor` is reachable; further rows stay
    /// on the ledger. `repayment_available` is the balance of the account
    /// that will fund the withdrawal.
    pub fn withdraw_bet(
        &mut self,
        bettor: &Pubkey,
        repayment_available: u64,
        now: i64,
    ) -> Result<Withdrawal> {
        self.ensure_open(now)?;
        let index = self.find_bet(bettor).ok_or(MarketError::Unauthorized)?;
        let bet = &self.bets[index];
        let (option_id, amount) = (bet.option_id, bet.amount);

        let withdrawal_amount = withdrawal_value(amount, self.total_staked)?;
        require!(
            repayment_available >= withdrawal_amount,
            MarketError::InsufficientFunds
        );

        let new_option_total = self
            .option(option_id)?
            .total_staked
            .checked_sub(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let new_total = self
            .total_staked
            .checked_sub(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;

        self.options[option_id as usize].total_staked = new_option_total;
        self.total_staked = new_total;
        self.bets.swap_remove(index);

        Ok(Withdrawal {
            bettor: *bettor,
            option_id,
            original_amount: amount,
            withdrawal_amount,
        })
    }

    /// Computes fee and per-winner payouts without touching the market.
    pub fn settlement(&self, fee_bps: u16, winning_option: u8) -> Result<Settlement> {
        let winning_total = self.option(winning_option)?.total_staked;
        let fee = calculate_fee(self.total_staked, fee_bps)?;
        let distributable = self
            .total_staked
            .checked_sub(fee)
            .ok_or(MarketError::ArithmeticOverflow)?;

        let mut stakes: Vec<(Pubkey, u64)> = Vec::new();
        for bet in self.bets.iter().filter(|b| b.option_id == winning_option) {
            match stakes.iter_mut().find(|(winner, _)| *winner == bet.bettor) {
                Some((_, stake)) => {
                    *stake = stake
                        .checked_add(bet.amount)
                        .ok_or(MarketError::ArithmeticOverflow)?;
                }
                None => stakes.push((bet.bettor, bet.amount)),
            }
        }

        let payouts = stakes
            .into_iter()
            .map(|(winner, stake)| {
                Ok(WinnerPayout {
                    winner,
                    stake,
                    amount: pro_rata_payout(stake, distributable, winning_total)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Settlement {
            winning_option,
            total_staked: self.total_staked,
            fee,
            distributable,
            winning_total,
            payouts,
        })
    }

    /// Fixes the outcome. Terminal: the market never changes afterwards.
    ///
    /// `payout_available` must cover the whole pool (fee plus distributable)
    /// or nothing is recorded.
    pub fn resolve(
        &mut self,
        config: &MarketConfig,
        resolver: &Pubkey,
        winning_option: u8,
        payout_available: u64,
        now: i64,
    ) -> Result<Settlement> {
        config.authorize(resolver)?;
        require!(!self.resolved, MarketError::AlreadyResolved);
        let settlement = self.settlement(config.fee_bps, winning_option)?;
        require!(
            payout_available >= settlement.total_staked,
            MarketError::InsufficientFunds
        );

        self.resolved = true;
        self.winning_option = Some(winning_option);
        self.resolved_at = Some(now);

        Ok(settlement)
    }

    /// Re-derives the running totals from the ledger and compares.
    pub fn check_invariants(&self) -> bool {
        if self.options.is_empty() || self.options.len() > MAX_OPTIONS_CAP as usize {
            return false;
        }
        if self.options.iter().enumerate().any(|(i, o)| o.id as usize != i) {
            return false;
        }
        if self.resolved != self.winning_option.is_some() {
            return false;
        }

        let option_sum: u128 = self.options.iter().map(|o| o.total_staked as u128).sum();
        let bet_sum: u128 = self.bets.iter().map(|b| b.amount as u128).sum();
        let per_option_ok = self.options.iter().all(|o| {
            let staked: u128 = self
                .bets
                .iter()
                .filter(|b| b.option_id == o.id)
                .map(|b| b.amount as u128)
                .sum();
            staked == o.total_staked as u128
        });
        let bets_valid = self
            .bets
            .iter()
            .all(|b| (b.option_id as usize) < self.options.len());

        bets_valid
            && per_option_ok
            && option_sum == self.total_staked as u128
            && bet_sum == self.total_staked as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MarketConfig {
        MarketConfig {
            admin: Pubkey::new_unique(),
            enabled: true,
            fee_bps: 500,
            treasury: Pubkey::new_unique(),
            max_options: 4,
            collateral_mint: Pubkey::new_unique(),
            total_markets: 0,
            bump: 254,
        }
    }

    fn market(cfg: &MarketConfig, labels: &[&str], deadline: Option<i64>) -> Market {
        Market::new(
            cfg,
            7,
            42,
            Pubkey::new_unique(),
            labels.iter().map(|l| l.to_string()).collect(),
            deadline,
            1_000,
            253,
        )
        .unwrap()
    }

    fn code(err: MarketError) -> anchor_lang::error::Error {
        err.into()
    }

    #[test]
    fn new_market_assigns_sequential_option_ids() {
        let cfg = config();
        let m = market(&cfg, &["yes", "no", "maybe"], None);
        let ids: Vec<u8> = m.options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(m.labels(), vec!["yes", "no", "maybe"]);
        assert_eq!(m.total_staked, 0);
        assert!(!m.resolved);
        assert!(m.check_invariants());
    }

    #[test]
    fn new_market_validates_option_count() {
        let cfg = config();
        let owner = Pubkey::new_unique();
        let err = Market::new(&cfg, 0, 1, owner, vec![], None, 0, 0).unwrap_err();
        assert_eq!(err, code(MarketError::OptionsEmpty));

        let five = (0..5).map(|i| i.to_string()).collect();
        let err = Market::new(&cfg, 0, 1, owner, five, None, 0, 0).unwrap_err();
        assert_eq!(err, code(MarketError::OptionsTooMany));

        let four = (0..4).map(|i| i.to_string()).collect();
        assert!(Market::new(&cfg, 0, 1, owner, four, None, 0, 0).is_ok());
    }

    #[test]
    fn new_market_requires_enabled_config() {
        let mut cfg = config();
        cfg.enabled = false;
        let err = Market::new(&cfg, 0, 1, Pubkey::new_unique(), vec!["a".into()], None, 0, 0)
            .unwrap_err();
        assert_eq!(err, code(MarketError::ConfigDisabled));
    }

    #[test]
    fn new_market_rejects_long_labels() {
        let cfg = config();
        let label = "x".repeat(MAX_LABEL_LEN + 1);
        let err = Market::new(&cfg, 0, 1, Pubkey::new_unique(), vec![label], None, 0, 0)
            .unwrap_err();
        assert_eq!(err, code(MarketError::LabelTooLong));
    }

    #[test]
    fn bets_by_the_same_bettor_are_not_merged() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let alice = Pubkey::new_unique();
        m.place_bet(&cfg, alice, 0, 10, 100, 1_001).unwrap();
        m.place_bet(&cfg, alice, 0, 15, 100, 1_002).unwrap();
        assert_eq!(m.bets.len(), 2);
        assert_eq!(m.stake_of(&alice).unwrap(), 25);
        assert_eq!(m.options[0].total_staked, 25);
        assert!(m.check_invariants());
    }

    #[test]
    fn place_bet_validation_leaves_market_untouched() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let alice = Pubkey::new_unique();
        let before = m.clone();

        let err = m.place_bet(&cfg, alice, 2, 10, 100, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::InvalidOption));
        let err = m.place_bet(&cfg, alice, 0, 0, 100, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::ZeroAmount));
        let err = m.place_bet(&cfg, alice, 0, 101, 100, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::InsufficientFunds));

        let mut disabled = cfg.clone();
        disabled.enabled = false;
        let err = m.place_bet(&disabled, alice, 0, 10, 100, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::ConfigDisabled));

        assert_eq!(m, before);
    }

    #[test]
    fn place_bet_overflow_aborts() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let alice = Pubkey::new_unique();
        m.place_bet(&cfg, alice, 0, u64::MAX, u64::MAX, 1_001).unwrap();
        let before = m.clone();
        let err = m.place_bet(&cfg, alice, 1, 1, u64::MAX, 1_002).unwrap_err();
        assert_eq!(err, code(MarketError::ArithmeticOverflow));
        assert_eq!(m, before);
    }

    #[test]
    fn ledger_capacity_is_enforced() {
        let cfg = config();
        let mut m = market(&cfg, &["a"], None);
        let bettors: Vec<Pubkey> = (0..MAX_BETTORS).map(|_| Pubkey::new_unique()).collect();
        for i in 0..MAX_BETS {
            m.place_bet(&cfg, bettors[i % MAX_BETTORS], 0, 1, 1, 1_001).unwrap();
        }
        let err = m.place_bet(&cfg, bettors[0], 0, 1, 1, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::LedgerFull));
        assert_eq!(m.total_staked, MAX_BETS as u64);
    }

    #[test]
    fn distinct_bettors_are_capped() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let bettors: Vec<Pubkey> = (0..MAX_BETTORS).map(|_| Pubkey::new_unique()).collect();
        for (i, bettor) in bettors.iter().enumerate() {
            m.place_bet(&cfg, *bettor, (i % 2) as u8, 1, 1, 1_001).unwrap();
        }
        assert_eq!(m.distinct_bettors(), MAX_BETTORS);

        let before = m.clone();
        let newcomer = Pubkey::new_unique();
        let err = m.place_bet(&cfg, newcomer, 0, 1, 1, 1_002).unwrap_err();
        assert_eq!(err, code(MarketError::TooManyBettors));
        assert_eq!(m, before);

        // Known bettors can keep adding rows.
        m.place_bet(&cfg, bettors[3], 0, 5, 5, 1_002).unwrap();
        assert_eq!(m.distinct_bettors(), MAX_BETTORS);

        // A full exit frees a slot.
        m.withdraw_bet(&bettors[0], 1, 1_003).unwrap();
        assert_eq!(m.distinct_bettors(), MAX_BETTORS - 1);
        m.place_bet(&cfg, newcomer, 1, 1, 1, 1_004).unwrap();
        assert!(m.check_invariants());
    }

    #[test]
    fn deadline_boundary_closes_betting() {
        let cfg = config();
        let mut m = market(&cfg, &["a"], Some(2_000));
        let alice = Pubkey::new_unique();
        assert!(m.is_open(1_999));
        m.place_bet(&cfg, alice, 0, 5, 5, 1_999).unwrap();
        assert!(!m.is_open(2_000));
        let err = m.place_bet(&cfg, alice, 0, 5, 5, 2_000).unwrap_err();
        assert_eq!(err, code(MarketError::BettingClosed));
        let err = m.withdraw_bet(&alice, 5, 2_000).unwrap_err();
        assert_eq!(err, code(MarketError::BettingClosed));
    }

    #[test]
    fn withdraw_swaps_last_row_into_the_gap() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let (alice, bob, carol) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        m.place_bet(&cfg, alice, 0, 10, 10, 1_001).unwrap();
        m.place_bet(&cfg, bob, 1, 20, 20, 1_002).unwrap();
        m.place_bet(&cfg, carol, 1, 30, 30, 1_003).unwrap();

        let w = m.withdraw_bet(&alice, 10, 1_004).unwrap();
        assert_eq!(w.original_amount, 10);
        assert_eq!(w.withdrawal_amount, 10);
        assert_eq!(w.option_id, 0);

        let order: Vec<Pubkey> = m.bets.iter().map(|b| b.bettor).collect();
        assert_eq!(order, vec![carol, bob]);
        assert_eq!(m.options[0].total_staked, 0);
        assert_eq!(m.total_staked, 50);
        assert!(m.check_invariants());
    }

    #[test]
    fn withdraw_only_reaches_the_first_row() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let alice = Pubkey::new_unique();
        m.place_bet(&cfg, alice, 0, 10, 100, 1_001).unwrap();
        m.place_bet(&cfg, alice, 1, 40, 100, 1_002).unwrap();

        let w = m.withdraw_bet(&alice, 100, 1_003).unwrap();
        assert_eq!((w.option_id, w.original_amount), (0, 10));
        assert_eq!(m.bets.len(), 1);
        assert_eq!(m.bets[0].amount, 40);
        assert_eq!(m.stake_of(&alice).unwrap(), 40);
    }

    #[test]
    fn withdraw_with_underfunded_repayment_changes_nothing() {
        let cfg = config();
        let mut m = market(&cfg, &["a"], None);
        let alice = Pubkey::new_unique();
        m.place_bet(&cfg, alice, 0, 10, 10, 1_001).unwrap();
        let before = m.clone();
        let err = m.withdraw_bet(&alice, 9, 1_002).unwrap_err();
        assert_eq!(err, code(MarketError::InsufficientFunds));
        assert_eq!(m, before);
    }

    #[test]
    fn settlement_groups_winning_rows_per_bettor() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());
        m.place_bet(&cfg, alice, 1, 100, 1_000, 1_001).unwrap();
        m.place_bet(&cfg, bob, 1, 200, 1_000, 1_002).unwrap();
        m.place_bet(&cfg, alice, 1, 100, 1_000, 1_003).unwrap();
        m.place_bet(&cfg, bob, 0, 600, 1_000, 1_004).unwrap();

        let s = m.settlement(1_000, 1).unwrap();
        assert_eq!(s.total_staked, 1_000);
        assert_eq!(s.fee, 100);
        assert_eq!(s.distributable, 900);
        assert_eq!(s.winning_total, 400);
        assert_eq!(
            s.payouts,
            vec![
                WinnerPayout { winner: alice, stake: 200, amount: 450 },
                WinnerPayout { winner: bob, stake: 200, amount: 450 },
            ]
        );
        assert_eq!(s.total_paid().unwrap(), 900);
    }

    #[test]
    fn settlement_without_winning_stake_pays_nobody() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        m.place_bet(&cfg, Pubkey::new_unique(), 0, 100, 100, 1_001).unwrap();
        let s = m.settlement(500, 1).unwrap();
        assert_eq!(s.winning_total, 0);
        assert!(s.payouts.is_empty());
        assert_eq!(s.fee, 5);
    }

    #[test]
    fn resolve_rejects_unknown_option() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let before = m.clone();
        let err = m.resolve(&cfg, &cfg.admin, 2, 0, 1_001).unwrap_err();
        assert_eq!(err, code(MarketError::InvalidOption));
        assert_eq!(m, before);
    }

    #[test]
    fn resolve_requires_the_admin() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let before = m.clone();
        let err = m
            .resolve(&cfg, &Pubkey::new_unique(), 0, 0, 1_001)
            .unwrap_err();
        assert_eq!(err, code(MarketError::Unauthorized));
        assert_eq!(m, before);
    }

    #[test]
    fn resolved_market_is_read_only() {
        let cfg = config();
        let mut m = market(&cfg, &["a", "b"], None);
        let alice = Pubkey::new_unique();
        m.place_bet(&cfg, alice, 0, 10, 10, 1_001).unwrap();
        m.resolve(&cfg, &cfg.admin, 0, 10, 1_002).unwrap();
        assert_eq!(m.winning_option, Some(0));
        assert_eq!(m.resolved_at, Some(1_002));
        assert!(m.check_invariants());

        let before = m.clone();
        let err = m.place_bet(&cfg, alice, 0, 1, 1, 1_003).unwrap_err();
        assert_eq!(err, code(MarketError::AlreadyResolved));
        let err = m.withdraw_bet(&alice, 10, 1_003).unwrap_err();
        assert_eq!(err, code(MarketError::AlreadyResolved));
        let err = m.resolve(&cfg, &cfg.admin, 1, 10, 1_003).unwrap_err();
        assert_eq!(err, code(MarketError::AlreadyResolved));
        assert_eq!(m, before);
    }
}
