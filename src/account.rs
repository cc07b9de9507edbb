//! Account model and per-kind transaction rules.
//!
//! One `Account` struct carries a closed tagged-variant kind state; the
//! `withdraw`/`deposit`/`add_interest` entry points dispatch on it. A
//! declined request is a normal outcome reported as a value, never a
//! fault.

use crate::error::{LedgerError, Result};
use crate::money::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// The closed set of account kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// No fees, no minimum, no overdraft.
    Basic,

    /// Per-withdrawal fee and a minimum balance floor.
    Savings,

    /// Direct withdrawals with a flat fee, check withdrawals with a free
    /// monthly allowance and a bounded overdraft.
    Checking,

    /// High minimum balance, monthly transaction cap, and a freeze state
    /// entered by dropping below the minimum.
    MoneyMarket,
}

impl AccountKind {
    /// Maps a bootstrap record label to a kind. Unrecognized labels fall
    /// back to `Basic`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "savings" => AccountKind::Savings,
            "checking" => AccountKind::Checking,
            "money market" => AccountKind::MoneyMarket,
            _ => AccountKind::Basic,
        }
    }

    /// The flat-record label for this kind. Round-trips with
    /// [`from_label`](Self::from_label).
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Basic => "basic",
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
            AccountKind::MoneyMarket => "money market",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of a deposit or withdrawal request.
///
/// Both variants carry the account balance after the request; a declined
/// request leaves it unchanged. Callers branch on the outcome rather than
/// catching an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum TxOutcome {
    /// The request was applied.
    Posted { balance: Money },

    /// The request failed a business rule and was not applied.
    Declined {
        reason: DeclineReason,
        balance: Money,
    },
}

impl TxOutcome {
    /// Returns `true` if the request was applied.
    pub fn is_posted(&self) -> bool {
        matches!(self, TxOutcome::Posted { .. })
    }

    /// Returns `true` if the request was declined.
    pub fn is_declined(&self) -> bool {
        matches!(self, TxOutcome::Declined { .. })
    }

    /// The balance after the request (unchanged when declined).
    pub fn balance(&self) -> Money {
        match self {
            TxOutcome::Posted { balance } | TxOutcome::Declined { balance, .. } => *balance,
        }
    }

    /// The decline reason, if the request was declined.
    pub fn decline_reason(&self) -> Option<&DeclineReason> {
        match self {
            TxOutcome::Posted { .. } => None,
            TxOutcome::Declined { reason, .. } => Some(reason),
        }
    }
}

/// Why a deposit or withdrawal request was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// The balance does not cover the requested amount.
    InsufficientFunds,

    /// The balance does not cover the amount plus the withdrawal fee.
    WithdrawalFee { fee: Money },

    /// The withdrawal would break the minimum balance floor once the fee
    /// is reserved.
    MinimumBalance { minimum: Money, fee: Money },

    /// The balance does not cover the amount plus the below-minimum fee
    /// reserve.
    FeeReserve { fee: Money },

    /// The check would push the balance past the overdraft limit.
    OverdraftLimit { limit: Money, fee_would_apply: bool },

    /// The account is frozen below its minimum balance.
    Frozen { minimum: Money },

    /// The monthly transaction budget is exhausted.
    TransactionCap { cap: u32 },
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclineReason::InsufficientFunds => write!(f, "insufficient funds"),
            DeclineReason::WithdrawalFee { fee } => {
                write!(f, "insufficient funds to cover the {} withdrawal fee", fee)
            }
            DeclineReason::MinimumBalance { minimum, fee } => write!(
                f,
                "insufficient funds to keep the {} minimum balance after the {} fee",
                minimum, fee
            ),
            DeclineReason::FeeReserve { fee } => write!(
                f,
                "insufficient funds including the {} below-minimum fee reserve",
                fee
            ),
            DeclineReason::OverdraftLimit {
                limit,
                fee_would_apply,
            } => {
                write!(f, "check would exceed the {} overdraft limit", limit)?;
                if *fee_would_apply {
                    write!(f, " (a check fee would also apply)")?;
                }
                Ok(())
            }
            DeclineReason::Frozen { minimum } => {
                write!(f, "account frozen below the {} minimum balance", minimum)
            }
            DeclineReason::TransactionCap { cap } => {
                write!(f, "monthly cap of {} transactions reached", cap)
            }
        }
    }
}

/// Per-kind state, closed over the four kinds.
#[derive(Debug, Clone)]
enum KindState {
    Basic,
    Savings,
    Checking(CheckingState),
    MoneyMarket(MoneyMarketState),
}

#[derive(Debug, Clone)]
struct CheckingState {
    free_checks_remaining: u32,
}

impl CheckingState {
    fn new() -> Self {
        CheckingState {
            free_checks_remaining: Account::FREE_CHECKS_PER_MONTH,
        }
    }

    fn withdraw_by_check(&mut self, balance: &mut Money, amount: Money) -> TxOutcome {
        let fee = if self.free_checks_remaining == 0 {
            Account::CHECK_FEE
        } else {
            Money::ZERO
        };

        if amount <= *balance - fee + Account::MAX_OVERDRAFT {
            *balance -= amount + fee;
            // A free check is only consumed by a successful withdrawal.
            if self.free_checks_remaining > 0 {
                self.free_checks_remaining -= 1;
            }
            TxOutcome::Posted { balance: *balance }
        } else {
            TxOutcome::Declined {
                reason: DeclineReason::OverdraftLimit {
                    limit: Account::MAX_OVERDRAFT,
                    fee_would_apply: !fee.is_zero(),
                },
                balance: *balance,
            }
        }
    }
}

#[derive(Debug, Clone)]
struct MoneyMarketState {
    transactions_remaining: u32,
    frozen: bool,
}

impl MoneyMarketState {
    fn new() -> Self {
        MoneyMarketState {
            transactions_remaining: Account::MONEY_MARKET_MAX_TRANSACTIONS,
            frozen: false,
        }
    }

    /// Withdrawal state machine: frozen gate, transaction cap, fee
    /// reserve, then debit with a one-time below-minimum penalty.
    fn withdraw(&mut self, balance: &mut Money, amount: Money) -> TxOutcome {
        if self.frozen {
            return TxOutcome::Declined {
                reason: DeclineReason::Frozen {
                    minimum: Account::MONEY_MARKET_MIN_BALANCE,
                },
                balance: *balance,
            };
        }

        if self.transactions_remaining == 0 {
            return TxOutcome::Declined {
                reason: DeclineReason::TransactionCap {
                    cap: Account::MONEY_MARKET_MAX_TRANSACTIONS,
                },
                balance: *balance,
            };
        }

        // The gate reserves the below-minimum fee so the debit can never
        // push the balance negative.
        if amount > *balance - Account::BELOW_MINIMUM_FEE {
            return TxOutcome::Declined {
                reason: DeclineReason::FeeReserve {
                    fee: Account::BELOW_MINIMUM_FEE,
                },
                balance: *balance,
            };
        }

        *balance -= amount;
        if *balance < Account::MONEY_MARKET_MIN_BALANCE {
            *balance -= Account::BELOW_MINIMUM_FEE;
            self.frozen = true;
        }
        self.transactions_remaining -= 1;

        TxOutcome::Posted { balance: *balance }
    }

    /// Deposits into a frozen account always post and never consume the
    /// transaction budget; the account unfreezes once the balance climbs
    /// strictly above the minimum.
    fn deposit(&mut self, balance: &mut Money, amount: Money) -> TxOutcome {
        if self.frozen {
            *balance += amount;
            if *balance > Account::MONEY_MARKET_MIN_BALANCE {
                self.frozen = false;
            }
            return TxOutcome::Posted { balance: *balance };
        }

        if self.transactions_remaining == 0 {
            return TxOutcome::Declined {
                reason: DeclineReason::TransactionCap {
                    cap: Account::MONEY_MARKET_MAX_TRANSACTIONS,
                },
                balance: *balance,
            };
        }

        *balance += amount;
        self.transactions_remaining -= 1;
        TxOutcome::Posted { balance: *balance }
    }
}

/// A bank account.
///
/// Accounts are created by batch bootstrap, mutated in place by the
/// transaction and monthly-cycle operations, and serialized back out as
/// flat records at shutdown. Owners are referenced by ID, not owned.
#[derive(Debug, Clone)]
pub struct Account {
    id: u32,
    balance: Money,
    created_at: DateTime<Utc>,
    owner_ids: Vec<u32>,
    state: KindState,
}

impl Account {
    /// Per-withdrawal fee charged by savings accounts.
    pub const SAVINGS_FEE: Money = Money::from_cents(200);

    /// Minimum balance a savings account must hold.
    pub const SAVINGS_MIN_BALANCE: Money = Money::from_cents(1_000);

    /// Fee charged on direct (non-check) checking withdrawals.
    pub const NON_CHECK_FEE: Money = Money::from_cents(100);

    /// Fee charged on check withdrawals once the free allowance is spent.
    pub const CHECK_FEE: Money = Money::from_cents(200);

    /// Free check withdrawals granted each month.
    pub const FREE_CHECKS_PER_MONTH: u32 = 3;

    /// How far a check may push a checking balance below zero.
    pub const MAX_OVERDRAFT: Money = Money::from_cents(1_000);

    /// Transactions a money-market account may make each month.
    pub const MONEY_MARKET_MAX_TRANSACTIONS: u32 = 6;

    /// Minimum balance a money-market account must hold.
    pub const MONEY_MARKET_MIN_BALANCE: Money = Money::from_cents(1_000_000);

    /// One-time penalty for dropping a money-market balance below its
    /// minimum.
    pub const BELOW_MINIMUM_FEE: Money = Money::from_cents(10_000);

    /// Opens an account of the given kind.
    ///
    /// Fails with `InvalidAmount` on a negative opening balance, and with
    /// `BelowMinimumBalance` when a savings or money-market balance is
    /// under its kind minimum. Opening at exactly the minimum succeeds.
    pub fn open(
        id: u32,
        kind: AccountKind,
        balance: Money,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        if balance.is_negative() {
            return Err(LedgerError::InvalidAmount { amount: balance });
        }

        let state = match kind {
            AccountKind::Basic => KindState::Basic,
            AccountKind::Savings => {
                if balance < Self::SAVINGS_MIN_BALANCE {
                    return Err(LedgerError::BelowMinimumBalance {
                        kind,
                        minimum: Self::SAVINGS_MIN_BALANCE,
                        balance,
                    });
                }
                KindState::Savings
            }
            AccountKind::Checking => KindState::Checking(CheckingState::new()),
            AccountKind::MoneyMarket => {
                if balance < Self::MONEY_MARKET_MIN_BALANCE {
                    return Err(LedgerError::BelowMinimumBalance {
                        kind,
                        minimum: Self::MONEY_MARKET_MIN_BALANCE,
                        balance,
                    });
                }
                KindState::MoneyMarket(MoneyMarketState::new())
            }
        };

        Ok(Account {
            id,
            balance,
            created_at,
            owner_ids: Vec::new(),
            state,
        })
    }

    /// Unique account identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> AccountKind {
        match self.state {
            KindState::Basic => AccountKind::Basic,
            KindState::Savings => AccountKind::Savings,
            KindState::Checking(_) => AccountKind::Checking,
            KindState::MoneyMarket(_) => AccountKind::MoneyMarket,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// IDs of owners linked to this account, in link order. The same
    /// owner ID may appear more than once if it was linked twice.
    pub fn owner_ids(&self) -> &[u32] {
        &self.owner_ids
    }

    /// Free checks left this month, for checking accounts.
    pub fn free_checks_remaining(&self) -> Option<u32> {
        match &self.state {
            KindState::Checking(state) => Some(state.free_checks_remaining),
            _ => None,
        }
    }

    /// Transactions left this month, for money-market accounts.
    pub fn transactions_remaining(&self) -> Option<u32> {
        match &self.state {
            KindState::MoneyMarket(state) => Some(state.transactions_remaining),
            _ => None,
        }
    }

    /// Returns `true` if a money-market account is frozen below its
    /// minimum. Always `false` for other kinds.
    pub fn is_frozen(&self) -> bool {
        match &self.state {
            KindState::MoneyMarket(state) => state.frozen,
            _ => false,
        }
    }

    /// Appends an owner ID to the ownership list. Duplicates are kept.
    pub fn add_owner(&mut self, owner_id: u32) {
        self.owner_ids.push(owner_id);
    }

    /// Requests a withdrawal.
    ///
    /// Negative amounts are a caller contract violation
    /// (`Err(InvalidAmount)`). Rule failures are reported as
    /// [`TxOutcome::Declined`] with the balance unchanged.
    pub fn withdraw(&mut self, amount: Money) -> Result<TxOutcome> {
        ensure_non_negative(amount)?;

        let outcome = match &mut self.state {
            KindState::Basic => {
                if amount <= self.balance {
                    self.balance -= amount;
                    TxOutcome::Posted {
                        balance: self.balance,
                    }
                } else {
                    TxOutcome::Declined {
                        reason: DeclineReason::InsufficientFunds,
                        balance: self.balance,
                    }
                }
            }
            KindState::Savings => {
                if amount <= self.balance - Self::SAVINGS_MIN_BALANCE - Self::SAVINGS_FEE {
                    self.balance -= amount + Self::SAVINGS_FEE;
                    TxOutcome::Posted {
                        balance: self.balance,
                    }
                } else {
                    TxOutcome::Declined {
                        reason: DeclineReason::MinimumBalance {
                            minimum: Self::SAVINGS_MIN_BALANCE,
                            fee: Self::SAVINGS_FEE,
                        },
                        balance: self.balance,
                    }
                }
            }
            KindState::Checking(_) => {
                // Direct withdrawals cannot overdraft; only checks can.
                if amount <= self.balance - Self::NON_CHECK_FEE {
                    self.balance -= amount + Self::NON_CHECK_FEE;
                    TxOutcome::Posted {
                        balance: self.balance,
                    }
                } else {
                    TxOutcome::Declined {
                        reason: DeclineReason::WithdrawalFee {
                            fee: Self::NON_CHECK_FEE,
                        },
                        balance: self.balance,
                    }
                }
            }
            KindState::MoneyMarket(state) => state.withdraw(&mut self.balance, amount),
        };

        Ok(outcome)
    }

    /// Requests a check withdrawal. Only valid on checking accounts.
    pub fn withdraw_by_check(&mut self, amount: Money) -> Result<TxOutcome> {
        ensure_non_negative(amount)?;

        let kind = self.kind();
        match &mut self.state {
            KindState::Checking(state) => Ok(state.withdraw_by_check(&mut self.balance, amount)),
            _ => Err(LedgerError::UnsupportedOperation {
                kind,
                operation: "withdraw_by_check",
            }),
        }
    }

    /// Requests a deposit.
    ///
    /// Credits unconditionally for every kind except money-market, whose
    /// transaction budget and freeze state apply.
    pub fn deposit(&mut self, amount: Money) -> Result<TxOutcome> {
        ensure_non_negative(amount)?;

        let outcome = match &mut self.state {
            KindState::MoneyMarket(state) => state.deposit(&mut self.balance, amount),
            _ => {
                self.balance += amount;
                TxOutcome::Posted {
                    balance: self.balance,
                }
            }
        };

        Ok(outcome)
    }

    /// Accrues interest at `rate_percent` of the balance and credits it.
    ///
    /// Returns the interest amount. Only savings and money-market
    /// accounts accrue interest; calling this on other kinds is an
    /// `UnsupportedOperation` error. Repeated calls compound.
    pub fn add_interest(&mut self, rate_percent: Decimal) -> Result<Money> {
        match self.state {
            KindState::Savings | KindState::MoneyMarket(_) => {
                let interest = self.balance.interest(rate_percent);
                self.balance += interest;
                Ok(interest)
            }
            _ => Err(LedgerError::UnsupportedOperation {
                kind: self.kind(),
                operation: "add_interest",
            }),
        }
    }

    /// Restores the monthly free-check allowance. No-op on other kinds.
    pub fn reset_checks(&mut self) {
        if let KindState::Checking(state) = &mut self.state {
            state.free_checks_remaining = Self::FREE_CHECKS_PER_MONTH;
        }
    }

    /// Restores the monthly transaction budget. No-op on other kinds.
    pub fn reset_transactions(&mut self) {
        if let KindState::MoneyMarket(state) = &mut self.state {
            state.transactions_remaining = Self::MONEY_MARKET_MAX_TRANSACTIONS;
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Kind: {}, Balance: ${}, Date of creation: {}",
            self.id,
            self.kind(),
            self.balance,
            self.created_at
        )
    }
}

fn ensure_non_negative(amount: Money) -> Result<()> {
    if amount.is_negative() {
        Err(LedgerError::InvalidAmount { amount })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<Utc> {
        "2020-01-01T00:00:00Z".parse().unwrap()
    }

    fn open(kind: AccountKind, cents: i64) -> Account {
        Account::open(1, kind, Money::from_cents(cents), ts()).unwrap()
    }

    #[test]
    fn test_basic_withdraw_and_deposit() {
        let mut account = open(AccountKind::Basic, 10_000);

        let outcome = account.deposit(Money::from_cents(500)).unwrap();
        assert_eq!(outcome.balance().cents(), 10_500);

        let outcome = account.withdraw(Money::from_cents(2_500)).unwrap();
        assert!(outcome.is_posted());
        assert_eq!(account.balance().cents(), 8_000);
    }

    #[test]
    fn test_basic_withdraw_declines_on_insufficient_funds() {
        let mut account = open(AccountKind::Basic, 1_000);

        let outcome = account.withdraw(Money::from_cents(1_001)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::InsufficientFunds)
        );
        assert_eq!(account.balance().cents(), 1_000);
    }

    #[test]
    fn test_negative_amount_is_a_contract_violation() {
        let mut account = open(AccountKind::Basic, 1_000);

        assert!(matches!(
            account.withdraw(Money::from_cents(-1)),
            Err(LedgerError::InvalidAmount { .. })
        ));
        assert!(matches!(
            account.deposit(Money::from_cents(-1)),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_negative_opening_balance_is_rejected() {
        let result = Account::open(1, AccountKind::Basic, Money::from_cents(-1), ts());
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_savings_opening_balance_boundary() {
        assert!(matches!(
            Account::open(1, AccountKind::Savings, Money::from_cents(999), ts()),
            Err(LedgerError::BelowMinimumBalance { .. })
        ));

        let account = Account::open(1, AccountKind::Savings, Money::from_cents(1_000), ts());
        assert!(account.is_ok());
    }

    #[test]
    fn test_savings_withdraw_charges_fee_and_keeps_minimum() {
        let mut account = open(AccountKind::Savings, 1_500);

        // 1500 - 1000 minimum - 200 fee leaves 300 withdrawable.
        let outcome = account.withdraw(Money::from_cents(300)).unwrap();
        assert!(outcome.is_posted());
        assert_eq!(account.balance().cents(), 1_000);

        let outcome = account.withdraw(Money::from_cents(1)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::MinimumBalance {
                minimum: Account::SAVINGS_MIN_BALANCE,
                fee: Account::SAVINGS_FEE,
            })
        );
        assert_eq!(account.balance().cents(), 1_000);
    }

    #[test]
    fn test_checking_direct_withdraw_charges_fee_without_overdraft() {
        let mut account = open(AccountKind::Checking, 1_000);

        let outcome = account.withdraw(Money::from_cents(900)).unwrap();
        assert!(outcome.is_posted());
        assert_eq!(account.balance().cents(), 0);

        // Direct withdrawals may not dip below zero.
        let outcome = account.withdraw(Money::from_cents(1)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::WithdrawalFee {
                fee: Account::NON_CHECK_FEE
            })
        );
    }

    #[test]
    fn test_checking_free_checks_then_fee() {
        let mut account = open(AccountKind::Checking, 100_000);
        assert_eq!(account.free_checks_remaining(), Some(3));

        for _ in 0..3 {
            let outcome = account.withdraw_by_check(Money::from_cents(1_000)).unwrap();
            assert!(outcome.is_posted());
        }
        assert_eq!(account.free_checks_remaining(), Some(0));
        assert_eq!(account.balance().cents(), 97_000);

        // Fourth check pays the check fee.
        let outcome = account.withdraw_by_check(Money::from_cents(1_000)).unwrap();
        assert!(outcome.is_posted());
        assert_eq!(account.balance().cents(), 95_800);

        account.reset_checks();
        assert_eq!(account.free_checks_remaining(), Some(3));
    }

    #[test]
    fn test_checking_check_overdraft_is_bounded() {
        let mut account = open(AccountKind::Checking, 2_000);

        // Down to exactly the overdraft limit.
        let outcome = account.withdraw_by_check(Money::from_cents(3_000)).unwrap();
        assert!(outcome.is_posted());
        assert_eq!(account.balance().cents(), -1_000);

        let outcome = account.withdraw_by_check(Money::from_cents(1)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::OverdraftLimit {
                limit: Account::MAX_OVERDRAFT,
                fee_would_apply: false,
            })
        );
        assert_eq!(account.balance().cents(), -1_000);
    }

    #[test]
    fn test_declined_check_does_not_consume_free_check() {
        let mut account = open(AccountKind::Checking, 1_000);

        let outcome = account.withdraw_by_check(Money::from_cents(50_000)).unwrap();
        assert!(outcome.is_declined());
        assert_eq!(account.free_checks_remaining(), Some(3));
    }

    #[test]
    fn test_money_market_below_minimum_fee_and_freeze() {
        let mut account = open(AccountKind::MoneyMarket, 1_100_000);

        let outcome = account.withdraw(Money::from_cents(200_000)).unwrap();
        assert!(outcome.is_posted());
        // 1_100_000 - 200_000 - 10_000 penalty.
        assert_eq!(account.balance().cents(), 890_000);
        assert!(account.is_frozen());
        assert_eq!(account.transactions_remaining(), Some(5));

        // Frozen account declines withdrawals without balance change.
        let outcome = account.withdraw(Money::from_cents(1)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::Frozen {
                minimum: Account::MONEY_MARKET_MIN_BALANCE
            })
        );
        assert_eq!(account.balance().cents(), 890_000);
    }

    #[test]
    fn test_money_market_unfreezes_strictly_above_minimum() {
        let mut account = open(AccountKind::MoneyMarket, 1_100_000);
        let _ = account.withdraw(Money::from_cents(200_000)).unwrap();
        assert!(account.is_frozen());

        // Reaching the minimum exactly is not enough.
        let outcome = account.deposit(Money::from_cents(110_000)).unwrap();
        assert!(outcome.is_posted());
        assert!(account.is_frozen());

        let outcome = account.deposit(Money::from_cents(1)).unwrap();
        assert!(outcome.is_posted());
        assert!(!account.is_frozen());
    }

    #[test]
    fn test_money_market_frozen_deposits_bypass_transaction_cap() {
        let mut account = open(AccountKind::MoneyMarket, 1_100_000);
        let _ = account.withdraw(Money::from_cents(200_000)).unwrap();
        assert!(account.is_frozen());
        assert_eq!(account.transactions_remaining(), Some(5));

        // Frozen deposits post without touching the budget.
        for _ in 0..10 {
            let outcome = account.deposit(Money::from_cents(100)).unwrap();
            assert!(outcome.is_posted());
        }
        assert_eq!(account.transactions_remaining(), Some(5));
    }

    #[test]
    fn test_money_market_deposit_consumes_budget_when_unfrozen() {
        let mut account = open(AccountKind::MoneyMarket, 2_000_000);

        for expected in (0..Account::MONEY_MARKET_MAX_TRANSACTIONS).rev() {
            let outcome = account.deposit(Money::from_cents(1_000)).unwrap();
            assert!(outcome.is_posted());
            assert_eq!(account.transactions_remaining(), Some(expected));
        }

        let outcome = account.deposit(Money::from_cents(1_000)).unwrap();
        assert_eq!(
            outcome.decline_reason(),
            Some(&DeclineReason::TransactionCap {
                cap: Account::MONEY_MARKET_MAX_TRANSACTIONS
            })
        );

        account.reset_transactions();
        assert_eq!(
            account.transactions_remaining(),
            Some(Account::MONEY_MARKET_MAX_TRANSACTIONS)
        );
    }

    #[test]
    fn test_add_interest_credits_and_compounds() {
        let mut account = open(AccountKind::Savings, 1_000_000);
        let rate = "0.25".parse::<Decimal>().unwrap();

        let interest = account.add_interest(rate).unwrap();
        assert_eq!(interest.cents(), 2_500);
        assert_eq!(account.balance().cents(), 1_002_500);

        // Second accrual compounds on the credited balance.
        let interest = account.add_interest(rate).unwrap();
        assert_eq!(interest.cents(), 2_506);
        assert_eq!(account.balance().cents(), 1_005_006);
    }

    #[test]
    fn test_add_interest_rejected_for_short_term_kinds() {
        let rate = "0.25".parse::<Decimal>().unwrap();

        let mut checking = open(AccountKind::Checking, 10_000);
        assert!(matches!(
            checking.add_interest(rate),
            Err(LedgerError::UnsupportedOperation { .. })
        ));

        let mut basic = open(AccountKind::Basic, 10_000);
        assert!(matches!(
            basic.add_interest(rate),
            Err(LedgerError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_withdraw_by_check_rejected_off_checking() {
        let mut account = open(AccountKind::Savings, 10_000);
        assert!(matches!(
            account.withdraw_by_check(Money::from_cents(100)),
            Err(LedgerError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_add_owner_keeps_duplicates() {
        let mut account = open(AccountKind::Basic, 0);
        account.add_owner(14);
        account.add_owner(15);
        account.add_owner(14);
        assert_eq!(account.owner_ids(), &[14, 15, 14]);
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in [
            AccountKind::Basic,
            AccountKind::Savings,
            AccountKind::Checking,
            AccountKind::MoneyMarket,
        ] {
            assert_eq!(AccountKind::from_label(kind.label()), kind);
        }
        assert_eq!(AccountKind::from_label("trust fund"), AccountKind::Basic);
        assert_eq!(AccountKind::from_label("  Money Market "), AccountKind::MoneyMarket);
    }
}
