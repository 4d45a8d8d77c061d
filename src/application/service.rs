use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{Category, Currency, ExpenseRecord, Period, UserId, parse_amount};
use crate::storage::Ledger;

use super::{AppError, ExpenseReport, summarize};

/// Number of positional arguments `/payment` takes: category, amount, currency.
pub const PAYMENT_ARGS: usize = 3;

/// Application service providing the expense use cases.
/// The chat transport and the console both go through this type.
pub struct ExpenseService {
    ledger: Ledger,
}

impl ExpenseService {
    /// Create a new service that owns the given ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate `/payment` arguments and append the resulting record.
    ///
    /// Checks run in a fixed order: argument count, category, currency,
    /// then amount. Nothing is stored when any check fails.
    pub async fn record_payment(
        &self,
        user: UserId,
        args: &[&str],
        at: DateTime<Utc>,
    ) -> Result<ExpenseRecord, AppError> {
        let [category, amount, currency] = args else {
            return Err(AppError::ArgumentCount {
                expected: PAYMENT_ARGS,
                actual: args.len(),
            });
        };

        let category = Category::from_str(category)
            .ok_or_else(|| AppError::InvalidCategory(category.to_string()))?;
        let currency = Currency::from_str(currency)
            .ok_or_else(|| AppError::InvalidCurrency(currency.to_string()))?;
        let amount = parse_amount(amount)?;

        let record = ExpenseRecord::new(amount, currency, category, at);
        self.ledger.append(user, record.clone()).await;

        info!(
            user,
            expense_id = %record.id,
            category = %record.category,
            currency = %record.currency,
            amount = record.amount,
            "expense recorded"
        );
        Ok(record)
    }

    /// Records for the user inside the period's lookback window ending at `now`.
    pub async fn expenses_in_period(
        &self,
        user: UserId,
        period: Period,
        now: DateTime<Utc>,
    ) -> Vec<ExpenseRecord> {
        self.ledger.query(user, period.since(now)).await
    }

    /// Build the payout report for a period.
    /// Returns `None` when the window holds no expenses.
    pub async fn payout(
        &self,
        user: UserId,
        period: Period,
        now: DateTime<Utc>,
    ) -> Option<ExpenseReport> {
        let since = period.since(now);
        let expenses = self.ledger.query(user, since).await;
        if expenses.is_empty() {
            debug!(user, %period, "no expenses in period");
            return None;
        }

        let summary = summarize(&expenses);
        info!(
            user,
            %period,
            records = expenses.len(),
            total_usd = summary.total,
            "payout report built"
        );

        Some(ExpenseReport {
            period,
            since,
            until: now,
            categories: summary.categories,
            total: summary.total,
        })
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new(Ledger::new())
    }
}
