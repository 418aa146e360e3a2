//! Pure date arithmetic for credit-card billing cycles.
//!
//! Two closing-date concepts coexist and must not be collapsed into one:
//! the *nominal* closing day (clamped to the month length) defines which
//! purchase dates belong to which invoice, while the *effective* closing
//! date (nominal day pushed off a weekend) answers whether a given month's
//! close has already been processed. Period boundaries always come from the
//! nominal day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::billing::calendar::{clamped_date, month_after, month_before};
use crate::billing::month::InvoiceMonth;
use crate::billing::period::BillingPeriod;
use crate::errors::DomainError;

/// A card's two configured calendar days. Neither ordering of the two is
/// privileged: a due day numerically below the closing day simply places
/// the due date in the month after the close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    pub closing_day: u32,
    pub due_day: u32,
}

/// The invoice currently accumulating charges relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentBill {
    pub period: BillingPeriod,
    pub due_month: InvoiceMonth,
}

/// Resolves the closing day inside `(year, month)`, clamped to the month
/// length, then moves a Saturday or Sunday result forward to the next
/// weekday. Card issuers process the close on the next business day; the
/// purchase window itself stays on the nominal day.
pub fn effective_closing_date(year: i32, month: u32, closing_day: u32) -> NaiveDate {
    let mut date = clamped_date(year, month, closing_day);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date = date.succ_opt().unwrap();
    }
    date
}

impl CycleConfig {
    pub fn new(closing_day: u32, due_day: u32) -> Result<Self, DomainError> {
        if !(1..=31).contains(&closing_day) {
            return Err(DomainError::InvalidClosingDay(closing_day));
        }
        if !(1..=31).contains(&due_day) {
            return Err(DomainError::InvalidDueDay(due_day));
        }
        Ok(Self {
            closing_day,
            due_day,
        })
    }

    /// Calendar day the invoice closing in `(year, month)` stops
    /// accumulating charges, clamped to the month length.
    pub fn nominal_closing_date(&self, year: i32, month: u32) -> NaiveDate {
        clamped_date(year, month, self.closing_day)
    }

    /// Weekend-adjusted closing date for `(year, month)`. Never feeds
    /// period-boundary math.
    pub fn effective_closing_date(&self, year: i32, month: u32) -> NaiveDate {
        effective_closing_date(year, month, self.closing_day)
    }

    /// Whether a transaction on `date` precedes its month's effective
    /// close, i.e. still belongs to the invoice closing that month.
    pub fn is_before_effective_closing(&self, date: NaiveDate) -> bool {
        date < self.effective_closing_date(date.year(), date.month())
    }

    /// The invoice open on `reference`: this month's while the nominal
    /// closing date has not passed, next month's afterwards.
    pub fn current_bill(&self, reference: NaiveDate) -> CurrentBill {
        let closing = self.nominal_closing_date(reference.year(), reference.month());
        let (year, month) = if reference <= closing {
            (reference.year(), reference.month())
        } else {
            month_after(reference.year(), reference.month())
        };
        CurrentBill {
            period: self.period_closing_in(year, month),
            due_month: self.due_month_for_closing(year, month),
        }
    }

    /// Purchase window of the invoice due in `due`, without needing a
    /// reference date. Inverts the due-month derivation, then computes the
    /// closing month's period.
    pub fn period_for(&self, due: InvoiceMonth) -> BillingPeriod {
        let (year, month) = if self.due_day >= self.closing_day {
            (due.year, due.month)
        } else {
            month_before(due.year, due.month)
        };
        self.period_closing_in(year, month)
    }

    /// Which invoice a purchase on `purchase` would land in, by nominal-day
    /// comparison. Entry-form planning aid; deliberately ignores the
    /// weekend adjustment since the processing date is not yet relevant.
    pub fn suggest_invoice_month(&self, purchase: NaiveDate) -> InvoiceMonth {
        let closing = self.nominal_closing_date(purchase.year(), purchase.month());
        let (year, month) = if purchase.day() <= closing.day() {
            (purchase.year(), purchase.month())
        } else {
            month_after(purchase.year(), purchase.month())
        };
        self.due_month_for_closing(year, month)
    }

    fn due_month_for_closing(&self, year: i32, month: u32) -> InvoiceMonth {
        if self.due_day >= self.closing_day {
            InvoiceMonth { year, month }
        } else {
            let (year, month) = month_after(year, month);
            InvoiceMonth { year, month }
        }
    }

    // Periods are back-to-back: each starts the day after the previous
    // month's nominal close, so every purchase date belongs to exactly one.
    fn period_closing_in(&self, year: i32, month: u32) -> BillingPeriod {
        let end = self.nominal_closing_date(year, month);
        let (prev_year, prev_month) = month_before(year, month);
        let start = self
            .nominal_closing_date(prev_year, prev_month)
            .succ_opt()
            .unwrap();
        BillingPeriod::spanning(start, end)
    }
}
