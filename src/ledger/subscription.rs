use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::calendar::{clamped_date, month_after};
use crate::errors::DomainError;

const MAX_PROJECTED_CHARGES: usize = 1024;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Cadence {
    Monthly,
    Yearly,
}

/// A recurring subscription charged on a fixed day of the month. Yearly
/// subscriptions anchor to the month they started in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Uuid>,
    pub started: NaiveDate,
    pub billing_day: u32,
    pub cadence: Cadence,
    pub active: bool,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount_cents: i64,
        started: NaiveDate,
        billing_day: u32,
        cadence: Cadence,
    ) -> Result<Self, DomainError> {
        if !(1..=31).contains(&billing_day) {
            return Err(DomainError::InvalidBillingDay(billing_day));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount_cents,
            category_id: None,
            card_id: None,
            started,
            billing_day,
            cadence,
            active: true,
        })
    }

    pub fn with_card(mut self, card_id: Uuid) -> Self {
        self.card_id = Some(card_id);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// First charge date on or after `reference`; `None` once cancelled.
    /// The billing day is clamped into short months.
    pub fn next_charge(&self, reference: NaiveDate) -> Option<NaiveDate> {
        if !self.active {
            return None;
        }
        let reference = reference.max(self.started);
        let candidate = match self.cadence {
            Cadence::Monthly => {
                let this_month =
                    clamped_date(reference.year(), reference.month(), self.billing_day);
                if this_month >= reference {
                    this_month
                } else {
                    let (year, month) = month_after(reference.year(), reference.month());
                    clamped_date(year, month, self.billing_day)
                }
            }
            Cadence::Yearly => {
                let this_year =
                    clamped_date(reference.year(), self.started.month(), self.billing_day);
                if this_year >= reference {
                    this_year
                } else {
                    clamped_date(reference.year() + 1, self.started.month(), self.billing_day)
                }
            }
        };
        Some(candidate)
    }

    /// Charge dates falling inside `[from, to]`, oldest first.
    pub fn charges_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut charges = Vec::new();
        let mut next = match self.next_charge(from) {
            Some(date) => date,
            None => return charges,
        };
        while next <= to && charges.len() < MAX_PROJECTED_CHARGES {
            charges.push(next);
            next = match self.next_charge(next.succ_opt().unwrap()) {
                Some(date) => date,
                None => break,
            };
        }
        charges
    }

    /// Normalized monthly cost for dashboard totals.
    pub fn monthly_cost_cents(&self) -> i64 {
        match self.cadence {
            Cadence::Monthly => self.amount_cents,
            Cadence::Yearly => self.amount_cents / 12,
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}
