use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::calendar::shift_month;
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoanDirection {
    Lent,
    Borrowed,
}

/// A payment recorded against a loan, or one entry of its schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoanPayment {
    pub date: NaiveDate,
    pub amount_cents: i64,
}

/// Money lent to or borrowed from another person, repaid in monthly
/// installments anchored on the first due date's day of month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub counterparty: String,
    pub direction: LoanDirection,
    pub principal_cents: i64,
    pub installments: u32,
    pub first_due: NaiveDate,
    #[serde(default)]
    pub payments: Vec<LoanPayment>,
}

impl Loan {
    pub fn new(
        counterparty: impl Into<String>,
        direction: LoanDirection,
        principal_cents: i64,
        installments: u32,
        first_due: NaiveDate,
    ) -> Result<Self, DomainError> {
        if principal_cents <= 0 {
            return Err(DomainError::InvalidAmount(principal_cents));
        }
        if installments == 0 {
            return Err(DomainError::InvalidInstallments(installments));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            counterparty: counterparty.into(),
            direction,
            principal_cents,
            installments,
            first_due,
            payments: Vec::new(),
        })
    }

    /// Due dates and amounts. The day of month is clamped per month and the
    /// division remainder lands on the last installment.
    pub fn schedule(&self) -> Vec<LoanPayment> {
        let count = self.installments as i64;
        let base = self.principal_cents / count;
        let remainder = self.principal_cents % count;
        (0..self.installments)
            .map(|index| {
                let date = shift_month(self.first_due, index as i32);
                let amount_cents = if index == self.installments - 1 {
                    base + remainder
                } else {
                    base
                };
                LoanPayment { date, amount_cents }
            })
            .collect()
    }

    pub fn record_payment(&mut self, date: NaiveDate, amount_cents: i64) {
        self.payments.push(LoanPayment { date, amount_cents });
    }

    pub fn paid_cents(&self) -> i64 {
        self.payments.iter().map(|payment| payment.amount_cents).sum()
    }

    pub fn outstanding_cents(&self) -> i64 {
        (self.principal_cents - self.paid_cents()).max(0)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_cents() >= self.principal_cents
    }

    /// First scheduled installment on or after `reference`, `None` once the
    /// loan is settled or the schedule is exhausted.
    pub fn next_installment(&self, reference: NaiveDate) -> Option<LoanPayment> {
        if self.is_settled() {
            return None;
        }
        self.schedule()
            .into_iter()
            .find(|entry| entry.date >= reference)
    }
}
