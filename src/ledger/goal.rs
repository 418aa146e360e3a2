use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::calendar::months_between;
use crate::errors::DomainError;

/// A savings target, optionally with a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_cents: i64,
    #[serde(default)]
    pub saved_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_cents: i64) -> Result<Self, DomainError> {
        if target_cents <= 0 {
            return Err(DomainError::InvalidAmount(target_cents));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_cents,
            saved_cents: 0,
            deadline: None,
        })
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn record_deposit(&mut self, amount_cents: i64) {
        self.saved_cents += amount_cents;
    }

    pub fn remaining_cents(&self) -> i64 {
        (self.target_cents - self.saved_cents).max(0)
    }

    /// Fraction of the target already saved, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        (self.saved_cents as f64 / self.target_cents as f64).clamp(0.0, 1.0)
    }

    pub fn is_reached(&self) -> bool {
        self.saved_cents >= self.target_cents
    }

    /// Contribution needed per month to hit the target by the deadline,
    /// spread over the whole months remaining (at least one). `None`
    /// without a deadline.
    pub fn monthly_target_cents(&self, reference: NaiveDate) -> Option<i64> {
        let deadline = self.deadline?;
        let remaining = self.remaining_cents();
        if remaining == 0 {
            return Some(0);
        }
        let months = months_between(reference, deadline).max(1) as i64;
        Some((remaining + months - 1) / months)
    }
}
