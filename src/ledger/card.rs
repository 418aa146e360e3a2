use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::CycleConfig;
use crate::errors::DomainError;

/// A credit card and its billing-cycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: Uuid,
    pub name: String,
    pub limit_cents: i64,
    pub closing_day: u32,
    pub due_day: u32,
}

impl CreditCard {
    /// Validates the configured days on the way in; the cycle math itself
    /// assumes already-valid input.
    pub fn new(
        name: impl Into<String>,
        limit_cents: i64,
        closing_day: u32,
        due_day: u32,
    ) -> Result<Self, DomainError> {
        let cycle = CycleConfig::new(closing_day, due_day)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit_cents,
            closing_day: cycle.closing_day,
            due_day: cycle.due_day,
        })
    }

    pub fn cycle(&self) -> CycleConfig {
        CycleConfig {
            closing_day: self.closing_day,
            due_day: self.due_day,
        }
    }

    pub fn available_cents(&self, spent_cents: i64) -> i64 {
        self.limit_cents - spent_cents
    }
}
