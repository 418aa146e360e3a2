use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::{CycleConfig, InvoiceMonth};

/// A single purchase or income entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Uuid>,
    /// Invoice the purchase is assigned to; pre-filled from the card's
    /// cycle and overridable by the user before saving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_month: Option<InvoiceMonth>,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount_cents: i64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount_cents,
            date,
            category_id: None,
            card_id: None,
            invoice_month: None,
        }
    }

    pub fn with_card(mut self, card_id: Uuid) -> Self {
        self.card_id = Some(card_id);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Invoice this purchase counts against: the explicit assignment when
    /// present, otherwise the cycle's suggestion for the purchase date.
    pub fn effective_invoice_month(&self, cycle: &CycleConfig) -> InvoiceMonth {
        self.invoice_month
            .unwrap_or_else(|| cycle.suggest_invoice_month(self.date))
    }

    /// Pre-fills the invoice assignment the way the entry form does,
    /// leaving an existing user choice untouched.
    pub fn assign_invoice_month(&mut self, cycle: &CycleConfig) {
        if self.invoice_month.is_none() {
            self.invoice_month = Some(cycle.suggest_invoice_month(self.date));
        }
    }
}
