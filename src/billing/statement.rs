//! Invoice aggregation: partitions a card's purchases into invoice buckets
//! and sums them per category for the billing dashboard.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::cycle::CycleConfig;
use crate::billing::month::InvoiceMonth;
use crate::billing::period::BillingPeriod;
use crate::ledger::{CreditCard, Transaction};

/// Per-category slice of a statement; `category_id` is `None` for
/// uncategorized purchases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category_id: Option<Uuid>,
    pub total_cents: i64,
}

/// One card invoice: the purchases that fall into its window and their
/// totals, grouped by the month the invoice is due.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub card_id: Uuid,
    pub due_month: InvoiceMonth,
    pub period: BillingPeriod,
    pub transaction_ids: Vec<Uuid>,
    pub total_cents: i64,
    pub category_totals: Vec<CategoryTotal>,
}

/// Partitions purchases into invoice buckets. A transaction's explicit
/// invoice assignment wins; otherwise the bucket comes from the cycle's
/// suggestion for its purchase date.
pub fn bucket_by_invoice<'a>(
    cycle: &CycleConfig,
    transactions: &'a [Transaction],
) -> BTreeMap<InvoiceMonth, Vec<&'a Transaction>> {
    let mut buckets: BTreeMap<InvoiceMonth, Vec<&Transaction>> = BTreeMap::new();
    for txn in transactions {
        buckets
            .entry(txn.effective_invoice_month(cycle))
            .or_default()
            .push(txn);
    }
    buckets
}

/// Builds the statement for `card` due in `due` from the given purchases.
/// Transactions on other cards are ignored.
pub fn build_statement(
    card: &CreditCard,
    transactions: &[Transaction],
    due: InvoiceMonth,
) -> Statement {
    let cycle = card.cycle();
    let period = cycle.period_for(due);

    let mut transaction_ids = Vec::new();
    let mut total_cents = 0i64;
    let mut by_category: HashMap<Option<Uuid>, i64> = HashMap::new();

    for txn in transactions {
        if txn.card_id != Some(card.id) {
            continue;
        }
        if txn.effective_invoice_month(&cycle) != due {
            continue;
        }
        transaction_ids.push(txn.id);
        total_cents += txn.amount_cents;
        *by_category.entry(txn.category_id).or_insert(0) += txn.amount_cents;
    }

    let mut category_totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category_id, total_cents)| CategoryTotal {
            category_id,
            total_cents,
        })
        .collect();
    category_totals.sort_by(|a, b| {
        b.total_cents
            .cmp(&a.total_cents)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });

    tracing::debug!(
        card = %card.name,
        due_month = %due,
        transactions = transaction_ids.len(),
        total_cents,
        "statement assembled"
    );

    Statement {
        card_id: card.id,
        due_month: due,
        period,
        transaction_ids,
        total_cents,
        category_totals,
    }
}
