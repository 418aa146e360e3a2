//! Billing-cycle date model: translates a card's configured closing and due
//! days into concrete invoice periods and due-month labels, plus the
//! statement aggregation built on top of it.

pub mod calendar;
pub mod cycle;
pub mod month;
pub mod period;
pub mod statement;

pub use cycle::{effective_closing_date, CurrentBill, CycleConfig};
pub use month::InvoiceMonth;
pub use period::BillingPeriod;
pub use statement::{bucket_by_invoice, build_statement, CategoryTotal, Statement};
