use thiserror::Error;

/// Error type for validation at the form/schema boundary. The date
/// arithmetic itself is total over validated inputs and never returns these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("closing day must be between 1 and 31, got {0}")]
    InvalidClosingDay(u32),
    #[error("due day must be between 1 and 31, got {0}")]
    InvalidDueDay(u32),
    #[error("billing day must be between 1 and 31, got {0}")]
    InvalidBillingDay(u32),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("invalid invoice month label: {0}")]
    MonthLabelParse(String),
    #[error("amount must be positive, got {0}")]
    InvalidAmount(i64),
    #[error("installment count must be at least 1, got {0}")]
    InvalidInstallments(u32),
}
