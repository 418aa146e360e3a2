use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::billing::calendar::{month_after, month_before};
use crate::errors::DomainError;

/// Grouping key for an invoice: the `(year, month)` it is due. Renders and
/// serializes as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvoiceMonth {
    pub year: i32,
    pub month: u32,
}

impl InvoiceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn next(self) -> Self {
        let (year, month) = month_after(self.year, self.month);
        Self { year, month }
    }

    pub fn previous(self) -> Self {
        let (year, month) = month_before(self.year, self.month);
        Self { year, month }
    }
}

impl fmt::Display for InvoiceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for InvoiceMonth {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parse_error = || DomainError::MonthLabelParse(value.to_string());
        let (year, month) = value.split_once('-').ok_or_else(parse_error)?;
        let year = year.parse::<i32>().map_err(|_| parse_error())?;
        let month = month.parse::<u32>().map_err(|_| parse_error())?;
        InvoiceMonth::new(year, month).map_err(|_| parse_error())
    }
}

impl Serialize for InvoiceMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InvoiceMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
