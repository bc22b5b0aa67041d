//! CLI subcommand modules.
//!
//! This module contains the implementations for all fred CLI subcommands.

pub(crate) mod category;
pub(crate) mod release;
pub(crate) mod series;
pub(crate) mod source;
pub(crate) mod tag;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use fred_api::Paging;

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid date {date_str:?}: {e}"))
}

/// Paging with an optional limit override.
pub(crate) fn paging(limit: Option<u32>) -> Paging {
    limit.map_or_else(Paging::default, |l| Paging::default().limit(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        let result = parse_date("01/15/2024");
        assert!(result.is_err());
    }

    #[test]
    fn test_paging_limit() {
        assert_eq!(paging(None).limit, 1000);
        assert_eq!(paging(Some(25)).limit, 25);
    }
}
