//! Query parameter assembly shared by every resource.
//!
//! Every value is normalized to its wire form when it is inserted:
//!
//! - dates render as `YYYY-MM-DD` whether given as a string or a [`NaiveDate`]
//! - booleans render as lowercase `true` / `false`
//! - lists are joined with a single delimiter and skipped when empty
//! - optional values are skipped when absent, so no `None` token ever reaches
//!   the query string

use crate::types::SortOrder;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

/// Delimiter for `tag_names` and `exclude_tag_names` lists.
pub const TAG_DELIMITER: char = ';';

/// Delimiter for `vintage_dates` lists.
pub const DATE_DELIMITER: char = ',';

/// Earliest date FRED accepts for real-time and observation windows.
pub const EARLIEST_DATE: &str = "1776-07-04";

/// Latest date FRED accepts for real-time and observation windows.
pub const LATEST_DATE: &str = "9999-12-31";

const ISO_DATE: &str = "%Y-%m-%d";
const UPDATE_TIME: &str = "%Y%m%d%H%M";

/// A date-valued query parameter.
///
/// Accepts either a literal ISO `YYYY-MM-DD` string or a structured date.
///
/// ```
/// use chrono::NaiveDate;
/// use fred_api::DateParam;
///
/// let literal = DateParam::from("2024-03-01");
/// let structured = DateParam::from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(literal.to_iso(), structured.to_iso());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    /// Literal `YYYY-MM-DD` string, sent as given.
    Iso(String),
    /// Structured calendar date.
    Date(NaiveDate),
}

impl DateParam {
    /// Today's local date.
    #[must_use]
    pub fn today() -> Self {
        Self::Date(Local::now().date_naive())
    }

    /// Render as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso(&self) -> String {
        match self {
            Self::Iso(s) => s.clone(),
            Self::Date(d) => d.format(ISO_DATE).to_string(),
        }
    }

    /// Parse into a [`NaiveDate`], if the value is a valid ISO date.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Iso(s) => NaiveDate::parse_from_str(s, ISO_DATE).ok(),
            Self::Date(d) => Some(*d),
        }
    }
}

impl fmt::Display for DateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl From<&str> for DateParam {
    fn from(s: &str) -> Self {
        Self::Iso(s.to_string())
    }
}

impl From<String> for DateParam {
    fn from(s: String) -> Self {
        Self::Iso(s)
    }
}

impl From<NaiveDate> for DateParam {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for DateParam {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Date(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateParam {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Date(dt.date_naive())
    }
}

/// The real-time period of a request.
///
/// Unset bounds fall back to the endpoint default, which is today for most
/// endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Realtime {
    /// Start of the real-time period.
    pub start: Option<DateParam>,
    /// End of the real-time period.
    pub end: Option<DateParam>,
}

impl Realtime {
    /// Real-time period using endpoint defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Real-time period between two dates.
    #[must_use]
    pub fn between(start: impl Into<DateParam>, end: impl Into<DateParam>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Real-time period covering a single day.
    #[must_use]
    pub fn on(date: impl Into<DateParam>) -> Self {
        let date = date.into();
        Self {
            start: Some(date.clone()),
            end: Some(date),
        }
    }

    /// Set the start of the period.
    #[must_use]
    pub fn start(mut self, date: impl Into<DateParam>) -> Self {
        self.start = Some(date.into());
        self
    }

    /// Set the end of the period.
    #[must_use]
    pub fn end(mut self, date: impl Into<DateParam>) -> Self {
        self.end = Some(date.into());
        self
    }

    /// Append `realtime_start` / `realtime_end`, defaulting to today.
    pub(crate) fn apply(&self, params: &mut QueryParams) {
        let today = DateParam::today();
        params.date("realtime_start", self.start.as_ref().unwrap_or(&today));
        params.date("realtime_end", self.end.as_ref().unwrap_or(&today));
    }

    /// Append `realtime_start` / `realtime_end` with explicit defaults.
    pub(crate) fn apply_or(&self, params: &mut QueryParams, start: &str, end: &str) {
        params.opt_date("realtime_start", self.start.as_ref(), start);
        params.opt_date("realtime_end", self.end.as_ref(), end);
    }
}

/// Offset, limit and sort order of a paged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Number of results to skip.
    pub offset: u32,
    /// Maximum number of results, 1 to 1000.
    pub limit: u32,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 1000,
            sort_order: SortOrder::Asc,
        }
    }
}

impl Paging {
    /// Set the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Append `offset`, `limit` and `sort_order`.
    pub(crate) fn apply(&self, params: &mut QueryParams) {
        self.apply_window(params);
        params.push("sort_order", self.sort_order.as_str());
    }

    /// Append `offset` and `limit` only.
    pub(crate) fn apply_window(&self, params: &mut QueryParams) {
        params.push("offset", self.offset);
        params.push("limit", self.limit);
    }
}

/// Ordered name/value pairs for a request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a value.
    pub fn push(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a value if present.
    pub fn opt<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Append a date as `YYYY-MM-DD`.
    pub fn date(&mut self, name: &str, date: &DateParam) -> &mut Self {
        self.push(name, date.to_iso())
    }

    /// Append a date, or `default` when absent.
    pub fn opt_date(&mut self, name: &str, date: Option<&DateParam>, default: &str) -> &mut Self {
        match date {
            Some(date) => self.date(name, date),
            None => self.push(name, default),
        }
    }

    /// Append a boolean as lowercase `true` / `false`.
    pub fn flag(&mut self, name: &str, value: bool) -> &mut Self {
        self.push(name, if value { "true" } else { "false" })
    }

    /// Append a delimited list. Skipped when the list is empty.
    pub fn list<S: AsRef<str>>(&mut self, name: &str, items: &[S], delimiter: char) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        let joined = items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        self.push(name, joined)
    }

    /// Append a comma-separated list of dates. Skipped when empty.
    pub fn dates(&mut self, name: &str, dates: &[DateParam]) -> &mut Self {
        let iso = dates.iter().map(DateParam::to_iso).collect::<Vec<_>>();
        self.list(name, &iso, DATE_DELIMITER)
    }

    /// Append a timestamp as `YYYYMMDDHhmm`.
    pub fn time(&mut self, name: &str, time: NaiveDateTime) -> &mut Self {
        self.push(name, time.format(UPDATE_TIME))
    }

    /// Replace every pair named `name` with a single pair.
    pub fn set(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.remove(name);
        self.push(name, value)
    }

    /// Drop every pair named `name`.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.pairs.retain(|(key, _)| key != name);
        self
    }

    /// First value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a pair named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
