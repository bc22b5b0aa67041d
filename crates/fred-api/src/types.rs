//! Enumerated query values accepted by the FRED API.

/// Sort direction for paged results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Data value transformation applied to observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Levels (no transformation).
    #[default]
    Levels,
    /// Change.
    Change,
    /// Change from a year ago.
    ChangeFromYearAgo,
    /// Percent change.
    PercentChange,
    /// Percent change from a year ago.
    PercentChangeFromYearAgo,
    /// Compounded annual rate of change.
    CompoundedAnnualRate,
    /// Continuously compounded rate of change.
    ContinuouslyCompoundedRate,
    /// Continuously compounded annual rate of change.
    ContinuouslyCompoundedAnnualRate,
    /// Natural log.
    NaturalLog,
}

impl Units {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Levels => "lin",
            Self::Change => "chg",
            Self::ChangeFromYearAgo => "ch1",
            Self::PercentChange => "pch",
            Self::PercentChangeFromYearAgo => "pc1",
            Self::CompoundedAnnualRate => "pca",
            Self::ContinuouslyCompoundedRate => "cch",
            Self::ContinuouslyCompoundedAnnualRate => "cca",
            Self::NaturalLog => "log",
        }
    }

    /// Parse an API units code such as `"pch"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        const ALL: [Units; 9] = [
            Units::Levels,
            Units::Change,
            Units::ChangeFromYearAgo,
            Units::PercentChange,
            Units::PercentChangeFromYearAgo,
            Units::CompoundedAnnualRate,
            Units::ContinuouslyCompoundedRate,
            Units::ContinuouslyCompoundedAnnualRate,
            Units::NaturalLog,
        ];
        let code = code.to_ascii_lowercase();
        ALL.into_iter().find(|u| u.as_str() == code)
    }
}

/// Observation frequency to aggregate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Daily.
    Daily,
    /// Weekly.
    Weekly,
    /// Biweekly.
    Biweekly,
    /// Monthly.
    Monthly,
    /// Quarterly.
    Quarterly,
    /// Semiannual.
    Semiannual,
    /// Annual.
    Annual,
    /// Weekly, ending Friday.
    WeeklyEndingFriday,
    /// Weekly, ending Thursday.
    WeeklyEndingThursday,
    /// Weekly, ending Wednesday.
    WeeklyEndingWednesday,
    /// Weekly, ending Tuesday.
    WeeklyEndingTuesday,
    /// Weekly, ending Monday.
    WeeklyEndingMonday,
    /// Weekly, ending Sunday.
    WeeklyEndingSunday,
    /// Weekly, ending Saturday.
    WeeklyEndingSaturday,
    /// Biweekly, ending Wednesday.
    BiweeklyEndingWednesday,
    /// Biweekly, ending Monday.
    BiweeklyEndingMonday,
}

impl Frequency {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Biweekly => "bw",
            Self::Monthly => "m",
            Self::Quarterly => "q",
            Self::Semiannual => "sa",
            Self::Annual => "a",
            Self::WeeklyEndingFriday => "wef",
            Self::WeeklyEndingThursday => "weth",
            Self::WeeklyEndingWednesday => "wew",
            Self::WeeklyEndingTuesday => "wetu",
            Self::WeeklyEndingMonday => "wem",
            Self::WeeklyEndingSunday => "wesu",
            Self::WeeklyEndingSaturday => "wesa",
            Self::BiweeklyEndingWednesday => "bwew",
            Self::BiweeklyEndingMonday => "bwem",
        }
    }

    /// Parse an API frequency code such as `"m"` or `"wef"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        const ALL: [Frequency; 16] = [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Semiannual,
            Frequency::Annual,
            Frequency::WeeklyEndingFriday,
            Frequency::WeeklyEndingThursday,
            Frequency::WeeklyEndingWednesday,
            Frequency::WeeklyEndingTuesday,
            Frequency::WeeklyEndingMonday,
            Frequency::WeeklyEndingSunday,
            Frequency::WeeklyEndingSaturday,
            Frequency::BiweeklyEndingWednesday,
            Frequency::BiweeklyEndingMonday,
        ];
        let code = code.to_ascii_lowercase();
        ALL.into_iter().find(|f| f.as_str() == code)
    }
}

/// How observations are combined when converting to a lower frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMethod {
    /// Average.
    #[default]
    Average,
    /// Sum.
    Sum,
    /// End of period.
    EndOfPeriod,
}

impl AggregationMethod {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::Sum => "sum",
            Self::EndOfPeriod => "eop",
        }
    }
}

/// Shape of an observations response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Observations by real-time period.
    #[default]
    RealtimePeriod,
    /// Observations by vintage date, all observations.
    VintageAll,
    /// Observations by vintage date, new and revised observations only.
    VintageNewAndRevised,
    /// Observations, initial release only.
    InitialRelease,
}

impl OutputType {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::RealtimePeriod => 1,
            Self::VintageAll => 2,
            Self::VintageNewAndRevised => 3,
            Self::InitialRelease => 4,
        }
    }
}

/// Which attributes a series search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Title, units, frequency and tags.
    #[default]
    FullText,
    /// Series ids, wildcards allowed.
    SeriesId,
}

impl SearchType {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullText => "full_text",
            Self::SeriesId => "series_id",
        }
    }
}

/// Geography filter for series updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateFilter {
    /// All series.
    #[default]
    All,
    /// National series only.
    Macro,
    /// Regional series only.
    Regional,
}

impl UpdateFilter {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Macro => "macro",
            Self::Regional => "regional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_api_defaults() {
        assert_eq!(SortOrder::default().as_str(), "asc");
        assert_eq!(Units::default().as_str(), "lin");
        assert_eq!(AggregationMethod::default().as_str(), "avg");
        assert_eq!(OutputType::default().as_u8(), 1);
        assert_eq!(SearchType::default().as_str(), "full_text");
        assert_eq!(UpdateFilter::default().as_str(), "all");
    }

    #[test]
    fn test_frequency_from_code() {
        assert_eq!(Frequency::from_code("m"), Some(Frequency::Monthly));
        assert_eq!(Frequency::from_code("WEF"), Some(Frequency::WeeklyEndingFriday));
        assert_eq!(Frequency::from_code("bwem"), Some(Frequency::BiweeklyEndingMonday));
        assert_eq!(Frequency::from_code("hourly"), None);
    }

    #[test]
    fn test_units_from_code() {
        assert_eq!(Units::from_code("pc1"), Some(Units::PercentChangeFromYearAgo));
        assert_eq!(Units::from_code("LIN"), Some(Units::Levels));
        assert_eq!(Units::from_code("pct"), None);
    }

    #[test]
    fn test_output_type_codes() {
        assert_eq!(OutputType::VintageAll.as_u8(), 2);
        assert_eq!(OutputType::VintageNewAndRevised.as_u8(), 3);
        assert_eq!(OutputType::InitialRelease.as_u8(), 4);
    }
}
