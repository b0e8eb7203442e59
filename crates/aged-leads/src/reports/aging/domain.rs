use serde::{Deserialize, Serialize};

/// Trailing window applied to the completion date before any bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    SixMonths,
    TwelveMonths,
}

impl TimeWindow {
    pub const fn months(self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
        }
    }

    /// Lenient form used for env/CLI values; serde handles the strict form.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "6" | "6_months" | "six_months" => Some(Self::SixMonths),
            "12" | "12_months" | "twelve_months" => Some(Self::TwelveMonths),
            _ => None,
        }
    }
}

/// Days between completion and insertion, bucketed for display.
///
/// Boundaries are inclusive on the upper edge: exactly 3 days is
/// `1-3 days`, exactly 9 days is `7-9 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    LessThanOneDay,
    OneToThreeDays,
    FourToSevenDays,
    SevenToNineDays,
    MoreThanNineDays,
}

impl AgeBucket {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::LessThanOneDay,
            Self::OneToThreeDays,
            Self::FourToSevenDays,
            Self::SevenToNineDays,
            Self::MoreThanNineDays,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThanOneDay => "Less than 1 day",
            Self::OneToThreeDays => "1-3 days",
            Self::FourToSevenDays => "4-7 days",
            Self::SevenToNineDays => "7-9 days",
            Self::MoreThanNineDays => "More than 9 days",
        }
    }

    pub const fn classify(days: i64) -> Self {
        match days {
            i64::MIN..=0 => Self::LessThanOneDay,
            1..=3 => Self::OneToThreeDays,
            4..=7 => Self::FourToSevenDays,
            8..=9 => Self::SevenToNineDays,
            _ => Self::MoreThanNineDays,
        }
    }
}

/// Tenure buckets for terminated hires, plus the `Active & Dormant`
/// sentinel that counts non-terminated hires without any duration math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentBucket {
    UpToThirtyDays,
    ThirtyOneToSixtyDays,
    SixtyOneToNinetyDays,
    NinetyDaysAndMore,
    ActiveAndDormant,
}

impl EmploymentBucket {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::UpToThirtyDays,
            Self::ThirtyOneToSixtyDays,
            Self::SixtyOneToNinetyDays,
            Self::NinetyDaysAndMore,
            Self::ActiveAndDormant,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToThirtyDays => "0-30 Days",
            Self::ThirtyOneToSixtyDays => "31-60 Days",
            Self::SixtyOneToNinetyDays => "61-90 Days",
            Self::NinetyDaysAndMore => "90 Days and More",
            Self::ActiveAndDormant => "Active & Dormant",
        }
    }

    /// Maps a signed tenure in whole days onto a tenure bucket. Never
    /// produces the sentinel.
    pub const fn classify_tenure(days: i64) -> Self {
        match days {
            i64::MIN..=30 => Self::UpToThirtyDays,
            31..=60 => Self::ThirtyOneToSixtyDays,
            61..=90 => Self::SixtyOneToNinetyDays,
            _ => Self::NinetyDaysAndMore,
        }
    }
}

/// Recognized employment statuses on hired records. Anything else in
/// the source column leaves the record unclassifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    Dormant,
    Terminated,
}

impl EmploymentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Active" => Some(Self::Active),
            "Dormant" => Some(Self::Dormant),
            "Terminated" => Some(Self::Terminated),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Dormant => "Dormant",
            Self::Terminated => "Terminated",
        }
    }

    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}
