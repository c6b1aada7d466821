use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Offset applied to wire timestamps that carry no zone (KST, UTC+9).
pub const BACKEND_OFFSET_SECS: i32 = 9 * 3600;

const AWARE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A deadline field on a group-buy record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Field missing, null or blank.
    #[default]
    Absent,
    /// Present but unparseable. Treated as already passed.
    Malformed(String),
    At(DateTime<Utc>),
}

impl Boundary {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether `now` is past this boundary.
    ///
    /// Malformed counts as passed, absent never passes.
    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Absent => false,
            Self::Malformed(_) => true,
            Self::At(ts) => now > *ts,
        }
    }
}

impl From<Option<&str>> for Boundary {
    fn from(raw: Option<&str>) -> Self {
        raw.map(parse_timestamp).unwrap_or_default()
    }
}

pub fn backend_offset() -> FixedOffset {
    // 9h is always within FixedOffset's +/-24h range
    FixedOffset::east_opt(BACKEND_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse a wire timestamp.
///
/// Aware timestamps (RFC 3339, `Z` or explicit offset) keep their offset.
/// Naive timestamps and bare dates are read as KST.
pub fn parse_timestamp(raw: &str) -> Boundary {
    let s = raw.trim();
    if s.is_empty() {
        return Boundary::Absent;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Boundary::At(ts.with_timezone(&Utc));
    }
    // basic offsets like +0900, and space-separated forms
    if let Some(ts) = AWARE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Boundary::At(ts.with_timezone(&Utc));
    }

    let kst = backend_offset();
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match naive.and_then(|n| kst.from_local_datetime(&n).single()) {
        Some(ts) => Boundary::At(ts.with_timezone(&Utc)),
        None => Boundary::Malformed(s.to_string()),
    }
}
