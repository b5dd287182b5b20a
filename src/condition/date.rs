use {
    super::variant::Variant,
    crate::serutil::StringList,
    chrono::{DateTime, SecondsFormat, Utc},
};

/// Date operation names.
pub(super) const DATE_DISPLAY_NAMES: [&str; 12] = [
    "DateEquals",
    "DateEqualsIfExists",
    "DateNotEquals",
    "DateNotEqualsIfExists",
    "DateLessThan",
    "DateLessThanIfExists",
    "DateGreaterThanEquals",
    "DateGreaterThanEqualsIfExists",
    "DateLessThanEquals",
    "DateLessThanEqualsIfExists",
    "DateGreaterThan",
    "DateGreaterThanIfExists",
];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum DateCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

impl DateCmp {
    pub(super) fn display_name(&self, variant: &Variant) -> &'static str {
        DATE_DISPLAY_NAMES[*self as usize | variant.as_usize()]
    }
}

/// Render a timestamp as ISO 8601 with millisecond precision and a `Z` suffix, e.g. `2020-04-01T00:00:00.000Z`.
fn date_string(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<DateTime<Utc>> for StringList {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Single(date_string(&value))
    }
}

impl From<Vec<DateTime<Utc>>> for StringList {
    fn from(value: Vec<DateTime<Utc>>) -> Self {
        Self::List(value.iter().map(date_string).collect())
    }
}
