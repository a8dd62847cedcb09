use chrono::{Datelike, Timelike};
use std::fmt::{Display, Formatter};

/// A single timestamp field addressable from a mask.
///
/// Each variant corresponds 1:1 to one of the seven field symbols of the
/// mask language: `Y`, `M`, `D`, `h`, `m`, `s` and `W`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Weekday,
}

impl TimeField {
    /// Map a field symbol character to its field, if it is one of the seven
    /// recognized symbols.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'Y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'D' => Some(Self::Day),
            'h' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'W' => Some(Self::Weekday),
            _ => None,
        }
    }

    /// The symbol under which this field appears in a mask.
    pub fn symbol(&self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month => 'M',
            Self::Day => 'D',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
            Self::Weekday => 'W',
        }
    }
}

impl Display for TimeField {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "{}", self.symbol())
    }
}

/// The broken-down, immutable view of a timestamp that masks are evaluated
/// against.
///
/// Weekdays are numbered `0` (Sunday) through `6` (Saturday). The host layer
/// is responsible for any timezone conversion before handing the timestamp
/// in; from this crate's point of view the fields are plain integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    weekday: u32,
}

impl TimeFields {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        weekday: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Resolve a single field to its integer value.
    ///
    /// This is a pure lookup with no failure mode; it is also exposed so
    /// that collaborators needing one field's value (e.g. for diagnostics)
    /// do not have to run a full mask.
    #[inline]
    pub fn value(&self, field: TimeField) -> i64 {
        match field {
            TimeField::Year => i64::from(self.year),
            TimeField::Month => i64::from(self.month),
            TimeField::Day => i64::from(self.day),
            TimeField::Hour => i64::from(self.hour),
            TimeField::Minute => i64::from(self.minute),
            TimeField::Second => i64::from(self.second),
            TimeField::Weekday => i64::from(self.weekday),
        }
    }
}

impl<T: Datelike + Timelike> From<&T> for TimeFields {
    fn from(timestamp: &T) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
            day: timestamp.day(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            second: timestamp.second(),
            weekday: timestamp.weekday().num_days_from_sunday(),
        }
    }
}
