//! Hour-of-day and day-of-week activity histograms.

use chrono::Weekday;
use serde::Serialize;

use crate::record::ChatRecord;

/// Weekdays in reporting order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Messages sent during one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: usize,
}

/// Messages sent on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub day: &'static str,
    pub count: usize,
}

/// Records per hour of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyHistogram {
    counts: [usize; 24],
}

impl HourlyHistogram {
    /// Counts the records of an iterator.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ChatRecord>) -> Self {
        let mut counts = [0usize; 24];
        for record in records {
            // Timelike::hour is always < 24
            counts[record.hour() as usize] += 1;
        }
        Self { counts }
    }

    /// Count for one hour; hours outside 0-23 are zero.
    pub fn count(&self, hour: u32) -> usize {
        self.counts.get(hour as usize).copied().unwrap_or(0)
    }

    /// Hours with at least one record, ascending.
    pub fn observed(&self) -> Vec<HourBucket> {
        (0u32..)
            .zip(self.counts)
            .filter(|&(_, count)| count > 0)
            .map(|(hour, count)| HourBucket { hour, count })
            .collect()
    }

    /// The busiest hour, earliest on ties. `None` for an empty histogram.
    pub fn peak(&self) -> Option<HourBucket> {
        self.observed()
            .into_iter()
            .fold(None, |best: Option<HourBucket>, bucket| match best {
                Some(b) if b.count >= bucket.count => Some(b),
                _ => Some(bucket),
            })
    }
}

/// Records per weekday, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyHistogram {
    counts: [usize; 7],
}

impl DailyHistogram {
    /// Counts the records of an iterator.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ChatRecord>) -> Self {
        let mut counts = [0usize; 7];
        for record in records {
            counts[record.weekday().num_days_from_monday() as usize] += 1;
        }
        Self { counts }
    }

    /// Count for one weekday.
    pub fn count(&self, day: Weekday) -> usize {
        self.counts[day.num_days_from_monday() as usize]
    }

    /// Exactly seven buckets, Monday to Sunday, zero for missing days.
    pub fn buckets(&self) -> Vec<DayBucket> {
        WEEK.iter()
            .zip(self.counts)
            .map(|(&day, count)| DayBucket {
                day: weekday_name(day),
                count,
            })
            .collect()
    }
}
