use crate::{
    config::{self, CalendarConfig, Fields},
    duration::{Duration, Unit},
    format,
};
use chrono::{DateTime, Utc};
use core::ops::{Add, Sub};

/// Field overrides for [`DateTimeExt::change`]. A `None` keeps the receiver's
/// component; a `Some` replaces it. Built with struct-update syntax:
///
/// ```
/// use tempo::prelude::*;
///
/// let t = tempo::datetime(2023, 2, 15, 10, 20, 30);
/// let first = t.change(FieldSet { day: Some(1), ..FieldSet::default() });
/// assert_eq!(first, tempo::datetime(2023, 2, 1, 10, 20, 30));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    /// Replacement calendar year.
    pub year: Option<i32>,
    /// Replacement calendar month, starting at `1`.
    pub month: Option<u32>,
    /// Replacement day of the month, starting at `1`.
    pub day: Option<u32>,
    /// Replacement hour of the day.
    pub hour: Option<u32>,
    /// Replacement minute of the hour.
    pub minute: Option<u32>,
    /// Replacement second of the minute.
    pub second: Option<u32>,
}

/// Fluent calendar conveniences for [`DateTime<Utc>`].
///
/// Every method derives its calendar fields through the process-wide
/// [`CalendarConfig`](crate::CalendarConfig) at call time, so reassigning the
/// shared timezone changes what these methods report for the same instant.
///
/// The accessor names shadow chrono's [`Datelike`](chrono::Datelike) and
/// [`Timelike`](chrono::Timelike) methods; if both traits are in scope, call
/// the one you mean with fully qualified syntax.
///
/// # Examples
///
/// ```
/// use tempo::prelude::*;
///
/// let t = tempo::datetime(2023, 2, 15, 10, 20, 30);
/// assert_eq!((t.year(), t.month(), t.day()), (2023, 2, 15));
/// assert_eq!(t.weekday(), 4); // Wednesday, numbered from Sunday = 1
/// assert_eq!(t.beginning_of_month(), tempo::date(2023, 2, 1));
/// assert_eq!(t.end_of_month(), tempo::datetime(2023, 2, 28, 23, 59, 59));
/// ```
pub trait DateTimeExt: Sized {
    /// The calendar year.
    fn year(&self) -> i32;
    /// The calendar month, `1`–`12`.
    fn month(&self) -> u32;
    /// The day of the month, `1`–`31`.
    fn day(&self) -> u32;
    /// The hour of the day, `0`–`23`.
    fn hour(&self) -> u32;
    /// The minute of the hour, `0`–`59`.
    fn minute(&self) -> u32;
    /// The second of the minute, `0`–`59`.
    fn second(&self) -> u32;
    /// The weekday, numbered from the first day of the week: Sunday is `1`,
    /// Saturday is `7`.
    fn weekday(&self) -> u32;

    /// Elapsed wall-clock seconds since `earlier`, as a signed real number.
    /// Positive means `self` is the later instant.
    fn seconds_since(&self, earlier: Self) -> f64;

    /// The signed number of *complete* `unit`s from `self` to `other`,
    /// truncated toward zero. Month and year counts follow the same
    /// clamp-at-month-end rule as addition, so January 31st to the last day
    /// of February counts as one full month.
    fn diff_in(&self, unit: Unit, other: Self) -> i64;

    /// Returns a new instant equal to `self` except for the components
    /// overridden in `overrides`, applied in a single calendar
    /// normalization (see [`CalendarConfig::compose`] for the overflow
    /// rules).
    fn change(&self, overrides: FieldSet) -> Self;

    /// Returns the instant on weekday `weekday` (Sunday = `1`) in the same
    /// week position relative to `self`, keeping the time of day: a value at
    /// or below the current weekday rewinds to the most recent occurrence,
    /// a larger value advances to the next one.
    fn change_weekday(&self, weekday: u32) -> Self;

    /// Midnight on January 1st of this instant's year.
    fn beginning_of_year(&self) -> Self;
    /// The last second of this instant's year.
    fn end_of_year(&self) -> Self;
    /// Midnight on the first of this instant's month.
    fn beginning_of_month(&self) -> Self;
    /// The last second of this instant's month.
    fn end_of_month(&self) -> Self;
    /// Midnight on the Sunday this instant's week began.
    fn beginning_of_week(&self) -> Self;
    /// The last second of this instant's week (Saturday night).
    fn end_of_week(&self) -> Self;
    /// Midnight of this instant's day.
    fn beginning_of_day(&self) -> Self;
    /// The last second of this instant's day.
    fn end_of_day(&self) -> Self;
    /// The top of this instant's hour.
    fn beginning_of_hour(&self) -> Self;
    /// The last second of this instant's hour.
    fn end_of_hour(&self) -> Self;
    /// The top of this instant's minute.
    fn beginning_of_minute(&self) -> Self;
    /// The last second of this instant's minute.
    fn end_of_minute(&self) -> Self;

    /// Renders this instant with a chrono strftime `pattern` (e.g.
    /// `"%Y-%m-%d"`) in the process-wide timezone.
    fn format_as(&self, pattern: &str) -> String;
}

impl DateTimeExt for DateTime<Utc> {
    fn year(&self) -> i32 {
        config::global().fields(*self).year
    }

    fn month(&self) -> u32 {
        config::global().fields(*self).month
    }

    fn day(&self) -> u32 {
        config::global().fields(*self).day
    }

    fn hour(&self) -> u32 {
        config::global().fields(*self).hour
    }

    fn minute(&self) -> u32 {
        config::global().fields(*self).minute
    }

    fn second(&self) -> u32 {
        config::global().fields(*self).second
    }

    fn weekday(&self) -> u32 {
        config::global().weekday(*self)
    }

    fn seconds_since(&self, earlier: Self) -> f64 {
        let delta = *self - earlier;
        delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9
    }

    fn diff_in(&self, unit: Unit, other: Self) -> i64 {
        diff_in_with(&config::global(), *self, unit, other)
    }

    fn change(&self, overrides: FieldSet) -> Self {
        change_with(&config::global(), *self, overrides)
    }

    fn change_weekday(&self, weekday: u32) -> Self {
        change_weekday_with(&config::global(), *self, weekday)
    }

    fn beginning_of_year(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Year)
    }

    fn end_of_year(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Year)
    }

    fn beginning_of_month(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Month)
    }

    fn end_of_month(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Month)
    }

    fn beginning_of_week(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Week)
    }

    fn end_of_week(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Week)
    }

    fn beginning_of_day(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Day)
    }

    fn end_of_day(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Day)
    }

    fn beginning_of_hour(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Hour)
    }

    fn end_of_hour(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Hour)
    }

    fn beginning_of_minute(&self) -> Self {
        beginning_of_with(&config::global(), *self, Unit::Minute)
    }

    fn end_of_minute(&self) -> Self {
        end_of_with(&config::global(), *self, Unit::Minute)
    }

    fn format_as(&self, pattern: &str) -> String {
        format::render(&config::global(), *self, pattern)
    }
}

/// Adds a [`Duration`] under the process-wide calendar config.
///
/// ```
/// use tempo::prelude::*;
///
/// let jan31 = tempo::date(2023, 1, 31);
/// assert_eq!(jan31 + 1.month(), tempo::date(2023, 2, 28));
/// ```
impl Add<Duration> for DateTime<Utc> {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        config::global().shift(self, rhs)
    }
}

/// Subtracts a [`Duration`]; exactly `self + (-rhs)`.
impl Sub<Duration> for DateTime<Utc> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        config::global().shift(self, -rhs)
    }
}

/// Builds an instant from explicit calendar fields, interpreted in the
/// process-wide timezone. Overflowing fields roll forward (see
/// [`CalendarConfig::compose`]).
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    config::global().compose(Fields {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// [`datetime`] at midnight.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    datetime(year, month, day, 0, 0, 0)
}

pub(crate) fn change_with(
    config: &CalendarConfig,
    t: DateTime<Utc>,
    overrides: FieldSet,
) -> DateTime<Utc> {
    let current = config.fields(t);
    config.compose(Fields {
        year: overrides.year.unwrap_or(current.year),
        month: overrides.month.unwrap_or(current.month),
        day: overrides.day.unwrap_or(current.day),
        hour: overrides.hour.unwrap_or(current.hour),
        minute: overrides.minute.unwrap_or(current.minute),
        second: overrides.second.unwrap_or(current.second),
    })
}

pub(crate) fn change_weekday_with(
    config: &CalendarConfig,
    t: DateTime<Utc>,
    weekday: u32,
) -> DateTime<Utc> {
    let delta = i64::from(weekday) - i64::from(config.weekday(t));
    config.shift(t, Duration::days(delta))
}

pub(crate) fn beginning_of_with(
    config: &CalendarConfig,
    t: DateTime<Utc>,
    unit: Unit,
) -> DateTime<Utc> {
    let zero = Some(0);
    let overrides = match unit {
        Unit::Year => FieldSet {
            year: None,
            month: Some(1),
            day: Some(1),
            hour: zero,
            minute: zero,
            second: zero,
        },
        Unit::Month => FieldSet {
            day: Some(1),
            hour: zero,
            minute: zero,
            second: zero,
            ..FieldSet::default()
        },
        Unit::Week => {
            let sunday = change_weekday_with(config, t, 1);
            return beginning_of_with(config, sunday, Unit::Day);
        }
        Unit::Day => FieldSet {
            hour: zero,
            minute: zero,
            second: zero,
            ..FieldSet::default()
        },
        Unit::Hour => FieldSet {
            minute: zero,
            second: zero,
            ..FieldSet::default()
        },
        Unit::Minute => FieldSet {
            second: zero,
            ..FieldSet::default()
        },
        // truncates any sub-second component
        Unit::Second => FieldSet::default(),
    };
    change_with(config, t, overrides)
}

pub(crate) fn end_of_with(config: &CalendarConfig, t: DateTime<Utc>, unit: Unit) -> DateTime<Utc> {
    let next_period = config.shift(beginning_of_with(config, t, unit), Duration::new(1, unit));
    config.shift(next_period, Duration::seconds(-1))
}

pub(crate) fn diff_in_with(
    config: &CalendarConfig,
    t: DateTime<Utc>,
    unit: Unit,
    other: DateTime<Utc>,
) -> i64 {
    let delta = other - t;
    match unit {
        Unit::Year => diff_months(config, t, other) / 12,
        Unit::Month => diff_months(config, t, other),
        Unit::Week => delta.num_weeks(),
        Unit::Day => delta.num_days(),
        Unit::Hour => delta.num_hours(),
        Unit::Minute => delta.num_minutes(),
        Unit::Second => delta.num_seconds(),
    }
}

fn diff_months(config: &CalendarConfig, t: DateTime<Utc>, other: DateTime<Utc>) -> i64 {
    let (a, b) = (config.fields(t), config.fields(other));
    // field-based estimate, then correct against the clamping shift; the
    // estimate is never off by more than one month
    let mut months = i64::from(b.year - a.year) * 12 + i64::from(b.month) - i64::from(a.month);
    let shifted = config.shift(t, Duration::months(months));
    if months > 0 && shifted > other {
        months -= 1;
    } else if months < 0 && shifted < other {
        months += 1;
    }
    months
}
