use crate::{
    duration::{Duration, Unit},
    error::calendar_fault,
};
use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc,
};
use std::sync::{PoisonError, RwLock};

/// The calendar fields of an instant, as decomposed by [`CalendarConfig::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, `1`–`12`.
    pub month: u32,
    /// Day of the month, `1`–`31`.
    pub day: u32,
    /// Hour of the day, `0`–`23`.
    pub hour: u32,
    /// Minute of the hour, `0`–`59`.
    pub minute: u32,
    /// Second of the minute, `0`–`59`.
    pub second: u32,
}

/// The Gregorian calendar context every computation in this crate runs under.
///
/// A config pairs the Gregorian calendar with a fixed-offset timezone. The
/// fluent surface (operators, accessors, boundaries, formatting) reads the
/// process-wide config at call time — see [`timezone`] and [`set_timezone`] —
/// so reassigning the shared timezone changes what *every* subsequent
/// computation reports, even for instants created earlier.
///
/// For code that would rather not touch global state (tests especially), the
/// same calendar services are available as inherent methods on an explicit
/// config value:
///
/// ```
/// use chrono::FixedOffset;
/// use tempo::CalendarConfig;
///
/// let ist = CalendarConfig::with_timezone(FixedOffset::east_opt(19800).unwrap());
/// let t = tempo::datetime(2023, 2, 15, 10, 0, 0); // 10:00 UTC
/// assert_eq!(ist.fields(t).hour, 15); // 15:30 IST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    // FixedOffset has no const constructor, so the offset is stored raw and
    // rebuilt on access.
    offset_secs: i32,
}

impl CalendarConfig {
    /// The Gregorian calendar in UTC, the process-wide default.
    pub const fn utc() -> Self {
        Self { offset_secs: 0 }
    }

    /// The Gregorian calendar in the given fixed-offset timezone.
    pub fn with_timezone(tz: FixedOffset) -> Self {
        Self {
            offset_secs: tz.local_minus_utc(),
        }
    }

    /// The timezone calendar fields are derived in.
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_secs)
            .unwrap_or_else(|| calendar_fault("timezone offset out of range"))
    }

    fn local(&self, t: DateTime<Utc>) -> DateTime<FixedOffset> {
        t.with_timezone(&self.timezone())
    }

    /// Decomposes `t` into calendar fields under this config's timezone.
    pub fn fields(&self, t: DateTime<Utc>) -> Fields {
        let local = self.local(t);
        Fields {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        }
    }

    /// The weekday of `t`, numbered from the first day of the week: Sunday is
    /// `1`, Saturday is `7`.
    pub fn weekday(&self, t: DateTime<Utc>) -> u32 {
        self.local(t).weekday().number_from_sunday()
    }

    /// Builds an instant from calendar fields, interpreted in this config's
    /// timezone.
    ///
    /// All fields are normalized together: out-of-range months and days roll
    /// forward through the calendar, so `month: 2, day: 31` lands on March 3rd
    /// (or the 2nd in a leap year). Month and day start at `1`; a zero there,
    /// or an out-of-range time field, is a calendar fault.
    pub fn compose(&self, fields: Fields) -> DateTime<Utc> {
        let Fields {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = fields;
        if month == 0 || day == 0 {
            calendar_fault("month and day fields start at 1");
        }
        let date = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.checked_add_months(Months::new(month - 1)))
            .and_then(|d| d.checked_add_days(Days::new(u64::from(day - 1))))
            .unwrap_or_else(|| calendar_fault("date fields out of range"));
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .unwrap_or_else(|| calendar_fault("time fields out of range"));
        self.timezone()
            .from_local_datetime(&date.and_time(time))
            .single()
            .unwrap_or_else(|| calendar_fault("local datetime is not representable"))
            .with_timezone(&Utc)
    }

    /// Moves `t` by `d` under this config's calendar rules.
    ///
    /// Year and month shifts are calendar-aware: the day of the month is kept
    /// and clamped to the target month's length, so January 31st plus one
    /// month is the last day of February. Week and finer units are fixed
    /// spans of wall-clock time. The shift is computed on the local
    /// representation of `t`, then mapped back to UTC.
    pub fn shift(&self, t: DateTime<Utc>, d: Duration) -> DateTime<Utc> {
        let local = self.local(t);
        let value = d.value();
        let shifted = match d.unit() {
            Unit::Year => value.checked_mul(12).and_then(|m| shift_months(local, m)),
            Unit::Month => shift_months(local, value),
            Unit::Week => TimeDelta::try_weeks(value).and_then(|td| local.checked_add_signed(td)),
            Unit::Day => TimeDelta::try_days(value).and_then(|td| local.checked_add_signed(td)),
            Unit::Hour => TimeDelta::try_hours(value).and_then(|td| local.checked_add_signed(td)),
            Unit::Minute => {
                TimeDelta::try_minutes(value).and_then(|td| local.checked_add_signed(td))
            }
            Unit::Second => {
                TimeDelta::try_seconds(value).and_then(|td| local.checked_add_signed(td))
            }
        };
        shifted
            .unwrap_or_else(|| calendar_fault("shifted instant is not representable"))
            .with_timezone(&Utc)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::utc()
    }
}

fn shift_months(t: DateTime<FixedOffset>, months: i64) -> Option<DateTime<FixedOffset>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        t.checked_add_months(Months::new(magnitude))
    } else {
        t.checked_sub_months(Months::new(magnitude))
    }
}

static GLOBAL: RwLock<CalendarConfig> = RwLock::new(CalendarConfig::utc());

/// A snapshot of the process-wide config, taken at call time.
pub(crate) fn global() -> CalendarConfig {
    *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

/// The process-wide timezone. UTC until reassigned with [`set_timezone`].
pub fn timezone() -> FixedOffset {
    global().timezone()
}

/// Replaces the process-wide timezone.
///
/// This affects every subsequent fluent computation in the process, not just
/// instants created afterwards. Intended to be called once near process start;
/// the config is read-mostly after that.
pub fn set_timezone(tz: FixedOffset) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = CalendarConfig::with_timezone(tz);
}

/// Serializes tests that read or write the process-wide config, so a timezone
/// reassignment in one test cannot race another test's fluent calls.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
