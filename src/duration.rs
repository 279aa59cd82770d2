use core::{
    fmt::{self, Display},
    ops::Neg,
};

/// A Gregorian calendar unit, from [`Unit::Year`] down to [`Unit::Second`].
///
/// Year and month arithmetic is calendar-aware (month lengths vary); week and
/// finer units are fixed-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A calendar year (12 calendar months).
    Year,
    /// A calendar month (28–31 days depending on the date).
    Month,
    /// Seven days.
    Week,
    /// Twenty-four hours.
    Day,
    /// Sixty minutes.
    Hour,
    /// Sixty seconds.
    Minute,
    /// One second.
    Second,
}

impl Unit {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable "N units" value, the right-hand operand of date arithmetic.
///
/// A [`Duration`] is just a magnitude paired with a [`Unit`]. The magnitude
/// may be zero or negative (`(-1).days()` means "one day earlier"); no
/// validation is performed at construction. What a duration *means* is decided
/// at the moment it is applied to an instant, under the calendar rules of the
/// active [`CalendarConfig`](crate::CalendarConfig).
///
/// # Examples
///
/// ```
/// use tempo::prelude::*;
///
/// assert_eq!(3.days(), Duration::days(3));
/// assert_eq!(-(3.days()), (-3).days());
/// assert_eq!(1.week().to_string(), "1 week");
/// assert_eq!(2.weeks().to_string(), "2 weeks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    value: i64,
    unit: Unit,
}

impl Duration {
    /// Returns a new [`Duration`] of `value` times `unit`.
    pub const fn new(value: i64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// The signed magnitude.
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The calendar unit.
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns a duration of `value` calendar years.
    pub const fn years(value: i64) -> Self {
        Self::new(value, Unit::Year)
    }

    /// Returns a duration of `value` calendar months.
    pub const fn months(value: i64) -> Self {
        Self::new(value, Unit::Month)
    }

    /// Returns a duration of `value` weeks.
    pub const fn weeks(value: i64) -> Self {
        Self::new(value, Unit::Week)
    }

    /// Returns a duration of `value` days.
    pub const fn days(value: i64) -> Self {
        Self::new(value, Unit::Day)
    }

    /// Returns a duration of `value` hours.
    pub const fn hours(value: i64) -> Self {
        Self::new(value, Unit::Hour)
    }

    /// Returns a duration of `value` minutes.
    pub const fn minutes(value: i64) -> Self {
        Self::new(value, Unit::Minute)
    }

    /// Returns a duration of `value` seconds.
    pub const fn seconds(value: i64) -> Self {
        Self::new(value, Unit::Second)
    }
}

impl Neg for Duration {
    type Output = Self;

    /// Flips the sign of the magnitude. `t - d` is exactly `t + (-d)`.
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.value.unsigned_abs() == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.value, self.unit, plural)
    }
}

/// Fluent [`Duration`] literals on integers, e.g. `3.days()` or `1.month()`.
///
/// Every unit has a singular and a plural method; they are exact synonyms, so
/// `1.day()` and `1.days()` produce identical values. The trait is implemented
/// for `i64`, which plain integer literals infer to.
///
/// # Examples
///
/// ```
/// use tempo::prelude::*;
///
/// let t = tempo::date(2023, 2, 15);
/// assert_eq!(t + 2.weeks(), tempo::date(2023, 3, 1));
/// assert_eq!(t - 1.day(), tempo::date(2023, 2, 14));
/// ```
pub trait NumericalDuration {
    /// Returns a duration of `self` calendar years.
    fn years(self) -> Duration;
    /// Synonym of [`NumericalDuration::years`].
    fn year(self) -> Duration;
    /// Returns a duration of `self` calendar months.
    fn months(self) -> Duration;
    /// Synonym of [`NumericalDuration::months`].
    fn month(self) -> Duration;
    /// Returns a duration of `self` weeks.
    fn weeks(self) -> Duration;
    /// Synonym of [`NumericalDuration::weeks`].
    fn week(self) -> Duration;
    /// Returns a duration of `self` days.
    fn days(self) -> Duration;
    /// Synonym of [`NumericalDuration::days`].
    fn day(self) -> Duration;
    /// Returns a duration of `self` hours.
    fn hours(self) -> Duration;
    /// Synonym of [`NumericalDuration::hours`].
    fn hour(self) -> Duration;
    /// Returns a duration of `self` minutes.
    fn minutes(self) -> Duration;
    /// Synonym of [`NumericalDuration::minutes`].
    fn minute(self) -> Duration;
    /// Returns a duration of `self` seconds.
    fn seconds(self) -> Duration;
    /// Synonym of [`NumericalDuration::seconds`].
    fn second(self) -> Duration;
}

impl NumericalDuration for i64 {
    fn years(self) -> Duration {
        Duration::years(self)
    }

    fn year(self) -> Duration {
        self.years()
    }

    fn months(self) -> Duration {
        Duration::months(self)
    }

    fn month(self) -> Duration {
        self.months()
    }

    fn weeks(self) -> Duration {
        Duration::weeks(self)
    }

    fn week(self) -> Duration {
        self.weeks()
    }

    fn days(self) -> Duration {
        Duration::days(self)
    }

    fn day(self) -> Duration {
        self.days()
    }

    fn hours(self) -> Duration {
        Duration::hours(self)
    }

    fn hour(self) -> Duration {
        self.hours()
    }

    fn minutes(self) -> Duration {
        Duration::minutes(self)
    }

    fn minute(self) -> Duration {
        self.minutes()
    }

    fn seconds(self) -> Duration {
        Duration::seconds(self)
    }

    fn second(self) -> Duration {
        self.seconds()
    }
}

/// Returns the English ordinal suffix for an integer: `1` → `"st"`, `2` →
/// `"nd"`, `3` → `"rd"`, everything else → `"th"`, with the teens (`11`–`13`,
/// `111`–`113`, ...) always `"th"`.
///
/// The suffix is computed on the magnitude, so negative integers get the same
/// suffix as their absolute value: `ordinal(-2)` is `"nd"`.
///
/// # Examples
///
/// ```
/// use tempo::ordinal;
///
/// assert_eq!(ordinal(1), "st");
/// assert_eq!(ordinal(11), "th");
/// assert_eq!(ordinal(21), "st");
/// assert_eq!(ordinal(111), "th");
/// ```
pub fn ordinal(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    let ones = n % 10;
    let tens = (n / 10) % 10;
    if tens == 1 {
        return "th";
    }
    match ones {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
