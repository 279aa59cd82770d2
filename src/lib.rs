//! # tempo
//!
//! Fluent date/time conveniences layered over [chrono]: duration literals,
//! calendar-aware arithmetic, component accessors, period boundaries, and a
//! pattern-based formatting bridge.
//!
//! tempo adds no calendar math of its own. Every operation delegates to
//! chrono's Gregorian computations and merely fixes the conventions on top:
//! how durations combine with instants, what "end of month" means, and which
//! timezone fields are derived in.
//!
//! ## Examples
//!
//! Arithmetic and accessors read naturally:
//!
//! ```
//! use tempo::prelude::*;
//!
//! let t = tempo::datetime(2023, 2, 15, 10, 0, 0);
//! assert_eq!(t + 3.days(), tempo::datetime(2023, 2, 18, 10, 0, 0));
//! assert_eq!(t - 1.month(), tempo::datetime(2023, 1, 15, 10, 0, 0));
//! assert_eq!((t.year(), t.month(), t.day()), (2023, 2, 15));
//!
//! // month arithmetic is calendar-aware, not 30-day blocks
//! let jan31 = tempo::date(2023, 1, 31);
//! assert_eq!(jan31 + 1.month(), tempo::date(2023, 2, 28));
//! ```
//!
//! Period boundaries bracket an instant: the beginning zeroes every finer
//! field, and the end is the last second before the next period.
//!
//! ```
//! use tempo::prelude::*;
//!
//! let t = tempo::datetime(2023, 2, 15, 10, 0, 0);
//! assert_eq!(t.beginning_of_month(), tempo::date(2023, 2, 1));
//! assert_eq!(t.end_of_month(), tempo::datetime(2023, 2, 28, 23, 59, 59));
//! assert_eq!(t.beginning_of_week(), tempo::date(2023, 2, 12)); // Sunday
//! ```
//!
//! Strings convert through chrono strftime patterns:
//!
//! ```
//! use tempo::prelude::*;
//!
//! let t = tempo::datetime(2023, 2, 15, 10, 0, 0);
//! let s = t.format_as("%Y-%m-%d %H:%M:%S");
//! assert_eq!(tempo::parse_from_pattern(&s, "%Y-%m-%d %H:%M:%S"), Ok(t));
//! ```
//!
//! ## The shared calendar config
//!
//! All of the above runs under one process-wide [`CalendarConfig`]:
//! Gregorian calendar, UTC timezone until [`set_timezone`] is called.
//! Reassigning the timezone changes what every *subsequent* call reports,
//! including accessors on instants created earlier — fields belong to the
//! config, not the instant. The config is behind an `RwLock`, so the
//! intended pattern is to set the timezone once near process start and
//! treat it as read-mostly after that. Code that wants no global state can
//! hold its own [`CalendarConfig`] value and use its methods directly.
//!
//! ## Prelude
//!
//! Everything needed for the fluent surface comes in one glob import:
//!
//! ```
//! use tempo::prelude::*;
//! ```
#![warn(missing_docs)]

mod config;
mod duration;
mod error;
mod format;
mod moment;

pub use crate::config::{set_timezone, timezone, CalendarConfig, Fields};
pub use crate::duration::{ordinal, Duration, NumericalDuration, Unit};
pub use crate::error::ParseError;
pub use crate::format::{parse_from_pattern, parse_with};
pub use crate::moment::{date, datetime, DateTimeExt, FieldSet};

/// A convenience module appropriate for glob imports (`use tempo::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::CalendarConfig;
    #[doc(no_inline)]
    pub use crate::DateTimeExt;
    #[doc(no_inline)]
    pub use crate::Duration;
    #[doc(no_inline)]
    pub use crate::FieldSet;
    #[doc(no_inline)]
    pub use crate::NumericalDuration;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Unit;
}
