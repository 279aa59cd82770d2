/// Errors from the string ⇄ instant formatting bridge.
///
/// A mismatched input is the only recoverable failure in this crate. Calendar
/// computations that cannot represent their result (which requires a
/// pathological configuration on a Gregorian/UTC setup) instead abort through
/// [`calendar_fault`], because callers have no meaningful recovery path.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    /// The input string does not match the strftime pattern under the active
    /// calendar and timezone.
    #[error("input `{input}` does not match pattern `{pattern}`")]
    PatternMismatch {
        /// The string that failed to parse.
        input: String,
        /// The strftime pattern it was parsed against.
        pattern: String,
        /// The underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// Aborts on an unrepresentable calendar result.
///
/// Every call site is unreachable under a properly initialized Gregorian/UTC
/// configuration with in-range field values.
#[cold]
pub(crate) fn calendar_fault(op: &str) -> ! {
    panic!("calendar computation failed: {op}");
}
