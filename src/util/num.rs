/// Rounds a floating-point value to the nearest `i64`, ties to even.
///
/// This is the rounding mode every integer-coercing operator uses: integer
/// division, the bit operators, `Not` and `Round`. Values outside the `i64`
/// range saturate; `NaN` rounds to `0`.
///
/// # Parameters
/// - `value`: The floating-point value to round.
///
/// # Returns
/// The nearest integer, with ties resolved to the even neighbor.
///
/// # Example
/// ```
/// use basicalc::util::num::round_to_i64;
///
/// assert_eq!(round_to_i64(2.5), 2);
/// assert_eq!(round_to_i64(3.5), 4);
/// assert_eq!(round_to_i64(-0.5), 0);
/// assert_eq!(round_to_i64(9.51), 10);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_i64(value: f64) -> i64 {
    value.round_ties_even() as i64
}
