/// Numeric helpers.
///
/// This module provides the rounding routine shared by every operator that
/// coerces its operands to integers (integer division, the bit operators and
/// `Round`).
pub mod num;
