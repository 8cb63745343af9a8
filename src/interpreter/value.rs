/// The tagged operand value and its numeric projection.
///
/// Defines the `Value` enum (integer, float, boolean) together with the
/// promotion helpers the arithmetic dispatch is built on.
pub mod core;
/// Canonical text rendering of float results.
///
/// Implements the 15-significant-digit format with `,` as the decimal
/// separator and the scientific-notation thresholds.
pub mod format;
