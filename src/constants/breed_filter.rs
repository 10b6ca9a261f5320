//! Bounds for the free-text range scans used by the breed filter.
//!
//! The catalog stores life span and weight as prose ("10 - 15 years",
//! "4 - 6 kg"), so range filters are pattern scans over a bounded integer
//! range rather than numeric comparisons.

/// Upper bound (inclusive, years) for life-span pattern scans.
pub const LIFE_SPAN_SCAN_MAX_YEARS: u32 = 30;

/// Upper bound (inclusive, kg) for weight pattern scans.
pub const WEIGHT_SCAN_MAX_KG: u32 = 120;
