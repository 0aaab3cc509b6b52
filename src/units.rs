use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Time units emitted by Google Benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds
    #[value(name = "ns")]
    #[serde(rename = "ns")]
    Nanos,
    /// Microseconds
    #[value(name = "us")]
    #[serde(rename = "us")]
    Micros,
    /// Milliseconds
    #[value(name = "ms")]
    #[serde(rename = "ms")]
    Millis,
}

impl TimeUnit {
    pub fn all() -> &'static [TimeUnit] {
        &[TimeUnit::Nanos, TimeUnit::Micros, TimeUnit::Millis]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
        }
    }

    fn nanos_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Nanos => 1.0,
            TimeUnit::Micros => 1_000.0,
            TimeUnit::Millis => 1_000_000.0,
        }
    }

    /// Convert a value measured in this unit to `dest`.
    ///
    /// Goes through nanoseconds-per-unit factors, so converting in one
    /// direction and back is exact up to floating-point rounding.
    pub fn convert(&self, value: f64, dest: TimeUnit) -> f64 {
        if *self == dest {
            return value;
        }
        value * self.nanos_per_unit() / dest.nanos_per_unit()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_unit_is_identity() {
        for &unit in TimeUnit::all() {
            assert_eq!(unit.convert(123.456, unit), 123.456);
        }
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(TimeUnit::Nanos.convert(100.0, TimeUnit::Micros), 0.1);
        assert_eq!(TimeUnit::Nanos.convert(200.0, TimeUnit::Micros), 0.2);
        assert_eq!(TimeUnit::Micros.convert(1.0, TimeUnit::Nanos), 1_000.0);
        assert_eq!(TimeUnit::Millis.convert(1.0, TimeUnit::Nanos), 1_000_000.0);
        // Adjacent units differ by a factor of exactly 1000 in both directions
        assert_eq!(TimeUnit::Millis.convert(1.0, TimeUnit::Micros), 1_000.0);
        assert_eq!(TimeUnit::Micros.convert(1_000.0, TimeUnit::Millis), 1.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TimeUnit::Nanos.to_string(), "ns");
        assert_eq!(TimeUnit::Micros.to_string(), "us");
        assert_eq!(TimeUnit::Millis.to_string(), "ms");
    }

    proptest! {
        #[test]
        fn prop_round_trip_preserves_value(
            value in 1e-3f64..1e9,
            src in 0usize..3,
            dest in 0usize..3,
        ) {
            let src = TimeUnit::all()[src];
            let dest = TimeUnit::all()[dest];
            let back = dest.convert(src.convert(value, dest), src);
            prop_assert!((back - value).abs() <= value * 1e-12);
        }
    }
}
