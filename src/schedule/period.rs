//! Frequency arithmetic for the common sub-period timeline

/// Greatest common divisor, operands clamped to at least 1
pub fn gcd(a: u64, b: u64) -> u64 {
    let mut x = a.max(1);
    let mut y = b.max(1);
    while y != 0 {
        let t = y;
        y = x % y;
        x = t;
    }
    x
}

/// Least common multiple, operands clamped to at least 1
///
/// Both operands of the engine are `u32`, so the result always fits.
pub fn lcm(a: u64, b: u64) -> u64 {
    let a = a.max(1);
    let b = b.max(1);
    a / gcd(a, b) * b
}

/// Named event frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Yearly,
    Semiannual,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
    Custom(u32),
}

impl Cadence {
    pub fn from_frequency(per_year: u32) -> Self {
        match per_year {
            1 => Cadence::Yearly,
            2 => Cadence::Semiannual,
            4 => Cadence::Quarterly,
            12 => Cadence::Monthly,
            52 => Cadence::Weekly,
            365 => Cadence::Daily,
            n => Cadence::Custom(n),
        }
    }

    /// Noun for one period, used in row labels ("Month 3")
    pub fn period_name(&self) -> &'static str {
        match self {
            Cadence::Yearly => "Year",
            Cadence::Semiannual => "Semester",
            Cadence::Quarterly => "Quarter",
            Cadence::Monthly => "Month",
            Cadence::Weekly => "Week",
            Cadence::Daily => "Day",
            Cadence::Custom(_) => "Period",
        }
    }

    /// Adjective used in field captions ("monthly contribution")
    pub fn adjective(&self) -> &'static str {
        match self {
            Cadence::Yearly => "yearly",
            Cadence::Semiannual => "semiannually",
            Cadence::Quarterly => "quarterly",
            Cadence::Monthly => "monthly",
            Cadence::Weekly => "weekly",
            Cadence::Daily => "daily",
            Cadence::Custom(_) => "periodic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(12, 18), 36);
        assert_eq!(lcm(1, 12), 12);
        assert_eq!(lcm(52, 12), 156);
        assert_eq!(lcm(365, 12), 4380);
        assert_eq!(lcm(0, 4), 4);
    }

    #[test]
    fn test_lcm_divisible_by_both() {
        let freqs = [1u64, 2, 3, 4, 6, 7, 12, 26, 52, 365];
        for &a in &freqs {
            for &b in &freqs {
                let m = lcm(a, b);
                assert_eq!(m % a, 0, "lcm({a}, {b})");
                assert_eq!(m % b, 0, "lcm({a}, {b})");
            }
        }
    }

    #[test]
    fn test_lcm_of_largest_frequencies_fits() {
        let max = u32::MAX as u64;
        assert_eq!(lcm(max, max - 1), max * (max - 1));
    }

    #[test]
    fn test_cadence_names() {
        assert_eq!(Cadence::from_frequency(12), Cadence::Monthly);
        assert_eq!(Cadence::from_frequency(12).period_name(), "Month");
        assert_eq!(Cadence::from_frequency(2).adjective(), "semiannually");
        assert_eq!(Cadence::from_frequency(3), Cadence::Custom(3));
        assert_eq!(Cadence::Custom(3).period_name(), "Period");
    }
}
