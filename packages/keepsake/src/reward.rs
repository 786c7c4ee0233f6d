use num_integer::Integer;

use crate::constants::SECONDS_PER_DAY;

/// Whole accrual days contained in `elapsed` seconds.
pub fn whole_days(elapsed: u64) -> u64 {
    elapsed.div_floor(&SECONDS_PER_DAY)
}

/// Reward accrued over `elapsed` seconds at `rate` reward-token units per
/// day. Returns `None` on arithmetic overflow.
pub fn accrued(rate: i128, elapsed: u64) -> Option<i128> {
    rate.checked_mul(whole_days(elapsed) as i128)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0 ; "zero elapsed")]
    #[test_case(86_399, 0 ; "just under a day")]
    #[test_case(86_400, 1 ; "exactly one day")]
    #[test_case(7 * 86_400, 7 ; "one week")]
    #[test_case(7 * 86_400 + 86_399, 7 ; "week plus partial day")]
    fn whole_days_floors(elapsed: u64, expected: u64) {
        assert_eq!(whole_days(elapsed), expected);
    }

    #[test_case(1, 7 * 86_400, 7 ; "one unit per day for a week")]
    #[test_case(2, 30 * 86_400, 60 ; "two units per day for a month")]
    #[test_case(10_000_000, 86_400, 10_000_000 ; "one full day at seven decimals")]
    #[test_case(3, 86_399, 0 ; "partial day accrues nothing")]
    fn accrued_is_rate_times_days(rate: i128, elapsed: u64, expected: i128) {
        assert_eq!(accrued(rate, elapsed), Some(expected));
    }

    #[test]
    fn accrued_overflow_is_none() {
        assert_eq!(accrued(i128::MAX, 2 * 86_400), None);
    }
}
