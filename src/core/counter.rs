use crate::core::PairCounter;
use crate::utils::error::Result;
use crate::utils::validation::validate_divisor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Counts pairs `i < j` with `(values[i] + values[j]) % k == 0` by checking every pair.
///
/// Sums are widened to `i64`, so any two `i32` values add without overflow.
/// Returns [`PairError::InvalidDivisor`](crate::PairError::InvalidDivisor) when `k == 0`.
pub fn divisible_sum_pairs(values: &[i32], k: i32) -> Result<u64> {
    validate_divisor(k)?;
    let k = i64::from(k);

    let mut count = 0;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if (i64::from(a) + i64::from(b)) % k == 0 {
                count += 1;
            }
        }
    }
    Ok(count)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCounter;

impl PairCounter for BruteForceCounter {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn count_pairs(&self, values: &[i32], k: i32) -> Result<u64> {
        divisible_sum_pairs(values, k)
    }
}

/// Groups values by `rem_euclid(|k|)` and pairs complementary classes in O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct RemainderCounter;

impl PairCounter for RemainderCounter {
    fn name(&self) -> &'static str {
        "remainder"
    }

    fn count_pairs(&self, values: &[i32], k: i32) -> Result<u64> {
        validate_divisor(k)?;
        let modulus = i64::from(k).abs();

        let mut classes: HashMap<i64, u64> = HashMap::new();
        for &v in values {
            *classes.entry(i64::from(v).rem_euclid(modulus)).or_insert(0) += 1;
        }

        let mut count = 0;
        for (&r, &c) in &classes {
            let complement = (modulus - r) % modulus;
            if r == complement {
                count += c * c.saturating_sub(1) / 2;
            } else if r < complement {
                count += c * classes.get(&complement).copied().unwrap_or(0);
            }
        }
        Ok(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    BruteForce,
    Remainder,
}

impl Strategy {
    pub fn counter(self) -> Box<dyn PairCounter> {
        match self {
            Strategy::BruteForce => Box::new(BruteForceCounter),
            Strategy::Remainder => Box::new(RemainderCounter),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BruteForce => write!(f, "brute-force"),
            Strategy::Remainder => write!(f, "remainder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PairError;

    const STRATEGIES: [Strategy; 2] = [Strategy::BruteForce, Strategy::Remainder];

    #[test]
    fn test_fixed_example() {
        assert_eq!(divisible_sum_pairs(&[1, 3, 2, 6, 1, 2], 3).unwrap(), 5);
    }

    #[test]
    fn test_known_scenarios() {
        for strategy in STRATEGIES {
            let counter = strategy.counter();
            assert_eq!(counter.count_pairs(&[1, 3, 2, 6, 1, 2], 3).unwrap(), 5);
            assert_eq!(counter.count_pairs(&[1, 2, 3], 1).unwrap(), 3);
            assert_eq!(counter.count_pairs(&[5, 10, 15, 20], 5).unwrap(), 6);
        }
    }

    #[test]
    fn test_short_inputs_yield_zero() {
        for strategy in STRATEGIES {
            let counter = strategy.counter();
            assert_eq!(counter.count_pairs(&[], 3).unwrap(), 0);
            assert_eq!(counter.count_pairs(&[9], 3).unwrap(), 0);
        }
    }

    #[test]
    fn test_zero_divisor_rejected() {
        for strategy in STRATEGIES {
            let result = strategy.counter().count_pairs(&[1, 2, 3], 0);
            assert!(matches!(result, Err(PairError::InvalidDivisor)));
        }
    }

    #[test]
    fn test_no_qualifying_pairs() {
        // every sum is 2 mod 4
        for strategy in STRATEGIES {
            assert_eq!(strategy.counter().count_pairs(&[1, 5, 9, 13], 4).unwrap(), 0);
        }
    }

    #[test]
    fn test_negative_values_and_divisor() {
        let values = [-1, 1, -3, 4, 2, -2, 0];
        let expected = divisible_sum_pairs(&values, 3).unwrap();
        for strategy in STRATEGIES {
            let counter = strategy.counter();
            assert_eq!(counter.count_pairs(&values, 3).unwrap(), expected);
            assert_eq!(counter.count_pairs(&values, -3).unwrap(), expected);
        }
        // (-1,1) (-1,4) (-1,-2) (1,2) (-3,0) (4,2) (2,-2)
        assert_eq!(expected, 7);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let values = [i32::MAX, i32::MAX, i32::MIN, i32::MIN, 1];
        for strategy in STRATEGIES {
            let counter = strategy.counter();
            assert_eq!(
                counter.count_pairs(&values, 2).unwrap(),
                divisible_sum_pairs(&values, 2).unwrap()
            );
            // MAX + 1 twice, MIN + MIN once
            assert_eq!(counter.count_pairs(&values, i32::MIN).unwrap(), 3);
        }
    }

    #[test]
    fn test_permutation_invariance() {
        let values = [7, 2, 11, 4, 8, 3, 3, 10];
        let mut reversed = values;
        reversed.reverse();
        let mut rotated = values;
        rotated.rotate_left(3);
        for strategy in STRATEGIES {
            let counter = strategy.counter();
            let base = counter.count_pairs(&values, 5).unwrap();
            assert_eq!(counter.count_pairs(&reversed, 5).unwrap(), base);
            assert_eq!(counter.count_pairs(&rotated, 5).unwrap(), base);
        }
    }

    #[test]
    fn test_strategies_agree() {
        let values: Vec<i32> = (-20..20).map(|v| v * 7 % 13).collect();
        for k in [1, 2, 3, 4, 6, 13, -5, 100] {
            assert_eq!(
                BruteForceCounter.count_pairs(&values, k).unwrap(),
                RemainderCounter.count_pairs(&values, k).unwrap(),
                "k = {}",
                k
            );
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::BruteForce.to_string(), "brute-force");
        assert_eq!(Strategy::Remainder.counter().name(), "remainder");
    }
}
