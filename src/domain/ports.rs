use crate::domain::model::PairInput;
use crate::utils::error::Result;

/// Counts unordered index pairs `i < j` whose element sum is divisible by `k`.
pub trait PairCounter: Send + Sync {
    fn name(&self) -> &'static str;
    fn count_pairs(&self, values: &[i32], k: i32) -> Result<u64>;
}

pub trait InputProvider {
    fn pair_input(&self) -> Result<PairInput>;
}
