use crate::core::counter::Strategy;
use crate::core::{PairCounter, PairInput, PairReport};
use crate::utils::error::Result;
use crate::utils::validation::{validate_declared_len, validate_divisor};

pub struct CountEngine {
    strategy: Strategy,
    counter: Box<dyn PairCounter>,
}

impl CountEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            counter: strategy.counter(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn run(&self, input: &PairInput) -> Result<PairReport> {
        tracing::info!(
            "Counting divisible sum pairs: n={}, k={}, strategy={}",
            input.values.len(),
            input.divisor,
            self.counter.name()
        );
        tracing::debug!("Input values: {:?}", input.values);

        validate_divisor(input.divisor)?;
        validate_declared_len("n", input.declared_len, input.values.len())?;

        let count = self.counter.count_pairs(&input.values, input.divisor)?;
        tracing::info!("Found {} pairs", count);

        Ok(PairReport {
            n: input.values.len(),
            k: input.divisor,
            count,
            strategy: self.counter.name().to_string(),
        })
    }
}

impl Default for CountEngine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
