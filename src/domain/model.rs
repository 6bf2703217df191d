use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInput {
    pub values: Vec<i32>,
    pub divisor: i32,
    pub declared_len: Option<usize>,
}

impl PairInput {
    pub fn new(values: Vec<i32>, divisor: i32) -> Self {
        Self {
            values,
            divisor,
            declared_len: None,
        }
    }

    pub fn with_declared_len(mut self, n: usize) -> Self {
        self.declared_len = Some(n);
        self
    }

    /// The fixed invocation `n=6, k=3, ar=[1,3,2,6,1,2]`.
    pub fn example() -> Self {
        Self::new(vec![1, 3, 2, 6, 1, 2], 3).with_declared_len(6)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    pub n: usize,
    pub k: i32,
    pub count: u64,
    pub strategy: String,
}
