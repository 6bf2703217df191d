pub mod counter;
pub mod engine;
pub mod output;

pub use crate::domain::model::{PairInput, PairReport};
pub use crate::domain::ports::{InputProvider, PairCounter};
pub use crate::utils::error::Result;
