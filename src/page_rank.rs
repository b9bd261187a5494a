mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::IteratedPageRank;
pub mod sampled;
pub use self::sampled::SampledPageRank;
pub mod transition;
pub use self::transition::{transition_model, Distribution};
