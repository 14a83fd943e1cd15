mod ids;
mod random;
mod solution;
mod timeslot_set;

pub use ids::*;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests;
pub use solution::Solution;
pub use solution::Violation;
pub use timeslot_set::*;
