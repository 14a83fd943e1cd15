//! Tie-breakers decide which element to select when several candidates have an equally good
//! value.
mod in_order_tie_breaker;
mod random_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use random_tie_breaker::RandomTieBreaker;
pub use tie_breaker::*;
