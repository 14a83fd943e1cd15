//! The timetable search: the search nodes, the stack in which they are kept and the iterative
//! backtracking loop which drives them.
mod capacity_error;
mod search_stack;
mod search_statistics;
mod solver_options;
mod state;
pub(crate) mod termination;
mod timetable_search;

pub use capacity_error::CapacityError;
pub(crate) use search_stack::SearchStack;
pub use search_statistics::*;
pub use solver_options::*;
pub use state::State;
pub(crate) use timetable_search::search;
