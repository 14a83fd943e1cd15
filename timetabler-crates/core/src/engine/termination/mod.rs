//! A [`TerminationCondition`] is a condition which is polled by the search once per iteration. It
//! indicates when the search should give up, even if no definitive conclusion has been reached.
//! The most common example is the [`IterationBudget`].
mod iteration_budget;

pub use iteration_budget::IterationBudget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the search should give up looking for a timetable.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called once every time the search loop performs an iteration.
    fn iteration_has_been_performed(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn iteration_has_been_performed(&mut self) {
        if let Some(t) = self {
            t.iteration_has_been_performed()
        }
    }
}
