mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`TimetableSolver`].
    //!
    //! A search either produces a [`Solution`] or explains through a [`NotFoundReason`] why it
    //! stopped without one.
    pub use crate::api::outputs::NotFoundReason;
    pub use crate::api::outputs::SearchResult;
    pub use crate::basic_types::Solution;
    pub use crate::basic_types::Violation;
    #[cfg(doc)]
    use crate::TimetableSolver;
}

pub mod options {
    //! Contains the options which can be passed to the [`TimetableSolver`].
    //!
    //! These influence the following aspects:
    //! - The largest instance which is accepted
    //! - The tie-breaking between equally good timeslots and its source of randomness
    pub use crate::engine::CapacityError;
    pub use crate::engine::SearchLimits;
    pub use crate::engine::SolverOptions;
    pub use crate::engine::TieBreaking;
    #[cfg(doc)]
    use crate::TimetableSolver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`TimetableSolver`] should
    //! give up even though no timetable has been found.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the
    //! [`TimetableSolver`] once per search iteration.
    pub use crate::engine::termination::*;
    #[cfg(doc)]
    use crate::TimetableSolver;
}
