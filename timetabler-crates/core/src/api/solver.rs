use log::info;

use crate::branching::event_selection::MostConstrainedEvent;
use crate::branching::timeslot_selection::ScarcestTimeslot;
use crate::branching::EventSelector;
use crate::branching::TimeslotSelector;
use crate::engine::search;
use crate::engine::termination::TerminationCondition;
use crate::engine::CapacityError;
use crate::engine::SearchLimits;
use crate::engine::SearchStatistics;
use crate::engine::SolverOptions;
use crate::engine::TieBreaking;
use crate::results::SearchResult;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::Instance;

/// The entry point for finding a timetable for an [`Instance`].
///
/// The solver owns the branching heuristics; every call to [`TimetableSolver::solve`] starts a
/// fresh search (with its own search stack) but continues to draw from the same source of
/// randomness, so repeated calls explore different tie-breaks.
///
/// # Example
/// ```rust
/// # use timetabler_core::InstanceBuilder;
/// # use timetabler_core::TimetableSolver;
/// # use timetabler_core::results::SearchResult;
/// # use timetabler_core::termination::IterationBudget;
/// let mut builder = InstanceBuilder::new(2, 1);
/// let first = builder.add_unrestricted_event();
/// let second = builder.add_unrestricted_event();
/// builder.add_conflict(first, second);
/// let instance = builder.build().expect("valid instance");
///
/// let mut solver = TimetableSolver::default();
/// let result = solver
///     .solve(&instance, &mut IterationBudget::default())
///     .expect("the instance fits the default limits");
///
/// let SearchResult::Satisfiable(solution) = result else {
///     panic!("expected a timetable");
/// };
/// assert_ne!(solution.timeslot(first), solution.timeslot(second));
/// assert!(solution.is_valid(&instance));
/// ```
#[derive(Debug)]
pub struct TimetableSolver {
    limits: SearchLimits,
    event_selector: Box<dyn EventSelector>,
    timeslot_selector: Box<dyn TimeslotSelector>,
    statistics: SearchStatistics,
}

impl Default for TimetableSolver {
    fn default() -> Self {
        TimetableSolver::with_options(SolverOptions::default())
    }
}

impl TimetableSolver {
    /// Creates a solver with the provided [`SolverOptions`] and the default heuristics.
    pub fn with_options(options: SolverOptions) -> Self {
        let timeslot_selector: Box<dyn TimeslotSelector> = match options.tie_breaking {
            TieBreaking::Random => {
                Box::new(ScarcestTimeslot::new(Box::new(options.random_generator)))
            }
            TieBreaking::InOrder => Box::new(ScarcestTimeslot::in_order()),
        };

        TimetableSolver::with_selectors(
            options.limits,
            Box::new(MostConstrainedEvent::new()),
            timeslot_selector,
        )
    }

    /// Creates a solver which branches using the provided selectors.
    pub fn with_selectors(
        limits: SearchLimits,
        event_selector: Box<dyn EventSelector>,
        timeslot_selector: Box<dyn TimeslotSelector>,
    ) -> Self {
        TimetableSolver {
            limits,
            event_selector,
            timeslot_selector,
            statistics: SearchStatistics::default(),
        }
    }

    /// Searches for a timetable of `instance` until one is found, the search space is exhausted,
    /// or the `termination` condition triggers.
    ///
    /// Returns an error, without searching, if the instance does not fit within the
    /// [`SearchLimits`] of the solver.
    pub fn solve(
        &mut self,
        instance: &Instance,
        termination: &mut impl TerminationCondition,
    ) -> Result<SearchResult, CapacityError> {
        self.limits.check(instance)?;

        info!(
            "Searching for a timetable of {} events in {} timeslots and {} rooms",
            instance.num_events(),
            instance.num_timeslots(),
            instance.num_rooms()
        );

        self.statistics = SearchStatistics::default();
        let result = search(
            instance,
            self.event_selector.as_mut(),
            self.timeslot_selector.as_mut(),
            termination,
            &mut self.statistics,
        );

        info!(
            "Search finished after {} iterations ({} backtracks): {}",
            self.statistics.num_iterations,
            self.statistics.num_backtracks,
            match &result {
                SearchResult::Satisfiable(_) => "timetable found",
                SearchResult::NotFound(_) => "no timetable found",
            }
        );

        Ok(result)
    }

    /// The statistics of the most recent call to [`TimetableSolver::solve`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Logs the statistics of the most recent search, if statistic logging has been configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }
}
